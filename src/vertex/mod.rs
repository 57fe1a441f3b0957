//! Vertex attribute decoding.
//!
//! This module converts strided, per-vertex binary data into canonical
//! floating-point values:
//!
//! - [`AttributeLayout`] - describes one attribute's content tag, encoding,
//!   component count, and position within a strided array
//! - [`VertexArray`] / [`VertexData`] - CPU-side strided storage
//! - [`Decoder`] - per-layout decode routine, selected once per bind
//! - [`VertexReader`] - cursor stepping an attribute column vertex by vertex
//!
//! Decoding handles numeric widening (U8/U16 to f32), fixed-point
//! normalization, packed-8888 channel extraction with content-dependent
//! ordering, homogeneous-point division, and width adaptation (padding and
//! truncation) between the stored and requested component counts.

mod data;
mod decoder;
mod error;
mod layout;
mod reader;
mod unpack;

pub use data::{VertexArray, VertexData};
pub use decoder::Decoder;
pub use error::LayoutError;
pub use layout::{AttributeContent, AttributeEncoding, AttributeLayout};
pub use reader::VertexReader;
