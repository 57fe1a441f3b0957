//! # vertex-decode
//!
//! Strided vertex-attribute decoding: converts opaque, per-vertex binary
//! data, described by runtime [`AttributeLayout`](vertex::AttributeLayout)
//! descriptors, into canonical floating-point vectors for renderers and
//! exporters. Decode routines are specialized once per layout bind, keeping
//! the per-vertex paths branch-free for common formats.

pub mod math;
pub mod vertex;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
