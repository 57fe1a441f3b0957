//! Math type aliases.
//!
//! Decoded vertex values are plain f32 vectors; the aliases keep call sites
//! short and leave the door open for swapping the backing math crate.

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// 4D vector (f32).
pub type Vec4 = nalgebra::Vector4<f32>;
