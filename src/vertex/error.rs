//! Vertex layout error types.

use std::fmt;

/// Rejected attribute layout configurations.
///
/// These are surfaced once, at bind time; the per-vertex decode paths never
/// produce errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Component count outside the supported 1..=4 range.
    InvalidComponentCount(u32),
    /// Packed 8888 attributes store exactly one dword component.
    PackedComponentCount(u32),
    /// The attribute extends past the owning array's stride.
    ExceedsStride {
        /// Byte offset one past the attribute's last byte.
        end: u32,
        /// Stride of the owning array.
        stride: u32,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidComponentCount(count) => {
                write!(f, "component count {count} outside 1..=4")
            }
            Self::PackedComponentCount(count) => {
                write!(f, "packed 8888 stores 1 component, got {count}")
            }
            Self::ExceedsStride { end, stride } => {
                write!(f, "attribute ends at byte {end} but stride is {stride}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
