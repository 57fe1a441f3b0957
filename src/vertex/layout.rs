//! Vertex attribute layout descriptions.
//!
//! An [`AttributeLayout`] describes one per-vertex value inside a strided
//! array: its semantic content tag, numeric encoding, stored component
//! count, byte offset, and the owning array's stride. Layouts are supplied
//! by whatever subsystem owns the array format (mesh import, generators,
//! an exporter walking foreign data) and are immutable once built.
//!
//! The content tag is not just shader matching metadata; it drives decoding
//! policy:
//!
//! - **Padding defaults**: reads wider than the stored data fill the missing
//!   4th component with 1.0 for points/texcoords (homogeneous w) and colors
//!   (opaque alpha), 0.0 otherwise.
//! - **Channel order**: packed 8888 dwords decode as (R,G,B,A) in an order
//!   chosen by the tag; see [`Decoder`](super::Decoder).
//! - **Fixed-point widening**: U8 components of texcoords and colors decode
//!   as fractions of 255; other contents keep the raw 0–255 value.
//!
//! # Example
//!
//! ```ignore
//! // Interleaved position + color, 16 bytes per vertex:
//! let position = AttributeLayout::point3f(0, 16);
//! let color = AttributeLayout::rgba8(12, 16);
//! assert!(position.validate().is_ok());
//! ```

use super::error::LayoutError;

/// Semantic role of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeContent {
    /// Homogeneous point data (positions).
    Point,
    /// Texture coordinates; homogeneous like [`Self::Point`], and
    /// fixed-point when stored as U8.
    TexCoord,
    /// Color with R,G,B,A channel order.
    ColorRgba,
    /// Color with A,R,G,B channel order (packed ARGB dwords).
    ColorArgb,
    /// Any other per-vertex value (normals, weights, generic floats).
    Generic,
}

impl AttributeContent {
    /// Point-like contents decode through the homogeneous rules: when a
    /// 4th (w) value is stored, narrower reads divide by it.
    pub fn is_homogeneous(&self) -> bool {
        matches!(self, Self::Point | Self::TexCoord)
    }

    /// Contents whose U8 components are fixed-point fractions of 255.
    pub fn normalizes_u8(&self) -> bool {
        matches!(self, Self::TexCoord | Self::ColorRgba | Self::ColorArgb)
    }

    /// Default for a missing 4th component: homogeneous w for points and
    /// texcoords, opaque alpha for colors, zero for generic data.
    pub fn default_w(&self) -> f32 {
        match self {
            Self::Generic => 0.0,
            _ => 1.0,
        }
    }
}

/// Numeric encoding of an attribute's stored components.
///
/// Multi-byte encodings are little-endian in the array buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeEncoding {
    /// Unsigned 8-bit integer per component.
    U8,
    /// Unsigned 16-bit integer per component.
    U16,
    /// One 32-bit dword holding four 8-bit channel lanes.
    Packed8888,
    /// IEEE-754 binary32 per component.
    F32,
}

impl AttributeEncoding {
    /// Size in bytes of one stored component.
    pub fn component_size(&self) -> u32 {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::Packed8888 | Self::F32 => 4,
        }
    }
}

/// Describes one vertex attribute inside a strided array.
///
/// `component_count` counts *stored* components. [`Self::value_count`]
/// counts the logical scalars a read produces; the two differ only for
/// [`AttributeEncoding::Packed8888`], whose single stored dword carries
/// four channel values. Padding and truncation decisions are always made
/// on the value count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeLayout {
    /// Semantic role governing padding and channel-order policy.
    pub content: AttributeContent,
    /// Numeric encoding of the stored components.
    pub encoding: AttributeEncoding,
    /// Number of stored components (1..=4).
    pub component_count: u32,
    /// Byte offset within one vertex record.
    pub offset: u32,
    /// Stride in bytes of the owning array.
    pub stride: u32,
}

impl AttributeLayout {
    /// Create a new attribute layout.
    pub fn new(
        content: AttributeContent,
        encoding: AttributeEncoding,
        component_count: u32,
        offset: u32,
        stride: u32,
    ) -> Self {
        Self {
            content,
            encoding,
            component_count,
            offset,
            stride,
        }
    }

    /// Number of logical scalars this attribute yields per vertex.
    pub fn value_count(&self) -> u32 {
        match self.encoding {
            AttributeEncoding::Packed8888 => 4,
            _ => self.component_count,
        }
    }

    /// Total bytes the attribute occupies within one vertex record.
    pub fn byte_size(&self) -> u32 {
        self.component_count * self.encoding.component_size()
    }

    /// Check the layout against the owning array's stride.
    ///
    /// Decoders trust the layout; invalid configurations are rejected here,
    /// once, at bind time, never in the per-vertex paths.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(1..=4).contains(&self.component_count) {
            return Err(LayoutError::InvalidComponentCount(self.component_count));
        }
        if self.encoding == AttributeEncoding::Packed8888 && self.component_count != 1 {
            return Err(LayoutError::PackedComponentCount(self.component_count));
        }
        let end = self.offset + self.byte_size();
        if end > self.stride {
            return Err(LayoutError::ExceedsStride {
                end,
                stride: self.stride,
            });
        }
        Ok(())
    }

    /// Three-float point attribute.
    pub fn point3f(offset: u32, stride: u32) -> Self {
        Self::new(
            AttributeContent::Point,
            AttributeEncoding::F32,
            3,
            offset,
            stride,
        )
    }

    /// Four-float homogeneous point attribute.
    pub fn point4f(offset: u32, stride: u32) -> Self {
        Self::new(
            AttributeContent::Point,
            AttributeEncoding::F32,
            4,
            offset,
            stride,
        )
    }

    /// Two-float texture coordinate attribute.
    pub fn texcoord2f(offset: u32, stride: u32) -> Self {
        Self::new(
            AttributeContent::TexCoord,
            AttributeEncoding::F32,
            2,
            offset,
            stride,
        )
    }

    /// Four-byte RGBA color attribute.
    pub fn rgba8(offset: u32, stride: u32) -> Self {
        Self::new(
            AttributeContent::ColorRgba,
            AttributeEncoding::U8,
            4,
            offset,
            stride,
        )
    }

    /// Four-float RGBA color attribute.
    pub fn rgba_f32(offset: u32, stride: u32) -> Self {
        Self::new(
            AttributeContent::ColorRgba,
            AttributeEncoding::F32,
            4,
            offset,
            stride,
        )
    }

    /// Packed ARGB dword color attribute.
    pub fn argb_packed(offset: u32, stride: u32) -> Self {
        Self::new(
            AttributeContent::ColorArgb,
            AttributeEncoding::Packed8888,
            1,
            offset,
            stride,
        )
    }
}
