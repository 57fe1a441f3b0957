//! Attribute decoders and the bind-time decoder registry.
//!
//! A [`Decoder`] converts one attribute's bytes at a single vertex into
//! canonical f32 values. [`Decoder::select`] is the registry: it runs once
//! per bind and maps common (content, encoding, component count)
//! combinations to a branch-free specialized routine, leaving everything
//! else to the generic routine, which dispatches per scalar on the encoding.
//!
//! Specialized routines are semantically identical to the generic one for
//! every input; they exist only to remove per-vertex branching. A
//! specialized routine services exactly the read width it was keyed on and
//! delegates every other width to the generic paths, so policy rules
//! (padding, channel order, homogeneous divide) hold uniformly.

use crate::math::{Vec2, Vec3, Vec4};

use super::layout::{AttributeContent, AttributeEncoding, AttributeLayout};
use super::unpack::{
    lane_a, lane_b, lane_c, lane_d, read_f32, read_f32x2, read_f32x3, read_f32x4, read_u16,
    read_u32, unorm8, NATIVE_F32_MATCHES_WIRE,
};

/// Concrete decode routine, keyed at selection time by content, encoding,
/// component count, and whether the native f32 layout matches the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecoderKind {
    /// Point/texcoord f32 data, reinterpreted with the native float layout.
    PointNative2,
    PointNative3,
    PointNative4,
    /// Point/texcoord f32 data, converted lane by lane from the wire.
    PointWire2,
    PointWire3,
    PointWire4,
    /// RGBA color stored as four fixed-point bytes.
    ColorU8,
    /// RGBA color stored as four f32 components.
    ColorNative4,
    ColorWire4,
    /// ARGB color packed in one 8888 dword.
    ArgbPacked,
    /// Generic three-component f32 data.
    GenericNative3,
    GenericWire3,
    /// Per-scalar encoding dispatch for every other combination.
    Generic,
}

/// A decode routine bound to one attribute layout.
///
/// `bytes` arguments are the attribute's bytes at one vertex, starting at
/// the attribute offset; callers hand in at least
/// [`AttributeLayout::byte_size`] bytes. Values come back by copy.
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    kind: DecoderKind,
    layout: AttributeLayout,
}

impl Decoder {
    /// Select the best decode routine for a layout.
    ///
    /// Runs once per bind, never per vertex. The layout must already have
    /// passed [`AttributeLayout::validate`]; selection itself never fails,
    /// it falls back to the generic routine.
    pub fn select(layout: &AttributeLayout) -> Self {
        use AttributeEncoding as E;

        let kind = match layout.content {
            AttributeContent::Point | AttributeContent::TexCoord => {
                match (layout.encoding, layout.component_count) {
                    (E::F32, 2) if NATIVE_F32_MATCHES_WIRE => DecoderKind::PointNative2,
                    (E::F32, 3) if NATIVE_F32_MATCHES_WIRE => DecoderKind::PointNative3,
                    (E::F32, 4) if NATIVE_F32_MATCHES_WIRE => DecoderKind::PointNative4,
                    (E::F32, 2) => DecoderKind::PointWire2,
                    (E::F32, 3) => DecoderKind::PointWire3,
                    (E::F32, 4) => DecoderKind::PointWire4,
                    _ => DecoderKind::Generic,
                }
            }
            AttributeContent::ColorRgba => match (layout.encoding, layout.component_count) {
                (E::U8, 4) => DecoderKind::ColorU8,
                (E::F32, 4) if NATIVE_F32_MATCHES_WIRE => DecoderKind::ColorNative4,
                (E::F32, 4) => DecoderKind::ColorWire4,
                _ => DecoderKind::Generic,
            },
            AttributeContent::ColorArgb => match (layout.encoding, layout.component_count) {
                (E::Packed8888, 1) => DecoderKind::ArgbPacked,
                _ => DecoderKind::Generic,
            },
            AttributeContent::Generic => match (layout.encoding, layout.component_count) {
                (E::F32, 3) if NATIVE_F32_MATCHES_WIRE => DecoderKind::GenericNative3,
                (E::F32, 3) => DecoderKind::GenericWire3,
                _ => DecoderKind::Generic,
            },
        };

        Self {
            kind,
            layout: *layout,
        }
    }

    /// The generic routine for a layout. Interchangeable with the selected
    /// routine on every input.
    pub(crate) fn generic(layout: &AttributeLayout) -> Self {
        Self {
            kind: DecoderKind::Generic,
            layout: *layout,
        }
    }

    /// The layout this decoder was selected for.
    pub fn layout(&self) -> &AttributeLayout {
        &self.layout
    }

    /// Whether selection found a branch-free routine.
    pub fn is_specialized(&self) -> bool {
        self.kind != DecoderKind::Generic
    }

    /// Decode a single float.
    pub fn read_f32(&self, bytes: &[u8]) -> f32 {
        // Scalar reads always go through the full policy path; none of the
        // specialized routines are keyed on width 1.
        generic_read1(&self.layout, bytes)
    }

    /// Decode a single integer. No normalization or homogeneous divide
    /// applies on the integer path.
    pub fn read_i32(&self, bytes: &[u8]) -> i32 {
        match self.layout.encoding {
            AttributeEncoding::U8 => i32::from(bytes[0]),
            AttributeEncoding::U16 => i32::from(read_u16(bytes)),
            AttributeEncoding::Packed8888 => i32::from(lane_a(read_u32(bytes))),
            AttributeEncoding::F32 => read_f32(bytes) as i32,
        }
    }

    /// Decode a 2-component vector.
    pub fn read_vec2(&self, bytes: &[u8]) -> Vec2 {
        match self.kind {
            DecoderKind::PointNative2 => {
                let [x, y] = read_f32x2(bytes);
                Vec2::new(x, y)
            }
            DecoderKind::PointWire2 => {
                Vec2::new(read_f32(&bytes[0..4]), read_f32(&bytes[4..8]))
            }
            _ => generic_read2(&self.layout, bytes),
        }
    }

    /// Decode a 3-component vector.
    pub fn read_vec3(&self, bytes: &[u8]) -> Vec3 {
        match self.kind {
            DecoderKind::PointNative3 | DecoderKind::GenericNative3 => {
                let [x, y, z] = read_f32x3(bytes);
                Vec3::new(x, y, z)
            }
            DecoderKind::PointWire3 | DecoderKind::GenericWire3 => Vec3::new(
                read_f32(&bytes[0..4]),
                read_f32(&bytes[4..8]),
                read_f32(&bytes[8..12]),
            ),
            _ => generic_read3(&self.layout, bytes),
        }
    }

    /// Decode a 4-component vector.
    pub fn read_vec4(&self, bytes: &[u8]) -> Vec4 {
        match self.kind {
            DecoderKind::PointNative4 | DecoderKind::ColorNative4 => {
                let [x, y, z, w] = read_f32x4(bytes);
                Vec4::new(x, y, z, w)
            }
            DecoderKind::PointWire4 | DecoderKind::ColorWire4 => Vec4::new(
                read_f32(&bytes[0..4]),
                read_f32(&bytes[4..8]),
                read_f32(&bytes[8..12]),
                read_f32(&bytes[12..16]),
            ),
            DecoderKind::ColorU8 => Vec4::new(
                unorm8(bytes[0]),
                unorm8(bytes[1]),
                unorm8(bytes[2]),
                unorm8(bytes[3]),
            ),
            DecoderKind::ArgbPacked => {
                let dword = read_u32(bytes);
                Vec4::new(
                    unorm8(lane_b(dword)),
                    unorm8(lane_c(dword)),
                    unorm8(lane_d(dword)),
                    unorm8(lane_a(dword)),
                )
            }
            _ => generic_read4(&self.layout, bytes),
        }
    }
}

// Generic decode paths. These are the reference semantics; every specialized
// arm above must match them bit for bit.

/// The four 8888 lanes in the content's channel order.
fn packed_lanes(content: AttributeContent, dword: u32) -> [u8; 4] {
    match content {
        AttributeContent::ColorArgb => {
            [lane_b(dword), lane_c(dword), lane_d(dword), lane_a(dword)]
        }
        _ => [lane_a(dword), lane_b(dword), lane_c(dword), lane_d(dword)],
    }
}

/// Widen one U8 component with the content's fixed-point rule.
fn channel(content: AttributeContent, value: u8) -> f32 {
    if content.normalizes_u8() {
        unorm8(value)
    } else {
        f32::from(value)
    }
}

/// One scalar at the attribute start, first in content channel order.
fn scalar(layout: &AttributeLayout, bytes: &[u8]) -> f32 {
    match layout.encoding {
        AttributeEncoding::U8 => channel(layout.content, bytes[0]),
        AttributeEncoding::U16 => f32::from(read_u16(bytes)),
        AttributeEncoding::Packed8888 => {
            unorm8(packed_lanes(layout.content, read_u32(bytes))[0])
        }
        AttributeEncoding::F32 => read_f32(bytes),
    }
}

/// Exactly two stored values, decoded in one shot.
fn direct2(layout: &AttributeLayout, bytes: &[u8]) -> Vec2 {
    match layout.encoding {
        AttributeEncoding::U8 => Vec2::new(
            channel(layout.content, bytes[0]),
            channel(layout.content, bytes[1]),
        ),
        AttributeEncoding::U16 => Vec2::new(
            f32::from(read_u16(&bytes[0..2])),
            f32::from(read_u16(&bytes[2..4])),
        ),
        AttributeEncoding::Packed8888 => {
            let lanes = packed_lanes(layout.content, read_u32(bytes));
            Vec2::new(unorm8(lanes[0]), unorm8(lanes[1]))
        }
        AttributeEncoding::F32 => Vec2::new(read_f32(&bytes[0..4]), read_f32(&bytes[4..8])),
    }
}

/// Exactly three stored values, decoded in one shot.
fn direct3(layout: &AttributeLayout, bytes: &[u8]) -> Vec3 {
    match layout.encoding {
        AttributeEncoding::U8 => Vec3::new(
            channel(layout.content, bytes[0]),
            channel(layout.content, bytes[1]),
            channel(layout.content, bytes[2]),
        ),
        AttributeEncoding::U16 => Vec3::new(
            f32::from(read_u16(&bytes[0..2])),
            f32::from(read_u16(&bytes[2..4])),
            f32::from(read_u16(&bytes[4..6])),
        ),
        AttributeEncoding::Packed8888 => {
            let lanes = packed_lanes(layout.content, read_u32(bytes));
            Vec3::new(unorm8(lanes[0]), unorm8(lanes[1]), unorm8(lanes[2]))
        }
        AttributeEncoding::F32 => Vec3::new(
            read_f32(&bytes[0..4]),
            read_f32(&bytes[4..8]),
            read_f32(&bytes[8..12]),
        ),
    }
}

/// Exactly four stored values, decoded in one shot.
fn direct4(layout: &AttributeLayout, bytes: &[u8]) -> Vec4 {
    match layout.encoding {
        AttributeEncoding::U8 => Vec4::new(
            channel(layout.content, bytes[0]),
            channel(layout.content, bytes[1]),
            channel(layout.content, bytes[2]),
            channel(layout.content, bytes[3]),
        ),
        AttributeEncoding::U16 => Vec4::new(
            f32::from(read_u16(&bytes[0..2])),
            f32::from(read_u16(&bytes[2..4])),
            f32::from(read_u16(&bytes[4..6])),
            f32::from(read_u16(&bytes[6..8])),
        ),
        AttributeEncoding::Packed8888 => {
            let lanes = packed_lanes(layout.content, read_u32(bytes));
            Vec4::new(
                unorm8(lanes[0]),
                unorm8(lanes[1]),
                unorm8(lanes[2]),
                unorm8(lanes[3]),
            )
        }
        AttributeEncoding::F32 => Vec4::new(
            read_f32(&bytes[0..4]),
            read_f32(&bytes[4..8]),
            read_f32(&bytes[8..12]),
            read_f32(&bytes[12..16]),
        ),
    }
}

fn generic_read1(layout: &AttributeLayout, bytes: &[u8]) -> f32 {
    if layout.content.is_homogeneous() && layout.value_count() == 4 {
        let v = direct4(layout, bytes);
        return v.x / v.w;
    }
    scalar(layout, bytes)
}

fn generic_read2(layout: &AttributeLayout, bytes: &[u8]) -> Vec2 {
    if layout.content.is_homogeneous() && layout.value_count() == 4 {
        let v = direct4(layout, bytes);
        return Vec2::new(v.x / v.w, v.y / v.w);
    }
    match layout.value_count() {
        1 => Vec2::new(scalar(layout, bytes), 0.0),
        _ => direct2(layout, bytes),
    }
}

fn generic_read3(layout: &AttributeLayout, bytes: &[u8]) -> Vec3 {
    if layout.content.is_homogeneous() && layout.value_count() == 4 {
        let v = direct4(layout, bytes);
        return Vec3::new(v.x / v.w, v.y / v.w, v.z / v.w);
    }
    match layout.value_count() {
        1 => Vec3::new(scalar(layout, bytes), 0.0, 0.0),
        2 => {
            let v = direct2(layout, bytes);
            Vec3::new(v.x, v.y, 0.0)
        }
        _ => direct3(layout, bytes),
    }
}

fn generic_read4(layout: &AttributeLayout, bytes: &[u8]) -> Vec4 {
    // The full-width read never divides; w comes back raw.
    let pad_w = layout.content.default_w();
    match layout.value_count() {
        1 => Vec4::new(scalar(layout, bytes), 0.0, 0.0, pad_w),
        2 => {
            let v = direct2(layout, bytes);
            Vec4::new(v.x, v.y, 0.0, pad_w)
        }
        3 => {
            let v = direct3(layout, bytes);
            Vec4::new(v.x, v.y, v.z, pad_w)
        }
        _ => direct4(layout, bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic byte pattern exercising every lane of a layout.
    fn pattern_bytes(layout: &AttributeLayout) -> Vec<u8> {
        match layout.encoding {
            AttributeEncoding::U8 => vec![8, 64, 128, 255][..layout.component_count as usize]
                .to_vec(),
            AttributeEncoding::U16 => {
                let mut bytes = Vec::new();
                for value in [100u16, 200, 300, 400]
                    .iter()
                    .take(layout.component_count as usize)
                {
                    bytes.extend_from_slice(&value.to_le_bytes());
                }
                bytes
            }
            AttributeEncoding::Packed8888 => 0xFF10_2030u32.to_le_bytes().to_vec(),
            AttributeEncoding::F32 => {
                let mut bytes = Vec::new();
                for value in [2.0f32, 4.0, 6.0, 2.0]
                    .iter()
                    .take(layout.component_count as usize)
                {
                    bytes.extend_from_slice(&value.to_le_bytes());
                }
                bytes
            }
        }
    }

    fn assert_bits_eq(a: f32, b: f32, what: &str, layout: &AttributeLayout) {
        assert_eq!(a.to_bits(), b.to_bits(), "{what} mismatch for {layout:?}");
    }

    #[test]
    fn test_specialized_matches_generic_everywhere() {
        let contents = [
            AttributeContent::Point,
            AttributeContent::TexCoord,
            AttributeContent::ColorRgba,
            AttributeContent::ColorArgb,
            AttributeContent::Generic,
        ];
        let encodings = [
            AttributeEncoding::U8,
            AttributeEncoding::U16,
            AttributeEncoding::Packed8888,
            AttributeEncoding::F32,
        ];

        for content in contents {
            for encoding in encodings {
                let counts: &[u32] = if encoding == AttributeEncoding::Packed8888 {
                    &[1]
                } else {
                    &[1, 2, 3, 4]
                };
                for &count in counts {
                    let layout = AttributeLayout::new(content, encoding, count, 0, 16);
                    let bytes = pattern_bytes(&layout);
                    let selected = Decoder::select(&layout);
                    let generic = Decoder::generic(&layout);

                    assert_bits_eq(
                        selected.read_f32(&bytes),
                        generic.read_f32(&bytes),
                        "read_f32",
                        &layout,
                    );
                    assert_eq!(
                        selected.read_i32(&bytes),
                        generic.read_i32(&bytes),
                        "read_i32 mismatch for {layout:?}"
                    );
                    let (s, g) = (selected.read_vec2(&bytes), generic.read_vec2(&bytes));
                    assert_bits_eq(s.x, g.x, "read_vec2.x", &layout);
                    assert_bits_eq(s.y, g.y, "read_vec2.y", &layout);
                    let (s, g) = (selected.read_vec3(&bytes), generic.read_vec3(&bytes));
                    assert_bits_eq(s.x, g.x, "read_vec3.x", &layout);
                    assert_bits_eq(s.y, g.y, "read_vec3.y", &layout);
                    assert_bits_eq(s.z, g.z, "read_vec3.z", &layout);
                    let (s, g) = (selected.read_vec4(&bytes), generic.read_vec4(&bytes));
                    assert_bits_eq(s.x, g.x, "read_vec4.x", &layout);
                    assert_bits_eq(s.y, g.y, "read_vec4.y", &layout);
                    assert_bits_eq(s.z, g.z, "read_vec4.z", &layout);
                    assert_bits_eq(s.w, g.w, "read_vec4.w", &layout);
                }
            }
        }
    }

    #[test]
    fn test_registry_specializes_common_layouts() {
        assert!(Decoder::select(&AttributeLayout::point3f(0, 12)).is_specialized());
        assert!(Decoder::select(&AttributeLayout::point4f(0, 16)).is_specialized());
        assert!(Decoder::select(&AttributeLayout::texcoord2f(0, 8)).is_specialized());
        assert!(Decoder::select(&AttributeLayout::rgba8(0, 4)).is_specialized());
        assert!(Decoder::select(&AttributeLayout::rgba_f32(0, 16)).is_specialized());
        assert!(Decoder::select(&AttributeLayout::argb_packed(0, 4)).is_specialized());
        assert!(Decoder::select(&AttributeLayout::new(
            AttributeContent::Generic,
            AttributeEncoding::F32,
            3,
            0,
            12,
        ))
        .is_specialized());
    }

    #[test]
    fn test_registry_falls_back_to_generic() {
        let fallbacks = [
            AttributeLayout::new(AttributeContent::Point, AttributeEncoding::U16, 3, 0, 12),
            AttributeLayout::new(AttributeContent::Point, AttributeEncoding::F32, 1, 0, 4),
            AttributeLayout::new(AttributeContent::ColorRgba, AttributeEncoding::U8, 3, 0, 4),
            AttributeLayout::new(
                AttributeContent::ColorRgba,
                AttributeEncoding::Packed8888,
                1,
                0,
                4,
            ),
            AttributeLayout::new(AttributeContent::ColorArgb, AttributeEncoding::U8, 4, 0, 4),
            AttributeLayout::new(AttributeContent::Generic, AttributeEncoding::F32, 2, 0, 8),
            AttributeLayout::new(AttributeContent::Generic, AttributeEncoding::U8, 4, 0, 4),
        ];
        for layout in fallbacks {
            assert!(
                !Decoder::select(&layout).is_specialized(),
                "expected generic fallback for {layout:?}"
            );
        }
    }

    fn f32_bytes(values: &[f32]) -> Vec<u8> {
        let mut bytes = Vec::new();
        for v in values {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_homogeneous_divide_on_stored_w() {
        let layout = AttributeLayout::point4f(0, 16);
        let decoder = Decoder::select(&layout);
        let bytes = f32_bytes(&[2.0, 4.0, 6.0, 2.0]);

        assert_eq!(decoder.read_f32(&bytes), 1.0);
        assert_eq!(decoder.read_vec2(&bytes), Vec2::new(1.0, 2.0));
        assert_eq!(decoder.read_vec3(&bytes), Vec3::new(1.0, 2.0, 3.0));
        // The full-width read returns the raw projective point.
        assert_eq!(decoder.read_vec4(&bytes), Vec4::new(2.0, 4.0, 6.0, 2.0));
    }

    #[test]
    fn test_no_divide_without_stored_w() {
        let layout = AttributeLayout::point3f(0, 12);
        let decoder = Decoder::select(&layout);
        let bytes = f32_bytes(&[2.0, 4.0, 6.0]);

        assert_eq!(decoder.read_vec3(&bytes), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(decoder.read_vec4(&bytes), Vec4::new(2.0, 4.0, 6.0, 1.0));
    }

    #[test]
    fn test_packed_channel_order_depends_on_content() {
        let bytes = 0xFF10_2030u32.to_le_bytes();

        let argb = Decoder::select(&AttributeLayout::argb_packed(0, 4));
        let v = argb.read_vec4(&bytes);
        assert_eq!(v.x, unorm8(0x10));
        assert_eq!(v.y, unorm8(0x20));
        assert_eq!(v.z, unorm8(0x30));
        assert_eq!(v.w, unorm8(0xFF));

        // Same bit pattern under RGBA content keeps lane order a,b,c,d.
        let rgba = Decoder::select(&AttributeLayout::new(
            AttributeContent::ColorRgba,
            AttributeEncoding::Packed8888,
            1,
            0,
            4,
        ));
        let v = rgba.read_vec4(&bytes);
        assert_eq!(v.x, unorm8(0xFF));
        assert_eq!(v.y, unorm8(0x10));
        assert_eq!(v.z, unorm8(0x20));
        assert_eq!(v.w, unorm8(0x30));
    }

    #[test]
    fn test_packed_truncating_reads() {
        let bytes = 0xFF10_2030u32.to_le_bytes();
        let argb = Decoder::select(&AttributeLayout::argb_packed(0, 4));

        assert_eq!(argb.read_f32(&bytes), unorm8(0x10));
        assert_eq!(argb.read_vec2(&bytes), Vec2::new(unorm8(0x10), unorm8(0x20)));
        assert_eq!(
            argb.read_vec3(&bytes),
            Vec3::new(unorm8(0x10), unorm8(0x20), unorm8(0x30))
        );
    }

    #[test]
    fn test_u8_color_normalization() {
        let layout = AttributeLayout::rgba8(0, 4);
        let decoder = Decoder::select(&layout);

        assert_eq!(decoder.read_f32(&[255, 0, 0, 0]), 1.0);
        assert_eq!(decoder.read_f32(&[0, 0, 0, 0]), 0.0);
        let mid = decoder.read_f32(&[128, 0, 0, 0]);
        assert!((mid - 0.50196).abs() < 1e-5);

        let v = decoder.read_vec4(&[255, 0, 128, 64]);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 0.0);
        assert_eq!(v.z, unorm8(128));
        assert_eq!(v.w, unorm8(64));
    }

    #[test]
    fn test_u8_point_stays_raw() {
        let layout = AttributeLayout::new(AttributeContent::Point, AttributeEncoding::U8, 3, 0, 3);
        let decoder = Decoder::select(&layout);
        assert_eq!(decoder.read_vec3(&[1, 2, 255]), Vec3::new(1.0, 2.0, 255.0));
    }

    #[test]
    fn test_u16_unscaled() {
        let layout =
            AttributeLayout::new(AttributeContent::Generic, AttributeEncoding::U16, 2, 0, 4);
        let decoder = Decoder::select(&layout);
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1000u16.to_le_bytes());
        bytes.extend_from_slice(&65535u16.to_le_bytes());
        assert_eq!(decoder.read_vec2(&bytes), Vec2::new(1000.0, 65535.0));
    }

    #[test]
    fn test_padding_defaults_by_content() {
        // Generic 2-value attribute pads with zeros.
        let layout =
            AttributeLayout::new(AttributeContent::Generic, AttributeEncoding::F32, 2, 0, 8);
        let decoder = Decoder::select(&layout);
        let bytes = f32_bytes(&[0.25, 0.75]);
        assert_eq!(decoder.read_vec4(&bytes), Vec4::new(0.25, 0.75, 0.0, 0.0));
        assert_eq!(decoder.read_vec3(&bytes), Vec3::new(0.25, 0.75, 0.0));

        // Color 2-value attribute defaults alpha to opaque.
        let layout =
            AttributeLayout::new(AttributeContent::ColorRgba, AttributeEncoding::F32, 2, 0, 8);
        let decoder = Decoder::select(&layout);
        assert_eq!(decoder.read_vec4(&bytes), Vec4::new(0.25, 0.75, 0.0, 1.0));

        // Texcoord 1-value attribute gets homogeneous w.
        let layout =
            AttributeLayout::new(AttributeContent::TexCoord, AttributeEncoding::F32, 1, 0, 4);
        let decoder = Decoder::select(&layout);
        let bytes = f32_bytes(&[0.5]);
        assert_eq!(decoder.read_vec4(&bytes), Vec4::new(0.5, 0.0, 0.0, 1.0));
        assert_eq!(decoder.read_vec2(&bytes), Vec2::new(0.5, 0.0));
    }

    #[test]
    fn test_truncation_keeps_leading_values() {
        let layout = AttributeLayout::rgba8(0, 4);
        let decoder = Decoder::select(&layout);
        let v = decoder.read_vec2(&[255, 128, 7, 7]);
        assert_eq!(v, Vec2::new(1.0, unorm8(128)));
    }

    #[test]
    fn test_read_i32_paths() {
        let packed = Decoder::select(&AttributeLayout::argb_packed(0, 4));
        assert_eq!(packed.read_i32(&0xFF10_2030u32.to_le_bytes()), 0xFF);

        let u8s = Decoder::select(&AttributeLayout::rgba8(0, 4));
        assert_eq!(u8s.read_i32(&[200, 0, 0, 0]), 200);

        let u16s = Decoder::select(&AttributeLayout::new(
            AttributeContent::Generic,
            AttributeEncoding::U16,
            1,
            0,
            2,
        ));
        assert_eq!(u16s.read_i32(&40000u16.to_le_bytes()), 40000);

        let floats = Decoder::select(&AttributeLayout::new(
            AttributeContent::Generic,
            AttributeEncoding::F32,
            1,
            0,
            4,
        ));
        assert_eq!(floats.read_i32(&3.7f32.to_le_bytes()), 3);
        assert_eq!(floats.read_i32(&(-3.7f32).to_le_bytes()), -3);
    }

    #[test]
    fn test_f32_reads_are_bit_exact() {
        let layout = AttributeLayout::point3f(0, 12);
        let decoder = Decoder::select(&layout);
        let values = [1.0e-40f32, -0.0, f32::MAX];
        let bytes = f32_bytes(&values);
        let v = decoder.read_vec3(&bytes);
        assert_eq!(v.x.to_bits(), values[0].to_bits());
        assert_eq!(v.y.to_bits(), values[1].to_bits());
        assert_eq!(v.z.to_bits(), values[2].to_bits());
    }
}
