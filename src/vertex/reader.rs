//! Cursor-style reading of vertex attribute columns.
//!
//! A [`VertexReader`] walks one attribute column of a [`VertexData`] store:
//! bind an attribute, then read scalars or vectors. Each read returns the
//! decoded value at the current vertex and steps the cursor one vertex
//! forward, so a tight loop reads a whole column without re-dispatching;
//! the decoder is resolved once, at bind time.
//!
//! Configuration mistakes (bad array index, absent attribute, rejected
//! layout) fail the bind and leave the reader in an empty state where every
//! read yields zero; the per-vertex paths never report errors.
//!
//! # Example
//!
//! ```ignore
//! let mut reader = VertexReader::new(&data);
//! if reader.bind_content(0, AttributeContent::Point) {
//!     while !reader.is_at_end() {
//!         let position = reader.read_vec3();
//!         // ...
//!     }
//! }
//! ```

use crate::math::{Vec2, Vec3, Vec4};

use super::data::VertexData;
use super::decoder::Decoder;
use super::layout::{AttributeContent, AttributeLayout};

/// Reads one attribute column of a vertex store, one vertex per call.
///
/// A reader is owned by a single consumer; create one reader per column
/// being walked. Many readers may share one store.
#[derive(Debug)]
pub struct VertexReader<'a> {
    data: &'a VertexData,
    /// Bytes of the bound array; empty while unbound.
    bytes: &'a [u8],
    decoder: Option<Decoder>,
    stride: u32,
    num_vertices: u32,
    start_vertex: u32,
    vertex: u32,
    /// Byte position of the bound attribute at the current vertex.
    cursor: usize,
}

impl<'a> VertexReader<'a> {
    /// Create an unbound reader over a store.
    ///
    /// Every read yields zero until a successful [`bind`](Self::bind).
    pub fn new(data: &'a VertexData) -> Self {
        Self {
            data,
            bytes: &[],
            decoder: None,
            stride: 0,
            num_vertices: 0,
            start_vertex: 0,
            vertex: 0,
            cursor: 0,
        }
    }

    /// Bind an attribute of the indicated array, replacing any previous
    /// binding.
    ///
    /// On success the cursor rewinds to the start vertex (the vertex last
    /// passed to [`seek`](Self::seek), or 0) and returns true. Returns false
    /// and clears to the empty state when the array index is out of range,
    /// the attribute is absent, or its layout is rejected.
    pub fn bind(&mut self, array: usize, attribute: Option<&AttributeLayout>) -> bool {
        let (Some(array_data), Some(attribute)) = (self.data.array(array), attribute) else {
            return self.clear();
        };
        if let Err(err) = attribute.validate() {
            log::warn!("rejecting vertex attribute bind: {err}");
            return self.clear();
        }
        if attribute.stride != array_data.stride() {
            log::warn!(
                "rejecting vertex attribute bind: layout stride {} does not match array stride {}",
                attribute.stride,
                array_data.stride()
            );
            return self.clear();
        }

        self.bytes = array_data.data();
        self.stride = array_data.stride();
        self.num_vertices = array_data.vertex_count();
        self.decoder = Some(Decoder::select(attribute));
        self.rewind_to(self.start_vertex);
        true
    }

    /// Bind the first attribute of the array carrying the given content tag.
    pub fn bind_content(&mut self, array: usize, content: AttributeContent) -> bool {
        let attribute = self
            .data
            .array(array)
            .and_then(|a| a.find_content(content))
            .copied();
        self.bind(array, attribute.as_ref())
    }

    /// Reposition the cursor. The vertex also becomes the start vertex a
    /// later bind rewinds to.
    pub fn seek(&mut self, vertex: u32) {
        debug_assert!(
            self.decoder.is_none() || vertex <= self.num_vertices,
            "seek past the end of the bound array"
        );
        self.start_vertex = vertex;
        if self.decoder.is_some() {
            self.rewind_to(vertex);
        }
    }

    /// Decode a single float at the current vertex, then advance.
    pub fn read_f32(&mut self) -> f32 {
        let Some(decoder) = &self.decoder else {
            return 0.0;
        };
        let value = decoder.read_f32(self.attribute_bytes(decoder));
        self.advance();
        value
    }

    /// Decode a single integer at the current vertex, then advance.
    pub fn read_i32(&mut self) -> i32 {
        let Some(decoder) = &self.decoder else {
            return 0;
        };
        let value = decoder.read_i32(self.attribute_bytes(decoder));
        self.advance();
        value
    }

    /// Decode a 2-component vector at the current vertex, then advance.
    pub fn read_vec2(&mut self) -> Vec2 {
        let Some(decoder) = &self.decoder else {
            return Vec2::zeros();
        };
        let value = decoder.read_vec2(self.attribute_bytes(decoder));
        self.advance();
        value
    }

    /// Decode a 3-component vector at the current vertex, then advance.
    pub fn read_vec3(&mut self) -> Vec3 {
        let Some(decoder) = &self.decoder else {
            return Vec3::zeros();
        };
        let value = decoder.read_vec3(self.attribute_bytes(decoder));
        self.advance();
        value
    }

    /// Decode a 4-component vector at the current vertex, then advance.
    pub fn read_vec4(&mut self) -> Vec4 {
        let Some(decoder) = &self.decoder else {
            return Vec4::zeros();
        };
        let value = decoder.read_vec4(self.attribute_bytes(decoder));
        self.advance();
        value
    }

    /// Currently positioned vertex.
    pub fn vertex(&self) -> u32 {
        self.vertex
    }

    /// Vertex count of the bound array (0 while unbound).
    pub fn num_vertices(&self) -> u32 {
        self.num_vertices
    }

    /// Whether an attribute is currently bound.
    pub fn is_bound(&self) -> bool {
        self.decoder.is_some()
    }

    /// True once the cursor has consumed the last vertex.
    pub fn is_at_end(&self) -> bool {
        self.vertex >= self.num_vertices
    }

    /// The decoder selected at bind time, if any.
    pub fn decoder(&self) -> Option<&Decoder> {
        self.decoder.as_ref()
    }

    /// Clear to the empty state. Always returns false so bind failures can
    /// tail-call it.
    fn clear(&mut self) -> bool {
        self.bytes = &[];
        self.decoder = None;
        self.stride = 0;
        self.num_vertices = 0;
        self.vertex = self.start_vertex;
        self.cursor = 0;
        false
    }

    fn rewind_to(&mut self, vertex: u32) {
        self.vertex = vertex;
        if let Some(decoder) = &self.decoder {
            self.cursor =
                vertex as usize * self.stride as usize + decoder.layout().offset as usize;
        }
    }

    /// Bytes of the bound attribute at the current vertex.
    ///
    /// Vertex range is a caller contract, established at bind/seek time and
    /// not re-checked per read.
    fn attribute_bytes(&self, decoder: &Decoder) -> &[u8] {
        debug_assert!(self.vertex < self.num_vertices, "read past the last vertex");
        let size = decoder.layout().byte_size() as usize;
        &self.bytes[self.cursor..self.cursor + size]
    }

    fn advance(&mut self) {
        self.vertex += 1;
        self.cursor += self.stride as usize;
    }
}
