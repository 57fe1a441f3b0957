//! CPU-side vertex array storage.
//!
//! This module provides the minimal store the reader walks:
//!
//! - [`VertexArray`] - one strided byte buffer plus the ordered
//!   [`AttributeLayout`] entries describing its contents
//! - [`VertexData`] - an ordered collection of arrays
//!
//! The store owns its bytes; readers borrow it immutably, so any number of
//! readers may walk the same data at once. Vertex count is inferred from
//! the data length and stride.

use super::layout::{AttributeContent, AttributeEncoding, AttributeLayout};

/// One strided vertex array: raw bytes plus attribute descriptions.
#[derive(Debug, Clone)]
pub struct VertexArray {
    stride: u32,
    data: Vec<u8>,
    attributes: Vec<AttributeLayout>,
}

impl VertexArray {
    /// Create an empty array with the given stride.
    pub fn new(stride: u32) -> Self {
        Self {
            stride,
            data: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Add an attribute description. The layout inherits this array's
    /// stride.
    pub fn with_attribute(
        mut self,
        content: AttributeContent,
        encoding: AttributeEncoding,
        component_count: u32,
        offset: u32,
    ) -> Self {
        self.attributes.push(AttributeLayout::new(
            content,
            encoding,
            component_count,
            offset,
            self.stride,
        ));
        self
    }

    /// Set the raw vertex bytes.
    pub fn with_data(mut self, data: Vec<u8>) -> Self {
        self.data = data;
        self
    }

    /// Stride in bytes between consecutive vertices.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// The raw vertex bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of complete vertices the data holds.
    pub fn vertex_count(&self) -> u32 {
        if self.stride == 0 {
            0
        } else {
            (self.data.len() / self.stride as usize) as u32
        }
    }

    /// Number of attribute descriptions.
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Get an attribute description by index.
    pub fn attribute(&self, index: usize) -> Option<&AttributeLayout> {
        self.attributes.get(index)
    }

    /// Find the first attribute with the given content tag.
    pub fn find_content(&self, content: AttributeContent) -> Option<&AttributeLayout> {
        self.attributes.iter().find(|a| a.content == content)
    }

    /// Check if any attribute carries the given content tag.
    pub fn has_content(&self, content: AttributeContent) -> bool {
        self.find_content(content).is_some()
    }
}

/// An ordered set of vertex arrays, the unit a reader binds against.
#[derive(Debug, Clone, Default)]
pub struct VertexData {
    arrays: Vec<VertexArray>,
}

impl VertexData {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { arrays: Vec::new() }
    }

    /// Add a vertex array.
    pub fn with_array(mut self, array: VertexArray) -> Self {
        self.arrays.push(array);
        self
    }

    /// Get an array by index.
    pub fn array(&self, index: usize) -> Option<&VertexArray> {
        self.arrays.get(index)
    }

    /// Number of arrays in the store.
    pub fn array_count(&self) -> usize {
        self.arrays.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_count_inference() {
        let array = VertexArray::new(12).with_data(vec![0u8; 36]);
        assert_eq!(array.vertex_count(), 3);

        // Trailing partial vertex is not counted.
        let array = VertexArray::new(12).with_data(vec![0u8; 40]);
        assert_eq!(array.vertex_count(), 3);

        let array = VertexArray::new(0).with_data(vec![0u8; 40]);
        assert_eq!(array.vertex_count(), 0);
    }

    #[test]
    fn test_attribute_lookup() {
        let array = VertexArray::new(16)
            .with_attribute(AttributeContent::Point, AttributeEncoding::F32, 3, 0)
            .with_attribute(AttributeContent::ColorRgba, AttributeEncoding::U8, 4, 12);

        assert_eq!(array.attribute_count(), 2);
        assert_eq!(array.attribute(0).unwrap().content, AttributeContent::Point);
        assert!(array.has_content(AttributeContent::ColorRgba));
        assert!(!array.has_content(AttributeContent::TexCoord));

        let color = array.find_content(AttributeContent::ColorRgba).unwrap();
        assert_eq!(color.offset, 12);
        assert_eq!(color.stride, 16);
    }

    #[test]
    fn test_store_accessors() {
        let data = VertexData::new()
            .with_array(VertexArray::new(12))
            .with_array(VertexArray::new(4));

        assert_eq!(data.array_count(), 2);
        assert_eq!(data.array(1).unwrap().stride(), 4);
        assert!(data.array(2).is_none());
    }
}
