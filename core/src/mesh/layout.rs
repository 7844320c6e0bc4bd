//! Vertex layout description for the interleaved vertex buffer.
//!
//! A layout tells the graphics backend how to read the uploaded bytes:
//! one interleaved buffer whose attributes share a single stride.
//!
//! # Example
//!
//! ```ignore
//! let layout = VertexLayout::position_color();
//! assert_eq!(layout.stride, 24);
//! assert_eq!(layout.get_attribute(VertexAttributeSemantic::Color).unwrap().offset, 12);
//! ```

use std::sync::Arc;

use super::vertex::ColorVertex;

/// Semantic meaning of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeSemantic {
    /// Vertex position (float3).
    Position,
    /// Vertex color (float3).
    Color,
}

/// Format of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeFormat {
    /// Three 32-bit floats.
    Float3,
}

impl VertexAttributeFormat {
    /// Get the number of components.
    pub fn component_count(&self) -> u32 {
        match self {
            Self::Float3 => 3,
        }
    }

    /// Get the size in bytes of this format.
    pub fn size(&self) -> u32 {
        self.component_count() * 4
    }
}

/// A single vertex attribute description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// Semantic meaning of this attribute.
    pub semantic: VertexAttributeSemantic,
    /// Data format of this attribute.
    pub format: VertexAttributeFormat,
    /// Byte offset within one vertex.
    pub offset: u32,
    /// Shader input location.
    pub location: u32,
}

impl VertexAttribute {
    /// Create a new vertex attribute.
    pub fn new(
        semantic: VertexAttributeSemantic,
        format: VertexAttributeFormat,
        offset: u32,
        location: u32,
    ) -> Self {
        Self {
            semantic,
            format,
            offset,
            location,
        }
    }

    /// Create a position attribute (float3) at location 0.
    pub fn position(offset: u32) -> Self {
        Self::new(
            VertexAttributeSemantic::Position,
            VertexAttributeFormat::Float3,
            offset,
            0,
        )
    }

    /// Create a color attribute (float3) at location 1.
    pub fn color(offset: u32) -> Self {
        Self::new(
            VertexAttributeSemantic::Color,
            VertexAttributeFormat::Float3,
            offset,
            1,
        )
    }
}

/// Describes the layout of one interleaved vertex buffer.
///
/// Layouts are wrapped in `Arc` and shared between meshes; every mesh built
/// by the generators uses [`VertexLayout::position_color`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexLayout {
    /// Stride in bytes between consecutive vertices.
    pub stride: u32,
    /// The vertex attributes, in declaration order.
    pub attributes: Vec<VertexAttribute>,
    /// Optional label for debugging.
    pub label: Option<String>,
}

impl VertexLayout {
    /// Create a new empty layout with the given stride.
    pub fn new(stride: u32) -> Self {
        Self {
            stride,
            attributes: Vec::new(),
            label: None,
        }
    }

    /// Add a vertex attribute.
    pub fn with_attribute(mut self, attribute: VertexAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get an attribute by semantic.
    pub fn get_attribute(&self, semantic: VertexAttributeSemantic) -> Option<&VertexAttribute> {
        self.attributes
            .iter()
            .find(|attr| attr.semantic == semantic)
    }

    /// Validate the layout (every attribute must fit inside the stride).
    pub fn validate(&self) -> Result<(), String> {
        for attr in &self.attributes {
            if attr.offset + attr.format.size() > self.stride {
                return Err(format!(
                    "Attribute {:?} at offset {} overruns stride {}",
                    attr.semantic, attr.offset, self.stride
                ));
            }
        }
        Ok(())
    }

    /// Position + color layout matching [`ColorVertex`] (24 bytes per vertex).
    pub fn position_color() -> Arc<Self> {
        Arc::new(
            Self::new(ColorVertex::STRIDE)
                .with_attribute(VertexAttribute::position(0))
                .with_attribute(VertexAttribute::color(ColorVertex::COLOR_OFFSET))
                .with_label("position_color"),
        )
    }
}
