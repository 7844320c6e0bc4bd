//! Render pass configuration.

use meshforge_core::math::Vec3;

use crate::backend::DepthOffset;
use crate::shader::BASIC_SHADER;

/// Shader name, uniform names and pass settings used by `Mesh::render`.
///
/// The shader reads the `wire` uniform to pick a color: a negative sentinel
/// means "use the vertex color", anything else is a flat wireframe tint.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    /// Registry name of the shader program.
    pub shader: String,
    /// Name of the combined model-view-projection matrix uniform.
    pub mvp_uniform: String,
    /// Name of the color-mode uniform.
    pub wire_uniform: String,
    /// `wire` value for the filled pass.
    pub solid_sentinel: Vec3,
    /// `wire` value for the line pass.
    pub wire_color: Vec3,
    /// Depth offset applied to the line pass so it wins against the fill.
    pub wire_depth_offset: DepthOffset,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            shader: BASIC_SHADER.to_string(),
            mvp_uniform: "MVP".to_string(),
            wire_uniform: "wire".to_string(),
            solid_sentinel: Vec3::new(-1.0, -1.0, -1.0),
            wire_color: Vec3::new(1.0, 0.0, 1.0),
            wire_depth_offset: DepthOffset::new(-1.0, -1.0),
        }
    }
}

impl RenderStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shader(mut self, shader: impl Into<String>) -> Self {
        self.shader = shader.into();
        self
    }

    pub fn with_mvp_uniform(mut self, name: impl Into<String>) -> Self {
        self.mvp_uniform = name.into();
        self
    }

    pub fn with_wire_uniform(mut self, name: impl Into<String>) -> Self {
        self.wire_uniform = name.into();
        self
    }

    pub fn with_solid_sentinel(mut self, sentinel: Vec3) -> Self {
        self.solid_sentinel = sentinel;
        self
    }

    pub fn with_wire_color(mut self, color: Vec3) -> Self {
        self.wire_color = color;
        self
    }

    pub fn with_wire_depth_offset(mut self, offset: DepthOffset) -> Self {
        self.wire_depth_offset = offset;
        self
    }
}
