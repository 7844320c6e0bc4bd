//! Graphics device abstraction.
//!
//! A mesh never talks to a rendering API directly. It drives a
//! [`GraphicsBackend`], which owns the real device objects and hands out
//! opaque handles for them.
//!
//! # Available Backends
//!
//! - [`DummyBackend`](dummy::DummyBackend): records every command for testing
//!   and development
//!
//! # Handles
//!
//! Handles wrap [`NonZeroU32`], so a live handle is never the `0` "no object"
//! value that GL-style APIs reserve.

pub mod dummy;

use std::num::NonZeroU32;
use std::ops::Range;

use meshforge_core::math::{Mat4, Vec3};
use meshforge_core::mesh::VertexLayout;

use crate::error::GraphicsError;

/// Handle to a device vertex array object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexArrayHandle(NonZeroU32);

/// Handle to a device buffer object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferHandle(NonZeroU32);

/// Handle to a compiled shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShaderHandle(NonZeroU32);

impl VertexArrayHandle {
    /// Wrap a raw id. Returns `None` for `0`.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    pub fn raw(self) -> u32 {
        self.0.get()
    }
}

impl BufferHandle {
    /// Wrap a raw id. Returns `None` for `0`.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    pub fn raw(self) -> u32 {
        self.0.get()
    }
}

impl ShaderHandle {
    /// Wrap a raw id. Returns `None` for `0`.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    pub fn raw(self) -> u32 {
        self.0.get()
    }
}

/// How triangles are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolygonMode {
    /// Filled triangles.
    #[default]
    Fill,
    /// Triangle edges only.
    Line,
}

/// Depth bias applied while drawing (polygon offset).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthOffset {
    pub factor: f32,
    pub units: f32,
}

impl DepthOffset {
    pub fn new(factor: f32, units: f32) -> Self {
        Self { factor, units }
    }
}

/// Operations a mesh needs from the graphics device.
///
/// All methods take `&self`; implementations synchronize internally so a
/// backend can be shared as `Arc<dyn GraphicsBackend>`. Allocation can fail;
/// state changes and draws cannot.
pub trait GraphicsBackend: Send + Sync {
    /// Get the backend name.
    fn name(&self) -> &'static str;

    // === Resource Creation ===

    /// Allocate a vertex array object.
    fn create_vertex_array(&self) -> Result<VertexArrayHandle, GraphicsError>;

    /// Allocate a buffer object.
    fn create_buffer(&self) -> Result<BufferHandle, GraphicsError>;

    /// Copy `data` into `buffer` and attach the buffer to `vertex_array`.
    fn upload_vertex_data(
        &self,
        vertex_array: VertexArrayHandle,
        buffer: BufferHandle,
        data: &[u8],
    ) -> Result<(), GraphicsError>;

    /// Declare how `vertex_array` reads its buffer.
    fn set_vertex_layout(&self, vertex_array: VertexArrayHandle, layout: &VertexLayout);

    // === Resource Destruction ===

    fn destroy_vertex_array(&self, vertex_array: VertexArrayHandle);

    fn destroy_buffer(&self, buffer: BufferHandle);

    // === Drawing ===

    /// Make `shader` the active program.
    fn use_shader(&self, shader: ShaderHandle);

    /// Bind a vertex array, or unbind with `None`.
    fn bind_vertex_array(&self, vertex_array: Option<VertexArrayHandle>);

    fn set_uniform_mat4(&self, shader: ShaderHandle, name: &str, value: &Mat4);

    fn set_uniform_vec3(&self, shader: ShaderHandle, name: &str, value: &Vec3);

    fn set_polygon_mode(&self, mode: PolygonMode);

    /// Enable a depth offset, or disable it with `None`.
    fn set_depth_offset(&self, offset: Option<DepthOffset>);

    /// Draw a non-indexed triangle list from the bound vertex array.
    fn draw(&self, vertices: Range<u32>);
}
