//! Device-side storage for one mesh.

use std::sync::Arc;

use meshforge_core::mesh::{ColorVertex, VertexLayout};

use crate::backend::{BufferHandle, GraphicsBackend, VertexArrayHandle};
use crate::error::GraphicsError;

/// One vertex array and the vertex buffer attached to it.
///
/// Move-only. Both objects are destroyed when this value is dropped, buffer
/// first, so each handle is released exactly once.
pub struct GpuMeshResources {
    backend: Arc<dyn GraphicsBackend>,
    vertex_array: VertexArrayHandle,
    buffer: BufferHandle,
    vertex_count: u32,
}

impl GpuMeshResources {
    /// Allocate device objects, upload `vertices` and declare `layout`.
    ///
    /// The layout is validated before anything is allocated. Objects
    /// allocated before a later failure are destroyed before returning.
    pub fn create(
        backend: Arc<dyn GraphicsBackend>,
        vertices: &[ColorVertex],
        layout: &VertexLayout,
    ) -> Result<Self, GraphicsError> {
        layout.validate().map_err(GraphicsError::InvalidParameter)?;
        let vertex_count = u32::try_from(vertices.len()).map_err(|_| {
            GraphicsError::InvalidParameter(format!("{} vertices exceed u32", vertices.len()))
        })?;

        let vertex_array = backend.create_vertex_array()?;
        let buffer = match backend.create_buffer() {
            Ok(buffer) => buffer,
            Err(err) => {
                backend.destroy_vertex_array(vertex_array);
                return Err(err);
            }
        };
        let resources = Self {
            backend,
            vertex_array,
            buffer,
            vertex_count,
        };

        resources.backend.upload_vertex_data(
            vertex_array,
            buffer,
            bytemuck::cast_slice(vertices),
        )?;
        resources.backend.set_vertex_layout(vertex_array, layout);
        resources.backend.bind_vertex_array(None);

        log::debug!(
            "Uploaded {} vertices to vertex array {} (buffer {})",
            vertex_count,
            vertex_array.raw(),
            buffer.raw()
        );
        Ok(resources)
    }

    pub fn vertex_array(&self) -> VertexArrayHandle {
        self.vertex_array
    }

    pub fn buffer(&self) -> BufferHandle {
        self.buffer
    }

    /// Number of vertices in the buffer.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

impl Drop for GpuMeshResources {
    fn drop(&mut self) {
        log::trace!(
            "Releasing vertex array {} (buffer {})",
            self.vertex_array.raw(),
            self.buffer.raw()
        );
        self.backend.destroy_buffer(self.buffer);
        self.backend.destroy_vertex_array(self.vertex_array);
    }
}

impl std::fmt::Debug for GpuMeshResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GpuMeshResources")
            .field("backend", &self.backend.name())
            .field("vertex_array", &self.vertex_array)
            .field("buffer", &self.buffer)
            .field("vertex_count", &self.vertex_count)
            .finish()
    }
}

static_assertions::assert_impl_all!(GpuMeshResources: Send, Sync);
static_assertions::assert_not_impl_any!(GpuMeshResources: Clone, Copy);
