//! Dummy graphics backend for testing and development.
//!
//! This backend doesn't talk to a GPU. It hands out handles, keeps uploaded
//! bytes and layouts in memory, and records every call as a
//! [`BackendCommand`] so tests can assert on the exact sequence a mesh issued.

use std::collections::{HashMap, HashSet};
use std::ops::Range;

use meshforge_core::math::{Mat4, Vec3};
use meshforge_core::mesh::VertexLayout;
use parking_lot::Mutex;

use crate::error::GraphicsError;

use super::{
    BufferHandle, DepthOffset, GraphicsBackend, PolygonMode, ShaderHandle, VertexArrayHandle,
};

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    CreateVertexArray(VertexArrayHandle),
    CreateBuffer(BufferHandle),
    UploadVertexData {
        vertex_array: VertexArrayHandle,
        buffer: BufferHandle,
        size: usize,
    },
    SetVertexLayout {
        vertex_array: VertexArrayHandle,
        layout: VertexLayout,
    },
    DestroyVertexArray(VertexArrayHandle),
    DestroyBuffer(BufferHandle),
    UseShader(ShaderHandle),
    BindVertexArray(Option<VertexArrayHandle>),
    SetUniformMat4 {
        shader: ShaderHandle,
        name: String,
        value: Mat4,
    },
    SetUniformVec3 {
        shader: ShaderHandle,
        name: String,
        value: Vec3,
    },
    SetPolygonMode(PolygonMode),
    SetDepthOffset(Option<DepthOffset>),
    Draw(Range<u32>),
}

#[derive(Debug, Default)]
struct DummyState {
    last_id: u32,
    fail_allocations: bool,
    commands: Vec<BackendCommand>,
    vertex_arrays: HashSet<VertexArrayHandle>,
    buffers: HashMap<BufferHandle, Vec<u8>>,
    layouts: HashMap<VertexArrayHandle, VertexLayout>,
    invalid_destroys: usize,
}

impl DummyState {
    fn allocate_id(&mut self) -> Result<u32, GraphicsError> {
        if self.fail_allocations {
            return Err(GraphicsError::ResourceCreationFailed(
                "allocation disabled on dummy backend".to_string(),
            ));
        }
        self.last_id = self.last_id.checked_add(1).ok_or_else(|| {
            GraphicsError::ResourceCreationFailed("dummy backend ran out of handles".to_string())
        })?;
        Ok(self.last_id)
    }
}

/// Recording graphics backend.
///
/// Handles are allocated from one counter starting at 1, so every handle the
/// backend returns is unique across kinds.
#[derive(Debug, Default)]
pub struct DummyBackend {
    state: Mutex<DummyState>,
}

impl DummyBackend {
    /// Create a new dummy backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent allocation fail (or succeed again).
    pub fn set_fail_allocations(&self, fail: bool) {
        self.state.lock().fail_allocations = fail;
    }

    /// Get a copy of every command recorded so far.
    pub fn commands(&self) -> Vec<BackendCommand> {
        self.state.lock().commands.clone()
    }

    /// Drain the recorded commands.
    pub fn take_commands(&self) -> Vec<BackendCommand> {
        std::mem::take(&mut self.state.lock().commands)
    }

    /// Vertex ranges of every recorded draw call.
    pub fn draw_calls(&self) -> Vec<Range<u32>> {
        self.state
            .lock()
            .commands
            .iter()
            .filter_map(|command| match command {
                BackendCommand::Draw(range) => Some(range.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of vertex arrays created and not yet destroyed.
    pub fn live_vertex_arrays(&self) -> usize {
        self.state.lock().vertex_arrays.len()
    }

    /// Number of buffers created and not yet destroyed.
    pub fn live_buffers(&self) -> usize {
        self.state.lock().buffers.len()
    }

    /// Bytes last uploaded into a live buffer.
    pub fn buffer_data(&self, buffer: BufferHandle) -> Option<Vec<u8>> {
        self.state.lock().buffers.get(&buffer).cloned()
    }

    /// Layout declared for a live vertex array.
    pub fn vertex_layout(&self, vertex_array: VertexArrayHandle) -> Option<VertexLayout> {
        self.state.lock().layouts.get(&vertex_array).cloned()
    }

    /// Number of destroy calls for handles that were not live.
    pub fn invalid_destroy_count(&self) -> usize {
        self.state.lock().invalid_destroys
    }

    fn record(&self, command: BackendCommand) {
        log::trace!("DummyBackend: {:?}", command);
        self.state.lock().commands.push(command);
    }
}

impl GraphicsBackend for DummyBackend {
    fn name(&self) -> &'static str {
        "Dummy"
    }

    fn create_vertex_array(&self) -> Result<VertexArrayHandle, GraphicsError> {
        let handle = {
            let mut state = self.state.lock();
            let handle = VertexArrayHandle::new(state.allocate_id()?).ok_or_else(|| {
                GraphicsError::ResourceCreationFailed("zero vertex array handle".to_string())
            })?;
            state.vertex_arrays.insert(handle);
            handle
        };
        self.record(BackendCommand::CreateVertexArray(handle));
        Ok(handle)
    }

    fn create_buffer(&self) -> Result<BufferHandle, GraphicsError> {
        let handle = {
            let mut state = self.state.lock();
            let handle = BufferHandle::new(state.allocate_id()?).ok_or_else(|| {
                GraphicsError::ResourceCreationFailed("zero buffer handle".to_string())
            })?;
            state.buffers.insert(handle, Vec::new());
            handle
        };
        self.record(BackendCommand::CreateBuffer(handle));
        Ok(handle)
    }

    fn upload_vertex_data(
        &self,
        vertex_array: VertexArrayHandle,
        buffer: BufferHandle,
        data: &[u8],
    ) -> Result<(), GraphicsError> {
        {
            let mut state = self.state.lock();
            if !state.vertex_arrays.contains(&vertex_array) {
                return Err(GraphicsError::InvalidParameter(format!(
                    "unknown vertex array {}",
                    vertex_array.raw()
                )));
            }
            let Some(contents) = state.buffers.get_mut(&buffer) else {
                return Err(GraphicsError::InvalidParameter(format!(
                    "unknown buffer {}",
                    buffer.raw()
                )));
            };
            contents.clear();
            contents.extend_from_slice(data);
        }
        self.record(BackendCommand::UploadVertexData {
            vertex_array,
            buffer,
            size: data.len(),
        });
        Ok(())
    }

    fn set_vertex_layout(&self, vertex_array: VertexArrayHandle, layout: &VertexLayout) {
        self.state.lock().layouts.insert(vertex_array, layout.clone());
        self.record(BackendCommand::SetVertexLayout {
            vertex_array,
            layout: layout.clone(),
        });
    }

    fn destroy_vertex_array(&self, vertex_array: VertexArrayHandle) {
        {
            let mut state = self.state.lock();
            if !state.vertex_arrays.remove(&vertex_array) {
                log::warn!(
                    "DummyBackend: destroying unknown vertex array {}",
                    vertex_array.raw()
                );
                state.invalid_destroys += 1;
            }
            state.layouts.remove(&vertex_array);
        }
        self.record(BackendCommand::DestroyVertexArray(vertex_array));
    }

    fn destroy_buffer(&self, buffer: BufferHandle) {
        {
            let mut state = self.state.lock();
            if state.buffers.remove(&buffer).is_none() {
                log::warn!("DummyBackend: destroying unknown buffer {}", buffer.raw());
                state.invalid_destroys += 1;
            }
        }
        self.record(BackendCommand::DestroyBuffer(buffer));
    }

    fn use_shader(&self, shader: ShaderHandle) {
        self.record(BackendCommand::UseShader(shader));
    }

    fn bind_vertex_array(&self, vertex_array: Option<VertexArrayHandle>) {
        self.record(BackendCommand::BindVertexArray(vertex_array));
    }

    fn set_uniform_mat4(&self, shader: ShaderHandle, name: &str, value: &Mat4) {
        self.record(BackendCommand::SetUniformMat4 {
            shader,
            name: name.to_string(),
            value: *value,
        });
    }

    fn set_uniform_vec3(&self, shader: ShaderHandle, name: &str, value: &Vec3) {
        self.record(BackendCommand::SetUniformVec3 {
            shader,
            name: name.to_string(),
            value: *value,
        });
    }

    fn set_polygon_mode(&self, mode: PolygonMode) {
        self.record(BackendCommand::SetPolygonMode(mode));
    }

    fn set_depth_offset(&self, offset: Option<DepthOffset>) {
        self.record(BackendCommand::SetDepthOffset(offset));
    }

    fn draw(&self, vertices: Range<u32>) {
        self.record(BackendCommand::Draw(vertices));
    }
}
