//! # MeshForge Graphics
//!
//! Uploads procedurally generated meshes and draws them through an abstract
//! graphics device.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`Mesh`] - Generated or hand-built geometry with upload/render/release
//! - [`GraphicsBackend`] - Trait for the graphics device collaborator
//! - [`ShaderRegistry`] - Trait for name-based shader lookup
//! - [`DummyBackend`] - Recording backend for testing and development
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use meshforge_graphics::{DummyBackend, Mesh, ShaderLibrary, BASIC_SHADER};
//!
//! let backend = Arc::new(DummyBackend::new());
//! let shaders = Arc::new(ShaderLibrary::new().with_shader(BASIC_SHADER, program));
//! let mut mesh = Mesh::new(backend, shaders);
//! mesh.generate_sphere(1.0, 6, Vec3::new(0.2, 0.6, 1.0))?;
//! mesh.render(&projection, &view, &model)?;
//! ```

pub mod backend;
pub mod error;
pub mod mesh;
pub mod shader;
pub mod style;

// Re-export main types for convenience
pub use backend::dummy::{BackendCommand, DummyBackend};
pub use backend::{
    BufferHandle, DepthOffset, GraphicsBackend, PolygonMode, ShaderHandle, VertexArrayHandle,
};
pub use error::GraphicsError;
pub use mesh::{GpuMeshResources, Mesh};
pub use shader::{BASIC_SHADER, ShaderLibrary, ShaderRegistry};
pub use style::RenderStyle;

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the graphics subsystem.
///
/// This should be called before using any graphics functionality.
pub fn init() {
    log::info!("MeshForge Graphics v{} initialized", VERSION);
}
