//! Common utilities for mesh integration tests.

use std::sync::Arc;

use meshforge_core::math::{Mat4, Vec3};
use meshforge_core::mesh::Primitive;
use meshforge_core::mesh::params::{MAX_SPHERE_SUBDIVISIONS, clamp_subdivisions};
use meshforge_graphics::{BASIC_SHADER, DummyBackend, Mesh, ShaderHandle, ShaderLibrary};

/// Recording backend plus a shader library containing the basic shader.
pub struct TestContext {
    /// Backend every mesh in the test talks to.
    pub backend: Arc<DummyBackend>,
    /// Registry resolving [`BASIC_SHADER`].
    pub shaders: Arc<ShaderLibrary>,
    /// Handle the registry returns for [`BASIC_SHADER`].
    pub shader: ShaderHandle,
}

impl TestContext {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let shader = ShaderHandle::new(u32::MAX).expect("non-zero shader handle");
        let shaders = ShaderLibrary::new().with_shader(BASIC_SHADER, shader);
        Self {
            backend: Arc::new(DummyBackend::new()),
            shaders: Arc::new(shaders),
            shader,
        }
    }

    /// Create an empty mesh bound to this context.
    pub fn mesh(&self) -> Mesh {
        Mesh::new(self.backend.clone(), self.shaders.clone())
    }
}

pub fn identity() -> Mat4 {
    Mat4::identity()
}

pub fn base_color() -> Vec3 {
    Vec3::new(0.25, 0.5, 0.75)
}

/// Vertex count a primitive must produce after parameter clamping.
pub fn expected_vertex_count(primitive: &Primitive) -> usize {
    match *primitive {
        Primitive::Cube { .. } | Primitive::Cuboid { .. } | Primitive::Torus { .. } => 36,
        Primitive::Cone { subdivisions, .. } => 6 * clamp_subdivisions(subdivisions) as usize,
        Primitive::Cylinder { subdivisions, .. } => 12 * clamp_subdivisions(subdivisions) as usize,
        Primitive::Tube { subdivisions, .. } => 24 * clamp_subdivisions(subdivisions) as usize,
        Primitive::Sphere { subdivisions, .. } => {
            let steps = subdivisions.min(MAX_SPHERE_SUBDIVISIONS) as usize;
            if steps == 0 { 36 } else { 6 * steps * steps }
        }
    }
}
