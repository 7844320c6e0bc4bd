//! # MeshForge Core
//!
//! GPU-agnostic geometry for MeshForge: the vertex accumulator and the
//! procedural primitive generators (cube, cuboid, cone, cylinder, tube,
//! torus, sphere).

pub mod math;
pub mod mesh;

pub use mesh::MeshError;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the core library version.
pub fn init() {
    log::info!("MeshForge Core v{} initialized", VERSION);
}
