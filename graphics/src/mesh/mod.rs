//! Mesh types for the graphics engine.
//!
//! - [`Mesh`] - Geometry plus the upload and render protocol
//! - [`GpuMeshResources`] - Move-only owner of one vertex array and its buffer
//!
//! Geometry itself comes from `meshforge_core::mesh`; this module only moves
//! it onto the device and draws it.

mod data;
mod gpu;

pub use data::Mesh;
pub use gpu::GpuMeshResources;
