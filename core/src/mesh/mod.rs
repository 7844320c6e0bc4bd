//! CPU-side mesh types and generators.
//!
//! This module provides GPU-agnostic mesh building blocks:
//!
//! - [`VertexAccumulator`] - Parallel position/color sequences with triangle and quad emission
//! - [`ColorVertex`] - The interleaved position + color vertex uploaded to the GPU
//! - [`VertexLayout`] - Describes the attributes of the interleaved vertex
//! - [`Primitive`] - Shape descriptor that can be regenerated on demand
//! - [`generators`] - The parametric primitive generators
//!
//! Meshes are flat, non-indexed triangle lists. Every emitted corner is its own
//! vertex; nothing is shared or deduplicated.

mod data;
mod error;
pub mod generators;
mod layout;
pub mod params;
mod primitive;
mod vertex;

pub use data::VertexAccumulator;
pub use error::MeshError;
pub use layout::{VertexAttribute, VertexAttributeFormat, VertexAttributeSemantic, VertexLayout};
pub use primitive::Primitive;
pub use vertex::{ColorVertex, DEFAULT_COLOR};
