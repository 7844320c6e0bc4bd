//! Graphics error types.

use meshforge_core::MeshError;
use thiserror::Error;

/// Errors that can occur in the graphics system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// Render was invoked on a mesh with no GPU resources.
    #[error("mesh is not bound to GPU resources")]
    NotBound,
    /// The shader registry has no shader under this name.
    #[error("shader not found: {0}")]
    ShaderNotFound(String),
    /// Failed to create a resource.
    #[error("resource creation failed: {0}")]
    ResourceCreationFailed(String),
    /// An invalid parameter was provided.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// Vertex data could not be assembled.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}
