//! Shader lookup.
//!
//! Meshes never compile or destroy shaders. They resolve a program by name
//! through a [`ShaderRegistry`] that the application builds once and shares
//! between meshes.
//!
//! # Example
//!
//! ```ignore
//! use meshforge_graphics::shader::{ShaderLibrary, ShaderRegistry, BASIC_SHADER};
//!
//! let shaders = ShaderLibrary::new().with_shader(BASIC_SHADER, program);
//! assert_eq!(shaders.resolve(BASIC_SHADER), Some(program));
//! ```

pub mod library;

use crate::backend::ShaderHandle;

pub use library::ShaderLibrary;

/// Name of the flat-color shader meshes draw with by default.
pub const BASIC_SHADER: &str = "Basic";

/// Name-keyed, read-only lookup of compiled shader programs.
///
/// Shared as `Arc<dyn ShaderRegistry>`; implementations must allow
/// concurrent reads.
pub trait ShaderRegistry: Send + Sync {
    /// Find the program registered under `name`.
    fn resolve(&self, name: &str) -> Option<ShaderHandle>;
}
