//! In-memory shader registry.

use std::collections::HashMap;

use super::ShaderRegistry;
use crate::backend::ShaderHandle;

/// Collection of compiled shader programs keyed by name.
#[derive(Debug, Clone, Default)]
pub struct ShaderLibrary {
    shaders: HashMap<String, ShaderHandle>,
}

impl ShaderLibrary {
    /// Create an empty shader library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shader to the library.
    pub fn with_shader(mut self, name: impl Into<String>, handle: ShaderHandle) -> Self {
        self.insert(name, handle);
        self
    }

    /// Register `handle` under `name`, returning the handle it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        handle: ShaderHandle,
    ) -> Option<ShaderHandle> {
        self.shaders.insert(name.into(), handle)
    }

    /// Get an iterator over all shaders (name, handle).
    pub fn shaders(&self) -> impl Iterator<Item = (&str, ShaderHandle)> + '_ {
        self.shaders.iter().map(|(name, handle)| (name.as_str(), *handle))
    }

    pub fn len(&self) -> usize {
        self.shaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shaders.is_empty()
    }
}

impl ShaderRegistry for ShaderLibrary {
    fn resolve(&self, name: &str) -> Option<ShaderHandle> {
        self.shaders.get(name).copied()
    }
}
