//! Error types for mesh assembly.

use thiserror::Error;

/// Errors that can occur while assembling vertex data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Interleaving was requested before every position had a color.
    #[error("cannot interleave {positions} positions with {colors} colors")]
    ColorCountMismatch {
        /// Length of the position sequence.
        positions: usize,
        /// Length of the color sequence.
        colors: usize,
    },
}
