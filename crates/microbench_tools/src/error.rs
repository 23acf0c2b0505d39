//! Error types for the development tools.

use std::path::PathBuf;

use microbench_core::error::BenchError;
use thiserror::Error;

/// Result type alias using [`ToolError`].
pub type Result<T> = std::result::Result<T, ToolError>;

/// Errors raised by scaffolding and validation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Bench name cannot be used as a Rust identifier or target name.
    #[error("Invalid bench name '{name}': {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Refusing to overwrite an existing bench file.
    #[error("Bench file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Filesystem error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config or workload error from the core crate.
    #[error(transparent)]
    Bench(#[from] BenchError),
}
