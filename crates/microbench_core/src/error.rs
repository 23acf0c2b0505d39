//! Error types for benchmark configuration.

use thiserror::Error;

/// Result type alias using [`BenchError`].
pub type Result<T> = std::result::Result<T, BenchError>;

/// Top-level error type for loading and checking harness settings.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Failed to read config file.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse RON.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] ron::error::SpannedError),

    /// A setting is outside the range the harness accepts.
    #[error("Invalid value for '{field}': {message}")]
    InvalidSetting {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },

    /// Unknown workload name.
    #[error("Unknown workload '{0}' (expected one of: string, vec)")]
    UnknownWorkload(String),
}
