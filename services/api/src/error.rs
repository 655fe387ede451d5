//! services/api/src/error.rs
//!
//! Defines the primary error type for both service binaries. Request-level
//! failures never reach this type; handlers map them onto HTTP responses.

use crate::config::ConfigError;

/// The primary error type for the `api` service binaries.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents a standard Input/Output error (e.g., binding to a network socket
    /// or creating the preview directory).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
