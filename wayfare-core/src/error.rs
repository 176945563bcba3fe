//! Error types for wayfare.

use thiserror::Error;

/// Errors that can occur in wayfare operations.
#[derive(Error, Debug)]
pub enum WayfareError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for wayfare operations.
pub type WayfareResult<T> = Result<T, WayfareError>;
