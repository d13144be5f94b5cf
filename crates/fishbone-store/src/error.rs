//! Error types for the storage layer

use thiserror::Error;

/// Errors that can occur while reading or writing catalog and selection files
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON is well-formed but not shaped as expected
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}
