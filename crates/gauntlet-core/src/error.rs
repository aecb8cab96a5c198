//! Error types for core record operations

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur when working with test case and golden records
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON serialization/deserialization errors from dataset interchange
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
