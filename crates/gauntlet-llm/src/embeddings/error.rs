//! Error types for embedding operations

use thiserror::Error;

/// Result type alias for embedding operations
pub type EmbeddingResult<T> = std::result::Result<T, EmbeddingError>;

/// Errors that can occur during embedding generation
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Invalid provider configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The provider could not be reached or the request failed outright
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The provider answered with a non-success status
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code returned by the provider
        status: u16,
        /// Body or reason text accompanying the status
        message: String,
    },

    /// The provider answered but the payload was unusable
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// JSON serialization/deserialization errors on the wire
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Transport-level errors from the HTTP client
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
