//! Error types for metric operations

use gauntlet_llm::EmbeddingError;
use thiserror::Error;

/// Result type alias for metric operations
pub type MetricResult<T> = std::result::Result<T, MetricError>;

/// Errors that can occur when measuring or asserting a metric
#[derive(Debug, Error)]
pub enum MetricError {
    /// A compared text was absent from the test case
    #[error("Invalid input: {0}")]
    MissingInput(String),

    /// Embedding generation failed; propagated from the provider unchanged
    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    /// An assertion's computed score fell below its minimum
    #[error(
        "output is not conceptually similar to the expected output: score {score:.4} is below the minimum {minimum_score}"
    )]
    BelowThreshold {
        /// The similarity score that was computed
        score: f64,
        /// The minimum score the assertion required
        minimum_score: f64,
    },

    /// The shared metric was requested with a different configuration than it holds
    #[error(
        "shared metric already configured with minimum score {existing}, refusing to reconfigure to {requested}"
    )]
    Reconfigured {
        /// Minimum score held by the installed shared metric
        existing: f64,
        /// Minimum score the caller asked for
        requested: f64,
    },
}
