//! # Gauntlet Metrics
//!
//! Similarity-based assertion metrics for the Gauntlet evaluation toolkit.
//!
//! The conceptual similarity metric compares the output a system under test
//! produced against the output we wanted, by embedding both texts and
//! scoring them with cosine similarity. It is available three ways:
//!
//! - [`ConceptualSimilarityMetric`]: a reusable metric object with an
//!   injected embedding provider
//! - [`shared_metric`]: an explicit process-shared handle for callers that
//!   want one metric (and one loaded model) per process
//! - [`assert_conceptual_similarity`]: a one-shot assertion for test code
//!
//! ## Example
//!
//! ```rust,no_run
//! use gauntlet_core::TestCase;
//! use gauntlet_llm::embeddings::{EmbeddingConfig, create_provider};
//! use gauntlet_metrics::ConceptualSimilarityMetric;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(EmbeddingConfig::ollama(None, None))?;
//!     let metric = ConceptualSimilarityMetric::with_defaults(provider);
//!
//!     let case = TestCase::new("What is the capital of France?")
//!         .with_actual_output("Paris is France's capital city.")
//!         .with_expected_output("The capital of France is Paris.");
//!
//!     let verdict = metric.measure(&case).await?;
//!     println!("score {:.3}, passed: {}", verdict.score, verdict.passed);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assertions;
pub mod conceptual_similarity;
pub mod error;
pub mod shared;

pub use assertions::{
    assert_conceptual_similarity, assert_conceptual_similarity_with,
    DEFAULT_ASSERTION_MINIMUM_SCORE,
};
pub use conceptual_similarity::{
    ConceptualSimilarityMetric, SimilarityVerdict, DEFAULT_MINIMUM_SCORE, METRIC_NAME,
};
pub use error::{MetricError, MetricResult};
pub use shared::{reset_shared_metric, shared_metric};
