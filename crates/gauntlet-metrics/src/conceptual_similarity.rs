//! Conceptual similarity between an actual and an expected output
//!
//! The metric embeds both texts through an injected [`EmbeddingProvider`]
//! and scores them by cosine similarity, thresholded against a configurable
//! minimum.

use std::sync::Arc;

use gauntlet_core::TestCase;
use gauntlet_llm::embeddings::utils;
use gauntlet_llm::{EmbeddingError, EmbeddingProvider};
use parking_lot::RwLock;

use crate::error::{MetricError, MetricResult};

/// Label attached to every measurement log record
pub const METRIC_NAME: &str = "Conceptual Similarity With Ground Truth";

/// Default minimum acceptable similarity score
pub const DEFAULT_MINIMUM_SCORE: f64 = 0.7;

/// Outcome of a single similarity measurement
///
/// Returned in one call so score and pass/fail are read together; callers
/// never need to re-read mutable metric state to learn whether a
/// measurement passed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityVerdict {
    /// Cosine similarity between the two embedded texts
    pub score: f64,
    /// Whether the score met the metric's minimum
    pub passed: bool,
}

/// Similarity-based assertion metric comparing actual to expected output
///
/// The embedding model is an injected capability; constructing the provider
/// (the expensive part) happens before the metric exists. One metric can be
/// shared across an arbitrary number of measurements.
pub struct ConceptualSimilarityMetric {
    provider: Arc<dyn EmbeddingProvider>,
    minimum_score: f64,
    last_score: RwLock<Option<f64>>,
}

impl std::fmt::Debug for ConceptualSimilarityMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConceptualSimilarityMetric")
            .field("model", &self.provider.model())
            .field("minimum_score", &self.minimum_score)
            .field("last_score", &*self.last_score.read())
            .finish()
    }
}

impl ConceptualSimilarityMetric {
    /// Create a metric with an explicit minimum score
    pub fn new(provider: Arc<dyn EmbeddingProvider>, minimum_score: f64) -> Self {
        Self {
            provider,
            minimum_score,
            last_score: RwLock::new(None),
        }
    }

    /// Create a metric with the default minimum score of 0.7
    pub fn with_defaults(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self::new(provider, DEFAULT_MINIMUM_SCORE)
    }

    /// The configured minimum acceptable score
    pub fn minimum_score(&self) -> f64 {
        self.minimum_score
    }

    /// The model backing this metric's embeddings
    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Measure the conceptual similarity of a test case's outputs
    ///
    /// Requires both `actual_output` and `expected_output` to be present.
    /// Both texts are embedded in a single batched provider call (actual
    /// first, expected second) and scored by cosine similarity. The score is
    /// also retained as the metric's last score for [`Self::last_score`] and
    /// [`Self::is_successful`].
    pub async fn measure(&self, test_case: &TestCase) -> MetricResult<SimilarityVerdict> {
        let (output, expected_output) =
            match (&test_case.actual_output, &test_case.expected_output) {
                (Some(output), Some(expected_output)) => (output, expected_output),
                _ => {
                    return Err(MetricError::MissingInput(
                        "actual output and expected output must both be present".to_string(),
                    ))
                }
            };

        let texts = [output.clone(), expected_output.clone()];
        let responses = self.provider.embed_batch(&texts).await?;
        if responses.len() != 2 {
            return Err(MetricError::Embedding(EmbeddingError::InvalidResponse(
                format!("Expected 2 embeddings, got {}", responses.len()),
            )));
        }

        let score = utils::cosine_similarity(&responses[0].embedding, &responses[1].embedding);
        let passed = score >= self.minimum_score;
        *self.last_score.write() = Some(score);

        tracing::info!(
            success = passed,
            score,
            metric_name = METRIC_NAME,
            output = %output,
            expected_output = %expected_output,
            "measured conceptual similarity"
        );

        Ok(SimilarityVerdict { score, passed })
    }

    /// The most recently measured score, if any measurement has happened
    pub fn last_score(&self) -> Option<f64> {
        *self.last_score.read()
    }

    /// Whether the most recent measurement met the minimum score
    ///
    /// Returns `false` before the first measurement. Reading this after a
    /// `measure` call on another thread observes that thread's score; the
    /// [`SimilarityVerdict`] returned by [`Self::measure`] is the non-racy
    /// interface.
    pub fn is_successful(&self) -> bool {
        self.last_score()
            .map(|score| score >= self.minimum_score)
            .unwrap_or(false)
    }
}
