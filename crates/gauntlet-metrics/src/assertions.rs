//! One-shot similarity assertions for use inside test code

use std::sync::Arc;

use gauntlet_core::TestCase;
use gauntlet_llm::EmbeddingProvider;

use crate::conceptual_similarity::ConceptualSimilarityMetric;
use crate::error::{MetricError, MetricResult};

/// Default minimum score for one-shot assertions
///
/// Deliberately looser than the metric's own 0.7 default: assertion call
/// sites usually only want to catch outputs that drifted badly off topic.
pub const DEFAULT_ASSERTION_MINIMUM_SCORE: f64 = 0.3;

/// Assert that `output` is conceptually similar to `expected_output`
///
/// Uses the default assertion threshold of 0.3. Returns the computed score
/// on success; fails with [`MetricError::BelowThreshold`] carrying the score
/// otherwise.
pub async fn assert_conceptual_similarity(
    provider: Arc<dyn EmbeddingProvider>,
    output: &str,
    expected_output: &str,
) -> MetricResult<f64> {
    assert_conceptual_similarity_with(
        provider,
        output,
        expected_output,
        DEFAULT_ASSERTION_MINIMUM_SCORE,
    )
    .await
}

/// Assert conceptual similarity against an explicit minimum score
///
/// Builds a transient test case from the two texts and a fresh metric for
/// this call only, so the chosen threshold never leaks into the
/// process-shared metric.
pub async fn assert_conceptual_similarity_with(
    provider: Arc<dyn EmbeddingProvider>,
    output: &str,
    expected_output: &str,
    minimum_score: f64,
) -> MetricResult<f64> {
    let metric = ConceptualSimilarityMetric::new(provider, minimum_score);
    let test_case = TestCase::new("")
        .with_actual_output(output)
        .with_expected_output(expected_output);

    let verdict = metric.measure(&test_case).await?;
    if !verdict.passed {
        return Err(MetricError::BelowThreshold {
            score: verdict.score,
            minimum_score,
        });
    }

    Ok(verdict.score)
}
