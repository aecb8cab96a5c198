//! Process-shared metric handle
//!
//! Model loading is expensive, so callers typically want exactly one
//! [`ConceptualSimilarityMetric`] per process. Rather than enforcing that
//! implicitly at construction, the shared instance is an explicit handle:
//! the first acquisition installs it, later acquisitions get the same `Arc`
//! back, and asking for a different minimum score is an error instead of a
//! silent reconfiguration of everyone else's metric.

use std::sync::Arc;

use gauntlet_llm::EmbeddingProvider;
use lazy_static::lazy_static;
use parking_lot::RwLock;

use crate::conceptual_similarity::ConceptualSimilarityMetric;
use crate::error::{MetricError, MetricResult};

lazy_static! {
    static ref SHARED_METRIC: RwLock<Option<Arc<ConceptualSimilarityMetric>>> = RwLock::new(None);
}

/// Acquire the process-shared conceptual similarity metric
///
/// The first call installs a metric built from `provider` and
/// `minimum_score`; subsequent calls return the same instance as long as
/// `minimum_score` matches, and fail with [`MetricError::Reconfigured`]
/// otherwise. The provider argument is ignored once a metric is installed.
pub fn shared_metric(
    provider: Arc<dyn EmbeddingProvider>,
    minimum_score: f64,
) -> MetricResult<Arc<ConceptualSimilarityMetric>> {
    let mut guard = SHARED_METRIC.write();

    match guard.as_ref() {
        Some(existing) if existing.minimum_score() == minimum_score => Ok(Arc::clone(existing)),
        Some(existing) => Err(MetricError::Reconfigured {
            existing: existing.minimum_score(),
            requested: minimum_score,
        }),
        None => {
            let metric = Arc::new(ConceptualSimilarityMetric::new(provider, minimum_score));
            *guard = Some(Arc::clone(&metric));
            Ok(metric)
        }
    }
}

/// Drop the installed shared metric so the next acquisition starts fresh
///
/// Intended for test isolation; production code has no reason to uninstall
/// the process-wide metric.
pub fn reset_shared_metric() {
    *SHARED_METRIC.write() = None;
}
