//! Mock provider for testing
//!
//! Generates deterministic hash-seeded unit vectors: the same text always
//! maps to the same vector, and distinct texts map to distinct vectors.
//! Tests that need exact geometry (identical, orthogonal) can pin vectors
//! per text with [`MockEmbeddingProvider::with_fixture`].

use async_trait::async_trait;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use super::error::{EmbeddingError, EmbeddingResult};
use super::provider::{estimate_tokens, utils, EmbeddingProvider, EmbeddingResponse};

/// Default dimensions for mock embeddings
pub const DEFAULT_MOCK_DIMENSIONS: usize = 768;

const MOCK_MODEL_NAME: &str = "mock-embed";

/// Deterministic in-process embedding provider for tests
pub struct MockEmbeddingProvider {
    dimensions: usize,
    fixtures: HashMap<String, Vec<f32>>,
}

impl MockEmbeddingProvider {
    /// Create a mock provider with the default dimensions
    pub fn new() -> Self {
        Self::with_dimensions(DEFAULT_MOCK_DIMENSIONS)
    }

    /// Create a mock provider with explicit dimensions
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            dimensions,
            fixtures: HashMap::new(),
        }
    }

    /// Pin an exact vector for a specific input text
    ///
    /// Fixture vectors are returned as-is, without normalization, so tests
    /// control the geometry completely.
    pub fn with_fixture(mut self, text: impl Into<String>, embedding: Vec<f32>) -> Self {
        self.fixtures.insert(text.into(), embedding);
        self
    }

    fn vector_for(&self, text: &str) -> EmbeddingResult<Vec<f32>> {
        if let Some(fixture) = self.fixtures.get(text) {
            utils::validate_embedding(fixture)?;
            return Ok(fixture.clone());
        }

        if self.dimensions == 0 {
            return Err(EmbeddingError::ConfigError(
                "Mock dimensions must be greater than zero".to_string(),
            ));
        }

        Ok(seeded_unit_vector(text, self.dimensions))
    }
}

impl Default for MockEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic pseudo-random unit vector seeded by the text's hash
fn seeded_unit_vector(text: &str, dimensions: usize) -> Vec<f32> {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    let mut state = hasher.finish();

    let mut values = Vec::with_capacity(dimensions);
    for _ in 0..dimensions {
        // Linear congruential step, taking the high bits for the mantissa
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let unit = ((state >> 40) as f32) / ((1u64 << 24) as f32); // [0, 1)
        values.push(unit * 2.0 - 1.0);
    }

    utils::normalize_embedding(&mut values);
    values
}

#[async_trait]
impl EmbeddingProvider for MockEmbeddingProvider {
    async fn embed(&self, text: &str) -> EmbeddingResult<EmbeddingResponse> {
        let embedding = self.vector_for(text)?;
        Ok(EmbeddingResponse::new(
            embedding,
            estimate_tokens(text),
            MOCK_MODEL_NAME.to_string(),
        ))
    }

    async fn embed_batch(&self, texts: &[String]) -> EmbeddingResult<Vec<EmbeddingResponse>> {
        let mut responses = Vec::with_capacity(texts.len());
        for text in texts {
            responses.push(self.embed(text).await?);
        }
        Ok(responses)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model(&self) -> &str {
        MOCK_MODEL_NAME
    }
}
