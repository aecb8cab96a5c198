//! Trait definition for embedding providers

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::{EmbeddingError, EmbeddingResult};

/// Trait for embedding providers
///
/// Implementations turn text into fixed-dimension vectors. Batch calls
/// preserve order: response *i* corresponds to input *i*.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding for a single text
    async fn embed(&self, text: &str) -> EmbeddingResult<EmbeddingResponse>;

    /// Generate embeddings for multiple texts in one request
    async fn embed_batch(&self, texts: &[String]) -> EmbeddingResult<Vec<EmbeddingResponse>>;

    /// Expected embedding dimensions for the current model
    fn dimensions(&self) -> usize;

    /// The current model name
    fn model(&self) -> &str;
}

/// Response from embedding generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    /// The embedding vector
    pub embedding: Vec<f32>,

    /// Number of tokens processed (approximate for providers that do not report it)
    pub token_count: usize,

    /// Model used for generation
    pub model: String,
}

impl EmbeddingResponse {
    /// Create a new embedding response
    pub fn new(embedding: Vec<f32>, token_count: usize, model: String) -> Self {
        Self {
            embedding,
            token_count,
            model,
        }
    }

    /// Get the length of the embedding vector
    pub fn dimensions(&self) -> usize {
        self.embedding.len()
    }

    /// Check if the embedding is valid (non-empty, finite values)
    pub fn is_valid(&self) -> bool {
        !self.embedding.is_empty() && self.embedding.iter().all(|&v| v.is_finite())
    }
}

/// Estimate token count for text (approximate, word-based)
pub fn estimate_tokens(text: &str) -> usize {
    let words = text.split_whitespace().count();
    (words as f64 / 0.75).ceil() as usize
}

/// Vector helpers shared by providers and metrics
pub mod utils {
    use super::{EmbeddingError, EmbeddingResult};

    /// Validate an embedding vector before use
    pub fn validate_embedding(embedding: &[f32]) -> EmbeddingResult<()> {
        if embedding.is_empty() {
            return Err(EmbeddingError::InvalidResponse(
                "Empty embedding vector".to_string(),
            ));
        }

        for (i, &value) in embedding.iter().enumerate() {
            if !value.is_finite() {
                return Err(EmbeddingError::InvalidResponse(format!(
                    "Non-finite value at index {}: {}",
                    i, value
                )));
            }
        }

        Ok(())
    }

    /// Normalize embedding vector in place
    pub fn normalize_embedding(embedding: &mut [f32]) {
        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm != 0.0 {
            for value in embedding.iter_mut() {
                *value /= norm;
            }
        }
    }

    /// Calculate cosine similarity between two embeddings
    ///
    /// Returns 0.0 on length mismatch or when either vector has zero norm.
    pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
        if a.len() != b.len() {
            return 0.0;
        }

        let dot_product: f64 = a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| (*x as f64) * (*y as f64))
            .sum();

        let norm_a: f64 = a.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
        let norm_b: f64 = b.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            0.0
        } else {
            dot_product / (norm_a * norm_b)
        }
    }
}
