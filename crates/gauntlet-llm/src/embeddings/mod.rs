//! Embedding provider abstraction for similarity-based metrics
//!
//! This module provides a unified interface for generating text embeddings.
//! The substantive work (tokenization, inference) happens in the backing
//! service; this layer covers configuration, the provider trait, and the
//! vector math the metrics build on.

/// Configuration structures for embedding providers.
pub mod config;

/// Error types for embedding operations.
pub mod error;

/// Mock provider for testing
pub mod mock;

/// Ollama provider implementation.
pub mod ollama;

/// Provider trait and common functionality.
pub mod provider;

pub use config::{EmbeddingConfig, ProviderType};
pub use error::{EmbeddingError, EmbeddingResult};
pub use mock::MockEmbeddingProvider;
pub use ollama::OllamaProvider;
pub use provider::{utils, EmbeddingProvider, EmbeddingResponse};

use std::sync::Arc;

/// Create an embedding provider from configuration
pub fn create_provider(config: EmbeddingConfig) -> EmbeddingResult<Arc<dyn EmbeddingProvider>> {
    // Validate configuration before creating provider
    config.validate()?;

    match config.provider_type {
        ProviderType::Ollama => {
            let provider = ollama::OllamaProvider::new(config)?;
            Ok(Arc::new(provider))
        }
        ProviderType::Mock => {
            let dimensions = config.expected_dimensions();
            let provider = mock::MockEmbeddingProvider::with_dimensions(dimensions);
            Ok(Arc::new(provider))
        }
    }
}

/// Create a mock embedding provider for testing
#[cfg(any(test, feature = "test-utils"))]
pub fn create_mock_provider(dimensions: usize) -> Arc<dyn EmbeddingProvider> {
    Arc::new(mock::MockEmbeddingProvider::with_dimensions(dimensions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_builds_mock_provider() {
        let provider = create_provider(EmbeddingConfig::mock(Some(16))).unwrap();

        assert_eq!(provider.dimensions(), 16);
        assert_eq!(provider.model(), "mock-embed");
    }

    #[test]
    fn test_factory_builds_ollama_provider() {
        let config = EmbeddingConfig::ollama(None, Some("nomic-embed-text".to_string()));
        let provider = create_provider(config).unwrap();

        assert_eq!(provider.model(), "nomic-embed-text");
    }

    #[test]
    fn test_factory_rejects_invalid_config() {
        let config = EmbeddingConfig::ollama(Some("ftp://nope".to_string()), None);
        assert!(create_provider(config).is_err());
    }
}
