//! # Gauntlet LLM
//!
//! Embedding provider layer for the Gauntlet evaluation toolkit.
//!
//! ## Features
//!
//! - **Embeddings**: Text embeddings for similarity-based metrics
//! - **Multi-provider**: Ollama HTTP backend plus a deterministic mock
//! - **Type-safe**: Trait-based provider seam for dependency injection
//! - **Async**: runtime-agnostic async API; the examples drive it with tokio
//!
//! ## Example
//!
//! ```rust,no_run
//! use gauntlet_llm::embeddings::{EmbeddingConfig, create_provider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EmbeddingConfig::ollama(None, Some("nomic-embed-text".to_string()));
//!     let provider = create_provider(config)?;
//!
//!     let response = provider.embed("Hello, world!").await?;
//!     println!("Generated embedding with {} dimensions", response.dimensions());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod embeddings;

// Re-export commonly used types at crate root
pub use embeddings::{
    EmbeddingConfig, EmbeddingError, EmbeddingProvider, EmbeddingResponse, EmbeddingResult,
    MockEmbeddingProvider, OllamaProvider, ProviderType,
};
