//! Ollama embedding provider implementation
//!
//! Talks to Ollama's `/api/embed` endpoint, which accepts a batch of input
//! texts and returns one embedding per text in input order.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::config::EmbeddingConfig;
use super::error::{EmbeddingError, EmbeddingResult};
use super::provider::{estimate_tokens, EmbeddingProvider, EmbeddingResponse};

/// Ollama embedding provider
pub struct OllamaProvider {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    dimensions: usize,
    timeout: Duration,
}

#[derive(Serialize)]
struct OllamaEmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct OllamaEmbedResponse {
    embeddings: Vec<Vec<f32>>,
    #[serde(default)]
    prompt_eval_count: Option<usize>,
}

impl OllamaProvider {
    /// Create a new Ollama provider from configuration
    pub fn new(config: EmbeddingConfig) -> EmbeddingResult<Self> {
        config.validate()?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint_url().trim_end_matches('/').to_string(),
            model: config.model_name().to_string(),
            dimensions: config.expected_dimensions(),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    async fn request_embeddings(&self, texts: &[String]) -> EmbeddingResult<Vec<Vec<f32>>> {
        let url = format!("{}/api/embed", self.endpoint);
        let request = OllamaEmbedRequest {
            model: &self.model,
            input: texts,
        };

        tracing::debug!(
            model = %self.model,
            texts = texts.len(),
            url = %url,
            "requesting embeddings from Ollama"
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body: OllamaEmbedResponse = response
            .json()
            .await
            .map_err(|e| EmbeddingError::InvalidResponse(format!("Malformed embed response: {}", e)))?;

        if body.embeddings.len() != texts.len() {
            return Err(EmbeddingError::InvalidResponse(format!(
                "Expected {} embeddings, got {}",
                texts.len(),
                body.embeddings.len()
            )));
        }

        tracing::debug!(
            embeddings = body.embeddings.len(),
            prompt_eval_count = ?body.prompt_eval_count,
            "received embeddings from Ollama"
        );

        Ok(body.embeddings)
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaProvider {
    async fn embed(&self, text: &str) -> EmbeddingResult<EmbeddingResponse> {
        let mut responses = self.embed_batch(&[text.to_string()]).await?;
        responses
            .pop()
            .ok_or_else(|| EmbeddingError::InvalidResponse("Empty embed response".to_string()))
    }

    async fn embed_batch(&self, texts: &[String]) -> EmbeddingResult<Vec<EmbeddingResponse>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let embeddings = self.request_embeddings(texts).await?;

        Ok(embeddings
            .into_iter()
            .zip(texts.iter())
            .map(|(embedding, text)| {
                EmbeddingResponse::new(embedding, estimate_tokens(text), self.model.clone())
            })
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation_strips_trailing_slash() {
        let config = EmbeddingConfig::ollama(Some("http://localhost:11434/".to_string()), None);
        let provider = OllamaProvider::new(config).unwrap();

        assert_eq!(provider.endpoint, "http://localhost:11434");
        assert_eq!(provider.model(), "nomic-embed-text");
        assert_eq!(provider.dimensions(), 768);
    }

    #[test]
    fn test_provider_creation_rejects_invalid_endpoint() {
        let config = EmbeddingConfig::ollama(Some("not-a-url".to_string()), None);
        assert!(OllamaProvider::new(config).is_err());
    }
}
