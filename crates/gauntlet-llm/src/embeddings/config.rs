//! Configuration for embedding providers

use serde::{Deserialize, Serialize};

use super::error::{EmbeddingError, EmbeddingResult};

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Type of embedding provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Ollama local/remote embedding service
    Ollama,
    /// Deterministic in-process mock for tests
    Mock,
}

impl ProviderType {
    /// Parse provider type from string
    pub fn parse(s: &str) -> EmbeddingResult<Self> {
        match s.to_lowercase().as_str() {
            "ollama" => Ok(ProviderType::Ollama),
            "mock" => Ok(ProviderType::Mock),
            _ => Err(EmbeddingError::ConfigError(format!(
                "Unknown provider type: {}. Valid options: ollama, mock",
                s
            ))),
        }
    }

    /// Get default endpoint for this provider
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            ProviderType::Ollama => "http://localhost:11434",
            ProviderType::Mock => "",
        }
    }

    /// Get default model for this provider
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderType::Ollama => "nomic-embed-text",
            ProviderType::Mock => "mock-embed",
        }
    }

    /// Get expected embedding dimensions for this provider's default model
    pub fn default_dimensions(&self) -> usize {
        match self {
            ProviderType::Ollama => 768, // nomic-embed-text
            ProviderType::Mock => 768,
        }
    }
}

/// Configuration for creating an embedding provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Which provider backend to use
    pub provider_type: ProviderType,
    /// Service endpoint; `None` uses the provider default
    pub endpoint: Option<String>,
    /// Model identifier; `None` uses the provider default
    pub model: Option<String>,
    /// Expected embedding dimensions; `None` uses the model default
    pub dimensions: Option<usize>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl EmbeddingConfig {
    /// Create a configuration for the Ollama provider
    pub fn ollama(endpoint: Option<String>, model: Option<String>) -> Self {
        Self {
            provider_type: ProviderType::Ollama,
            endpoint,
            model,
            dimensions: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create a configuration for the mock provider
    pub fn mock(dimensions: Option<usize>) -> Self {
        Self {
            provider_type: ProviderType::Mock,
            endpoint: None,
            model: None,
            dimensions,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// The model this configuration resolves to
    pub fn model_name(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider_type.default_model())
    }

    /// The endpoint this configuration resolves to
    pub fn endpoint_url(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or_else(|| self.provider_type.default_endpoint())
    }

    /// Expected embedding dimensions for the configured model
    pub fn expected_dimensions(&self) -> usize {
        self.dimensions
            .unwrap_or_else(|| expected_dimensions_for_model(&self.provider_type, self.model_name()))
    }

    /// Validate the configuration before building a provider
    pub fn validate(&self) -> EmbeddingResult<()> {
        if self.timeout_secs == 0 {
            return Err(EmbeddingError::ConfigError(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.provider_type == ProviderType::Ollama {
            let endpoint = self.endpoint_url();
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(EmbeddingError::ConfigError(format!(
                    "Invalid endpoint '{}': expected an http(s) URL",
                    endpoint
                )));
            }
        }

        if let Some(dimensions) = self.dimensions {
            if dimensions == 0 {
                return Err(EmbeddingError::ConfigError(
                    "dimensions must be greater than zero".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Get expected embedding dimensions based on provider and model
pub fn expected_dimensions_for_model(provider: &ProviderType, model: &str) -> usize {
    match (provider, model) {
        (ProviderType::Ollama, "nomic-embed-text") => 768,
        (ProviderType::Ollama, "mxbai-embed-large") => 1024,
        (ProviderType::Ollama, "all-minilm") => 384,
        (ProviderType::Mock, _) => 768,
        // Default to provider defaults for unknown models
        (ProviderType::Ollama, _) => 768,
    }
}
