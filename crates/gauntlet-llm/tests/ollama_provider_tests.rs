//! HTTP contract tests for the Ollama embedding provider
//!
//! Uses wiremock to stand in for an Ollama server, covering the happy path,
//! API error statuses, and malformed response bodies.

use gauntlet_llm::embeddings::{EmbeddingConfig, EmbeddingError, EmbeddingProvider, OllamaProvider};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> OllamaProvider {
    let config = EmbeddingConfig::ollama(
        Some(server.uri()),
        Some("nomic-embed-text".to_string()),
    );
    OllamaProvider::new(config).unwrap()
}

#[tokio::test]
async fn test_embed_batch_happy_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/embed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "nomic-embed-text",
            "embeddings": [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            "prompt_eval_count": 7,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let texts = vec!["actual output".to_string(), "expected output".to_string()];

    let responses = provider.embed_batch(&texts).await.unwrap();

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].embedding, vec![1.0, 0.0, 0.0]);
    assert_eq!(responses[1].embedding, vec![0.0, 1.0, 0.0]);
    assert_eq!(responses[0].model, "nomic-embed-text");
}

#[tokio::test]
async fn test_single_embed_uses_batch_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/embed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "nomic-embed-text",
            "embeddings": [[0.5, 0.5]],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let response = provider.embed("hello").await.unwrap();

    assert_eq!(response.embedding, vec![0.5, 0.5]);
}

#[tokio::test]
async fn test_api_error_status_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/embed"))
        .respond_with(ResponseTemplate::new(404).set_body_string("model not found"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .embed_batch(&["text".to_string()])
        .await
        .unwrap_err();

    match err {
        EmbeddingError::ApiError { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("model not found"));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_embedding_count_mismatch_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/embed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "nomic-embed-text",
            "embeddings": [[1.0, 0.0]],
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .embed_batch(&["one".to_string(), "two".to_string()])
        .await
        .unwrap_err();

    assert!(matches!(err, EmbeddingError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/embed"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.embed("text").await.unwrap_err();

    assert!(matches!(err, EmbeddingError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_empty_batch_skips_the_network() {
    // No mock mounted: a request would 404 and fail the test
    let server = MockServer::start().await;

    let provider = provider_for(&server);
    let responses = provider.embed_batch(&[]).await.unwrap();

    assert!(responses.is_empty());
}
