use annai_core::Embedding;
use annai_embeddings::OpenAiEmbedding;
use async_openai::config::OpenAIConfig;
use async_openai::Client;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn embedder_against(server: &MockServer, dimension: usize) -> OpenAiEmbedding {
    let config = OpenAIConfig::new()
        .with_api_key("test-key")
        .with_api_base(format!("{}/v1", server.uri()));
    OpenAiEmbedding::with_client(Client::with_config(config), "text-embedding-3-small", dimension)
}

#[tokio::test]
async fn openai_embedding_maps_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/embeddings"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"embedding": [0.1, 0.2, 0.3], "index": 0, "object": "embedding"}
            ],
            "model": "text-embedding-3-small",
            "object": "list",
            "usage": {"prompt_tokens": 1, "total_tokens": 1}
        })))
        .mount(&server)
        .await;

    let embedder = embedder_against(&server, 3);
    let out = embedder.embed("hello").await.unwrap();
    assert_eq!(out, vec![0.1, 0.2, 0.3]);
}

#[tokio::test]
async fn openai_embedding_batch_preserves_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/embeddings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"embedding": [1.0, 0.0], "index": 0, "object": "embedding"},
                {"embedding": [0.0, 1.0], "index": 1, "object": "embedding"}
            ],
            "model": "text-embedding-3-small",
            "object": "list",
            "usage": {"prompt_tokens": 2, "total_tokens": 2}
        })))
        .mount(&server)
        .await;

    let embedder = embedder_against(&server, 2);
    let out = embedder
        .embed_batch(&["one".to_string(), "two".to_string()])
        .await
        .unwrap();
    assert_eq!(out, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
}

#[tokio::test]
async fn openai_embedding_rejects_wrong_dimension() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/embeddings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"embedding": [0.1, 0.2], "index": 0, "object": "embedding"}
            ],
            "model": "text-embedding-3-small",
            "object": "list",
            "usage": {"prompt_tokens": 1, "total_tokens": 1}
        })))
        .mount(&server)
        .await;

    let embedder = embedder_against(&server, 3);
    let err = embedder.embed("hello").await.unwrap_err();
    assert!(format!("{err}").contains("dimension"));
}

#[tokio::test]
async fn openai_embedding_surfaces_provider_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/embeddings"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"message": "boom", "type": "server_error", "param": null, "code": null}
        })))
        .mount(&server)
        .await;

    let embedder = embedder_against(&server, 3);
    assert!(embedder.embed("hello").await.is_err());
}

#[tokio::test]
async fn openai_embedding_empty_batch_makes_no_request() {
    let server = MockServer::start().await;
    // no mock mounted: any request would 404 and fail the call
    let embedder = embedder_against(&server, 3);
    let out = embedder.embed_batch(&[]).await.unwrap();
    assert!(out.is_empty());
}
