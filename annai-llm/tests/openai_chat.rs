use annai_core::{ChatModel, GenerationError, Message};
use annai_llm::OpenAiChatModel;
use httpmock::prelude::*;
use serde_json::json;

fn model_against(server: &MockServer) -> OpenAiChatModel {
    OpenAiChatModel::new("test-key", "gpt-3.5-turbo")
        .expect("client")
        .with_base_url(server.url(""))
}

#[tokio::test]
async fn chat_completion_maps_response() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("authorization", "Bearer test-key")
            .json_body_partial(r#"{"temperature": 0.0}"#);
        then.status(200).json_body(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 0,
            "model": "gpt-3.5-turbo",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "The sky is blue."}, "finish_reason": "stop"}
            ]
        }));
    });

    let model = model_against(&server);
    let answer = model
        .complete(&[Message::user("What color is the sky?")])
        .await
        .expect("complete");

    assert_eq!(answer, "The sky is blue.");
    mock.assert();
}

#[tokio::test]
async fn chat_completion_maps_rate_limit() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(429).header("Retry-After", "7");
    });

    let model = model_against(&server);
    let err = model
        .complete(&[Message::user("hi")])
        .await
        .expect_err("rate limited");

    match err {
        GenerationError::RateLimited { retry_after } => {
            assert_eq!(retry_after, Some(std::time::Duration::from_secs(7)));
        }
        other => panic!("expected rate limit, got {other}"),
    }
}

#[tokio::test]
async fn chat_completion_decodes_error_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(500).json_body(json!({
            "error": {"message": "backend exploded", "type": "server_error"}
        }));
    });

    let model = model_against(&server);
    let err = model
        .complete(&[Message::user("hi")])
        .await
        .expect_err("provider error");

    assert!(format!("{err}").contains("backend exploded"));
}

#[tokio::test]
async fn chat_completion_rejects_empty_choices() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200).json_body(json!({
            "id": "chatcmpl-2",
            "object": "chat.completion",
            "created": 0,
            "model": "gpt-3.5-turbo",
            "choices": []
        }));
    });

    let model = model_against(&server);
    let err = model
        .complete(&[Message::user("hi")])
        .await
        .expect_err("invalid response");

    assert!(matches!(err, GenerationError::InvalidResponse(_)));
}
