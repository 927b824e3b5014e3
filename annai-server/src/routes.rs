use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::line::{verify_signature, MessageContent, WebhookEvent, WebhookPayload};
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/load", post(load))
        .route("/webhook", post(webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn load(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.engine.ingest().await {
        Ok(()) => {
            let chunks = state.engine.chunk_count().await;
            tracing::info!(chunks, "corpus ingested");
            StatusCode::OK
        }
        Err(error) => {
            tracing::error!(%error, "ingestion failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

async fn webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> StatusCode {
    let signature = headers
        .get("x-line-signature")
        .and_then(|value| value.to_str().ok());
    let Some(signature) = signature else {
        tracing::warn!("webhook request without signature header");
        return StatusCode::BAD_REQUEST;
    };
    if !verify_signature(&state.channel_secret, body.as_bytes(), signature) {
        tracing::warn!("webhook signature verification failed");
        return StatusCode::BAD_REQUEST;
    }

    let payload: WebhookPayload = match serde_json::from_str(&body) {
        Ok(payload) => payload,
        Err(error) => {
            tracing::warn!(%error, "undecodable webhook payload");
            return StatusCode::BAD_REQUEST;
        }
    };

    for event in payload.events {
        match event {
            WebhookEvent::Message {
                reply_token,
                message: MessageContent::Text { text },
            } => {
                let answer = state.engine.handle_question(&text).await;
                if let Err(error) = state.line.reply(&reply_token, &answer).await {
                    tracing::error!(%error, "failed to deliver reply");
                }
            }
            _ => tracing::debug!("ignoring non-text webhook event"),
        }
    }

    StatusCode::OK
}
