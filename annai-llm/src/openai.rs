use std::time::Duration;

use annai_core::{ChatModel, GenerationError, Message};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const OPENAI_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Answers are grounded text, so decoding stays deterministic.
const TEMPERATURE: f32 = 0.0;

#[derive(Clone)]
pub struct OpenAiChatModel {
    base_url: String,
    api_key: String,
    model: String,
    timeout: Duration,
    http: Client,
}

impl OpenAiChatModel {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, GenerationError> {
        let http = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|err| GenerationError::Provider(err.to_string()))?;
        Ok(Self {
            base_url: OPENAI_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: model.into(),
            timeout: DEFAULT_TIMEOUT,
            http,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    async fn complete(&self, messages: &[Message]) -> Result<String, GenerationError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: TEMPERATURE,
        };

        let url = format!(
            "{}/v1/chat/completions",
            self.base_url.trim_end_matches('/')
        );
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    GenerationError::Timeout(self.timeout)
                } else {
                    GenerationError::Provider(err.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::TOO_MANY_REQUESTS {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|value| value.to_str().ok())
                    .and_then(|value| value.parse::<u64>().ok())
                    .map(Duration::from_secs);
                return Err(GenerationError::RateLimited { retry_after });
            }
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OpenAiErrorResponse>(&body)
                .map(|err| err.error.message)
                .unwrap_or_else(|_| format!("HTTP {status}: {body}"));
            return Err(GenerationError::Provider(message));
        }

        let response = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|err| GenerationError::InvalidResponse(err.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GenerationError::InvalidResponse("missing completion".to_string()))
    }
}
