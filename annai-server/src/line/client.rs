use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

const LINE_BASE_URL: &str = "https://api.line.me";
const REPLY_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum LineError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("line api error {status}: {message}")]
    Api { status: u16, message: String },
}

/// Minimal Messaging API client: the bot only ever replies to events.
#[derive(Clone, Debug)]
pub struct LineClient {
    http: Client,
    base_url: String,
    channel_access_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRequest<'a> {
    reply_token: &'a str,
    messages: Vec<TextMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct TextMessage<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

impl LineClient {
    pub fn new(channel_access_token: String) -> Result<Self, LineError> {
        if channel_access_token.trim().is_empty() {
            return Err(LineError::Config(
                "channel access token cannot be empty".to_string(),
            ));
        }
        let http = Client::builder()
            .timeout(REPLY_TIMEOUT)
            .build()
            .map_err(|err| LineError::Transport(err.to_string()))?;
        Ok(Self {
            http,
            base_url: LINE_BASE_URL.to_string(),
            channel_access_token,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub async fn reply(&self, reply_token: &str, text: &str) -> Result<(), LineError> {
        let request = ReplyRequest {
            reply_token,
            messages: vec![TextMessage { kind: "text", text }],
        };

        let url = format!(
            "{}/v2/bot/message/reply",
            self.base_url.trim_end_matches('/')
        );
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.channel_access_token)
            .json(&request)
            .send()
            .await
            .map_err(|err| LineError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body: Value = response
            .json::<Value>()
            .await
            .unwrap_or_else(|_| Value::String(String::new()));
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown line error")
            .to_string();
        Err(LineError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
