use serde::Deserialize;

/// The webhook body LINE posts: a batch of events for one bot destination.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

/// Closed dispatch set: the bot reacts to text messages and deliberately
/// ignores everything else LINE may send (follows, joins, stickers, ...).
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WebhookEvent {
    #[serde(rename_all = "camelCase")]
    Message {
        reply_token: String,
        message: MessageContent,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MessageContent {
    Text { text: String },
    #[serde(other)]
    Other,
}
