mod client;
mod events;
mod signature;

pub use client::{LineClient, LineError};
pub use events::{MessageContent, WebhookEvent, WebhookPayload};
pub use signature::verify_signature;
