use std::error::Error as StdError;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required configuration: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding invalid response: {0}")]
    InvalidResponse(String),
    #[error("embedding rate limited (retry_after={retry_after:?})")]
    RateLimited { retry_after: Option<Duration> },
    #[error("embedding timeout after {0:?}")]
    Timeout(Duration),
    #[error("embedding provider error: {0}")]
    Provider(String),
    #[error("embedding error: {0}")]
    Other(#[source] Box<dyn StdError + Send + Sync>),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("invalid document id: {0}")]
    InvalidId(String),
    #[error("missing embedding for document: {0}")]
    MissingEmbedding(String),
    #[error("store error: {0}")]
    Internal(#[source] Box<dyn StdError + Send + Sync>),
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation invalid response: {0}")]
    InvalidResponse(String),
    #[error("generation rate limited (retry_after={retry_after:?})")]
    RateLimited { retry_after: Option<Duration> },
    #[error("generation timeout after {0:?}")]
    Timeout(Duration),
    #[error("generation provider error: {0}")]
    Provider(String),
}

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("loader transport failure: {0}")]
    Transport(String),
    #[error("loader api error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("loader malformed response: {0}")]
    Malformed(String),
    #[error("loader error: {0}")]
    Other(#[source] Box<dyn StdError + Send + Sync>),
}
