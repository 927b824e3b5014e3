use annai_core::LoaderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriveError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("drive api error {status}: {message} (retry_after={retry_after_seconds:?})")]
    Api {
        status: u16,
        message: String,
        retry_after_seconds: Option<u64>,
    },
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<DriveError> for LoaderError {
    fn from(value: DriveError) -> Self {
        match value {
            DriveError::Transport(message) => LoaderError::Transport(message),
            DriveError::Api {
                status, message, ..
            } => LoaderError::Api { status, message },
            DriveError::Malformed(message) => LoaderError::Malformed(message),
            other => LoaderError::Other(Box::new(other)),
        }
    }
}
