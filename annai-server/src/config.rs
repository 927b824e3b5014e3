use std::env;
use std::fmt::Display;
use std::str::FromStr;

use annai_core::ConfigError;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub line_channel_access_token: String,
    pub line_channel_secret: String,
    pub openai_api_key: String,
    pub embedding_model: String,
    pub embedding_dimension: usize,
    pub chat_model: String,
    pub drive_folder_id: String,
    pub drive_access_token: String,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub top_k: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parsed("PORT", 8080)?,
            line_channel_access_token: required("LINE_CHANNEL_ACCESS_TOKEN")?,
            line_channel_secret: required("LINE_CHANNEL_SECRET")?,
            openai_api_key: required("OPENAI_API_KEY")?,
            embedding_model: defaulted("OPENAI_EMBEDDING_MODEL", "text-embedding-3-small"),
            embedding_dimension: parsed("OPENAI_EMBEDDING_DIMENSION", 1536)?,
            chat_model: defaulted("OPENAI_CHAT_MODEL", "gpt-3.5-turbo"),
            drive_folder_id: required("GOOGLE_DRIVE_FOLDER_ID")?,
            drive_access_token: required("GOOGLE_DRIVE_ACCESS_TOKEN")?,
            chunk_size: parsed("CHUNK_SIZE", 4000)?,
            chunk_overlap: parsed("CHUNK_OVERLAP", 0)?,
            top_k: parsed("TOP_K", 4)?,
        })
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

fn defaulted(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parsed<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => {
            value.trim().parse().map_err(|err: T::Err| ConfigError::Invalid {
                key,
                reason: err.to_string(),
            })
        }
        _ => Ok(default),
    }
}
