use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::GenerationError;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Chat-completion provider. One request, one whole answer.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String, GenerationError>;
}
