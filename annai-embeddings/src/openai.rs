use annai_core::{Embedding, EmbeddingError};
use async_openai::config::OpenAIConfig;
use async_openai::error::OpenAIError;
use async_openai::types::{CreateEmbeddingRequestArgs, EmbeddingInput};
use async_openai::Client;
use async_trait::async_trait;

use crate::EmbeddingProviderError;

#[derive(Clone)]
pub struct OpenAiEmbedding {
    client: Client<OpenAIConfig>,
    model: String,
    dimension: usize,
}

impl OpenAiEmbedding {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, dimension: usize) -> Self {
        let config = OpenAIConfig::default().with_api_key(api_key);
        Self::with_client(Client::with_config(config), model, dimension)
    }

    pub fn with_client(
        client: Client<OpenAIConfig>,
        model: impl Into<String>,
        dimension: usize,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            dimension,
        }
    }

    async fn request_embeddings(
        &self,
        input: EmbeddingInput,
        expected_count: usize,
    ) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let request = CreateEmbeddingRequestArgs::default()
            .model(&self.model)
            .input(input)
            .build()
            .map_err(|err| EmbeddingError::Other(Box::new(err)))?;

        let response = self
            .client
            .embeddings()
            .create(request)
            .await
            .map_err(map_provider_error)?;

        if response.data.len() != expected_count {
            return Err(EmbeddingProviderError::InvalidResponse(format!(
                "expected {} embeddings, got {}",
                expected_count,
                response.data.len()
            ))
            .into());
        }

        let mut out = Vec::with_capacity(response.data.len());
        for item in response.data {
            if item.embedding.len() != self.dimension {
                return Err(EmbeddingProviderError::InvalidResponse(format!(
                    "expected embedding dimension {}, got {}",
                    self.dimension,
                    item.embedding.len()
                ))
                .into());
            }
            out.push(item.embedding);
        }
        Ok(out)
    }
}

fn map_provider_error(err: OpenAIError) -> EmbeddingError {
    match err {
        OpenAIError::ApiError(api) if api.code.as_deref() == Some("rate_limit_exceeded") => {
            EmbeddingError::RateLimited { retry_after: None }
        }
        OpenAIError::JSONDeserialize(err) => {
            EmbeddingProviderError::InvalidResponse(err.to_string()).into()
        }
        other => EmbeddingProviderError::Request(other.to_string()).into(),
    }
}

#[async_trait]
impl Embedding for OpenAiEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut vectors = self
            .request_embeddings(EmbeddingInput::String(text.to_string()), 1)
            .await?;
        Ok(vectors.remove(0))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request_embeddings(EmbeddingInput::StringArray(texts.to_vec()), texts.len())
            .await
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
