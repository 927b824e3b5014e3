use annai_embeddings::OpenAiEmbedding;
use annai_gdrive::GoogleDriveLoader;
use annai_llm::OpenAiChatModel;
use annai_rag::RagEngine;
use anyhow::Context;

use crate::config::AppConfig;
use crate::line::LineClient;

pub struct AppState {
    pub engine: RagEngine<GoogleDriveLoader>,
    pub line: LineClient,
    pub channel_secret: String,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let loader = GoogleDriveLoader::new(
            config.drive_access_token.clone(),
            config.drive_folder_id.clone(),
        )
        .context("drive loader")?;
        let embedder = OpenAiEmbedding::new(
            config.openai_api_key.clone(),
            config.embedding_model.clone(),
            config.embedding_dimension,
        );
        let chat = OpenAiChatModel::new(config.openai_api_key.clone(), config.chat_model.clone())
            .context("chat model")?;

        let engine = RagEngine::builder(loader)
            .embedder(embedder)
            .chat_model(chat)
            .chunk_size(config.chunk_size)
            .chunk_overlap(config.chunk_overlap)
            .top_k(config.top_k)
            .build()
            .context("rag engine")?;

        let line = LineClient::new(config.line_channel_access_token.clone())
            .context("line client")?;

        Ok(Self {
            engine,
            line,
            channel_secret: config.line_channel_secret.clone(),
        })
    }
}
