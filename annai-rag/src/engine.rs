use std::sync::Arc;

use annai_core::{ChatModel, DocumentLoader, Embedding};
use annai_retrieval::{
    InMemoryVectorStore, Indexer, RecursiveCharacterTextSplitter, Retriever,
};
use tokio::sync::RwLock;

use crate::prompt::grounding_messages;
use crate::PipelineError;

const DEFAULT_FALLBACK_REPLY: &str = "Sorry, something went wrong. Please try again later.";

/// The whole pipeline behind the bot: `ingest` rebuilds the vector index
/// from the document source, `ask` answers one question against the current
/// index snapshot.
///
/// The index slot holds a store handle that is cheap to clone: `ask` clones
/// it under a read lock and searches without holding the lock, while
/// `ingest` builds the replacement store completely before swapping it in.
/// In-flight queries keep the snapshot they started with, and a failed
/// ingestion never touches the previous one.
pub struct RagEngine<L> {
    loader: L,
    embedder: Arc<dyn Embedding>,
    chat: Arc<dyn ChatModel>,
    splitter: RecursiveCharacterTextSplitter,
    index: RwLock<InMemoryVectorStore>,
    top_k: usize,
    fallback_reply: String,
}

impl<L> std::fmt::Debug for RagEngine<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RagEngine")
            .field("top_k", &self.top_k)
            .field("fallback_reply", &self.fallback_reply)
            .finish_non_exhaustive()
    }
}

impl<L> RagEngine<L>
where
    L: DocumentLoader,
{
    pub fn builder(loader: L) -> RagEngineBuilder<L> {
        RagEngineBuilder {
            loader,
            embedder: None,
            chat: None,
            chunk_size: 4000,
            chunk_overlap: 0,
            separators: None,
            top_k: 4,
            fallback_reply: DEFAULT_FALLBACK_REPLY.to_string(),
        }
    }

    /// Rebuilds the index from the document source. All-or-nothing: the
    /// swap happens only after every chunk is embedded and stored.
    pub async fn ingest(&self) -> Result<(), PipelineError> {
        let docs = self.loader.load().await?;
        let chunks = self.splitter.split_documents(&docs);
        tracing::info!(documents = docs.len(), chunks = chunks.len(), "ingesting corpus");

        let store = InMemoryVectorStore::new();
        let indexer = Indexer::new(self.embedder.clone(), store.clone());
        indexer.add_documents(chunks).await?;

        let mut slot = self.index.write().await;
        *slot = store;
        Ok(())
    }

    /// Answers one question from the current snapshot. Failures propagate;
    /// `handle_question` is the fallible-to-fallback boundary.
    pub async fn ask(&self, question: &str) -> Result<String, PipelineError> {
        let store = self.index.read().await.clone();
        let retriever = Retriever::new(self.embedder.clone(), store);
        let context = retriever.retrieve(question, self.top_k).await?;
        if context.is_empty() {
            tracing::debug!("no context retrieved, answering from the prompt alone");
        }

        let messages = grounding_messages(question, &context);
        let answer = self.chat.complete(&messages).await?;
        Ok(answer)
    }

    /// What the webhook adapter calls: never fails, never surfaces raw
    /// internals to chat.
    pub async fn handle_question(&self, question: &str) -> String {
        match self.ask(question).await {
            Ok(answer) => answer,
            Err(error) => {
                tracing::error!(%error, "failed to answer question");
                self.fallback_reply.clone()
            }
        }
    }

    pub async fn chunk_count(&self) -> usize {
        let store = self.index.read().await.clone();
        store.len().await
    }
}

pub struct RagEngineBuilder<L> {
    loader: L,
    embedder: Option<Arc<dyn Embedding>>,
    chat: Option<Arc<dyn ChatModel>>,
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Option<Vec<String>>,
    top_k: usize,
    fallback_reply: String,
}

impl<L> RagEngineBuilder<L>
where
    L: DocumentLoader,
{
    pub fn embedder(mut self, embedder: impl Embedding + 'static) -> Self {
        self.embedder = Some(Arc::new(embedder));
        self
    }

    pub fn chat_model(mut self, chat: impl ChatModel + 'static) -> Self {
        self.chat = Some(Arc::new(chat));
        self
    }

    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn chunk_overlap(mut self, chunk_overlap: usize) -> Self {
        self.chunk_overlap = chunk_overlap;
        self
    }

    pub fn separators(mut self, separators: Vec<String>) -> Self {
        self.separators = Some(separators);
        self
    }

    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn fallback_reply(mut self, fallback_reply: impl Into<String>) -> Self {
        self.fallback_reply = fallback_reply.into();
        self
    }

    pub fn build(self) -> Result<RagEngine<L>, PipelineError> {
        let embedder = self
            .embedder
            .ok_or_else(|| PipelineError::Config("embedder is required".to_string()))?;
        let chat = self
            .chat
            .ok_or_else(|| PipelineError::Config("chat model is required".to_string()))?;
        if self.top_k == 0 {
            return Err(PipelineError::Config(
                "top_k must be greater than zero".to_string(),
            ));
        }

        let mut splitter = RecursiveCharacterTextSplitter::builder()
            .chunk_size(self.chunk_size)
            .chunk_overlap(self.chunk_overlap);
        if let Some(separators) = self.separators {
            splitter = splitter.separators(separators);
        }
        let splitter = splitter
            .build()
            .map_err(|err| PipelineError::Config(err.to_string()))?;

        Ok(RagEngine {
            loader: self.loader,
            embedder,
            chat,
            splitter,
            index: RwLock::new(InMemoryVectorStore::new()),
            top_k: self.top_k,
            fallback_reply: self.fallback_reply,
        })
    }
}
