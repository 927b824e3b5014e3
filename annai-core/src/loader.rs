use async_trait::async_trait;

use crate::{Document, LoaderError};

/// Source of raw documents for ingestion. Implementations own their folder
/// identifier and credentials; `load` returns the full corpus every time.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    async fn load(&self) -> Result<Vec<Document>, LoaderError>;
}
