use annai_core::{Embedding, SearchResult, VectorStore};

use crate::RetrievalError;

/// Embeds a query and returns the nearest stored chunks.
pub struct Retriever<E, S> {
    embedder: E,
    store: S,
}

impl<E, S> Retriever<E, S>
where
    E: Embedding,
    S: VectorStore,
{
    pub fn new(embedder: E, store: S) -> Self {
        Self { embedder, store }
    }

    pub async fn retrieve(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, RetrievalError> {
        let embedding = self.embedder.embed(query).await?;
        let results = self.store.search(&embedding, top_k).await?;
        Ok(results)
    }
}
