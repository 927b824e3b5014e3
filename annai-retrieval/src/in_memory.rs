use std::collections::HashMap;
use std::sync::Arc;

use annai_core::{Document, SearchResult, StoreError, VectorStore};
use tokio::sync::RwLock;

#[derive(Default)]
struct StoreInner {
    docs: Vec<Document>,
    embeddings: Vec<Vec<f32>>,
    id_map: HashMap<String, usize>,
    dimension: Option<usize>,
}

/// Cosine-similarity store over embedded chunks. The dimension is fixed by
/// the first insertion; mismatched vectors are rejected.
#[derive(Clone, Default)]
pub struct InMemoryVectorStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl InMemoryVectorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.docs.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn add(&self, docs: Vec<Document>) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        for mut doc in docs {
            if doc.id.trim().is_empty() {
                return Err(StoreError::InvalidId(doc.id));
            }

            let embedding = doc
                .embedding
                .take()
                .ok_or_else(|| StoreError::MissingEmbedding(doc.id.clone()))?;
            let dimension = embedding.len();
            match inner.dimension {
                Some(expected) if expected != dimension => {
                    return Err(StoreError::DimensionMismatch {
                        expected,
                        got: dimension,
                    });
                }
                None => inner.dimension = Some(dimension),
                _ => {}
            }

            if let Some(&index) = inner.id_map.get(&doc.id) {
                inner.docs[index] = doc;
                inner.embeddings[index] = embedding;
            } else {
                let index = inner.docs.len();
                inner.id_map.insert(doc.id.clone(), index);
                inner.docs.push(doc);
                inner.embeddings.push(embedding);
            }
        }
        Ok(())
    }

    async fn search(
        &self,
        query_embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<SearchResult>, StoreError> {
        let inner = self.inner.read().await;
        let expected = inner.dimension.unwrap_or(query_embedding.len());
        if expected != query_embedding.len() {
            return Err(StoreError::DimensionMismatch {
                expected,
                got: query_embedding.len(),
            });
        }

        let mut scored = Vec::new();
        for (index, embedding) in inner.embeddings.iter().enumerate() {
            let mut score = cosine_similarity(query_embedding, embedding);
            if score.is_nan() {
                score = f32::NEG_INFINITY;
            }
            let mut document = inner.docs[index].clone();
            document.embedding = None;
            scored.push(SearchResult { document, score });
        }

        // stable sort keeps insertion order for tied scores
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());
        scored.truncate(top_k);
        Ok(scored)
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}
