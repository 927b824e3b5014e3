use annai_core::Embedding;
use annai_retrieval::HashEmbedder;

#[tokio::test]
async fn hash_embedder_is_deterministic() {
    let embedder = HashEmbedder::new(16);
    let a = embedder.embed("same text").await.unwrap();
    let b = embedder.embed("same text").await.unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 16);
}

#[tokio::test]
async fn hash_embedder_batch_preserves_order() {
    let embedder = HashEmbedder::new(4);
    let texts = vec!["one".to_string(), "two".to_string()];
    let batch = embedder.embed_batch(&texts).await.unwrap();

    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0], embedder.embed("one").await.unwrap());
    assert_eq!(batch[1], embedder.embed("two").await.unwrap());
}
