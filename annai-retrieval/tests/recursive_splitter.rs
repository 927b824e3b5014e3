use std::collections::HashMap;

use annai_core::Document;
use annai_retrieval::{RecursiveCharacterTextSplitter, SplitterConfigError};
use serde_json::json;

#[test]
fn splitter_merges_greedily_and_reconstructs_text() {
    let splitter = RecursiveCharacterTextSplitter::builder()
        .chunk_size(8)
        .chunk_overlap(0)
        .build()
        .unwrap();

    let text = "one two three four";
    let chunks = splitter.split_text(text);

    assert_eq!(chunks, vec!["one two ", "three ", "four"]);
    assert_eq!(chunks.concat(), text);
}

#[test]
fn splitter_prefers_earlier_separators() {
    let splitter = RecursiveCharacterTextSplitter::builder()
        .chunk_size(12)
        .build()
        .unwrap();

    let chunks = splitter.split_text("alpha,beta gamma,delta");

    // space outranks comma in the default separator order
    assert_eq!(chunks, vec!["alpha,beta ", "gamma,delta"]);
}

#[test]
fn splitter_recurses_to_next_separator_for_oversized_pieces() {
    let splitter = RecursiveCharacterTextSplitter::builder()
        .chunk_size(6)
        .build()
        .unwrap();

    let text = "aaaa,bbbb cccc";
    let chunks = splitter.split_text(text);

    assert_eq!(chunks, vec!["aaaa,", "bbbb ", "cccc"]);
    assert_eq!(chunks.concat(), text);
}

#[test]
fn splitter_preserves_utf8_boundaries() {
    let splitter = RecursiveCharacterTextSplitter::builder()
        .chunk_size(3)
        .chunk_overlap(0)
        .build()
        .unwrap();

    let text = "a🙂b🙂c🙂";
    let chunks = splitter.split_text(text);

    assert_eq!(chunks.concat(), text);
    assert!(chunks.iter().all(|chunk| chunk.chars().count() <= 3));
}

#[test]
fn splitter_applies_overlap_windows() {
    let splitter = RecursiveCharacterTextSplitter::builder()
        .chunk_size(4)
        .chunk_overlap(1)
        .build()
        .unwrap();

    let chunks = splitter.split_text("abcdefghij");

    assert_eq!(chunks, vec!["abcd", "defg", "ghij"]);
}

#[test]
fn splitter_rejects_zero_chunk_size() {
    let error = RecursiveCharacterTextSplitter::builder()
        .chunk_size(0)
        .build()
        .unwrap_err();

    assert!(matches!(
        error,
        SplitterConfigError::ChunkSizeMustBeGreaterThanZero
    ));
}

#[test]
fn splitter_clamps_overlap_to_allow_progress() {
    let splitter = RecursiveCharacterTextSplitter::builder()
        .chunk_size(3)
        .chunk_overlap(9)
        .build()
        .unwrap();

    let chunks = splitter.split_text("abcd");

    assert_eq!(chunks, vec!["abc", "bcd"]);
}

#[test]
fn splitter_returns_short_text_as_single_chunk() {
    let splitter = RecursiveCharacterTextSplitter::builder()
        .chunk_size(100)
        .build()
        .unwrap();

    assert_eq!(splitter.split_text("short note"), vec!["short note"]);
}

#[test]
fn splitter_returns_nothing_for_empty_text() {
    let splitter = RecursiveCharacterTextSplitter::builder().build().unwrap();
    assert!(splitter.split_text("").is_empty());
}

#[test]
fn splitter_never_exceeds_chunk_size() {
    let splitter = RecursiveCharacterTextSplitter::builder()
        .chunk_size(10)
        .build()
        .unwrap();

    let text = "a long, rambling sentence with words,and commas,\nand lines\nto cut up";
    for chunk in splitter.split_text(text) {
        assert!(chunk.chars().count() <= 10, "oversized chunk {chunk:?}");
        assert!(!chunk.is_empty());
    }
}

#[test]
fn splitter_honors_sentence_separators() {
    let splitter = RecursiveCharacterTextSplitter::builder()
        .chunk_size(20)
        .separators(vec![". ".to_string()])
        .build()
        .unwrap();

    let chunks = splitter.split_text("The sky is blue. Grass is green.");

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].trim_end(), "The sky is blue.");
    assert_eq!(chunks[1], "Grass is green.");
}

#[test]
fn split_documents_propagates_metadata_and_chunk_ids() {
    let splitter = RecursiveCharacterTextSplitter::builder()
        .chunk_size(5)
        .chunk_overlap(0)
        .build()
        .unwrap();

    let mut metadata = HashMap::new();
    metadata.insert("source".to_string(), json!("file-1"));
    metadata.insert("title".to_string(), json!("notes"));

    let input_doc = Document {
        id: "doc-1".to_string(),
        content: "one two three".to_string(),
        metadata,
        embedding: None,
    };

    let chunked = splitter.split_documents(&[input_doc]);

    assert!(chunked.len() > 1);
    for (index, doc) in chunked.iter().enumerate() {
        assert_eq!(doc.id, format!("doc-1:{index}"));
        assert_eq!(doc.metadata.get("source"), Some(&json!("file-1")));
        assert_eq!(doc.metadata.get("title"), Some(&json!("notes")));
        assert_eq!(doc.metadata.get("chunk_index"), Some(&json!(index)));
        assert!(doc.content.chars().count() <= 5);
    }
}

#[test]
fn split_documents_skips_empty_documents() {
    let splitter = RecursiveCharacterTextSplitter::builder().build().unwrap();
    let empty = Document::new("doc-1", "");

    assert!(splitter.split_documents(&[empty]).is_empty());
}
