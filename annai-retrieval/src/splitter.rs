use annai_core::{Document, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitterConfigError {
    #[error("chunk_size must be greater than zero")]
    ChunkSizeMustBeGreaterThanZero,
}

/// Character-window splitter. Cuts every `chunk_size` chars with a sliding
/// window of step `chunk_size - overlap`.
pub struct TextSplitter;

impl TextSplitter {
    pub fn split(text: &str, chunk_size: usize, overlap: usize) -> Vec<String> {
        if chunk_size == 0 {
            return Vec::new();
        }

        let mut chunks = Vec::new();
        let mut start = 0usize;
        let chars: Vec<char> = text.chars().collect();
        let max_overlap = chunk_size.saturating_sub(1);
        let clamped_overlap = overlap.min(max_overlap);
        let step = (chunk_size - clamped_overlap).max(1);

        while start < chars.len() {
            let end = usize::min(start + chunk_size, chars.len());
            let chunk: String = chars[start..end].iter().collect();
            chunks.push(chunk);

            if end == chars.len() {
                break;
            }

            start = start.saturating_add(step);
        }

        chunks
    }
}

/// Splits text on a priority-ordered list of separators, keeping each
/// separator at the tail of the piece it terminates, then greedily merges
/// adjacent pieces up to `chunk_size` characters. A piece no separator can
/// break falls back to a hard character-window cut.
///
/// With `chunk_overlap` 0 the chunks concatenate back to the input text.
#[derive(Debug)]
pub struct RecursiveCharacterTextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<String>,
}

pub struct SplitterBuilder {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<String>,
}

impl RecursiveCharacterTextSplitter {
    pub fn builder() -> SplitterBuilder {
        SplitterBuilder {
            chunk_size: 4000,
            chunk_overlap: 0,
            separators: vec![" ".to_string(), ",".to_string(), "\n".to_string()],
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn split_text(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        self.split_recursive(text, &self.separators)
            .into_iter()
            .filter(|chunk| !chunk.is_empty())
            .collect()
    }

    pub fn split_documents(&self, docs: &[Document]) -> Vec<Document> {
        let mut out = Vec::new();
        for doc in docs {
            for (index, chunk) in self.split_text(&doc.content).into_iter().enumerate() {
                let mut metadata = doc.metadata.clone();
                metadata.insert("chunk_index".to_string(), Value::from(index));
                out.push(Document {
                    id: format!("{}:{index}", doc.id),
                    content: chunk,
                    metadata,
                    embedding: None,
                });
            }
        }
        out
    }

    fn split_recursive(&self, text: &str, separators: &[String]) -> Vec<String> {
        if text.chars().count() <= self.chunk_size {
            return vec![text.to_string()];
        }

        let Some((separator, rest)) = separators.split_first() else {
            return TextSplitter::split(text, self.chunk_size, self.chunk_overlap);
        };
        if !text.contains(separator.as_str()) {
            return self.split_recursive(text, rest);
        }

        let mut pieces = Vec::new();
        for piece in split_keep_separator(text, separator) {
            if piece.chars().count() <= self.chunk_size {
                pieces.push(piece);
            } else {
                pieces.extend(self.split_recursive(&piece, rest));
            }
        }
        self.merge(pieces)
    }

    fn merge(&self, pieces: Vec<String>) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_len = 0usize;

        for piece in pieces {
            let piece_len = piece.chars().count();
            if current_len > 0 && current_len + piece_len > self.chunk_size {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;

                if self.chunk_overlap > 0 {
                    let previous = chunks.last().map(String::as_str).unwrap_or_default();
                    let tail = tail_chars(previous, self.chunk_overlap);
                    let tail_len = tail.chars().count();
                    // an overlap seed never pushes the chunk past chunk_size
                    if tail_len + piece_len <= self.chunk_size {
                        current = tail;
                        current_len = tail_len;
                    }
                }
            }
            current.push_str(&piece);
            current_len += piece_len;
        }

        if current_len > 0 {
            chunks.push(current);
        }
        chunks
    }
}

impl SplitterBuilder {
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn chunk_overlap(mut self, chunk_overlap: usize) -> Self {
        self.chunk_overlap = chunk_overlap;
        self
    }

    pub fn separators(mut self, separators: Vec<String>) -> Self {
        self.separators = separators;
        self
    }

    pub fn build(self) -> Result<RecursiveCharacterTextSplitter, SplitterConfigError> {
        if self.chunk_size == 0 {
            return Err(SplitterConfigError::ChunkSizeMustBeGreaterThanZero);
        }
        Ok(RecursiveCharacterTextSplitter {
            chunk_size: self.chunk_size,
            chunk_overlap: self.chunk_overlap.min(self.chunk_size - 1),
            separators: self.separators,
        })
    }
}

fn split_keep_separator(text: &str, separator: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut start = 0usize;
    for (index, matched) in text.match_indices(separator) {
        let end = index + matched.len();
        pieces.push(text[start..end].to_string());
        start = end;
    }
    if start < text.len() {
        pieces.push(text[start..].to_string());
    }
    pieces
}

fn tail_chars(text: &str, count: usize) -> String {
    let total = text.chars().count();
    text.chars().skip(total.saturating_sub(count)).collect()
}
