mod chat;
mod document;
mod embedding;
mod error;
mod loader;
mod value;
mod vector_store;

pub use chat::{ChatModel, Message, Role};
pub use document::Document;
pub use embedding::Embedding;
pub use error::{ConfigError, EmbeddingError, GenerationError, LoaderError, StoreError};
pub use loader::DocumentLoader;
pub use value::Value;
pub use vector_store::{SearchResult, VectorStore};
