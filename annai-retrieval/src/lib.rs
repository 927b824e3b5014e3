mod error;
mod hash_embedder;
mod in_memory;
mod indexer;
mod retriever;
mod splitter;

pub use error::RetrievalError;
pub use hash_embedder::HashEmbedder;
pub use in_memory::InMemoryVectorStore;
pub use indexer::Indexer;
pub use retriever::Retriever;
pub use splitter::{RecursiveCharacterTextSplitter, SplitterBuilder, SplitterConfigError, TextSplitter};
