use annai_core::{GenerationError, LoaderError};
use annai_retrieval::RetrievalError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid pipeline configuration: {0}")]
    Config(String),
    #[error("document loading failed: {0}")]
    Loader(#[from] LoaderError),
    #[error("retrieval failed: {0}")]
    Retrieval(#[from] RetrievalError),
    #[error("answer generation failed: {0}")]
    Generation(#[from] GenerationError),
}
