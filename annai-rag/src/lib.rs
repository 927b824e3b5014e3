mod engine;
mod error;
mod prompt;

pub use engine::{RagEngine, RagEngineBuilder};
pub use error::PipelineError;
