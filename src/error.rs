// src/error.rs
use crate::parser::ParseError;
use thiserror::Error;
use trellis_layout::LayoutError;
use trellis_traits::ResourceError;

/// Everything that can stop markup from becoming a laid out tree.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Resource failed: {0}")]
    Resource(#[from] ResourceError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Background load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
