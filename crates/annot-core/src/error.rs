//! Error types for annot-core operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnotError {
    /// An input document did not match the expected shape. Data-quality
    /// problems (bad timestamps, inverted intervals) never produce this;
    /// they degrade to sentinel defaults or are dropped.
    #[error("Invalid document shape: {0}")]
    Shape(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnnotError>;
