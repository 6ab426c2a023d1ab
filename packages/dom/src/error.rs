//! Error types for the document model

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document has no pages")]
    EmptyDocument,
}
