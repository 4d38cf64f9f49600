use cindex_api::{CursorKind, KindError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CindexError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Kind(#[from] KindError),
    #[error("Classification mismatch for {kind}: {predicate} is {local} locally but {native} in libclang")]
    ClassificationMismatch {
        kind: CursorKind,
        predicate: &'static str,
        local: bool,
        native: bool,
    },
}

pub type Result<T> = std::result::Result<T, CindexError>;
