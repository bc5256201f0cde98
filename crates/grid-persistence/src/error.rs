//! Persistence errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize grid snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, PersistenceError>;
