use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnipError {
    #[error("{0}")]
    Validation(String),

    #[error("Snippet not found: {0}")]
    NotFound(String),

    #[error("Could not read catalog {}: {reason}", .path.display())]
    StoreRead { path: PathBuf, reason: String },

    #[error("Could not write catalog {}: {source}", .path.display())]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, SnipError>;
