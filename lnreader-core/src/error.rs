//! Error types for lnreader core

use thiserror::Error;

/// Result type alias using LibraryError
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Top-level error type for all library operations
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while importing a library export document
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    #[error("Unexpected document shape: {0}")]
    UnexpectedShape(String),
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Syntax | Category::Eof | Category::Io => {
                ImportError::MalformedJson(err.to_string())
            }
            Category::Data => ImportError::UnexpectedShape(err.to_string()),
        }
    }
}

/// Errors that occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Backend error: {0}")]
    Backend(String),
}
