//! Persistence store errors.

use std::path::PathBuf;

/// Errors that can occur while reading or writing a key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read store file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write store file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store file {path} is not a JSON object of strings: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode store contents: {0}")]
    Encode(#[from] serde_json::Error),
}
