//! Error types for the record store.

use thiserror::Error;

/// Failures of the storage backend itself. Absence of a record is never a `StoreError`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store document encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("malformed store document: {0}")]
    Malformed(String),
}
