//! Store error types.

use thiserror::Error;

/// Errors from persisted client-side storage.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend failed.
    #[error("storage error: {0}")]
    Backend(String),

    /// A persisted value could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
