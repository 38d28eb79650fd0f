// error.rs — Error types for the storage layer.

use thiserror::Error;

/// Errors surfaced by a key-value store or a typed record slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying store could not be read or written.
    #[error("storage unavailable for key '{key}': {source}")]
    StorageUnavailable {
        key: String,
        source: std::io::Error,
    },

    /// Stored text exists but does not parse as the expected record shape.
    #[error("malformed record under key '{key}': {source}")]
    MalformedRecord {
        key: String,
        source: serde_json::Error,
    },

    /// A record could not be serialized for writing.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The key is not usable as a storage slot name.
    #[error("invalid storage key: '{0}'")]
    InvalidKey(String),
}

impl StorageError {
    /// True for I/O-level failures, as opposed to bad data or bad keys.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StorageError::StorageUnavailable { .. })
    }
}
