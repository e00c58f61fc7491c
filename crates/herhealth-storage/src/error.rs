use thiserror::Error;

use herhealth_core::error::CoreError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("insert rejected: {0}")]
    Rejected(String),

    #[error("invalid key: {0}")]
    InvalidKey(#[from] CoreError),

    #[error("key escapes the data directory: {key}")]
    UnsafeKey { key: String },
}
