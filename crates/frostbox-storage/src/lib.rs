//! User-scoped local filesystem storage.
//!
//! Uploaded artifacts live under `{root}/{kind}/{username}/{filename}` where
//! `kind` is `images` or `csv`. The relative key below the root is the handle
//! callers pass around; they reconstruct full paths by joining it with the
//! configured root.

pub mod keys;
pub mod local;

pub use keys::{generate_filename, storage_key, ArtifactKind};
pub use local::LocalStore;

use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
