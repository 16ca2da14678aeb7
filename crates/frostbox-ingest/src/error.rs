//! Error types for the ingestion pipelines.
//!
//! These are the rejecting errors: any of them fails the whole call. CSV
//! field-level problems are not errors at this tier; they are accumulated as
//! messages on the affected row and the batch still succeeds.

use frostbox_storage::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("File is empty")]
    EmptyFile,

    #[error("Invalid file type: {content_type} (allowed: {allowed})")]
    UnsupportedType {
        content_type: String,
        allowed: &'static str,
    },

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Could not read image file: {0}")]
    UnreadableImage(String),

    #[error("Image processing error: {0}")]
    ImageProcessing(String),

    #[error("Failed to parse CSV file: {0}")]
    UnparsableFile(String),

    #[error("Access denied: file does not belong to user")]
    AccessDenied,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for ingestion operations
pub type IngestResult<T> = Result<T, IngestError>;
