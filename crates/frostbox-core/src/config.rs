//! Configuration module
//!
//! Upload pipeline configuration, read from the environment with defaults
//! suitable for local development.

use std::env;
use std::path::PathBuf;

const DEFAULT_UPLOAD_DIRECTORY: &str = "./uploads";

/// Upload pipeline configuration.
///
/// `upload_directory` is the storage root. The per-kind subdirectories under
/// it (`images`, `csv`) are fixed: the layout
/// `{root}/{kind}/{username}/{filename}` is part of the external contract,
/// so callers can reconstruct full paths from returned relative paths.
#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub upload_directory: PathBuf,
}

impl UploadConfig {
    /// Load configuration from the environment (`UPLOAD_DIRECTORY`).
    pub fn from_env() -> Self {
        Self {
            upload_directory: env::var("UPLOAD_DIRECTORY")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_DIRECTORY.to_string())
                .into(),
        }
    }

    /// Configuration rooted at an explicit directory. Used by tests and
    /// embedding callers.
    pub fn with_root(upload_directory: impl Into<PathBuf>) -> Self {
        Self {
            upload_directory: upload_directory.into(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self::with_root(DEFAULT_UPLOAD_DIRECTORY)
    }
}
