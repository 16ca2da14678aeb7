//! Shared key generation for the user-scoped storage namespace.
//!
//! Key format: `{kind}/{username}/{filename}` with
//! `filename = {username}_{unix_millis}{ext}`.

use chrono::Utc;

/// The kinds of artifacts the pipelines persist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactKind {
    Image,
    Csv,
}

impl ArtifactKind {
    /// Subdirectory name under the storage root.
    pub fn directory(self) -> &'static str {
        match self {
            ArtifactKind::Image => "images",
            ArtifactKind::Csv => "csv",
        }
    }
}

/// Generate a per-user filename: `{username}_{unix_millis}{ext}`.
///
/// Unique per user within the same millisecond; a collision inside one
/// millisecond is accepted rather than retried.
pub fn generate_filename(username: &str, extension: &str) -> String {
    format!("{}_{}{}", username, Utc::now().timestamp_millis(), extension)
}

/// Build the relative storage key for an artifact.
pub fn storage_key(kind: ArtifactKind, username: &str, filename: &str) -> String {
    format!("{}/{}/{}", kind.directory(), username, filename)
}
