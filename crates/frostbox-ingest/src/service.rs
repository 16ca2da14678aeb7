//! Ingestion service: the entry points the upload gateway calls.

use frostbox_core::{ImportBatch, UploadConfig, UploadedFile};
use frostbox_storage::{generate_filename, storage_key, ArtifactKind, LocalStore};

use crate::error::{IngestError, IngestResult};
use crate::image;
use crate::spreadsheet;
use crate::validator;

/// File ingestion service.
///
/// Stateless apart from the filesystem: every call validates, transforms and
/// persists one upload. Concurrent calls are independent; same-user calls in
/// the same millisecond are not serialized (the filename collision is
/// accepted as negligible).
#[derive(Clone)]
pub struct IngestService {
    config: UploadConfig,
    store: LocalStore,
}

impl IngestService {
    /// Create a service rooted at the configured upload directory, creating
    /// the root if absent.
    pub async fn new(config: UploadConfig) -> IngestResult<Self> {
        let store = LocalStore::new(&config.upload_directory).await?;
        Ok(Self { config, store })
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    /// Ingest an item photograph: validate, downscale into the pixel and
    /// byte budgets, persist under the user's image namespace.
    ///
    /// Returns the relative storage path of the stored image.
    pub async fn ingest_image(&self, file: UploadedFile, username: &str) -> IngestResult<String> {
        let format = validator::validate_image_upload(&file)?;

        let data = file.data;
        // Decode and re-encode are CPU-bound; run off the async pool.
        let encoded = tokio::task::spawn_blocking(move || image::process_image(&data, format))
            .await
            .map_err(|e| IngestError::ImageProcessing(e.to_string()))??;

        let filename = generate_filename(username, format.extension());
        let key = storage_key(ArtifactKind::Image, username, &filename);
        self.store.write(&key, &encoded).await?;

        tracing::info!(
            path = %key,
            username = %username,
            size_kb = encoded.len() / 1024,
            "Image uploaded and compressed"
        );

        Ok(key)
    }

    /// Ingest a spreadsheet export: validate, persist the raw file, parse it
    /// into a row-annotated preview.
    ///
    /// The raw file is persisted before parsing so a corrupt upload stays
    /// recoverable for diagnosis; on a structural parse failure that copy is
    /// deleted again before the error propagates.
    pub async fn ingest_csv(&self, file: UploadedFile, username: &str) -> IngestResult<ImportBatch> {
        validator::validate_csv_upload(&file)?;

        let filename = generate_filename(username, ".csv");
        let key = storage_key(ArtifactKind::Csv, username, &filename);
        self.store.write(&key, &file.data).await?;

        let items = match spreadsheet::parse_rows(&file.data) {
            Ok(items) => items,
            Err(parse_error) => {
                if let Err(delete_error) = self.store.delete(&key).await {
                    tracing::error!(
                        path = %key,
                        error = %delete_error,
                        "Failed to clean up CSV file after parse failure"
                    );
                }
                return Err(parse_error);
            }
        };

        let valid_items = items.iter().filter(|item| item.is_valid()).count();

        tracing::info!(
            path = %key,
            username = %username,
            total_items = items.len(),
            valid_items = valid_items,
            "CSV file parsed"
        );

        Ok(ImportBatch {
            total_items: items.len(),
            valid_items,
            file_path: key,
            items,
        })
    }

    /// Delete a previously stored file.
    ///
    /// The ownership check is a coarse substring match of the username in
    /// the relative path; it is not a security boundary. Deleting an absent
    /// file succeeds.
    pub async fn delete_file(&self, relative_path: &str, username: &str) -> IngestResult<()> {
        if !relative_path.contains(username) {
            tracing::warn!(
                path = %relative_path,
                username = %username,
                "Rejected delete of file outside user namespace"
            );
            return Err(IngestError::AccessDenied);
        }

        self.store.delete(relative_path).await?;

        tracing::info!(path = %relative_path, username = %username, "File deleted");
        Ok(())
    }
}
