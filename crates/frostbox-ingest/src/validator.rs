//! Upload validation.
//!
//! All checks here are local: size and declared content-type only, no I/O
//! and no sniffing of the byte stream. Whether the bytes actually decode is
//! established later by the pipeline itself.

use frostbox_core::constants::{
    ALLOWED_CSV_TYPES, ALLOWED_IMAGE_TYPES, CSV_MAX_UPLOAD_BYTES, IMAGE_MAX_UPLOAD_BYTES,
};
use frostbox_core::UploadedFile;

use crate::error::{IngestError, IngestResult};
use crate::image::ImageFormat;

fn validate_max_size(size: usize, max: usize) -> IngestResult<()> {
    if size > max {
        return Err(IngestError::FileTooLarge { size, max });
    }
    Ok(())
}

/// Validate an image upload and resolve its target encoding.
///
/// Checks run in order: empty, content type, size. An upload that is both
/// the wrong type and oversized is reported as the type rejection.
pub fn validate_image_upload(file: &UploadedFile) -> IngestResult<ImageFormat> {
    if file.is_empty() {
        return Err(IngestError::EmptyFile);
    }

    let normalized = file.content_type.to_lowercase();
    if !ALLOWED_IMAGE_TYPES.contains(&normalized.as_str()) {
        return Err(IngestError::UnsupportedType {
            content_type: file.content_type.clone(),
            allowed: "JPEG, PNG, WebP",
        });
    }

    validate_max_size(file.size(), IMAGE_MAX_UPLOAD_BYTES)?;

    // The allow-list and the format table cover the same types.
    ImageFormat::from_content_type(&normalized).ok_or_else(|| IngestError::UnsupportedType {
        content_type: file.content_type.clone(),
        allowed: "JPEG, PNG, WebP",
    })
}

/// Validate a CSV upload.
///
/// Either a recognized content type or a `.csv` filename is sufficient; both
/// signals are client-declared, so the parser still has the final word.
/// Checks run in the same order as for images: empty, type, size.
pub fn validate_csv_upload(file: &UploadedFile) -> IngestResult<()> {
    if file.is_empty() {
        return Err(IngestError::EmptyFile);
    }

    let normalized = file.content_type.to_lowercase();
    let type_ok = ALLOWED_CSV_TYPES.contains(&normalized.as_str());
    let name_ok = file.filename.to_lowercase().ends_with(".csv");

    if !type_ok && !name_ok {
        return Err(IngestError::UnsupportedType {
            content_type: file.content_type.clone(),
            allowed: "CSV",
        });
    }

    validate_max_size(file.size(), CSV_MAX_UPLOAD_BYTES)
}
