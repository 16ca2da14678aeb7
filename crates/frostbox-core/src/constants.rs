//! Application-wide constants.

/// Maximum edge length of a stored item image, in pixels.
pub const IMAGE_MAX_DIMENSION: u32 = 200;

/// Byte budget for an encoded item image.
pub const IMAGE_MAX_ENCODED_BYTES: usize = 50 * 1024;

/// Maximum accepted size of a raw image upload.
pub const IMAGE_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Maximum accepted size of a raw CSV upload.
pub const CSV_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// First-pass encode quality for lossy image formats.
pub const IMAGE_QUALITY_HIGH: u8 = 90;

/// Quality used for the single downgrade pass when the first encode
/// exceeds the byte budget.
pub const IMAGE_QUALITY_REDUCED: u8 = 70;

/// Content types accepted for image uploads.
pub const ALLOWED_IMAGE_TYPES: &[&str] =
    &["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Content types accepted for CSV uploads. A `.csv` filename is accepted
/// even when the declared content type is not in this list.
pub const ALLOWED_CSV_TYPES: &[&str] = &["text/csv", "application/csv", "text/plain"];
