//! Image ingestion: decode, downscale to the pixel budget, encode within
//! the byte budget.

pub mod encode;
pub mod resize;

pub use encode::ImageFormat;

use bytes::Bytes;
use image::ImageReader;
use std::io::Cursor;

use frostbox_core::constants::{
    IMAGE_MAX_ENCODED_BYTES, IMAGE_QUALITY_HIGH, IMAGE_QUALITY_REDUCED,
};

use crate::error::{IngestError, IngestResult};

/// Decode an upload, resample it to fit the pixel budget and encode it.
///
/// If the first-pass encode exceeds the byte budget, the same resampled
/// bitmap is re-encoded once at reduced quality and that result is used
/// whether or not it fits: exactly one downgrade pass, never a loop. PNG is
/// lossless, so for PNG the downgrade pass cannot shrink the output and the
/// oversized result is accepted.
pub fn process_image(data: &[u8], format: ImageFormat) -> IngestResult<Bytes> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| IngestError::UnreadableImage(e.to_string()))?;
    let img = reader
        .decode()
        .map_err(|e| IngestError::UnreadableImage(e.to_string()))?;

    let resized = resize::resize_to_fit(&img);

    let encoded = encode::encode(&resized, format, IMAGE_QUALITY_HIGH)
        .map_err(|e| IngestError::ImageProcessing(e.to_string()))?;

    if encoded.len() > IMAGE_MAX_ENCODED_BYTES {
        tracing::debug!(
            size_bytes = encoded.len(),
            max_bytes = IMAGE_MAX_ENCODED_BYTES,
            quality = IMAGE_QUALITY_REDUCED,
            "Encoded image over byte budget, re-encoding at reduced quality"
        );
        let reduced = encode::encode(&resized, format, IMAGE_QUALITY_REDUCED)
            .map_err(|e| IngestError::ImageProcessing(e.to_string()))?;
        return Ok(reduced);
    }

    Ok(encoded)
}
