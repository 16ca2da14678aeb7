//! Encoding of the resampled bitmap at a target format and quality.

use anyhow::Result;
use bytes::Bytes;
use image::DynamicImage;
use image::GenericImageView;
use std::io::Cursor;

/// Output format for stored images, derived from the upload's declared
/// content type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    WebP,
}

impl ImageFormat {
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        match content_type.to_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            "image/png" => Some(ImageFormat::Png),
            "image/webp" => Some(ImageFormat::WebP),
            _ => None,
        }
    }

    /// Filename extension, dot included.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => ".jpg",
            ImageFormat::Png => ".png",
            ImageFormat::WebP => ".webp",
        }
    }
}

/// Encode a bitmap at the given format and quality (0-100).
///
/// Quality applies to the lossy formats; PNG encoding ignores it.
pub fn encode(img: &DynamicImage, format: ImageFormat, quality: u8) -> Result<Bytes> {
    match format {
        ImageFormat::Jpeg => encode_jpeg(img, quality),
        ImageFormat::Png => encode_png(img),
        ImageFormat::WebP => encode_webp(img, quality),
    }
}

/// Encode to JPEG using mozjpeg
fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Bytes> {
    let rgb_img = img.to_rgb8();
    let (width, height) = rgb_img.dimensions();

    let mut comp = mozjpeg::Compress::new(mozjpeg::ColorSpace::JCS_RGB);
    comp.set_size(width as usize, height as usize);
    comp.set_quality(quality as f32);
    comp.set_progressive_mode();
    comp.set_optimize_coding(true);

    let mut comp = comp.start_compress(Vec::new())?;
    comp.write_scanlines(&rgb_img)?;
    let jpeg_data = comp.finish()?;

    Ok(Bytes::from(jpeg_data))
}

/// Encode to PNG (lossless)
fn encode_png(img: &DynamicImage) -> Result<Bytes> {
    let mut buffer = Vec::new();
    let mut cursor = Cursor::new(&mut buffer);

    img.write_to(&mut cursor, image::ImageFormat::Png)?;

    Ok(Bytes::from(buffer))
}

/// Encode to lossy WebP
fn encode_webp(img: &DynamicImage, quality: u8) -> Result<Bytes> {
    let (width, height) = img.dimensions();
    let rgba_img = img.to_rgba8();

    let encoder = webp::Encoder::from_rgba(&rgba_img, width, height);
    let webp_data = encoder.encode(quality as f32);

    Ok(Bytes::copy_from_slice(&webp_data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn sample_image() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(64, 48, Rgba([10, 200, 90, 255])))
    }

    #[test]
    fn test_from_content_type() {
        assert_eq!(
            ImageFormat::from_content_type("image/jpeg"),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_content_type("image/jpg"),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_content_type("IMAGE/PNG"),
            Some(ImageFormat::Png)
        );
        assert_eq!(
            ImageFormat::from_content_type("image/webp"),
            Some(ImageFormat::WebP)
        );
        assert_eq!(ImageFormat::from_content_type("image/gif"), None);
        assert_eq!(ImageFormat::from_content_type("text/plain"), None);
    }

    #[test]
    fn test_extensions() {
        assert_eq!(ImageFormat::Jpeg.extension(), ".jpg");
        assert_eq!(ImageFormat::Png.extension(), ".png");
        assert_eq!(ImageFormat::WebP.extension(), ".webp");
    }

    #[test]
    fn test_encode_jpeg_produces_jpeg_magic() {
        let data = encode(&sample_image(), ImageFormat::Jpeg, 90).unwrap();
        assert!(data.len() > 2);
        assert_eq!(&data[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_png_produces_png_magic() {
        let data = encode(&sample_image(), ImageFormat::Png, 90).unwrap();
        assert_eq!(&data[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_encode_webp_produces_riff_header() {
        let data = encode(&sample_image(), ImageFormat::WebP, 90).unwrap();
        assert_eq!(&data[0..4], b"RIFF");
        assert_eq!(&data[8..12], b"WEBP");
    }

    #[test]
    fn test_lower_quality_jpeg_is_not_larger() {
        // Use a noisy image so quality actually changes the output size.
        let mut img = RgbaImage::new(128, 128);
        for y in 0..128 {
            for x in 0..128 {
                let v = ((x * 31 + y * 17) % 251) as u8;
                img.put_pixel(x, y, Rgba([v, v.wrapping_mul(3), v.wrapping_add(80), 255]));
            }
        }
        let img = DynamicImage::ImageRgba8(img);

        let high = encode(&img, ImageFormat::Jpeg, 90).unwrap();
        let low = encode(&img, ImageFormat::Jpeg, 70).unwrap();
        assert!(low.len() <= high.len());
    }
}
