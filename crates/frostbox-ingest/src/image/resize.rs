//! Downscaling to the fixed pixel budget, aspect ratio preserved.

use image::{imageops::FilterType, DynamicImage, GenericImageView};

use frostbox_core::constants::IMAGE_MAX_DIMENSION;

/// Compute the stored dimensions for an image.
///
/// The longer side maps to [`IMAGE_MAX_DIMENSION`]; the shorter side scales
/// proportionally, truncated and clamped to at least 1px. Images already
/// within the budget keep their original dimensions; there is no upscaling.
pub fn target_dimensions(width: u32, height: u32) -> (u32, u32) {
    let long_side = width.max(height);
    if long_side <= IMAGE_MAX_DIMENSION {
        return (width, height);
    }

    if width >= height {
        let new_height =
            (height as f64 / width as f64 * IMAGE_MAX_DIMENSION as f64) as u32;
        (IMAGE_MAX_DIMENSION, new_height.max(1))
    } else {
        let new_width =
            (width as f64 / height as f64 * IMAGE_MAX_DIMENSION as f64) as u32;
        (new_width.max(1), IMAGE_MAX_DIMENSION)
    }
}

/// Select a resampling filter based on the downscale ratio.
///
/// Stronger downscales tolerate cheaper filters; mild ones get Lanczos3.
/// Every choice is at least bilinear quality.
fn select_filter(orig_width: u32, orig_height: u32, new_width: u32, new_height: u32) -> FilterType {
    let width_ratio = orig_width as f32 / new_width as f32;
    let height_ratio = orig_height as f32 / new_height as f32;
    let max_ratio = width_ratio.max(height_ratio);

    if max_ratio > 2.0 {
        FilterType::Triangle
    } else if max_ratio > 1.5 {
        FilterType::CatmullRom
    } else {
        FilterType::Lanczos3
    }
}

/// Resample an image to fit the pixel budget.
pub fn resize_to_fit(img: &DynamicImage) -> DynamicImage {
    let (width, height) = img.dimensions();
    let (target_width, target_height) = target_dimensions(width, height);

    if (target_width, target_height) == (width, height) {
        return img.clone();
    }

    let filter = select_filter(width, height, target_width, target_height);
    img.resize_exact(target_width, target_height, filter)
}
