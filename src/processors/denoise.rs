//! Non-local-means denoising for preprocessed signage bitmaps.
//!
//! Binarization amplifies sensor noise into isolated speckles that the
//! recognizer reads as diacritics or stray glyphs. Non-local means
//! replaces each pixel with a weighted average of pixels whose
//! surrounding patches look similar, searched over a bounded window;
//! weights decay exponentially with the mean squared patch difference.

use image::GrayImage;
use rayon::prelude::*;

/// Parameters of the non-local-means step.
///
/// Fixed configuration; not request-tunable. Window sizes are odd side
/// lengths in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DenoiseParams {
    /// Filter strength. Larger values remove more noise and more
    /// detail.
    pub strength: f32,
    /// Side length of the patch compared between pixels.
    pub patch_window: u32,
    /// Side length of the region searched for similar patches.
    pub search_window: u32,
}

impl Default for DenoiseParams {
    fn default() -> Self {
        Self {
            strength: 10.0,
            patch_window: 7,
            search_window: 21,
        }
    }
}

/// Applies non-local-means denoising to a grayscale image.
///
/// Rows are processed in parallel; the image is read-only during the
/// pass, so the row tasks share it freely.
pub fn nl_means_denoise(image: &GrayImage, params: DenoiseParams) -> GrayImage {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return image.clone();
    }

    let patch_radius = (params.patch_window / 2) as i64;
    let search_radius = (params.search_window / 2) as i64;
    let h2 = params.strength * params.strength;

    let rows: Vec<Vec<u8>> = (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| {
                    denoised_pixel(image, x as i64, y as i64, patch_radius, search_radius, h2)
                })
                .collect()
        })
        .collect();

    let mut out = GrayImage::new(width, height);
    for (y, row) in rows.into_iter().enumerate() {
        for (x, value) in row.into_iter().enumerate() {
            out.put_pixel(x as u32, y as u32, image::Luma([value]));
        }
    }
    out
}

fn denoised_pixel(
    image: &GrayImage,
    x: i64,
    y: i64,
    patch_radius: i64,
    search_radius: i64,
    h2: f32,
) -> u8 {
    let mut weight_sum = 0.0f32;
    let mut value_sum = 0.0f32;

    for sy in (y - search_radius)..=(y + search_radius) {
        for sx in (x - search_radius)..=(x + search_radius) {
            let distance = patch_distance(image, (x, y), (sx, sy), patch_radius);
            let weight = (-distance / h2).exp();
            weight_sum += weight;
            value_sum += weight * clamped_pixel(image, sx, sy) as f32;
        }
    }

    (value_sum / weight_sum).round().clamp(0.0, 255.0) as u8
}

/// Mean squared difference between the patches centered on `a` and `b`.
fn patch_distance(image: &GrayImage, a: (i64, i64), b: (i64, i64), radius: i64) -> f32 {
    let mut sum = 0.0f32;
    let mut count = 0u32;

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let pa = clamped_pixel(image, a.0 + dx, a.1 + dy) as f32;
            let pb = clamped_pixel(image, b.0 + dx, b.1 + dy) as f32;
            let diff = pa - pb;
            sum += diff * diff;
            count += 1;
        }
    }

    sum / count as f32
}

/// Reads a pixel with clamp-to-edge semantics for out-of-bounds
/// coordinates.
fn clamped_pixel(image: &GrayImage, x: i64, y: i64) -> u8 {
    let cx = x.clamp(0, image.width() as i64 - 1) as u32;
    let cy = y.clamp(0, image.height() as i64 - 1) as u32;
    image.get_pixel(cx, cy)[0]
}
