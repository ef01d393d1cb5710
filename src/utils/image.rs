//! Image decoding helpers.
//!
//! The pipeline receives images as raw uploaded bytes; decoding and
//! grayscale conversion live here so every stage works with the same
//! `image` crate types.

use crate::core::errors::EnrichError;
use image::{DynamicImage, GrayImage};

/// Decodes uploaded image bytes into a `DynamicImage`.
///
/// Empty input is rejected as invalid before the decoder runs, so the
/// caller can distinguish "no image provided" from "unreadable image".
///
/// # Arguments
///
/// * `bytes` - The raw image bytes as uploaded
///
/// # Returns
///
/// * `Ok(DynamicImage)` - The decoded image
/// * `Err(EnrichError)` - `InvalidInput` for empty input, `ImageDecode`
///   when the bytes are not a readable image format
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, EnrichError> {
    if bytes.is_empty() {
        return Err(EnrichError::invalid_input("no image provided"));
    }
    image::load_from_memory(bytes).map_err(EnrichError::ImageDecode)
}

/// Converts a DynamicImage to a GrayImage (8-bit single channel).
pub fn dynamic_to_gray(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}
