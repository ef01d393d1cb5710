//! Gaussian-weighted adaptive binarization.
//!
//! Photographed signage rarely has uniform illumination, so a global
//! threshold destroys glyphs in shadowed regions. Each pixel is instead
//! compared against a Gaussian-weighted mean of its neighborhood: the
//! local mean comes from a Gaussian blur whose sigma matches the fixed
//! window size, and a constant offset biases the decision toward
//! background.

use image::GrayImage;
use imageproc::filter::gaussian_blur_f32;

/// Output value for pixels classified as foreground.
const MAX_VALUE: u8 = 255;

/// Parameters of the adaptive binarization step.
///
/// Fixed configuration; not request-tunable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinarizeParams {
    /// Side length of the weighting window, in pixels. Must be odd.
    pub window: u32,
    /// Constant subtracted from the local mean before comparison.
    pub constant: f32,
}

impl Default for BinarizeParams {
    fn default() -> Self {
        Self {
            window: 11,
            constant: 2.0,
        }
    }
}

impl BinarizeParams {
    /// Sigma of the Gaussian weighting kernel for this window size.
    ///
    /// Uses the conventional size-to-sigma relation
    /// `0.3 * ((window - 1) / 2 - 1) + 0.8`, so the default window of
    /// 11 weights like a sigma-2 kernel.
    pub fn sigma(&self) -> f32 {
        0.3 * ((self.window as f32 - 1.0) * 0.5 - 1.0) + 0.8
    }
}

/// Binarizes a grayscale image against its Gaussian local mean.
///
/// A pixel becomes foreground (`255`) when it exceeds the local mean
/// minus the configured constant, background (`0`) otherwise.
///
/// # Arguments
///
/// * `image` - The grayscale image to binarize
/// * `params` - Window size and offset constant of the threshold
///
/// # Returns
///
/// A binary image of the same dimensions containing only 0 and 255.
pub fn adaptive_binarize(image: &GrayImage, params: BinarizeParams) -> GrayImage {
    let local_mean = gaussian_blur_f32(image, params.sigma());

    let mut out = GrayImage::new(image.width(), image.height());
    for (x, y, pixel) in image.enumerate_pixels() {
        let threshold = local_mean.get_pixel(x, y)[0] as f32 - params.constant;
        let value = if pixel[0] as f32 > threshold { MAX_VALUE } else { 0 };
        out.put_pixel(x, y, image::Luma([value]));
    }
    out
}
