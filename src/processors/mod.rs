//! Image processing operations for the OCR stage.
//!
//! One fixed pipeline is applied to every photograph regardless of how
//! many languages are requested: grayscale conversion, Gaussian-weighted
//! adaptive binarization, then non-local-means denoising. Script
//! identity does not change the geometric noise profile of a
//! photograph, so there is no per-language tuning.
//!
//! # Modules
//!
//! * `binarize` - Gaussian-weighted adaptive thresholding
//! * `denoise` - Non-local-means noise suppression

pub mod binarize;
pub mod denoise;

pub use binarize::{adaptive_binarize, BinarizeParams};
pub use denoise::{nl_means_denoise, DenoiseParams};
