//! Utility functions shared across the pipeline.

pub mod image;

pub use image::{decode_image, dynamic_to_gray};
