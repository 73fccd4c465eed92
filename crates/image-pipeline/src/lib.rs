//! Image Preprocessing Pipeline
//!
//! Decodes images and converts them into the fixed-shape normalized
//! tensors the classifier consumes.

mod preprocess;

pub use preprocess::{Preprocessor, DEFAULT_INPUT_SIZE};

use thiserror::Error;

/// Errors during image preprocessing
#[derive(Debug, Error)]
pub enum PreprocessError {
    /// File missing, unreadable, or not a supported image format
    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}
