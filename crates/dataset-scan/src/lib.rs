//! Dataset Enumeration and Labeling
//!
//! Walks a dataset directory into a deterministic list of file paths and
//! derives ground-truth labels from the filename convention.

mod scan;

pub use scan::{label_for_path, labeled_samples, scan_dataset, LabeledSample};

use thiserror::Error;

/// Errors during dataset scanning
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Dataset directory unreadable
    #[error("Failed to read dataset directory: {0}")]
    Io(#[from] std::io::Error),
}
