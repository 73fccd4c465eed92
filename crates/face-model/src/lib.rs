//! Frozen-Graph Face Classification Model
//!
//! Loads a TensorFlow frozen graph with named feed/fetch nodes and runs
//! single-image binary classification over preprocessed tensors.

mod classifier;
mod config;

pub use classifier::{Classification, FaceClassifier, FaceLabel};
pub use config::ModelConfig;

use thiserror::Error;

/// Errors during model loading and inference
#[derive(Debug, Error)]
pub enum ModelError {
    /// Graph file unreadable or malformed
    #[error("Model load failed: {0}")]
    Load(String),

    /// Named input node absent from the graph
    #[error("Input node '{0}' not found in graph")]
    Feed(String),

    /// Named output node absent from the graph
    #[error("Output node '{0}' not found in graph")]
    Fetch(String),

    /// Tensor shape does not match the model input
    #[error("Invalid input shape: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    /// Execution failure inside the graph engine
    #[error("Inference failed: {0}")]
    Runtime(String),
}
