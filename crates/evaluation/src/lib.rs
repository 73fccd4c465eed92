//! Dataset Evaluation
//!
//! Runs the classifier over labeled datasets and aggregates accuracy.
//! Training is surfaced as an explicitly unimplemented capability.

mod evaluator;
mod trainer;

pub use evaluator::{EvaluationReport, Evaluator};
pub use trainer::Trainer;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to do when a single sample fails to preprocess or classify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Propagate the first failure and stop
    Abort,
    /// Log, count the sample as skipped, and continue
    Skip,
}

/// Evaluation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Per-sample failure handling
    pub failure_policy: FailurePolicy,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::Abort,
        }
    }
}

/// Errors during evaluation
#[derive(Debug, Error)]
pub enum EvalError {
    /// Accuracy over zero samples is undefined
    #[error("Dataset is empty, accuracy is undefined")]
    EmptyDataset,

    /// A sample failed and the policy is to abort
    #[error("Sample {path} failed: {source}")]
    Sample {
        path: String,
        #[source]
        source: SampleError,
    },

    /// Dataset enumeration failed
    #[error(transparent)]
    Dataset(#[from] dataset_scan::DatasetError),
}

/// Per-sample failure during evaluation
#[derive(Debug, Error)]
pub enum SampleError {
    #[error(transparent)]
    Preprocess(#[from] image_pipeline::PreprocessError),

    #[error(transparent)]
    Model(#[from] face_model::ModelError),
}

/// Errors from the training entry point
#[derive(Debug, Error)]
pub enum TrainError {
    /// No optimizer ships with this pipeline
    #[error("Model training is not implemented")]
    NotImplemented,
}
