//! Accuracy evaluation over labeled samples

use crate::{EvalConfig, EvalError, FailurePolicy, SampleError};
use dataset_scan::LabeledSample;
use face_model::{Classification, FaceClassifier};
use image_pipeline::Preprocessor;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Aggregate evaluation outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Samples whose prediction matched the ground truth
    pub correct: usize,
    /// Samples evaluated
    pub total: usize,
    /// Samples skipped under the skip policy
    pub skipped: usize,
    /// correct / total
    pub accuracy: f64,
}

/// Runs the classifier over labeled samples and aggregates accuracy
pub struct Evaluator {
    preprocessor: Preprocessor,
    config: EvalConfig,
}

impl Evaluator {
    /// Create an evaluator with the given preprocessing pipeline
    pub fn new(preprocessor: Preprocessor, config: EvalConfig) -> Self {
        Self {
            preprocessor,
            config,
        }
    }

    /// Evaluate the classifier over `samples`
    ///
    /// Empty input is an error: accuracy over zero samples is undefined.
    /// The skip policy reducing the set to zero evaluated samples reports
    /// the same way, never a zero division.
    pub async fn evaluate(
        &self,
        classifier: &FaceClassifier,
        samples: &[LabeledSample],
    ) -> Result<EvaluationReport, EvalError> {
        if samples.is_empty() {
            return Err(EvalError::EmptyDataset);
        }

        let mut correct = 0usize;
        let mut total = 0usize;
        let mut skipped = 0usize;

        for sample in samples {
            match self.classify_sample(classifier, sample) {
                Ok(classification) => {
                    total += 1;
                    if classification.label == sample.label {
                        correct += 1;
                    }
                    debug!(
                        "{}: predicted {} (score {:.3}), truth {}",
                        sample.path.display(),
                        classification.label.as_str(),
                        classification.score,
                        sample.label.as_str()
                    );
                }
                Err(source) => match self.config.failure_policy {
                    FailurePolicy::Abort => {
                        return Err(EvalError::Sample {
                            path: sample.path.display().to_string(),
                            source,
                        });
                    }
                    FailurePolicy::Skip => {
                        warn!("Skipping {}: {}", sample.path.display(), source);
                        skipped += 1;
                    }
                },
            }
        }

        if total == 0 {
            return Err(EvalError::EmptyDataset);
        }

        let accuracy = correct as f64 / total as f64;
        info!(
            "Evaluated {} samples: accuracy {:.3} ({} skipped)",
            total, accuracy, skipped
        );
        Ok(EvaluationReport {
            correct,
            total,
            skipped,
            accuracy,
        })
    }

    fn classify_sample(
        &self,
        classifier: &FaceClassifier,
        sample: &LabeledSample,
    ) -> Result<Classification, SampleError> {
        let tensor = self.preprocessor.preprocess(&sample.path)?;
        Ok(classifier.classify(&tensor)?)
    }
}
