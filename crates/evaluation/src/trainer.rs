//! Training entry point
//!
//! The pipeline ships a pretrained graph only. Callers get an explicit
//! `NotImplemented` signal instead of a silent no-op, so the presence of
//! the entry point cannot be mistaken for an ability to train.

use crate::TrainError;
use dataset_scan::LabeledSample;
use face_model::FaceClassifier;
use tracing::warn;

/// Placeholder for a batch training loop
pub struct Trainer;

impl Trainer {
    /// Always fails with [`TrainError::NotImplemented`]
    pub fn train(
        _classifier: &FaceClassifier,
        samples: &[LabeledSample],
    ) -> Result<(), TrainError> {
        warn!(
            "Training requested over {} samples, but no optimizer is available",
            samples.len()
        );
        Err(TrainError::NotImplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_is_explicitly_unimplemented() {
        let classifier = FaceClassifier::fixed(0.9);
        let err = Trainer::train(&classifier, &[]).unwrap_err();
        assert!(matches!(err, TrainError::NotImplemented));
    }
}
