//! Face Detection Pipeline CLI
//!
//! Wires configuration, model loading, single-image classification, and
//! dataset evaluation into the command-line entry point.

use anyhow::Context;
use dataset_scan::labeled_samples;
use evaluation::{EvalConfig, Evaluator, TrainError, Trainer};
use face_model::{FaceClassifier, FaceLabel, ModelConfig};
use image_pipeline::Preprocessor;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Pipeline configuration
///
/// Defaults mirror the reference deployment: `fdc.pb` graph fed through
/// `conv2d_input`, fetched at `dense_1/Sigmoid`, 256x256 input, threshold
/// 0.5, datasets under `dataset/` and `test_dataset/`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Classifier settings (model path, node names, threshold, input size)
    pub model: ModelConfig,
    /// Image classified once at startup
    pub test_image: PathBuf,
    /// Labeled directory nominally used for training
    pub train_dir: PathBuf,
    /// Labeled directory used for accuracy evaluation
    pub test_dir: PathBuf,
    /// Evaluation settings
    pub evaluation: EvalConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            test_image: PathBuf::from("123.png"),
            train_dir: PathBuf::from("dataset"),
            test_dir: PathBuf::from("test_dataset"),
            evaluation: EvalConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a TOML file, filling gaps with defaults
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(std::path::Path::new(path)))
            .build()?;
        settings.try_deserialize()
    }
}

/// Initialize the tracing subscriber
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the full pipeline: single-image detection, training notice, evaluation
pub async fn run_pipeline(config: PipelineConfig) -> anyhow::Result<()> {
    let preprocessor = Preprocessor::new(config.model.input_width, config.model.input_height);
    let classifier = FaceClassifier::load(config.model.clone())
        .with_context(|| format!("loading model {}", config.model.model_path.display()))?;

    let tensor = preprocessor
        .preprocess(&config.test_image)
        .with_context(|| format!("preprocessing {}", config.test_image.display()))?;
    let result = classifier.classify(&tensor)?;
    match result.label {
        FaceLabel::Present => println!("Лицо обнаружено"),
        FaceLabel::Absent => println!("Лицо не обнаружено"),
    }

    let train_samples = labeled_samples(&config.train_dir)
        .with_context(|| format!("scanning {}", config.train_dir.display()))?;
    if train_samples.is_empty() {
        info!("No training samples under {}", config.train_dir.display());
    } else if let Err(TrainError::NotImplemented) = Trainer::train(&classifier, &train_samples) {
        warn!(
            "Training is unavailable in this build, {} samples left untouched",
            train_samples.len()
        );
    }

    let test_samples = labeled_samples(&config.test_dir)
        .with_context(|| format!("scanning {}", config.test_dir.display()))?;
    if test_samples.is_empty() {
        warn!(
            "No test samples under {}, skipping evaluation",
            config.test_dir.display()
        );
        return Ok(());
    }

    let evaluator = Evaluator::new(preprocessor, config.evaluation);
    let report = evaluator.evaluate(&classifier, &test_samples).await?;
    info!("Evaluation report: {}", serde_json::to_string(&report)?);
    println!("Model accuracy: {}", report.accuracy);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_mirrors_reference() {
        let config = PipelineConfig::default();
        assert_eq!(config.model.model_path, PathBuf::from("fdc.pb"));
        assert_eq!(config.model.input_node, "conv2d_input");
        assert_eq!(config.model.output_node, "dense_1/Sigmoid");
        assert_eq!(config.model.threshold, 0.5);
        assert_eq!(config.model.input_width, 256);
        assert_eq!(config.model.input_height, 256);
        assert_eq!(config.test_image, PathBuf::from("123.png"));
        assert_eq!(config.train_dir, PathBuf::from("dataset"));
        assert_eq!(config.test_dir, PathBuf::from("test_dataset"));
    }

    #[test]
    fn test_partial_toml_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
test_image = "selfie.jpg"

[model]
model_path = "detector.pb"
input_node = "input_1"
output_node = "sigmoid_out"
threshold = 0.6
input_width = 128
input_height = 128

[evaluation]
failure_policy = "skip"
"#
        )
        .unwrap();

        let config = PipelineConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.model.model_path, PathBuf::from("detector.pb"));
        assert_eq!(config.model.threshold, 0.6);
        assert_eq!(config.test_image, PathBuf::from("selfie.jpg"));
        // Untouched fields keep their defaults
        assert_eq!(config.train_dir, PathBuf::from("dataset"));
        assert_eq!(
            config.evaluation.failure_policy,
            evaluation::FailurePolicy::Skip
        );
    }
}
