//! Classifier session over a frozen TensorFlow graph

use crate::{ModelConfig, ModelError};
use ndarray::Array4;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tract_core::plan::SimplePlan;
use tract_tensorflow::prelude::*;

type TfPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Binary classification outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceLabel {
    /// A face is present in the image
    Present,
    /// No face in the image
    Absent,
}

impl FaceLabel {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            FaceLabel::Present => "face_present",
            FaceLabel::Absent => "face_absent",
        }
    }
}

/// Classification result carrying the raw model output
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Classification {
    /// Thresholded label
    pub label: FaceLabel,
    /// Raw sigmoid probability in [0, 1]
    pub score: f32,
}

#[derive(Debug)]
enum Backend {
    /// Runnable plan over the loaded graph
    Graph(Box<TfPlan>),
    /// Fixed-score stub for tests and offline runs
    Fixed(f32),
}

/// Loaded classification model bound to an executable session
///
/// Created once per run and shared read-only across all inference calls.
/// The plan owns the graph resources; they are released on drop, on every
/// exit path.
#[derive(Debug)]
pub struct FaceClassifier {
    backend: Backend,
    config: ModelConfig,
}

impl FaceClassifier {
    /// Load a frozen graph and bind the configured feed/fetch nodes
    ///
    /// A failed load never yields a usable handle; callers cannot reach
    /// inference with a dead model.
    pub fn load(config: ModelConfig) -> Result<Self, ModelError> {
        let mut model = tract_tensorflow::tensorflow()
            .model_for_path(&config.model_path)
            .map_err(|e| ModelError::Load(e.to_string()))?;

        model
            .set_input_names([config.input_node.as_str()])
            .map_err(|_| ModelError::Feed(config.input_node.clone()))?;
        model
            .set_output_names([config.output_node.as_str()])
            .map_err(|_| ModelError::Fetch(config.output_node.clone()))?;

        let (h, w) = (config.input_height as usize, config.input_width as usize);
        let plan = model
            .with_input_fact(0, f32::fact([1, h, w, 3]).into())
            .map_err(|e| ModelError::Load(e.to_string()))?
            .into_optimized()
            .map_err(|e| ModelError::Load(e.to_string()))?
            .into_runnable()
            .map_err(|e| ModelError::Load(e.to_string()))?;

        info!(
            "Loaded model {} (feed {}, fetch {})",
            config.model_path.display(),
            config.input_node,
            config.output_node
        );

        Ok(Self {
            backend: Backend::Graph(Box::new(plan)),
            config,
        })
    }

    /// Create a stub classifier that always reports `score`
    pub fn fixed(score: f32) -> Self {
        Self::fixed_with_config(score, ModelConfig::default())
    }

    /// Stub classifier with an explicit configuration
    pub fn fixed_with_config(score: f32, config: ModelConfig) -> Self {
        info!("Creating fixed-score classifier (score {})", score);
        Self {
            backend: Backend::Fixed(score),
            config,
        }
    }

    /// Classifier configuration
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Expected input tensor shape (NHWC)
    pub fn input_shape(&self) -> [usize; 4] {
        [
            1,
            self.config.input_height as usize,
            self.config.input_width as usize,
            3,
        ]
    }

    /// Run single-image inference over a preprocessed tensor
    ///
    /// The decision rule is a strict greater-than: a score exactly at the
    /// threshold classifies as absent. Single attempt, no retries.
    pub fn classify(&self, tensor: &Array4<f32>) -> Result<Classification, ModelError> {
        let expected = self.input_shape();
        if tensor.shape() != expected.as_slice() {
            return Err(ModelError::ShapeMismatch {
                expected: format!("{:?}", expected),
                actual: format!("{:?}", tensor.shape()),
            });
        }

        let start = std::time::Instant::now();
        let score = match &self.backend {
            Backend::Graph(plan) => self.run_graph(plan, tensor)?,
            Backend::Fixed(score) => *score,
        };
        debug!("Inference completed in {}ms", start.elapsed().as_millis());

        let label = if score > self.config.threshold {
            FaceLabel::Present
        } else {
            FaceLabel::Absent
        };
        Ok(Classification { label, score })
    }

    fn run_graph(&self, plan: &TfPlan, tensor: &Array4<f32>) -> Result<f32, ModelError> {
        let input = Tensor::from(tensor.clone());
        let outputs = plan
            .run(tvec!(input.into()))
            .map_err(|e| ModelError::Runtime(e.to_string()))?;

        let scores = outputs[0]
            .as_slice::<f32>()
            .map_err(|e| ModelError::Runtime(e.to_string()))?;
        scores
            .first()
            .copied()
            .ok_or_else(|| ModelError::Fetch(self.config.output_node.clone()))
    }
}
