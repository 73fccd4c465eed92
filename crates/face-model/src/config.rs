//! Classifier configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Classifier configuration
///
/// The feed/fetch node names must match the names baked into the graph
/// being loaded; they are configurable, not discovered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the frozen graph file
    pub model_path: PathBuf,

    /// Graph node fed with the image tensor
    pub input_node: String,

    /// Graph node producing the sigmoid probability
    pub output_node: String,

    /// Decision boundary separating "present" from "absent"
    pub threshold: f32,

    /// Model input width in pixels
    pub input_width: u32,

    /// Model input height in pixels
    pub input_height: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("fdc.pb"),
            input_node: "conv2d_input".to_string(),
            output_node: "dense_1/Sigmoid".to_string(),
            threshold: 0.5,
            input_width: 256,
            input_height: 256,
        }
    }
}
