//! Face Detection Pipeline - Main Entry Point

use face_pipeline::{init_logging, run_pipeline, PipelineConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== Face Detection Pipeline v{} ===", env!("CARGO_PKG_VERSION"));

    let config = match std::env::args().nth(1) {
        Some(path) => PipelineConfig::load(&path)?,
        None => PipelineConfig::default(),
    };

    run_pipeline(config).await
}
