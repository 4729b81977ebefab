pub mod fixtures;

use banner::{AdaptationPipeline, PipelineBuilder, PipelineConfig};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a pipeline over an in-memory catalog document
pub fn pipeline_from(catalog: &Value, config: PipelineConfig) -> AdaptationPipeline {
    PipelineBuilder::new()
        .with_catalog_source(&catalog.to_string())
        .and_then(|b| b.with_config(config).build())
        .expect("fixture catalog should build")
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
