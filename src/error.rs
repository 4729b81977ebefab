// src/error.rs
use banner_layout::LayoutError;
use banner_template::TemplateError;
use banner_types::{Format, FormatError, TemplateId};
use thiserror::Error;

/// The error type for everything the pipeline and the CLI do.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Format {format} is not listed by template '{template}'")]
    UnsupportedFormat { template: TemplateId, format: Format },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pipeline is misconfigured: {0}")]
    Config(String),
}

impl From<FormatError> for PipelineError {
    fn from(e: FormatError) -> Self {
        PipelineError::Layout(LayoutError::Validation(e))
    }
}
