// src/pipeline/builder.rs
use super::config::PipelineConfig;
use super::AdaptationPipeline;
use crate::error::PipelineError;
use banner_executor::ExecutorImpl;
use banner_template::{TemplateCatalog, TemplateSource};
use std::path::Path;
use std::sync::Arc;

/// A builder for creating an `AdaptationPipeline`.
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    catalog: Option<TemplateCatalog>,
    config: PipelineConfig,
    executor: Option<ExecutorImpl>,
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with default settings and no catalog.
    pub fn new() -> Self {
        Default::default()
    }

    /// Loads the template catalog from a JSON file.
    pub fn with_catalog_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.catalog = Some(TemplateCatalog::from_file(path)?);
        Ok(self)
    }

    /// Loads the template catalog from a JSON string.
    pub fn with_catalog_source(mut self, source: &str) -> Result<Self, PipelineError> {
        self.catalog = Some(TemplateCatalog::from_json_str(source)?);
        Ok(self)
    }

    /// Loads the template catalog from any [`TemplateSource`].
    pub fn with_template_source(mut self, source: &dyn TemplateSource) -> Result<Self, PipelineError> {
        self.catalog = Some(TemplateCatalog::load(source)?);
        Ok(self)
    }

    /// Uses an already validated catalog.
    pub fn with_catalog(mut self, catalog: TemplateCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_strict_formats(mut self, strict: bool) -> Self {
        self.config.strict_formats = strict;
        self
    }

    /// Overrides the executor otherwise chosen from `PipelineConfig::parallel`.
    pub fn with_executor(mut self, executor: ExecutorImpl) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Consumes the builder and creates the `AdaptationPipeline`.
    pub fn build(self) -> Result<AdaptationPipeline, PipelineError> {
        let catalog = self.catalog.ok_or_else(|| {
            PipelineError::Config(
                "No template catalog has been configured. Use `with_catalog_file` or `with_catalog`."
                    .to_string(),
            )
        })?;
        let executor = self.executor.unwrap_or_else(|| self.config.executor());

        Ok(AdaptationPipeline {
            catalog: Arc::new(catalog),
            config: self.config,
            executor,
        })
    }
}
