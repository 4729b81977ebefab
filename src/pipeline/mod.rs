//! Template adaptation pipeline.
//!
//! - [`PipelineBuilder`]: Fluent builder for constructing pipelines
//! - [`PipelineConfig`]: Format strictness and executor selection
//! - [`AdaptationPipeline`]: Adapts, realizes and exports catalog templates
//!
//! # Example
//!
//! ```ignore
//! use banner::{PipelineBuilder, SceneEdit};
//!
//! let pipeline = PipelineBuilder::new()
//!     .with_catalog_file("templates.json")?
//!     .build()?;
//!
//! let layout = pipeline.adapt("summer-sale", "1920x1080")?;
//! pipeline.export("summer-sale", "1920x1080")?.write_to_dir("out")?;
//!
//! let edits = vec![SceneEdit::SetText { element: "headline".into(), text: "-70%".into() }];
//! pipeline.export_edited("summer-sale", "1920x1080", &edits)?;
//! ```

mod builder;
pub mod config;

pub use builder::PipelineBuilder;
pub use config::PipelineConfig;

use crate::error::PipelineError;
use banner_executor::{Executor, ExecutorImpl};
use banner_layout::{adapt_to, realize, Scene, SceneEdit};
use banner_template::{LayoutExport, TemplateCatalog};
use banner_types::{Element, Format, Template, TemplateId};
use log::{debug, info, warn};
use serde::Serialize;
use std::sync::Arc;

/// The elements of one template adapted to one format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdaptedLayout {
    pub template_id: TemplateId,
    pub format: Format,
    pub elements: Vec<Element>,
}

impl AdaptedLayout {
    fn of(template: &Template, format: Format) -> Self {
        Self {
            template_id: template.id.clone(),
            format,
            elements: adapt_to(format, &template.elements),
        }
    }
}

#[derive(Debug)]
pub struct AdaptationPipeline {
    catalog: Arc<TemplateCatalog>,
    config: PipelineConfig,
    executor: ExecutorImpl,
}

impl AdaptationPipeline {
    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn executor(&self) -> &ExecutorImpl {
        &self.executor
    }

    /// Adapts the elements of `template_id` to `format` (`"WxH"`).
    pub fn adapt(&self, template_id: &str, format: &str) -> Result<AdaptedLayout, PipelineError> {
        let (template, format) = self.resolve(template_id, format)?;
        Ok(AdaptedLayout::of(&template, format))
    }

    /// Adapts a template to every format it lists, on the configured executor.
    ///
    /// The outer error reports an unknown template; the inner results follow
    /// the template's format list order.
    pub fn adapt_all_formats(
        &self,
        template_id: &str,
    ) -> Result<Vec<Result<AdaptedLayout, PipelineError>>, PipelineError> {
        let template = Arc::clone(self.catalog.require(template_id)?);
        info!(
            "Adapting '{}' to {} format(s) with {}",
            template.id,
            template.formats.len(),
            self.executor.name()
        );

        let formats = template.formats.clone();
        let results = self.executor.execute_all(formats, move |format: String| -> Result<AdaptedLayout, PipelineError> {
            let format = Format::parse(&format)?;
            Ok(AdaptedLayout::of(&template, format))
        });
        Ok(results)
    }

    /// Adapts and realizes a template into paint-ordered boxes.
    pub fn scene(&self, template_id: &str, format: &str) -> Result<Scene, PipelineError> {
        let layout = self.adapt(template_id, format)?;
        Ok(realize(layout.format, &layout.elements)?)
    }

    /// Builds the custom layout document for a template in one format.
    pub fn export(&self, template_id: &str, format: &str) -> Result<LayoutExport, PipelineError> {
        self.export_edited(template_id, format, &[])
    }

    /// Like [`export`](Self::export), with `edits` applied to the scene first.
    pub fn export_edited(
        &self,
        template_id: &str,
        format: &str,
        edits: &[SceneEdit],
    ) -> Result<LayoutExport, PipelineError> {
        let (template, format) = self.resolve(template_id, format)?;
        let elements = adapt_to(format, &template.elements);
        let mut scene = realize(format, &elements)?;
        if !edits.is_empty() {
            scene.apply_all(edits)?;
            info!("Applied {} edit(s) to '{}' at {}", edits.len(), template.id, format);
        }
        Ok(LayoutExport::from_scene(&template, &scene))
    }

    fn resolve(&self, template_id: &str, format: &str) -> Result<(Arc<Template>, Format), PipelineError> {
        let template = Arc::clone(self.catalog.require(template_id)?);
        let format = Format::parse(format)?;

        if !template.supports(&format) {
            if self.config.strict_formats {
                return Err(PipelineError::UnsupportedFormat {
                    template: template.id.clone(),
                    format,
                });
            }
            warn!(
                "Format {} is not listed by template '{}'; adapting anyway",
                format, template.id
            );
        }
        debug!("Resolved '{}' at {}", template.id, format);
        Ok((template, format))
    }
}
