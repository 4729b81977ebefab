//! Banner layout toolkit.
//!
//! Loads a catalog of banner templates, adapts their elements to any output
//! format with zone-based placement rules, realizes the result into
//! paint-ordered boxes, applies edits and exports it as a custom layout
//! document.
//!
//! The building blocks live in their own crates and are re-exported here:
//! value types in [`types`], the adapter in [`layout`], catalogs and export in
//! [`template`], batch executors in [`executor`].

pub mod error;
pub mod pipeline;

pub use banner_executor as executor;
pub use banner_layout as layout;
pub use banner_template as template;
pub use banner_types as types;

pub use error::PipelineError;
pub use pipeline::{AdaptationPipeline, AdaptedLayout, PipelineBuilder, PipelineConfig};

pub use banner_layout::{adapt, adapt_to, realize, LayoutError, Scene, SceneEdit, SceneObject};
pub use banner_template::{LayoutExport, TemplateCatalog, TemplateError};
pub use banner_types::{Element, ElementKind, ElementSize, Format, FormatError, Template, Zone};
