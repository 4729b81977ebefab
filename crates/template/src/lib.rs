//! Template catalogs and layout export.
//!
//! This crate loads the read-only set of banner templates a session works
//! with and writes realized layouts back out as "custom" templates.

pub mod catalog;
pub mod error;
pub mod export;

pub use catalog::{parse_templates, InMemorySource, JsonFileSource, TemplateCatalog, TemplateSource};
pub use error::TemplateError;
pub use export::LayoutExport;
