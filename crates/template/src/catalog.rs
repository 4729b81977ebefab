//! Loading and validation of the read-only template catalog.

use crate::error::TemplateError;
use crate::export::check_file_safe_id;
use banner_types::{Format, Template, TemplateId};
use itertools::Itertools;
use log::{debug, info};
use std::collections::HashMap;
use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where templates come from.
///
/// Catalogs are loaded once at startup; sources only need to hand over the raw
/// template list; validation happens in [`TemplateCatalog::load`].
pub trait TemplateSource: Debug {
    fn load(&self) -> Result<Vec<Template>, TemplateError>;

    /// Returns a human-readable name for this source (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Reads a JSON document holding either a single template or an array of them.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TemplateSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Template>, TemplateError> {
        let source = fs::read_to_string(&self.path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to read catalog from '{}': {}", self.path.display(), e),
            )
        })?;
        parse_templates(&source)
    }

    fn name(&self) -> &'static str {
        "json-file"
    }
}

/// Templates that are already in memory, e.g. built programmatically in tests.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    templates: Vec<Template>,
}

impl InMemorySource {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }
}

impl TemplateSource for InMemorySource {
    fn load(&self) -> Result<Vec<Template>, TemplateError> {
        Ok(self.templates.clone())
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}

/// Parses a catalog document. Accepts a template array or a single template.
///
/// The document shape is decided up front so a bad field is reported with its
/// own error and position.
pub fn parse_templates(source: &str) -> Result<Vec<Template>, TemplateError> {
    let value: serde_json::Value = serde_json::from_str(source)?;
    if value.is_array() {
        Ok(serde_json::from_str(source)?)
    } else {
        Ok(vec![serde_json::from_str(source)?])
    }
}

/// A validated, immutable set of templates keyed by id.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<Arc<Template>>,
    index: HashMap<TemplateId, usize>,
}

impl TemplateCatalog {
    pub fn load(source: &dyn TemplateSource) -> Result<Self, TemplateError> {
        let templates = source.load()?;
        let catalog = Self::from_templates(templates)?;
        info!(
            "Loaded {} template(s) from {} source",
            catalog.len(),
            source.name()
        );
        Ok(catalog)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        Self::load(&JsonFileSource::new(path.as_ref()))
    }

    pub fn from_json_str(source: &str) -> Result<Self, TemplateError> {
        Self::from_templates(parse_templates(source)?)
    }

    pub fn from_templates(templates: Vec<Template>) -> Result<Self, TemplateError> {
        let mut index = HashMap::with_capacity(templates.len());
        let mut stored = Vec::with_capacity(templates.len());

        for template in templates {
            validate(&template)?;
            if index.contains_key(&template.id) {
                return Err(TemplateError::DuplicateTemplate(template.id));
            }
            debug!(
                "Registered template '{}' ({} element(s), formats: {})",
                template.id,
                template.elements.len(),
                template.formats.iter().join(", ")
            );
            index.insert(template.id.clone(), stored.len());
            stored.push(Arc::new(template));
        }

        Ok(Self {
            templates: stored,
            index,
        })
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Template>> {
        self.index
            .get(&TemplateId::new(id))
            .map(|&i| &self.templates[i])
    }

    /// Like [`get`](Self::get) but reports unknown ids as an error.
    pub fn require(&self, id: &str) -> Result<&Arc<Template>, TemplateError> {
        self.get(id)
            .ok_or_else(|| TemplateError::UnknownTemplate(id.to_string()))
    }

    /// Templates in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Template>> {
        self.templates.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &TemplateId> {
        self.templates.iter().map(|t| &t.id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn validate(template: &Template) -> Result<(), TemplateError> {
    check_file_safe_id(template.id.as_str()).map_err(|reason| TemplateError::InvalidTemplateId {
        id: template.id.clone(),
        reason,
    })?;

    for format in &template.formats {
        Format::parse(format).map_err(|source| TemplateError::InvalidFormat {
            template: template.id.clone(),
            source,
        })?;
    }

    if let Some(dup) = template.elements.iter().map(|e| &e.id).duplicates().next() {
        return Err(TemplateError::DuplicateElement {
            template: template.id.clone(),
            element: dup.clone(),
        });
    }

    for element in &template.elements {
        let geometry_error = |reason| TemplateError::InvalidGeometry {
            template: template.id.clone(),
            element: element.id.clone(),
            reason,
        };
        if element.position.is_some_and(|p| !p.is_finite()) {
            return Err(geometry_error("position must be finite"));
        }
        if element.size.is_some_and(|s| !s.is_well_formed()) {
            return Err(geometry_error("size must be finite and non-negative"));
        }
    }
    Ok(())
}
