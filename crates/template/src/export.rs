//! "Custom layout" export: the realized scene written back as a template.
//!
//! The exported document is itself a valid template (single format, concrete
//! geometry on every element), so it can be fed straight back into a catalog.

use crate::error::TemplateError;
use banner_layout::{Scene, SceneObject};
use banner_types::{Element, ElementSize, Format, Point, Size, Template, TemplateId};
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutExport {
    #[serde(skip)]
    format: Format,
    #[serde(flatten)]
    document: Template,
}

impl LayoutExport {
    pub fn from_scene(template: &Template, scene: &Scene) -> Self {
        let elements = scene.objects.iter().map(exported_element).collect();
        Self {
            format: scene.format,
            document: Template {
                id: TemplateId::new(format!("{}-custom", template.id)),
                name: format!("{} (Custom)", template.name),
                formats: vec![scene.format.to_string()],
                elements,
                thumbnail: None,
            },
        }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn document(&self) -> &Template {
        &self.document
    }

    /// `<template id>_<format>_layout.json`, named after the source template.
    pub fn file_name(&self) -> String {
        format!("{}_{}_layout.json", self.source_id(), self.format)
    }

    fn source_id(&self) -> &str {
        let id = self.document.id.as_str();
        id.strip_suffix("-custom").unwrap_or(id)
    }

    pub fn to_json_pretty(&self) -> Result<String, TemplateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes [`file_name`](Self::file_name) into `dir`. Ids that would place
    /// the file anywhere else are refused.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf, TemplateError> {
        check_file_safe_id(self.source_id()).map_err(|reason| {
            TemplateError::InvalidTemplateId {
                id: TemplateId::new(self.source_id()),
                reason,
            }
        })?;
        let path = dir.as_ref().join(self.file_name());
        fs::write(&path, self.to_json_pretty()?)?;
        info!("Exported layout to {}", path.display());
        Ok(path)
    }
}

/// Template ids end up in export file names, so they must stay a single path
/// component.
pub(crate) fn check_file_safe_id(id: &str) -> Result<(), &'static str> {
    if id.is_empty() {
        return Err("id is empty");
    }
    if id.contains(['/', '\\']) {
        return Err("id contains a path separator");
    }
    if id.contains("..") {
        return Err("id contains '..'");
    }
    if id.chars().any(char::is_control) {
        return Err("id contains control characters");
    }
    Ok(())
}

fn exported_element(object: &SceneObject) -> Element {
    match object {
        SceneObject::Image(img) => Element {
            source: Some(img.source.clone()),
            position: Some(Point::new(img.left, img.top)),
            size: Some(ElementSize::Pair(Size::new(img.width, img.height))),
            ..img.element.clone()
        },
        SceneObject::Text(text) => Element {
            position: Some(Point::new(text.x, text.y)),
            size: Some(ElementSize::Scalar(text.font_size)),
            content: Some(text.content.clone()),
            color: Some(text.fill),
            ..text.element.clone()
        },
    }
}
