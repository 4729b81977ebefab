use crate::element::Element;
use crate::format::{Format, FormatError};
use crate::ids::{AssetUri, ElementId, TemplateId};
use serde::{Deserialize, Serialize};

/// An externally supplied banner design. Treated as read-only by the layout code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    #[serde(alias = "nombre")]
    pub name: String,
    /// Supported output formats as `WxH` strings, in display order.
    #[serde(default, alias = "formatos")]
    pub formats: Vec<String>,
    #[serde(default, alias = "elementos")]
    pub elements: Vec<Element>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<AssetUri>,
}

impl Template {
    pub fn parsed_formats(&self) -> Result<Vec<Format>, FormatError> {
        self.formats.iter().map(|f| Format::parse(f)).collect()
    }

    /// True when `format` appears in the template's format list. Entries that
    /// fail to parse never match.
    pub fn supports(&self, format: &Format) -> bool {
        self.formats
            .iter()
            .filter_map(|f| Format::parse(f).ok())
            .any(|f| f == *format)
    }

    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| &e.id == id)
    }
}
