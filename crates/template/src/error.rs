use banner_types::{ElementId, FormatError, TemplateId};
use thiserror::Error;

/// Errors that can occur while loading, validating or exporting templates
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template id '{id}' cannot be used: {reason}")]
    InvalidTemplateId { id: TemplateId, reason: &'static str },

    #[error("Duplicate template id '{0}'")]
    DuplicateTemplate(TemplateId),

    #[error("Template '{template}' has more than one element with id '{element}'")]
    DuplicateElement {
        template: TemplateId,
        element: ElementId,
    },

    #[error("Template '{template}' lists an invalid format: {source}")]
    InvalidFormat {
        template: TemplateId,
        source: FormatError,
    },

    #[error("Template '{template}', element '{element}': {reason}")]
    InvalidGeometry {
        template: TemplateId,
        element: ElementId,
        reason: &'static str,
    },

    #[error("Unknown template '{0}'")]
    UnknownTemplate(String),
}
