//! Auto-layout for banner templates.
//!
//! [`adapt`] recomputes element positions and sizes for a target format using
//! per-zone placement rules, falling back to proportional scaling against a
//! fixed 1080px authoring width. [`scene::realize`] turns the adapted elements
//! into positioned boxes a canvas host can draw directly, and [`SceneEdit`]s
//! change those boxes before export.

use banner_types::{ElementId, FormatError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Validation failed: {0}")]
    Validation(#[from] FormatError),
    #[error("Image element '{0}' has no source")]
    MissingSource(ElementId),
    #[error("No scene object for element '{0}'")]
    UnknownElement(ElementId),
    #[error("Element '{element}' is not {expected}")]
    KindMismatch {
        element: ElementId,
        expected: &'static str,
    },
    #[error("Invalid edit for element '{element}': {reason}")]
    InvalidEdit {
        element: ElementId,
        reason: &'static str,
    },
}

pub mod adapter;
pub mod edit;
pub mod scene;
pub mod zone;

pub use self::adapter::{adapt, adapt_to};
pub use self::edit::SceneEdit;
pub use self::scene::{realize, ImageBox, Scene, SceneObject, TextBox};
pub use self::zone::{Frame, REFERENCE_WIDTH};

#[cfg(test)]
mod scene_test;
#[cfg(test)]
mod test_utils;
