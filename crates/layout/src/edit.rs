//! Edits applied to a realized scene before it is exported.
//!
//! Every edit names its target by [`ElementId`]. Text edits only apply to text
//! boxes and source replacement only to image boxes; anything else is an error
//! and leaves the scene untouched.

use crate::LayoutError;
use crate::scene::{ImageBox, Scene, SceneObject, TextBox};
use banner_types::{AssetUri, Color, ElementId, Point};
use log::debug;
use serde::{Deserialize, Serialize};

/// A single change to one scene object.
///
/// Serialized with an `op` tag, e.g.
/// `{"op": "set_fill", "element": "price", "color": "#FF0000"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SceneEdit {
    SetText { element: ElementId, text: String },
    SetFill { element: ElementId, color: Color },
    SetFontSize { element: ElementId, size: f64 },
    MoveTo { element: ElementId, position: Point },
    ReplaceImageSource { element: ElementId, source: AssetUri },
}

impl SceneEdit {
    pub fn element(&self) -> &ElementId {
        match self {
            SceneEdit::SetText { element, .. }
            | SceneEdit::SetFill { element, .. }
            | SceneEdit::SetFontSize { element, .. }
            | SceneEdit::MoveTo { element, .. }
            | SceneEdit::ReplaceImageSource { element, .. } => element,
        }
    }
}

impl Scene {
    pub fn object(&self, id: &ElementId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| &o.element().id == id)
    }

    fn object_mut(&mut self, id: &ElementId) -> Result<&mut SceneObject, LayoutError> {
        self.objects
            .iter_mut()
            .find(|o| &o.element().id == id)
            .ok_or_else(|| LayoutError::UnknownElement(id.clone()))
    }

    fn text_mut(&mut self, id: &ElementId) -> Result<&mut TextBox, LayoutError> {
        match self.object_mut(id)? {
            SceneObject::Text(text) => Ok(text),
            SceneObject::Image(_) => Err(LayoutError::KindMismatch {
                element: id.clone(),
                expected: "text",
            }),
        }
    }

    fn image_mut(&mut self, id: &ElementId) -> Result<&mut ImageBox, LayoutError> {
        match self.object_mut(id)? {
            SceneObject::Image(img) => Ok(img),
            SceneObject::Text(_) => Err(LayoutError::KindMismatch {
                element: id.clone(),
                expected: "image",
            }),
        }
    }

    pub fn set_text(&mut self, id: &ElementId, text: impl Into<String>) -> Result<(), LayoutError> {
        self.text_mut(id)?.content = text.into();
        Ok(())
    }

    pub fn set_fill(&mut self, id: &ElementId, color: Color) -> Result<(), LayoutError> {
        self.text_mut(id)?.fill = color;
        Ok(())
    }

    /// Font sizes must be finite and strictly positive.
    pub fn set_font_size(&mut self, id: &ElementId, size: f64) -> Result<(), LayoutError> {
        if !(size.is_finite() && size > 0.0) {
            return Err(LayoutError::InvalidEdit {
                element: id.clone(),
                reason: "font size must be finite and positive",
            });
        }
        self.text_mut(id)?.font_size = size;
        Ok(())
    }

    /// Moves an object's origin: the top-left corner of an image, the center
    /// of a text box.
    pub fn move_to(&mut self, id: &ElementId, position: Point) -> Result<(), LayoutError> {
        if !position.is_finite() {
            return Err(LayoutError::InvalidEdit {
                element: id.clone(),
                reason: "position must be finite",
            });
        }
        match self.object_mut(id)? {
            SceneObject::Image(img) => {
                img.left = position.x;
                img.top = position.y;
            }
            SceneObject::Text(text) => {
                text.x = position.x;
                text.y = position.y;
            }
        }
        Ok(())
    }

    pub fn replace_image_source(
        &mut self,
        id: &ElementId,
        source: impl Into<AssetUri>,
    ) -> Result<(), LayoutError> {
        self.image_mut(id)?.source = source.into();
        Ok(())
    }

    pub fn apply(&mut self, edit: &SceneEdit) -> Result<(), LayoutError> {
        debug!("Applying {:?}", edit);
        match edit {
            SceneEdit::SetText { element, text } => self.set_text(element, text.as_str()),
            SceneEdit::SetFill { element, color } => self.set_fill(element, *color),
            SceneEdit::SetFontSize { element, size } => self.set_font_size(element, *size),
            SceneEdit::MoveTo { element, position } => self.move_to(element, *position),
            SceneEdit::ReplaceImageSource { element, source } => {
                self.replace_image_source(element, source.clone())
            }
        }
    }

    /// Applies edits in order, stopping at the first failure.
    pub fn apply_all<'a>(
        &mut self,
        edits: impl IntoIterator<Item = &'a SceneEdit>,
    ) -> Result<(), LayoutError> {
        edits.into_iter().try_for_each(|edit| self.apply(edit))
    }
}
