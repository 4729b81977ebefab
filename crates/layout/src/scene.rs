//! Realization of adapted elements into positioned boxes.
//!
//! A [`Scene`] is what a canvas host needs to draw a banner: image boxes with
//! a top-left origin and text boxes with a centered origin, already in paint
//! order. Defaults mirror what the editor applied when a template left a
//! field out.

use crate::LayoutError;
use banner_types::{AssetUri, Color, Element, Format, Point};
use log::debug;

pub const DEFAULT_IMAGE_WIDTH: f64 = 200.0;
pub const DEFAULT_IMAGE_HEIGHT: f64 = 200.0;
pub const DEFAULT_TEXT_POSITION: Point = Point { x: 100.0, y: 100.0 };
pub const DEFAULT_FONT_SIZE: f64 = 48.0;
pub const DEFAULT_FONT_FAMILY: &str = "Montserrat, Arial, sans-serif";
pub const DEFAULT_TEXT: &str = "Sample Text";
pub const TEXT_BOX_WIDTH: f64 = 500.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ImageBox {
    /// The adapted element this box was realized from.
    pub element: Element,
    pub source: AssetUri,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A center-aligned text box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub element: Element,
    pub content: String,
    /// Center of the box.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub font_size: f64,
    pub font_family: String,
    pub fill: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneObject {
    Image(ImageBox),
    Text(TextBox),
}

impl SceneObject {
    pub fn element(&self) -> &Element {
        match self {
            SceneObject::Image(img) => &img.element,
            SceneObject::Text(text) => &text.element,
        }
    }

    pub fn is_background(&self) -> bool {
        self.element().is_background()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub format: Format,
    /// Back to front.
    pub objects: Vec<SceneObject>,
}

impl Scene {
    pub fn width(&self) -> u32 {
        self.format.width
    }

    pub fn height(&self) -> u32 {
        self.format.height
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Builds a scene from elements that were already adapted to `format`.
///
/// Background elements are painted first, keeping their relative order; every
/// other element follows in input order.
pub fn realize(format: Format, elements: &[Element]) -> Result<Scene, LayoutError> {
    let mut backgrounds = Vec::new();
    let mut foreground = Vec::with_capacity(elements.len());

    for element in elements {
        let object = realize_element(element)?;
        if object.is_background() {
            backgrounds.push(object);
        } else {
            foreground.push(object);
        }
    }

    debug!(
        "Realized scene {} with {} background and {} foreground object(s)",
        format,
        backgrounds.len(),
        foreground.len()
    );

    backgrounds.extend(foreground);
    Ok(Scene {
        format,
        objects: backgrounds,
    })
}

fn realize_element(element: &Element) -> Result<SceneObject, LayoutError> {
    if element.kind.is_image_like() {
        let source = element
            .source
            .clone()
            .ok_or_else(|| LayoutError::MissingSource(element.id.clone()))?;
        let origin = element.position.unwrap_or_default();
        let (width, height) = element
            .size
            .and_then(|s| s.pair())
            .map(|s| (s.width, s.height))
            .unwrap_or((DEFAULT_IMAGE_WIDTH, DEFAULT_IMAGE_HEIGHT));

        return Ok(SceneObject::Image(ImageBox {
            element: element.clone(),
            source,
            left: origin.x,
            top: origin.y,
            width,
            height,
        }));
    }

    let center = element.position.unwrap_or(DEFAULT_TEXT_POSITION);
    let content = element
        .content
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_TEXT)
        .to_string();

    Ok(SceneObject::Text(TextBox {
        element: element.clone(),
        content,
        x: center.x,
        y: center.y,
        width: TEXT_BOX_WIDTH,
        font_size: element
            .size
            .and_then(|s| s.scalar())
            .unwrap_or(DEFAULT_FONT_SIZE),
        font_family: element
            .font
            .clone()
            .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
        fill: element.color.unwrap_or(Color::WHITE),
    }))
}
