pub mod color;
pub mod element;
pub mod format;
pub mod geometry;
pub mod ids;
pub mod template;

pub use color::Color;
pub use element::{Element, ElementKind, Zone};
pub use format::{Format, FormatError};
pub use geometry::{ElementSize, Point, Size};
pub use ids::{AssetUri, ElementId, TemplateId};
pub use template::Template;
