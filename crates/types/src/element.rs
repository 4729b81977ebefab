//! Abstract design elements as authored in templates.
//!
//! Template files written by the original banner tool use Spanish keys and
//! zone names (`zona: "fondo"`); both spellings are accepted on input and the
//! English ones are written on output.

use crate::color::Color;
use crate::geometry::{ElementSize, Point};
use crate::ids::{AssetUri, ElementId};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    #[serde(alias = "imagen")]
    Image,
    #[serde(alias = "texto")]
    Text,
    Logo,
}

impl ElementKind {
    /// Image and logo elements are both realized as bitmaps.
    pub fn is_image_like(self) -> bool {
        matches!(self, ElementKind::Image | ElementKind::Logo)
    }
}

/// Semantic placement role of an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Zone {
    Product,
    Offer,
    Brand,
    Background,
    CallToAction,
    /// A zone name with no placement rule; kept verbatim.
    Other(String),
}

impl Zone {
    pub fn as_str(&self) -> &str {
        match self {
            Zone::Product => "product",
            Zone::Offer => "offer",
            Zone::Brand => "brand",
            Zone::Background => "background",
            Zone::CallToAction => "cta",
            Zone::Other(name) => name,
        }
    }

    pub fn is_background(&self) -> bool {
        matches!(self, Zone::Background)
    }
}

impl From<&str> for Zone {
    fn from(s: &str) -> Self {
        match s {
            "product" | "producto" => Zone::Product,
            "offer" | "oferta" => Zone::Offer,
            "brand" | "marca" => Zone::Brand,
            "background" | "fondo" => Zone::Background,
            "cta" | "call-to-action" => Zone::CallToAction,
            other => Zone::Other(other.to_string()),
        }
    }
}

impl From<String> for Zone {
    fn from(s: String) -> Self {
        Zone::from(s.as_str())
    }
}

impl From<Zone> for String {
    fn from(z: Zone) -> Self {
        z.as_str().to_string()
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(alias = "tipo")]
    pub kind: ElementKind,
    #[serde(default, alias = "zona", skip_serializing_if = "Option::is_none")]
    pub zone: Option<Zone>,
    #[serde(default, alias = "src", skip_serializing_if = "Option::is_none")]
    pub source: Option<AssetUri>,
    #[serde(default, alias = "contenido", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(default, alias = "tam", skip_serializing_if = "Option::is_none")]
    pub size: Option<ElementSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, alias = "pos", skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
}

impl Element {
    fn bare(id: impl Into<ElementId>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            zone: None,
            source: None,
            content: None,
            font: None,
            size: None,
            color: None,
            position: None,
        }
    }

    pub fn image(id: impl Into<ElementId>, source: impl Into<AssetUri>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::bare(id, ElementKind::Image)
        }
    }

    pub fn logo(id: impl Into<ElementId>, source: impl Into<AssetUri>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::bare(id, ElementKind::Logo)
        }
    }

    pub fn text(id: impl Into<ElementId>, content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::bare(id, ElementKind::Text)
        }
    }

    pub fn with_zone(mut self, zone: impl Into<Zone>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    pub fn with_size(mut self, size: ElementSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Point::new(x, y));
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn is_background(&self) -> bool {
        self.zone.as_ref().is_some_and(Zone::is_background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use serde_json::json;

    #[test]
    fn test_zone_names_and_aliases() {
        assert_eq!(Zone::from("fondo"), Zone::Background);
        assert_eq!(Zone::from("call-to-action"), Zone::CallToAction);
        assert_eq!(Zone::from("cta").as_str(), "cta");
        assert_eq!(Zone::from("sidebar"), Zone::Other("sidebar".to_string()));
        assert_eq!(Zone::from("sidebar").as_str(), "sidebar");
    }

    #[test]
    fn test_deserialize_original_keys() {
        let el: Element = serde_json::from_value(json!({
            "id": "price",
            "tipo": "texto",
            "zona": "oferta",
            "contenido": "-50%",
            "tam": 96,
            "color": "#FFFFFF",
            "pos": [540, 216]
        }))
        .unwrap();

        assert_eq!(el.kind, ElementKind::Text);
        assert_eq!(el.zone, Some(Zone::Offer));
        assert_eq!(el.content.as_deref(), Some("-50%"));
        assert_eq!(el.size, Some(ElementSize::Scalar(96.0)));
        assert_eq!(el.color, Some(Color::WHITE));
        assert_eq!(el.position, Some(Point::new(540.0, 216.0)));
    }

    #[test]
    fn test_serialize_uses_canonical_keys_and_skips_absent() {
        let el = Element::image("hero", "https://cdn.example.com/hero.png")
            .with_zone(Zone::Product)
            .with_size(ElementSize::Pair(Size::new(400.0, 300.0)));

        let value = serde_json::to_value(&el).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "hero",
                "kind": "image",
                "zone": "product",
                "source": "https://cdn.example.com/hero.png",
                "size": [400.0, 300.0]
            })
        );
    }

    #[test]
    fn test_unknown_zone_survives_round_trip() {
        let el: Element = serde_json::from_value(json!({
            "id": "deco", "kind": "image", "zone": "ribbon", "source": "r.png"
        }))
        .unwrap();
        assert_eq!(el.zone, Some(Zone::Other("ribbon".into())));
        assert_eq!(serde_json::to_value(&el).unwrap()["zone"], "ribbon");
    }
}
