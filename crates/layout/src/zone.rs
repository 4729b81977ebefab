//! Placement rules, one per semantic zone.

use banner_types::{Element, ElementSize, Format, Point, Size, Zone};

/// Width every template is authored against. Not derived from template data.
pub const REFERENCE_WIDTH: f64 = 1080.0;

const OFFER_FONT_SIZE: f64 = 96.0;
const OFFER_MIN_FONT_SIZE: f64 = 24.0;
const CTA_FONT_SIZE: f64 = 48.0;
const CTA_MIN_FONT_SIZE: f64 = 18.0;

/// Target canvas geometry plus the reference scale derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

impl Frame {
    pub fn for_format(format: Format) -> Self {
        let width = format.width_f64();
        Self {
            width,
            height: format.height_f64(),
            scale: width / REFERENCE_WIDTH,
        }
    }

    fn at(&self, fx: f64, fy: f64) -> Point {
        Point::new(self.width * fx, self.height * fy)
    }

    fn box_of(&self, fw: f64, fh: f64) -> ElementSize {
        ElementSize::Pair(Size::new(self.width * fw, self.height * fh))
    }
}

/// Returns a copy of `element` with position and size rewritten for `frame`.
pub fn place(element: &Element, frame: &Frame) -> Element {
    let mut out = element.clone();
    match element.zone.as_ref() {
        Some(Zone::Background) => {
            out.position = Some(Point::origin());
            out.size = Some(frame.box_of(1.0, 1.0));
        }
        Some(Zone::Product) => {
            out.position = Some(Point::new(
                frame.width * 0.5 - (frame.width * 0.4) / 2.0,
                frame.height * 0.5 - (frame.height * 0.4) / 2.0,
            ));
            out.size = Some(frame.box_of(0.4, 0.4));
        }
        Some(Zone::Offer) => {
            out.position = Some(frame.at(0.5, 0.2));
            floor_font_size(&mut out, OFFER_FONT_SIZE * frame.scale, OFFER_MIN_FONT_SIZE);
        }
        Some(Zone::CallToAction) => {
            out.position = Some(frame.at(0.5, 0.85));
            floor_font_size(&mut out, CTA_FONT_SIZE * frame.scale, CTA_MIN_FONT_SIZE);
        }
        Some(Zone::Brand) => {
            out.position = Some(frame.at(0.1, 0.1));
            out.size = Some(frame.box_of(0.15, 0.07));
        }
        Some(Zone::Other(_)) | None => {
            out.position = element.position.map(|p| p.scaled(frame.scale));
            out.size = element.size.map(|s| s.scaled(frame.scale));
        }
    }
    out
}

// Pair-shaped sizes are left alone here; only font-sized scalars are replaced.
fn floor_font_size(element: &mut Element, scaled: f64, min: f64) {
    if let Some(ElementSize::Scalar(_)) = element.size {
        element.size = Some(ElementSize::Scalar(scaled.max(min)));
    }
}
