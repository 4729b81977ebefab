use serde::{Deserialize, Serialize};

/// A reference point on the canvas, serialized as `[x, y]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

impl From<[f64; 2]> for Size {
    fn from([width, height]: [f64; 2]) -> Self {
        Self { width, height }
    }
}

impl From<Size> for [f64; 2] {
    fn from(s: Size) -> Self {
        [s.width, s.height]
    }
}

/// The size of an element as authored in a template.
///
/// A scalar is a font size (text) or a generic linear dimension; a pair is an
/// explicit box. The two shapes are never converted into one another by the
/// layout rules, so callers can rely on the shape surviving adaptation unless a
/// zone rule explicitly replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementSize {
    Scalar(f64),
    Pair(Size),
}

impl ElementSize {
    pub fn scalar(&self) -> Option<f64> {
        match self {
            ElementSize::Scalar(v) => Some(*v),
            ElementSize::Pair(_) => None,
        }
    }

    pub fn pair(&self) -> Option<Size> {
        match self {
            ElementSize::Scalar(_) => None,
            ElementSize::Pair(s) => Some(*s),
        }
    }

    pub fn scaled(self, factor: f64) -> Self {
        match self {
            ElementSize::Scalar(v) => ElementSize::Scalar(v * factor),
            ElementSize::Pair(s) => ElementSize::Pair(s.scaled(factor)),
        }
    }

    /// True when every component is finite and non-negative.
    pub fn is_well_formed(&self) -> bool {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        match self {
            ElementSize::Scalar(v) => ok(*v),
            ElementSize::Pair(s) => ok(s.width) && ok(s.height),
        }
    }
}

impl From<Size> for ElementSize {
    fn from(s: Size) -> Self {
        ElementSize::Pair(s)
    }
}
