//! Output formats of the form `"<width>x<height>"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Malformed format '{0}': expected '<width>x<height>' with positive integers")]
    Malformed(String),
    #[error("Format '{0}' has a zero dimension")]
    ZeroDimension(String),
}

/// A target canvas geometry in pixels.
///
/// Formats double as lookup keys in a template's format list, so `Display`
/// reproduces the canonical `WxH` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Format {
    pub width: u32,
    pub height: u32,
}

impl Format {
    pub fn new(width: u32, height: u32) -> Result<Self, FormatError> {
        if width == 0 || height == 0 {
            return Err(FormatError::ZeroDimension(format!("{}x{}", width, height)));
        }
        Ok(Self { width, height })
    }

    /// Splits on the literal `x` and reads each half as a positive integer.
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        let malformed = || FormatError::Malformed(s.to_string());

        let mut parts = s.split('x');
        let (Some(w), Some(h), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };

        let dimension = |part: &str| -> Result<u32, FormatError> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            part.parse::<u32>().map_err(|_| malformed())
        };

        let width = dimension(w)?;
        let height = dimension(h)?;
        if width == 0 || height == 0 {
            return Err(FormatError::ZeroDimension(s.to_string()));
        }
        Ok(Self { width, height })
    }

    pub fn width_f64(&self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f64(&self) -> f64 {
        f64::from(self.height)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::parse(s)
    }
}

impl TryFrom<String> for Format {
    type Error = FormatError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Format::parse(&s)
    }
}

impl From<Format> for String {
    fn from(f: Format) -> Self {
        f.to_string()
    }
}
