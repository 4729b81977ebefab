use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

fn default_one() -> f32 {
    1.0
}

/// An sRGB color with straight alpha.
///
/// Deserializes from `#RGB`, `#RRGGBB`, `#RRGGBBAA` or an `{r, g, b, a}` map and
/// always serializes back to a hex string, which is what canvas hosts expect
/// for fills.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.hash(state);
        self.g.hash(state);
        self.b.hash(state);
        self.a.to_bits().hash(state);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0, g: 0, b: 0, a: 1.0 }
    }
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 1.0 };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse a hex color string (#RGB, #RRGGBB or #RRGGBBAA format)
    pub fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let Some(hex) = s.strip_prefix('#') else {
            return Err(format!("Color must start with #, got: {}", s));
        };
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex digits in color: {}", s));
        }
        let channel = |digits: &str, name: &str| {
            u8::from_str_radix(digits, 16).map_err(|e| format!("Invalid {} component: {}", name, e))
        };

        match hex.len() {
            3 => {
                // #RGB format - expand each digit
                let r = channel(&hex[0..1].repeat(2), "red")?;
                let g = channel(&hex[1..2].repeat(2), "green")?;
                let b = channel(&hex[2..3].repeat(2), "blue")?;
                Ok(Color::rgb(r, g, b))
            }
            6 | 8 => {
                let r = channel(&hex[0..2], "red")?;
                let g = channel(&hex[2..4], "green")?;
                let b = channel(&hex[4..6], "blue")?;
                let a = if hex.len() == 8 {
                    channel(&hex[6..8], "alpha")? as f32 / 255.0
                } else {
                    1.0
                };
                Ok(Color { r, g, b, a })
            }
            _ => Err(format!(
                "Invalid hex color length: expected 3, 6 or 8, got {}",
                hex.len()
            )),
        }
    }

    /// Uppercase `#RRGGBB`, or `#RRGGBBAA` when the color is not opaque.
    pub fn to_hex(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8, #[serde(default = "default_one")] a: f32 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b, a } => Ok(Color { r, g, b, a }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_and_long_hex() {
        assert_eq!(Color::parse_hex("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse_hex("#FF8000").unwrap(), Color::rgb(255, 128, 0));
        let translucent = Color::parse_hex("#00000080").unwrap();
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Color::parse_hex("white").is_err());
        assert!(Color::parse_hex("#12345").is_err());
        assert!(Color::parse_hex("#GGGGGG").is_err());
    }

    #[test]
    fn test_parse_rejects_non_ascii_and_signs() {
        // 'é' is two bytes, so the byte length matches the 6-digit form.
        assert!(Color::parse_hex("#a\u{e9}aaa").is_err());
        assert!(Color::parse_hex("#\u{e9}a").is_err());
        assert!(Color::parse_hex("#+fffff").is_err());

        let err = serde_json::from_str::<Color>("\"#a\u{e9}aaa\"").unwrap_err();
        assert!(err.to_string().contains("Invalid hex digits"));
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let c: Color = serde_json::from_str("\"#ffcc00\"").unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#FFCC00\"");

        let from_map: Color = serde_json::from_str(r#"{"r": 1, "g": 2, "b": 3}"#).unwrap();
        assert_eq!(from_map, Color::rgb(1, 2, 3));
    }
}
