//! Color type
//!
//! Colors serialize as `#RRGGBB` (or `#RRGGBBAA` when translucent) so theme
//! files and render snapshots stay human readable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// RGBA color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Parse `#RRGGBB`, `#RRGGBBAA`, or the same without the leading `#`
    pub fn parse_hex(input: &str) -> Result<Self, CoreError> {
        let digits = input.trim().trim_start_matches('#');
        let invalid = || CoreError::InvalidHexColor(input.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let rgb = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                Ok(Self::from_hex(rgb))
            }
            8 => {
                let rgba = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                let alpha = (rgba & 0xFF) as f32 / 255.0;
                Ok(Self::from_hex(rgba >> 8).with_alpha(alpha))
            }
            _ => Err(invalid()),
        }
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when alpha is below 1.0
    pub fn to_hex_string(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (
            channel(self.r),
            channel(self.g),
            channel(self.b),
            channel(self.a),
        );
        if a == u8::MAX {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Color {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_hex(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_with_and_without_hash() {
        assert_eq!(Color::parse_hex("#428AF8"), Ok(Color::from_hex(0x428AF8)));
        assert_eq!(Color::parse_hex("428af8"), Ok(Color::from_hex(0x428AF8)));
    }

    #[test]
    fn test_parse_hex_with_alpha() {
        let color = Color::parse_hex("#FFFFFF00").unwrap();
        assert_eq!(color.a, 0.0);
        assert_eq!(color.to_hex_string(), "#FFFFFF00");
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(matches!(
            Color::parse_hex("#12345"),
            Err(CoreError::InvalidHexColor(_))
        ));
        assert!(Color::parse_hex("#GGGGGG").is_err());
        assert!(Color::parse_hex("").is_err());
    }

    #[test]
    fn test_hex_string_is_uppercase_and_opaque_by_default() {
        assert_eq!(Color::from_hex(0xf8262f).to_hex_string(), "#F8262F");
        assert_eq!(Color::WHITE.to_string(), "#FFFFFF");
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::from_hex(0xBEBEBE)).unwrap();
        assert_eq!(json, "\"#BEBEBE\"");

        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::from_hex(0xBEBEBE));

        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
