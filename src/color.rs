use std::fmt;
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// The value stored in one grid cell.
///
/// Absence of paint is the explicit `Transparent` sentinel, never a missing value.
/// Equality is plain value equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    #[default]
    Transparent,
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Color = Color::Rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
    pub const RED: Color = Color::Rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Color = Color::Rgb(0x00, 0xFF, 0x00);
    pub const BLUE: Color = Color::Rgb(0x00, 0x00, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    pub fn is_transparent(self) -> bool {
        matches!(self, Color::Transparent)
    }

    /// RGB channels, or `None` for transparent
    pub fn channels(self) -> Option<[u8; 3]> {
        match self {
            Color::Transparent => None,
            Color::Rgb(r, g, b) => Some([r, g, b]),
        }
    }

    /// Normalized text form: `#RRGGBB` in upper case, or `transparent`
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Fully opaque RGBA for export; transparent maps to alpha 0
    pub fn to_rgba(self) -> image::Rgba<u8> {
        match self {
            Color::Transparent => image::Rgba([0, 0, 0, 0]),
            Color::Rgb(r, g, b) => image::Rgba([r, g, b, 0xFF]),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Transparent => write!(f, "transparent"),
            Color::Rgb(r, g, b) => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
        }
    }
}

impl FromStr for Color {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(Color::Transparent);
        }

        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || EditorError::InvalidColor(s.to_owned());
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Color::Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            // Shorthand #RGB expands each digit: #F80 -> #FF8800
            3 => {
                let expand = |i: usize| channel(&hex[i..=i].repeat(2));
                Ok(Color::Rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = EditorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl From<Color> for Color32 {
    fn from(color: Color) -> Self {
        match color {
            Color::Transparent => Color32::TRANSPARENT,
            Color::Rgb(r, g, b) => Color32::from_rgb(r, g, b),
        }
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::Rgb(r, g, b)
    }
}
