//! Editor settings and the fixed tables the UI offers.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{EditorError, Result};
use crate::grid::{Grid, MAX_DIMENSION, MIN_DIMENSION};
use crate::tool::Tool;

/// Zoom factors (screen pixels per cell) offered by the UI
pub const ZOOM_LEVELS: [u32; 8] = [1, 2, 4, 8, 12, 16, 24, 32];

/// How many recently used colors the palette remembers
pub const RECENT_COLORS_LIMIT: usize = 12;

/// Size used when a custom size field cannot be parsed
pub const FALLBACK_DIMENSION: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasPreset {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    pub label: &'static str,
}

pub const CANVAS_PRESETS: [CanvasPreset; 4] = [
    CanvasPreset {
        name: "16x16",
        width: 16,
        height: 16,
        label: "Tiny Icon",
    },
    CanvasPreset {
        name: "32x32",
        width: 32,
        height: 32,
        label: "Small Sprite",
    },
    CanvasPreset {
        name: "64x64",
        width: 64,
        height: 64,
        label: "Medium Sprite",
    },
    CanvasPreset {
        name: "128x128",
        width: 128,
        height: 128,
        label: "Large Art",
    },
];

pub fn find_preset(name: &str) -> Option<&'static CanvasPreset> {
    CANVAS_PRESETS.iter().find(|preset| preset.name == name)
}

pub const DEFAULT_PALETTE: [Color; 24] = [
    Color::rgb(0x00, 0x00, 0x00),
    Color::rgb(0xFF, 0xFF, 0xFF),
    Color::rgb(0xFF, 0x00, 0x00),
    Color::rgb(0x00, 0xFF, 0x00),
    Color::rgb(0x00, 0x00, 0xFF),
    Color::rgb(0xFF, 0xFF, 0x00),
    Color::rgb(0xFF, 0x00, 0xFF),
    Color::rgb(0x00, 0xFF, 0xFF),
    Color::rgb(0xFF, 0x88, 0x00),
    Color::rgb(0x88, 0xFF, 0x00),
    Color::rgb(0x00, 0x88, 0xFF),
    Color::rgb(0xFF, 0x00, 0x88),
    Color::rgb(0x88, 0x00, 0x00),
    Color::rgb(0x00, 0x88, 0x00),
    Color::rgb(0x00, 0x00, 0x88),
    Color::rgb(0x88, 0x88, 0x00),
    Color::rgb(0x88, 0x00, 0x88),
    Color::rgb(0x00, 0x88, 0x88),
    Color::rgb(0x44, 0x44, 0x44),
    Color::rgb(0x88, 0x88, 0x88),
    Color::rgb(0xCC, 0xCC, 0xCC),
    Color::rgb(0xFF, 0x44, 0x44),
    Color::rgb(0x44, 0xFF, 0x44),
    Color::rgb(0x44, 0x44, 0xFF),
];

/// Next larger zoom level, saturating at the largest
pub fn zoom_in(zoom: u32) -> u32 {
    ZOOM_LEVELS
        .iter()
        .copied()
        .find(|&level| level > zoom)
        .unwrap_or(ZOOM_LEVELS[ZOOM_LEVELS.len() - 1])
}

/// Next smaller zoom level, saturating at the smallest
pub fn zoom_out(zoom: u32) -> u32 {
    ZOOM_LEVELS
        .iter()
        .rev()
        .copied()
        .find(|&level| level < zoom)
        .unwrap_or(ZOOM_LEVELS[0])
}

/// Parse a custom size field for the canvas form.
///
/// Reads an optional sign and the leading digits, ignoring whatever follows
/// (`"12px"` is 12). No digits or a zero falls back to 32, and the result is
/// clamped into the accepted range. The editor itself rejects out-of-range
/// sizes instead.
pub fn clamp_custom_dimension(input: &str) -> usize {
    let input = input.trim_start();
    let (negative, rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return FALLBACK_DIMENSION;
    }

    // Too many digits to fit still means "very large"
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    match if negative { -magnitude } else { magnitude } {
        0 => FALLBACK_DIMENSION,
        n => n.clamp(MIN_DIMENSION as i64, MAX_DIMENSION as i64) as usize,
    }
}

/// We derive Deserialize/Serialize so we can persist settings on shutdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorSettings {
    pub canvas_width: usize,
    pub canvas_height: usize,
    pub grid_enabled: bool,
    pub current_color: Color,
    pub background_color: Color,
    pub zoom: u32,
    pub tool: Tool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            canvas_width: 32,
            canvas_height: 32,
            grid_enabled: true,
            current_color: Color::BLACK,
            background_color: Color::Transparent,
            zoom: 12,
            tool: Tool::Pencil,
        }
    }
}

impl EditorSettings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: EditorSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the editor cannot be configured with
    pub fn validate(&self) -> Result<()> {
        if !Grid::valid_dimensions(self.canvas_width, self.canvas_height) {
            return Err(EditorError::InvalidDimensions {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if !ZOOM_LEVELS.contains(&self.zoom) {
            return Err(EditorError::InvalidZoom(self.zoom));
        }
        Ok(())
    }
}
