use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EditorError;
use crate::raster::Shape;

/// How a tool reacts to a pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolMode {
    /// Applies on press and, where meaningful, on every move
    Immediate,
    /// Previews from the press point while dragging and commits on release
    DragShape,
}

/// Enum representing all available tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Pencil,
    Eraser,
    Fill,
    Eyedropper,
    Line,
    Rectangle,
    Circle,
}

impl Tool {
    pub const ALL: [Tool; 7] = [
        Tool::Pencil,
        Tool::Eraser,
        Tool::Fill,
        Tool::Eyedropper,
        Tool::Line,
        Tool::Rectangle,
        Tool::Circle,
    ];

    /// Identifier used for parsing and settings
    pub fn name(self) -> &'static str {
        match self {
            Tool::Pencil => "pencil",
            Tool::Eraser => "eraser",
            Tool::Fill => "fill",
            Tool::Eyedropper => "eyedropper",
            Tool::Line => "line",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
        }
    }

    /// Human readable name for tool buttons
    pub fn label(self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Eraser => "Eraser",
            Tool::Fill => "Fill Bucket",
            Tool::Eyedropper => "Color Picker",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
        }
    }

    pub fn shortcut(self) -> char {
        match self {
            Tool::Pencil => 'P',
            Tool::Eraser => 'E',
            Tool::Fill => 'F',
            Tool::Eyedropper => 'I',
            Tool::Line => 'L',
            Tool::Rectangle => 'R',
            Tool::Circle => 'C',
        }
    }

    /// Tool bound to a keyboard shortcut, ignoring case
    pub fn from_shortcut(key: char) -> Option<Tool> {
        let key = key.to_ascii_uppercase();
        Self::ALL.into_iter().find(|tool| tool.shortcut() == key)
    }

    pub fn mode(self) -> ToolMode {
        match self.shape() {
            Some(_) => ToolMode::DragShape,
            None => ToolMode::Immediate,
        }
    }

    /// The outline drawn by drag-shape tools
    pub fn shape(self) -> Option<Shape> {
        match self {
            Tool::Line => Some(Shape::Line),
            Tool::Rectangle => Some(Shape::Rectangle),
            Tool::Circle => Some(Shape::Circle),
            Tool::Pencil | Tool::Eraser | Tool::Fill | Tool::Eyedropper => None,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EditorError::UnknownTool(s.to_owned()))
    }
}
