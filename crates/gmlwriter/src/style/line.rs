//! Line attributes shared by node outlines and edges.

use super::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dash pattern of a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineType {
    /// Solid line
    #[default]
    Normal,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Alternating dashes and dots
    DashedDotted,
}

impl LineType {
    /// Name used in GML output.
    pub fn gml_name(&self) -> &'static str {
        match self {
            LineType::Normal => "NORMAL",
            LineType::Dashed => "DASHED",
            LineType::Dotted => "DOTTED",
            LineType::DashedDotted => "DASHED_DOTTED",
        }
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.gml_name())
    }
}

/// Color, dash pattern and width of a line.
///
/// Color and type always have a value; the width is omitted from output when
/// unset so yEd applies its own default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    /// Line color
    pub color: Color,
    /// Dash pattern
    #[serde(rename = "type")]
    pub line_type: LineType,
    /// Width in pixels
    pub width: Option<u32>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_type: LineType::Normal,
            width: None,
        }
    }
}
