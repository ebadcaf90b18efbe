//! Label typography and placement.

use super::{Color, GmlBlock};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Font style of a label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FontStyle {
    /// Regular weight, upright
    #[default]
    Plain,
    /// Bold
    Bold,
    /// Italic
    Italic,
    /// Bold and italic
    #[serde(rename = "BOLDITALIC")]
    BoldItalic,
}

impl FontStyle {
    /// Name used in GML output.
    pub fn gml_name(&self) -> &'static str {
        match self {
            FontStyle::Plain => "PLAIN",
            FontStyle::Bold => "BOLD",
            FontStyle::Italic => "ITALIC",
            FontStyle::BoldItalic => "BOLDITALIC",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.gml_name())
    }
}

/// Anchor of a vertex label relative to its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelPlacement {
    /// Centered
    #[serde(rename = "c")]
    Center,
    /// Above the center
    #[serde(rename = "t")]
    Top,
    /// Below the center
    #[serde(rename = "b")]
    Bottom,
    /// Left of the center
    #[serde(rename = "l")]
    Left,
    /// Right of the center
    #[serde(rename = "r")]
    Right,
    /// Top left corner
    #[serde(rename = "tl")]
    TopLeft,
    /// Top right corner
    #[serde(rename = "tr")]
    TopRight,
    /// Bottom left corner
    #[serde(rename = "bl")]
    BottomLeft,
    /// Bottom right corner
    #[serde(rename = "br")]
    BottomRight,
}

impl LabelPlacement {
    /// Anchor code used in GML output.
    pub fn gml_name(&self) -> &'static str {
        match self {
            LabelPlacement::Center => "c",
            LabelPlacement::Top => "t",
            LabelPlacement::Bottom => "b",
            LabelPlacement::Left => "l",
            LabelPlacement::Right => "r",
            LabelPlacement::TopLeft => "tl",
            LabelPlacement::TopRight => "tr",
            LabelPlacement::BottomLeft => "bl",
            LabelPlacement::BottomRight => "br",
        }
    }
}

impl fmt::Display for LabelPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.gml_name())
    }
}

/// Typography of an element's label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    /// Text color
    pub color: Option<Color>,
    /// Background behind the text
    pub background: Option<Color>,
    /// Font size in points
    pub font_size: Option<u32>,
    /// Font style
    pub font_style: FontStyle,
}

impl LabelStyle {
    /// Whether every attribute is unset (or plain).
    pub fn is_plain(&self) -> bool {
        self.color.is_none()
            && self.background.is_none()
            && self.font_size.is_none()
            && self.font_style == FontStyle::Plain
    }

    /// Render the `LabelGraphics` block.
    ///
    /// `anchor` is the placement of vertex labels; `centered` pins edge labels
    /// to the middle of the edge. Returns an empty string when there is
    /// nothing to write.
    pub(crate) fn to_gml(&self, anchor: Option<LabelPlacement>, centered: bool) -> String {
        if self.is_plain() && anchor.is_none() && !centered {
            return String::new();
        }

        let mut block = GmlBlock::open("LabelGraphics");
        if let Some(color) = self.color {
            block.quoted("color", color);
        }
        if let Some(background) = self.background {
            block.quoted("fill", background);
        }
        if let Some(size) = self.font_size {
            block.attr("fontSize", size);
        }
        if self.font_style != FontStyle::Plain {
            block.quoted("fontStyle", self.font_style);
        }
        if let Some(anchor) = anchor {
            block.quoted("anchor", anchor);
        }
        if centered {
            block.quoted("model", "centered");
            block.quoted("position", "center");
        }
        block.close()
    }
}
