//! Edge styling.

use super::{Color, GmlBlock, LabelStyle, LineStyle, LineType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Arrowhead drawn at an edge end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowType {
    /// No arrowhead
    #[default]
    None,
    /// Filled triangle
    Delta,
    /// Hollow triangle
    WhiteDelta,
    /// Filled diamond
    Diamond,
    /// Hollow diamond
    WhiteDiamond,
    /// Short filled triangle
    Short,
    /// Open arrow
    Plain,
    /// Filled circle
    Circle,
    /// Hollow circle
    TransparentCircle,
}

impl ArrowType {
    /// Name used in GML output.
    pub fn gml_name(&self) -> &'static str {
        match self {
            ArrowType::None => "none",
            ArrowType::Delta => "delta",
            ArrowType::WhiteDelta => "white_delta",
            ArrowType::Diamond => "diamond",
            ArrowType::WhiteDiamond => "white_diamond",
            ArrowType::Short => "short",
            ArrowType::Plain => "plain",
            ArrowType::Circle => "circle",
            ArrowType::TransparentCircle => "transparent_circle",
        }
    }
}

impl fmt::Display for ArrowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.gml_name())
    }
}

/// Style of an edge.
///
/// The default is a solid black line without arrowheads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeStyle {
    /// Line
    pub line: LineStyle,
    /// Label typography
    pub label: LabelStyle,
    /// Arrowhead at the source end
    pub source_arrow: ArrowType,
    /// Arrowhead at the target end
    pub target_arrow: ArrowType,
}

impl EdgeStyle {
    /// Create the default edge style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set the line color.
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line.color = color;
        self
    }

    /// Builder pattern: set the dash pattern.
    pub fn with_line_type(mut self, line_type: LineType) -> Self {
        self.line.line_type = line_type;
        self
    }

    /// Builder pattern: set the line width.
    pub fn with_line_width(mut self, width: u32) -> Self {
        self.line.width = Some(width);
        self
    }

    /// Builder pattern: set the label typography.
    pub fn with_label(mut self, label: LabelStyle) -> Self {
        self.label = label;
        self
    }

    /// Builder pattern: set the source arrowhead.
    pub fn with_source_arrow(mut self, arrow: ArrowType) -> Self {
        self.source_arrow = arrow;
        self
    }

    /// Builder pattern: set the target arrowhead.
    pub fn with_target_arrow(mut self, arrow: ArrowType) -> Self {
        self.target_arrow = arrow;
        self
    }

    /// Render `LabelGraphics` (when `print_labels` is set) followed by the
    /// `graphics` block.
    ///
    /// Edge labels are always centered on the edge, so the label block is
    /// present whenever labels are printed.
    pub fn to_gml(&self, print_labels: bool) -> String {
        let mut out = String::new();
        if print_labels {
            out.push_str(&self.label.to_gml(None, true));
        }

        let mut block = GmlBlock::open("graphics");
        block.quoted("fill", self.line.color);
        if let Some(width) = self.line.width {
            block.quoted("width", width);
        }
        if self.line.line_type != LineType::Normal {
            block.quoted("style", self.line.line_type);
        }
        if self.source_arrow != ArrowType::None {
            block.quoted("sourceArrow", self.source_arrow);
        }
        if self.target_arrow != ArrowType::None {
            block.quoted("targetArrow", self.target_arrow);
        }

        out.push_str(&block.close());
        out
    }
}
