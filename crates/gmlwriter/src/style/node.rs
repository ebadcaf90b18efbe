//! Node (vertex and group) styling.

use super::{format_number, Color, GmlBlock, LabelPlacement, LabelStyle, LineStyle, LineType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Rectangle
    #[default]
    Rectangle,
    /// Rectangle with rounded corners
    RoundRectangle,
    /// Ellipse
    Ellipse,
    /// Triangle
    Triangle,
    /// Diamond
    Diamond,
    /// Octagon
    Octagon,
    /// Parallelogram
    Parallelogram,
    /// Hexagon
    Hexagon,
    /// Rectangle with a 3D border
    Rectangle3d,
    /// Trapezoid, wide side down
    Trapezoid,
    /// Trapezoid, wide side up
    Trapezoid2,
}

impl Shape {
    /// Name used in GML output.
    pub fn gml_name(&self) -> &'static str {
        match self {
            Shape::Rectangle => "rectangle",
            Shape::RoundRectangle => "roundrectangle",
            Shape::Ellipse => "ellipse",
            Shape::Triangle => "triangle",
            Shape::Diamond => "diamond",
            Shape::Octagon => "octagon",
            Shape::Parallelogram => "parallelogram",
            Shape::Hexagon => "hexagon",
            Shape::Rectangle3d => "rectangle3d",
            Shape::Trapezoid => "trapezoid",
            Shape::Trapezoid2 => "trapezoid2",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.gml_name())
    }
}

/// Absolute position and size of a node, passed through to yEd as is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Geometry {
    /// Create a geometry from position and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Border insets of a group node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderInsets {
    /// Top inset
    pub top: Option<f64>,
    /// Bottom inset
    pub bottom: Option<f64>,
    /// Left inset
    pub left: Option<f64>,
    /// Right inset
    pub right: Option<f64>,
}

impl BorderInsets {
    /// The same inset on all four sides.
    pub fn uniform(inset: f64) -> Self {
        Self {
            top: Some(inset),
            bottom: Some(inset),
            left: Some(inset),
            right: Some(inset),
        }
    }
}

/// Style of a vertex or group node.
///
/// The default is a white rectangle with a solid black outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeStyle {
    /// Shape
    pub shape: Shape,
    /// Fill color; no `fill` attribute is written when unset
    pub fill: Option<Color>,
    /// Outline
    pub line: LineStyle,
    /// Label typography
    pub label: LabelStyle,
    /// Label anchor
    pub label_placement: Option<LabelPlacement>,
    /// Absolute position and size
    pub geometry: Option<Geometry>,
    /// Border insets (useful for groups)
    pub insets: BorderInsets,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            shape: Shape::Rectangle,
            fill: Some(Color::WHITE),
            line: LineStyle::default(),
            label: LabelStyle::default(),
            label_placement: None,
            geometry: None,
            insets: BorderInsets::default(),
        }
    }
}

impl NodeStyle {
    /// Create the default node style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set the shape.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Builder pattern: set the fill color.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Builder pattern: drop the fill color.
    pub fn without_fill(mut self) -> Self {
        self.fill = None;
        self
    }

    /// Builder pattern: set the outline color.
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line.color = color;
        self
    }

    /// Builder pattern: set the outline dash pattern.
    pub fn with_line_type(mut self, line_type: LineType) -> Self {
        self.line.line_type = line_type;
        self
    }

    /// Builder pattern: set the outline width.
    pub fn with_line_width(mut self, width: u32) -> Self {
        self.line.width = Some(width);
        self
    }

    /// Builder pattern: set the label typography.
    pub fn with_label(mut self, label: LabelStyle) -> Self {
        self.label = label;
        self
    }

    /// Builder pattern: set the label anchor.
    pub fn with_label_placement(mut self, placement: LabelPlacement) -> Self {
        self.label_placement = Some(placement);
        self
    }

    /// Builder pattern: set position and size.
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Builder pattern: set border insets.
    pub fn with_insets(mut self, insets: BorderInsets) -> Self {
        self.insets = insets;
        self
    }

    /// Render the `graphics` block, followed by `LabelGraphics` when
    /// `print_labels` is set and the label has something to say.
    pub fn to_gml(&self, print_labels: bool) -> String {
        let mut block = GmlBlock::open("graphics");

        if let Some(geometry) = &self.geometry {
            block
                .attr("x", format_number(geometry.x))
                .attr("y", format_number(geometry.y))
                .attr("w", format_number(geometry.width))
                .attr("h", format_number(geometry.height));
        }

        block.quoted("type", self.shape);
        if let Some(fill) = self.fill {
            block.quoted("fill", fill);
        }
        block.quoted("line", self.line.color);

        if self.line.line_type != LineType::Normal {
            block.quoted("outlineStyle", self.line.line_type);
        }
        if let Some(width) = self.line.width {
            block.quoted("outlineWidth", width);
        }

        let insets = [
            ("topBorderInset", self.insets.top),
            ("bottomBorderInset", self.insets.bottom),
            ("leftBorderInset", self.insets.left),
            ("rightBorderInset", self.insets.right),
        ];
        for (key, inset) in insets.into_iter().filter_map(|(k, v)| v.map(|v| (k, v))) {
            block.attr(key, format_number(inset));
        }

        let mut out = block.close();
        if print_labels {
            out.push_str(&self.label.to_gml(self.label_placement, false));
        }
        out
    }
}
