//! Visual styling of exported elements.
//!
//! Style descriptors are immutable values that render themselves as GML
//! attribute blocks:
//! - [`NodeStyle`]: shape, fill and geometry of vertices and groups
//! - [`EdgeStyle`]: line and arrowheads of edges
//! - [`LineStyle`] and [`LabelStyle`]: attributes shared by both
//!
//! A [`StyleProvider`] decides which descriptor each element gets.

mod color;
mod edge;
mod label;
mod line;
mod node;
mod provider;
mod sheet;

pub use color::Color;
pub use edge::{ArrowType, EdgeStyle};
pub use label::{FontStyle, LabelPlacement, LabelStyle};
pub use line::{LineStyle, LineType};
pub use node::{BorderInsets, Geometry, NodeStyle, Shape};
pub use provider::{NoStyle, StyleProvider};
pub use sheet::StyleSheet;

use log::warn;
use std::fmt::Display;

/// Indentation of a style block's brackets.
pub(crate) const BLOCK_INDENT: &str = "\t\t";
/// Indentation of a style block's members.
pub(crate) const MEMBER_INDENT: &str = "\t\t\t";

/// Accumulates one `name [ ... ]` block.
pub(crate) struct GmlBlock {
    out: String,
}

impl GmlBlock {
    pub(crate) fn open(name: &str) -> Self {
        Self {
            out: format!("{BLOCK_INDENT}{name}\n{BLOCK_INDENT}[\n"),
        }
    }

    pub(crate) fn attr(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.out.push_str(&format!("{MEMBER_INDENT}{key}\t{value}\n"));
        self
    }

    pub(crate) fn quoted(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.attr(key, format_args!("\"{value}\""))
    }

    pub(crate) fn close(mut self) -> String {
        self.out.push_str(BLOCK_INDENT);
        self.out.push_str("]\n");
        self.out
    }
}

/// Render a floating point value in fixed notation.
///
/// Integral values keep one decimal (`10.0`); others use the shortest form
/// that round-trips. GML has no spelling for NaN or infinity, so non-finite
/// values are written as `0.0`.
pub(crate) fn format_number(value: f64) -> String {
    if !value.is_finite() {
        warn!("Non-finite number {value} written as 0.0");
        return "0.0".to_string();
    }
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
