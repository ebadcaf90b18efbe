//! Data-driven styling loaded from JSON.
//!
//! A style sheet assigns one style per element category:
//!
//! ```json
//! {
//!   "vertex": { "shape": "ellipse", "fill": "#c0c0c0" },
//!   "edge":   { "line": { "type": "DASHED" }, "target_arrow": "short" },
//!   "group":  { "fill": "#ffffff00", "insets": { "top": 15.0 } }
//! }
//! ```

use super::{EdgeStyle, NodeStyle, StyleProvider};
use crate::error::{GmlError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Uniform styling per element category.
///
/// Categories without an entry stay unstyled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleSheet {
    /// Style for every plain vertex
    pub vertex: Option<NodeStyle>,
    /// Style for every edge
    pub edge: Option<EdgeStyle>,
    /// Style for every group node
    pub group: Option<NodeStyle>,
}

impl StyleSheet {
    /// Parse a style sheet from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`GmlError::Serialization`] if the text is not a valid sheet.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| GmlError::serialization("Failed to parse style sheet", Some(e)))
    }

    /// Read and parse a style sheet file.
    ///
    /// # Errors
    ///
    /// Returns [`GmlError::Io`] if the file cannot be read and
    /// [`GmlError::Serialization`] if it is not a valid sheet.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading style sheet from {path:?}");
        let json = std::fs::read_to_string(path).map_err(|e| {
            GmlError::io(format!("Failed to read style sheet: {}", path.display()), e)
        })?;
        Self::from_json(&json)
    }

    /// Serialize the sheet as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GmlError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GmlError::serialization("Failed to serialize style sheet", Some(e)))
    }
}

impl<V, E, G> StyleProvider<V, E, G> for StyleSheet {
    fn vertex_style(&self, _vertex: &V) -> Result<Option<NodeStyle>> {
        Ok(self.vertex.clone())
    }

    fn edge_style(&self, _edge: &E, _source: &V, _target: &V) -> Result<Option<EdgeStyle>> {
        Ok(self.edge.clone())
    }

    fn group_style(&self, _group: &G, _members: &HashSet<V>) -> Result<Option<NodeStyle>> {
        Ok(self.group.clone())
    }
}
