//! The styling capability consumed by the writer.

use super::{EdgeStyle, NodeStyle};
use crate::error::Result;
use std::collections::HashSet;

/// Decides how each exported element looks.
///
/// Every query may answer `Ok(None)` to leave the element unstyled; the writer
/// then emits no `graphics` block for it. Errors abort the export and are
/// returned to the caller unchanged.
pub trait StyleProvider<V, E, G>: Send + Sync {
    /// Style of a plain vertex.
    fn vertex_style(&self, _vertex: &V) -> Result<Option<NodeStyle>> {
        Ok(None)
    }

    /// Style of an edge, given its resolved endpoints.
    fn edge_style(&self, _edge: &E, _source: &V, _target: &V) -> Result<Option<EdgeStyle>> {
        Ok(None)
    }

    /// Style of a group node, given its member vertices.
    fn group_style(&self, _group: &G, _members: &HashSet<V>) -> Result<Option<NodeStyle>> {
        Ok(None)
    }
}

/// Provider that leaves every element unstyled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStyle;

impl<V, E, G> StyleProvider<V, E, G> for NoStyle {}
