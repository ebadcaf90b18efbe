//! Graph capability consumed by the exporter.
//!
//! This module defines the building blocks the writer needs from a graph:
//! - [`GraphSource`]: read-only view over vertices, edges and endpoints
//! - [`SimpleGraph`]: an insertion-ordered in-memory graph implementing it

mod simple;

pub use simple::SimpleGraph;

/// Read-only view of a graph, as consumed by [`GmlWriter`](crate::GmlWriter).
///
/// Implementations must iterate vertices in the same order every time they are
/// asked during one export; the writer walks the vertex set twice and relies on
/// that order for deterministic id assignment.
pub trait GraphSource {
    /// Vertex type.
    type Vertex;
    /// Edge type.
    type Edge;

    /// All vertices, in a deterministic order.
    fn vertices(&self) -> Box<dyn Iterator<Item = &Self::Vertex> + '_>;

    /// All edges, in a deterministic order.
    fn edges(&self) -> Box<dyn Iterator<Item = &Self::Edge> + '_>;

    /// Source and target of an edge, or `None` if the edge is not part of this graph.
    fn edge_endpoints(&self, edge: &Self::Edge) -> Option<(&Self::Vertex, &Self::Vertex)>;

    /// Whether edges are directed.
    fn is_directed(&self) -> bool;

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    /// Number of edges.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }
}
