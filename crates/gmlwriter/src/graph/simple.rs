//! Insertion-ordered in-memory graph.

use super::GraphSource;
use crate::error::{GmlError, Result};
use log::{debug, trace};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone)]
struct EdgeEntry<E> {
    edge: E,
    source: usize,
    target: usize,
}

/// A small graph that remembers insertion order.
///
/// Vertices and edges are user values identified by equality. Both are
/// iterated in the order they were added, which makes exports reproducible.
/// Multiple edges between the same pair of vertices are allowed as long as
/// the edge values differ.
#[derive(Debug, Clone)]
pub struct SimpleGraph<V, E> {
    directed: bool,
    vertices: Vec<V>,
    // Position of each vertex in `vertices`
    vertex_index: HashMap<V, usize>,
    edges: Vec<EdgeEntry<E>>,
    // Position of each edge in `edges`
    edge_index: HashMap<E, usize>,
}

impl<V, E> SimpleGraph<V, E>
where
    V: Eq + Hash + Clone + Debug,
    E: Eq + Hash + Clone + Debug,
{
    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::with_direction(true)
    }

    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Self::with_direction(false)
    }

    fn with_direction(directed: bool) -> Self {
        Self {
            directed,
            vertices: Vec::new(),
            vertex_index: HashMap::new(),
            edges: Vec::new(),
            edge_index: HashMap::new(),
        }
    }

    /// Add a vertex.
    ///
    /// Returns `false` if an equal vertex was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.vertex_index.contains_key(&vertex) {
            trace!("Vertex {vertex:?} already present");
            return false;
        }
        debug!("Adding vertex: {vertex:?}");
        self.vertex_index.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        true
    }

    /// Add an edge between two existing vertices.
    ///
    /// # Errors
    ///
    /// Returns [`GmlError::VertexNotFound`] if either endpoint is missing and
    /// [`GmlError::DuplicateEdge`] if an equal edge value was already added.
    pub fn add_edge(&mut self, source: &V, target: &V, edge: E) -> Result<()> {
        let source_idx = self.index_of(source)?;
        let target_idx = self.index_of(target)?;

        if self.edge_index.contains_key(&edge) {
            return Err(GmlError::DuplicateEdge {
                edge: format!("{edge:?}"),
            });
        }

        debug!("Adding edge: {edge:?} ({source:?} -> {target:?})");
        self.edge_index.insert(edge.clone(), self.edges.len());
        self.edges.push(EdgeEntry {
            edge,
            source: source_idx,
            target: target_idx,
        });
        Ok(())
    }

    /// Check if a vertex exists.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertex_index.contains_key(vertex)
    }

    /// Check if an edge exists.
    pub fn contains_edge(&self, edge: &E) -> bool {
        self.edge_index.contains_key(edge)
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn index_of(&self, vertex: &V) -> Result<usize> {
        self.vertex_index
            .get(vertex)
            .copied()
            .ok_or_else(|| GmlError::VertexNotFound {
                vertex: format!("{vertex:?}"),
            })
    }
}

impl<V, E> GraphSource for SimpleGraph<V, E>
where
    V: Eq + Hash + Clone + Debug,
    E: Eq + Hash + Clone + Debug,
{
    type Vertex = V;
    type Edge = E;

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.iter())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.edges.iter().map(|entry| &entry.edge))
    }

    fn edge_endpoints(&self, edge: &E) -> Option<(&V, &V)> {
        let entry = &self.edges[*self.edge_index.get(edge)?];
        Some((&self.vertices[entry.source], &self.vertices[entry.target]))
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
