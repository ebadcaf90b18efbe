//! The GML writer.

use super::config::{GroupMapping, WriterConfig};
use super::escape::quote;
use crate::error::{GmlError, Result};
use crate::graph::GraphSource;
use crate::ids::IdTable;
use log::{debug, info, trace, warn};
use std::any::Any;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display};
use std::fs::File;
use std::hash::Hash;
use std::io::{BufWriter, Write};
use std::path::Path;

/// GML format version written to the header.
const GML_VERSION: &str = "1";

/// Above this many vertices yEd becomes sluggish.
const LARGE_EXPORT_VERTICES: usize = 10_000;

const INDENT: &str = "\t";
const MEMBER_INDENT: &str = "\t\t";

/// Writes graphs as yEd-flavoured GML.
///
/// A writer is built once from a [`WriterConfig`] and can export any number
/// of graphs; every export starts from a fresh id table.
///
/// # Example
///
/// ```
/// use gmlwriter::{GmlWriter, NoStyle, PrintLabels, SimpleGraph, WriterConfig};
///
/// let mut graph: SimpleGraph<&str, &str> = SimpleGraph::undirected();
/// graph.add_vertex("A");
/// graph.add_vertex("B");
/// graph.add_edge(&"A", &"B", "A-B").unwrap();
///
/// let config = WriterConfig::new(NoStyle)
///     .with_print_labels(PrintLabels::NONE.with_vertices())
///     .with_display_labels();
/// let writer: GmlWriter<&str, &str, &str> = GmlWriter::new(config).unwrap();
///
/// let gml = writer.export_to_string(&graph).unwrap();
/// assert!(gml.contains("directed 0"));
/// assert!(gml.contains("label \"A\""));
/// ```
pub struct GmlWriter<V, E, G> {
    config: WriterConfig<V, E, G>,
    // Vertex -> position of its owning group in the mapping
    owners: HashMap<V, usize>,
}

impl<V, E, G> GmlWriter<V, E, G>
where
    V: Any + Eq + Hash + Clone + Debug,
    E: Any + Eq + Hash + Clone + Debug,
    G: Any + Eq + Hash + Clone + Debug,
{
    /// Validate a configuration and build the writer.
    ///
    /// # Errors
    ///
    /// Returns [`GmlError::InvalidConfiguration`] if a label category is
    /// printed without a label function, and
    /// [`GmlError::VertexInMultipleGroups`] if a vertex is listed under more
    /// than one group.
    pub fn new(config: WriterConfig<V, E, G>) -> Result<Self> {
        let labels = config.print_labels;
        let missing = [
            ("vertex", labels.vertices && config.vertex_labels.is_none()),
            ("edge", labels.edges && config.edge_labels.is_none()),
            ("group", labels.groups && config.group_labels.is_none()),
        ];
        if let Some((category, _)) = missing.iter().find(|(_, missing)| *missing) {
            return Err(GmlError::InvalidConfiguration {
                message: format!(
                    "{category} labels are printed but no {category} label function is set"
                ),
            });
        }

        let owners = match &config.groups {
            Some(groups) => build_owner_index(groups)?,
            None => HashMap::new(),
        };

        debug!(
            "Built GML writer: labels={labels:?}, groups={}, grouped vertices={}",
            config.groups.as_ref().map_or(0, GroupMapping::len),
            owners.len()
        );

        Ok(Self { config, owners })
    }

    /// The configuration this writer was built from.
    pub fn config(&self) -> &WriterConfig<V, E, G> {
        &self.config
    }

    /// Export `graph` to `out` and flush it.
    ///
    /// Vertices come first (in graph order, skipping group keys), then group
    /// nodes (in mapping order), then edges (in graph order).
    ///
    /// # Errors
    ///
    /// Returns [`GmlError::Io`] if the sink fails, any error raised by the
    /// style provider, and [`GmlError::EdgeNotFound`] if the graph cannot
    /// resolve the endpoints of one of its own edges. Output written before
    /// the failure stays in the sink.
    pub fn export<W, S>(&self, out: &mut W, graph: &S) -> Result<()>
    where
        W: Write + ?Sized,
        S: GraphSource<Vertex = V, Edge = E> + ?Sized,
    {
        let vertex_count = graph.vertex_count();
        info!(
            "Exporting GML: {vertex_count} vertices, {} edges, {} groups",
            graph.edge_count(),
            self.config.groups.as_ref().map_or(0, GroupMapping::len)
        );
        if vertex_count > LARGE_EXPORT_VERTICES {
            warn!(
                "Exporting large graph ({vertex_count} vertices). yEd may be slow to open it."
            );
        }

        let mut ids = IdTable::new(self.config.id_scheme);

        // Vertex ids are assigned in iteration order before anything else
        for vertex in graph.vertices() {
            self.vertex_id(&mut ids, vertex);
        }

        let mut sink = Sink { out };
        sink.line("", "Creator", quote(&self.config.creator))?;
        sink.line("", "Version", quote(GML_VERSION))?;
        sink.raw("graph\n[\n")?;
        sink.line(INDENT, "label", quote(""))?;
        sink.line(INDENT, "directed", u8::from(graph.is_directed()))?;

        self.write_vertices(&mut sink, &mut ids, graph)?;
        self.write_groups(&mut sink, &mut ids)?;
        self.write_edges(&mut sink, &mut ids, graph)?;

        sink.raw("]\n")?;
        sink.out
            .flush()
            .map_err(|e| GmlError::io("Failed to flush GML output", e))?;

        info!("GML export finished: {} ids assigned", ids.len());
        Ok(())
    }

    /// Export `graph` into a string.
    ///
    /// # Errors
    ///
    /// Returns any error [`export`](Self::export) returns.
    pub fn export_to_string<S>(&self, graph: &S) -> Result<String>
    where
        S: GraphSource<Vertex = V, Edge = E> + ?Sized,
    {
        let mut buffer = Vec::new();
        self.export(&mut buffer, graph)?;
        String::from_utf8(buffer)
            .map_err(|e| GmlError::serialization("Exported GML is not valid UTF-8", Some(e)))
    }

    /// Export `graph` into a file, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns [`GmlError::Io`] if the file cannot be created or written, and
    /// any other error [`export`](Self::export) returns.
    pub fn export_to_path<S, P>(&self, graph: &S, path: P) -> Result<()>
    where
        S: GraphSource<Vertex = V, Edge = E> + ?Sized,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        debug!("Writing GML to {path:?}");
        let file = File::create(path).map_err(|e| {
            GmlError::io(format!("Failed to create GML file: {}", path.display()), e)
        })?;
        self.export(&mut BufWriter::new(file), graph)
    }

    fn write_vertices<W, S>(
        &self,
        sink: &mut Sink<'_, W>,
        ids: &mut IdTable,
        graph: &S,
    ) -> Result<()>
    where
        W: Write + ?Sized,
        S: GraphSource<Vertex = V, Edge = E> + ?Sized,
    {
        let print_labels = self.config.print_labels.vertices;
        let mut written = 0usize;

        for vertex in graph.vertices() {
            if self.is_group_key(vertex) {
                trace!("Skipping vertex {vertex:?}: written as group");
                continue;
            }

            let id = self.vertex_id(ids, vertex);
            trace!("Writing vertex {vertex:?} as node {id}");
            sink.open("node")?;
            sink.line(MEMBER_INDENT, "id", &id)?;

            if print_labels {
                if let Some(label) = &self.config.vertex_labels {
                    sink.line(MEMBER_INDENT, "label", quote(&label(vertex)))?;
                }
            }

            if let Some(style) = self.config.style.vertex_style(vertex)? {
                sink.raw(&style.to_gml(print_labels))?;
            }

            if let Some(groups) = &self.config.groups {
                if let Some(&idx) = self.owners.get(vertex) {
                    let group_id = self.group_id(ids, &groups.entry(idx).0);
                    sink.line(MEMBER_INDENT, "gid", group_id)?;
                }
            }

            sink.close()?;
            written += 1;
        }

        debug!("Wrote {written} vertex nodes");
        Ok(())
    }

    fn write_groups<W>(&self, sink: &mut Sink<'_, W>, ids: &mut IdTable) -> Result<()>
    where
        W: Write + ?Sized,
    {
        let Some(groups) = &self.config.groups else {
            return Ok(());
        };
        let print_labels = self.config.print_labels.groups;

        for (group, members) in groups.iter() {
            let id = self.group_id(ids, group);
            trace!("Writing group {group:?} as node {id} ({} members)", members.len());
            sink.open("node")?;
            sink.line(MEMBER_INDENT, "id", &id)?;

            if print_labels {
                if let Some(label) = &self.config.group_labels {
                    sink.line(MEMBER_INDENT, "label", quote(&label(group)))?;
                }
            }

            if let Some(style) = self.config.style.group_style(group, members)? {
                sink.raw(&style.to_gml(print_labels))?;
            }

            sink.line(MEMBER_INDENT, "isGroup", 1)?;
            sink.close()?;
        }

        debug!("Wrote {} group nodes", groups.len());
        Ok(())
    }

    fn write_edges<W, S>(&self, sink: &mut Sink<'_, W>, ids: &mut IdTable, graph: &S) -> Result<()>
    where
        W: Write + ?Sized,
        S: GraphSource<Vertex = V, Edge = E> + ?Sized,
    {
        let print_labels = self.config.print_labels.edges;
        let mut written = 0usize;

        for edge in graph.edges() {
            let (source, target) =
                graph
                    .edge_endpoints(edge)
                    .ok_or_else(|| GmlError::EdgeNotFound {
                        edge: format!("{edge:?}"),
                    })?;

            let id = self.edge_id(ids, edge);
            trace!("Writing edge {edge:?} as edge {id}");
            sink.open("edge")?;
            sink.line(MEMBER_INDENT, "id", &id)?;
            sink.line(MEMBER_INDENT, "source", self.vertex_id(ids, source))?;
            sink.line(MEMBER_INDENT, "target", self.vertex_id(ids, target))?;

            if print_labels {
                if let Some(label) = &self.config.edge_labels {
                    sink.line(MEMBER_INDENT, "label", quote(&label(edge)))?;
                }
            }

            if let Some(style) = self.config.style.edge_style(edge, source, target)? {
                sink.raw(&style.to_gml(print_labels))?;
            }

            sink.close()?;
            written += 1;
        }

        debug!("Wrote {written} edges");
        Ok(())
    }

    /// The group a vertex stands for, if it is itself a configured group key.
    fn as_group_key<'v>(&self, vertex: &'v V) -> Option<&'v G> {
        let groups = self.config.groups.as_ref()?;
        (vertex as &dyn Any)
            .downcast_ref::<G>()
            .filter(|group| groups.contains_group(group))
    }

    fn is_group_key(&self, vertex: &V) -> bool {
        self.as_group_key(vertex).is_some()
    }

    /// Id of a vertex; a vertex that is a group key resolves to its group node.
    fn vertex_id(&self, ids: &mut IdTable, vertex: &V) -> String {
        if let Some(group) = self.as_group_key(vertex) {
            return self.group_id(ids, group);
        }
        match &self.config.vertex_ids {
            Some(f) => f(vertex),
            None => ids.id_of(vertex),
        }
    }

    fn edge_id(&self, ids: &mut IdTable, edge: &E) -> String {
        match &self.config.edge_ids {
            Some(f) => f(edge),
            None => ids.id_of(edge),
        }
    }

    fn group_id(&self, ids: &mut IdTable, group: &G) -> String {
        match &self.config.group_ids {
            Some(f) => f(group),
            None => ids.id_of(group),
        }
    }
}

impl<V, E, G> fmt::Debug for GmlWriter<V, E, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GmlWriter")
            .field("config", &self.config)
            .field("grouped_vertices", &self.owners.len())
            .finish()
    }
}

/// Invert the group mapping, rejecting vertices listed under two groups.
fn build_owner_index<G, V>(groups: &GroupMapping<G, V>) -> Result<HashMap<V, usize>>
where
    G: Eq + Hash + Clone + Debug,
    V: Eq + Hash + Clone + Debug,
{
    let mut owners = HashMap::new();
    for (idx, (group, members)) in groups.iter().enumerate() {
        for member in members {
            if let Some(first) = owners.insert(member.clone(), idx) {
                return Err(GmlError::VertexInMultipleGroups {
                    vertex: format!("{member:?}"),
                    first_group: format!("{:?}", groups.entry(first).0),
                    second_group: format!("{group:?}"),
                });
            }
        }
    }
    Ok(owners)
}

/// Line-oriented writer over the output sink.
struct Sink<'a, W: Write + ?Sized> {
    out: &'a mut W,
}

impl<W: Write + ?Sized> Sink<'_, W> {
    fn raw(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .map_err(|e| GmlError::io("Failed to write GML output", e))
    }

    fn line(&mut self, indent: &str, key: &str, value: impl Display) -> Result<()> {
        writeln!(self.out, "{indent}{key} {value}")
            .map_err(|e| GmlError::io(format!("Failed to write GML attribute '{key}'"), e))
    }

    fn open(&mut self, element: &str) -> Result<()> {
        self.raw(&format!("{INDENT}{element}\n{INDENT}[\n"))
    }

    fn close(&mut self) -> Result<()> {
        self.raw(&format!("{INDENT}]\n"))
    }
}
