//! Writer configuration.

use crate::ids::IdScheme;
use crate::style::StyleProvider;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Creator string written to the document header by default.
pub const DEFAULT_CREATOR: &str = "gmlwriter - yEd GML exporter";

/// Function mapping an element to its id.
pub type IdFn<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

/// Function mapping an element to its label text.
pub type LabelFn<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

/// Which label categories are written.
///
/// Disabling a category drops both the `label` field and its `LabelGraphics`
/// block; other styling is unaffected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintLabels {
    /// Print vertex labels
    pub vertices: bool,
    /// Print edge labels
    pub edges: bool,
    /// Print group labels
    pub groups: bool,
}

impl PrintLabels {
    /// No labels at all.
    pub const NONE: PrintLabels = PrintLabels {
        vertices: false,
        edges: false,
        groups: false,
    };

    /// Every label category.
    pub const ALL: PrintLabels = PrintLabels {
        vertices: true,
        edges: true,
        groups: true,
    };

    /// Builder pattern: enable vertex labels.
    pub fn with_vertices(mut self) -> Self {
        self.vertices = true;
        self
    }

    /// Builder pattern: enable edge labels.
    pub fn with_edges(mut self) -> Self {
        self.edges = true;
        self
    }

    /// Builder pattern: enable group labels.
    pub fn with_groups(mut self) -> Self {
        self.groups = true;
        self
    }
}

/// Groups and their member vertices, in insertion order.
///
/// Group nodes are written in the order groups were first inserted.
#[derive(Debug, Clone)]
pub struct GroupMapping<G, V> {
    groups: Vec<(G, HashSet<V>)>,
    // Position of each group in `groups`
    index: HashMap<G, usize>,
}

impl<G, V> Default for GroupMapping<G, V> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<G, V> GroupMapping<G, V>
where
    G: Eq + Hash + Clone,
    V: Eq + Hash,
{
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the members of a group.
    ///
    /// Returns the previous members if the group was already present; it
    /// keeps its original position.
    pub fn insert(
        &mut self,
        group: G,
        members: impl IntoIterator<Item = V>,
    ) -> Option<HashSet<V>> {
        let members: HashSet<V> = members.into_iter().collect();
        match self.index.get(&group) {
            Some(&idx) => Some(std::mem::replace(&mut self.groups[idx].1, members)),
            None => {
                self.index.insert(group.clone(), self.groups.len());
                self.groups.push((group, members));
                None
            }
        }
    }

    /// Builder pattern: add a group and return self.
    pub fn with_group(mut self, group: G, members: impl IntoIterator<Item = V>) -> Self {
        self.insert(group, members);
        self
    }

    /// Members of a group.
    pub fn members(&self, group: &G) -> Option<&HashSet<V>> {
        self.index.get(group).map(|&idx| &self.groups[idx].1)
    }

    /// Check if a group exists.
    pub fn contains_group(&self, group: &G) -> bool {
        self.index.contains_key(group)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over groups and their members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&G, &HashSet<V>)> {
        self.groups.iter().map(|(group, members)| (group, members))
    }

    pub(crate) fn entry(&self, idx: usize) -> &(G, HashSet<V>) {
        &self.groups[idx]
    }
}

impl<G, V, I> FromIterator<(G, I)> for GroupMapping<G, V>
where
    G: Eq + Hash + Clone,
    V: Eq + Hash,
    I: IntoIterator<Item = V>,
{
    fn from_iter<T: IntoIterator<Item = (G, I)>>(iter: T) -> Self {
        let mut mapping = Self::new();
        for (group, members) in iter {
            mapping.insert(group, members);
        }
        mapping
    }
}

/// Everything a [`GmlWriter`](crate::GmlWriter) needs besides the graph.
///
/// Unset id functions fall back to one [`IdTable`](crate::IdTable) shared by
/// vertices, edges and groups, so ids are unique across all three. Label
/// functions are only required for the categories enabled in
/// [`print_labels`](Self::print_labels).
pub struct WriterConfig<V, E, G> {
    /// Style of every element
    pub style: Box<dyn StyleProvider<V, E, G>>,
    /// Which labels are written
    pub print_labels: PrintLabels,
    /// Custom vertex ids
    pub vertex_ids: Option<IdFn<V>>,
    /// Custom edge ids
    pub edge_ids: Option<IdFn<E>>,
    /// Custom group ids
    pub group_ids: Option<IdFn<G>>,
    /// Vertex label text
    pub vertex_labels: Option<LabelFn<V>>,
    /// Edge label text
    pub edge_labels: Option<LabelFn<E>>,
    /// Group label text
    pub group_labels: Option<LabelFn<G>>,
    /// Vertex groups
    pub groups: Option<GroupMapping<G, V>>,
    /// Scheme of the shared id table
    pub id_scheme: IdScheme,
    /// Creator string of the document header
    pub creator: String,
}

impl<V, E, G> WriterConfig<V, E, G> {
    /// Create a configuration with the given style provider and no labels.
    pub fn new(style: impl StyleProvider<V, E, G> + 'static) -> Self {
        Self {
            style: Box::new(style),
            print_labels: PrintLabels::NONE,
            vertex_ids: None,
            edge_ids: None,
            group_ids: None,
            vertex_labels: None,
            edge_labels: None,
            group_labels: None,
            groups: None,
            id_scheme: IdScheme::default(),
            creator: DEFAULT_CREATOR.to_string(),
        }
    }

    /// Builder pattern: choose which labels are written.
    ///
    /// Every printed category needs a label function. Call
    /// [`with_display_labels`](Self::with_display_labels) to label elements
    /// with their `Display` text, which is the usual default; categories
    /// left without a function make [`GmlWriter::new`](crate::GmlWriter::new)
    /// fail with [`GmlError::InvalidConfiguration`](crate::GmlError::InvalidConfiguration).
    ///
    /// ```
    /// use gmlwriter::{GmlError, GmlWriter, NoStyle, PrintLabels, WriterConfig};
    ///
    /// let config: WriterConfig<&str, &str, &str> =
    ///     WriterConfig::new(NoStyle).with_print_labels(PrintLabels::ALL);
    /// let err = GmlWriter::new(config).unwrap_err();
    /// assert!(matches!(err, GmlError::InvalidConfiguration { .. }));
    ///
    /// let config: WriterConfig<&str, &str, &str> = WriterConfig::new(NoStyle)
    ///     .with_print_labels(PrintLabels::ALL)
    ///     .with_display_labels();
    /// assert!(GmlWriter::new(config).is_ok());
    /// ```
    pub fn with_print_labels(mut self, print_labels: PrintLabels) -> Self {
        self.print_labels = print_labels;
        self
    }

    /// Builder pattern: custom vertex ids.
    pub fn with_vertex_ids(mut self, f: impl Fn(&V) -> String + Send + Sync + 'static) -> Self {
        self.vertex_ids = Some(Box::new(f));
        self
    }

    /// Builder pattern: custom edge ids.
    pub fn with_edge_ids(mut self, f: impl Fn(&E) -> String + Send + Sync + 'static) -> Self {
        self.edge_ids = Some(Box::new(f));
        self
    }

    /// Builder pattern: custom group ids.
    pub fn with_group_ids(mut self, f: impl Fn(&G) -> String + Send + Sync + 'static) -> Self {
        self.group_ids = Some(Box::new(f));
        self
    }

    /// Builder pattern: vertex label text.
    pub fn with_vertex_labels(mut self, f: impl Fn(&V) -> String + Send + Sync + 'static) -> Self {
        self.vertex_labels = Some(Box::new(f));
        self
    }

    /// Builder pattern: edge label text.
    pub fn with_edge_labels(mut self, f: impl Fn(&E) -> String + Send + Sync + 'static) -> Self {
        self.edge_labels = Some(Box::new(f));
        self
    }

    /// Builder pattern: group label text.
    pub fn with_group_labels(mut self, f: impl Fn(&G) -> String + Send + Sync + 'static) -> Self {
        self.group_labels = Some(Box::new(f));
        self
    }

    /// Builder pattern: vertex groups.
    pub fn with_groups(mut self, groups: GroupMapping<G, V>) -> Self {
        self.groups = Some(groups);
        self
    }

    /// Builder pattern: scheme of the shared id table.
    pub fn with_id_scheme(mut self, id_scheme: IdScheme) -> Self {
        self.id_scheme = id_scheme;
        self
    }

    /// Builder pattern: creator string of the document header.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }
}

impl<V, E, G> WriterConfig<V, E, G>
where
    V: fmt::Display + 'static,
    E: fmt::Display + 'static,
    G: fmt::Display + 'static,
{
    /// Builder pattern: label every category without a label function with
    /// its `Display` text.
    pub fn with_display_labels(mut self) -> Self {
        if self.vertex_labels.is_none() {
            self.vertex_labels = Some(Box::new(|v: &V| v.to_string()));
        }
        if self.edge_labels.is_none() {
            self.edge_labels = Some(Box::new(|e: &E| e.to_string()));
        }
        if self.group_labels.is_none() {
            self.group_labels = Some(Box::new(|g: &G| g.to_string()));
        }
        self
    }
}

impl<V, E, G> fmt::Debug for WriterConfig<V, E, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterConfig")
            .field("print_labels", &self.print_labels)
            .field("vertex_ids", &self.vertex_ids.is_some())
            .field("edge_ids", &self.edge_ids.is_some())
            .field("group_ids", &self.group_ids.is_some())
            .field("vertex_labels", &self.vertex_labels.is_some())
            .field("edge_labels", &self.edge_labels.is_some())
            .field("group_labels", &self.group_labels.is_some())
            .field("groups", &self.groups.as_ref().map(|g| g.groups.len()))
            .field("id_scheme", &self.id_scheme)
            .field("creator", &self.creator)
            .finish()
    }
}
