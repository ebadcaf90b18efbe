//! # gmlwriter
//!
//! Export graphs to GML (Graph Modelling Language) in the dialect understood
//! by the yEd diagram editor, with per-element styling, labels and vertex
//! groups.
//!
//! ## Core Principles
//!
//! - **Graph Agnostic**: Bring your own graph by implementing [`GraphSource`]
//! - **Deterministic**: Ids follow the graph's iteration order
//! - **Pluggable Styling**: A [`StyleProvider`] decides how every element looks
//! - **Explicit Configuration**: Validated once when the writer is built
//!
//! ## Architecture
//!
//! ```text
//! WriterConfig (labels, ids, groups, style provider)
//!     ↓
//! GmlWriter (vertices → groups → edges)
//!     ↓
//! IdTable + StyleProvider + quote
//!     ↓
//! std::io::Write sink
//! ```
//!
//! ## Example
//!
//! ```rust
//! use gmlwriter::{
//!     ArrowType, Color, EdgeStyle, GmlWriter, GroupMapping, NodeStyle, PrintLabels,
//!     SimpleGraph, StyleSheet, WriterConfig,
//! };
//!
//! let mut graph: SimpleGraph<String, String> = SimpleGraph::directed();
//! for name in ["parser", "lexer", "codegen"] {
//!     graph.add_vertex(name.to_string());
//! }
//! graph
//!     .add_edge(&"parser".to_string(), &"lexer".to_string(), "uses".to_string())
//!     .unwrap();
//!
//! let style = StyleSheet {
//!     vertex: Some(NodeStyle::new().with_fill(Color::LIGHT_GRAY)),
//!     edge: Some(EdgeStyle::new().with_target_arrow(ArrowType::Delta)),
//!     group: None,
//! };
//! let groups = GroupMapping::new().with_group(
//!     "frontend".to_string(),
//!     ["parser".to_string(), "lexer".to_string()],
//! );
//!
//! let writer = GmlWriter::new(
//!     WriterConfig::new(style)
//!         .with_print_labels(PrintLabels::ALL)
//!         .with_display_labels()
//!         .with_groups(groups),
//! )
//! .unwrap();
//!
//! let gml = writer.export_to_string(&graph).unwrap();
//! assert!(gml.contains("isGroup 1"));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;
pub mod ids;
pub mod style;

// Re-export main types
pub use error::{GmlError, Result};
pub use export::{quote, GmlWriter, GroupMapping, PrintLabels, WriterConfig};
pub use graph::{GraphSource, SimpleGraph};
pub use ids::{IdScheme, IdTable};
pub use style::{
    ArrowType, BorderInsets, Color, EdgeStyle, FontStyle, Geometry, LabelPlacement, LabelStyle,
    LineStyle, LineType, NoStyle, NodeStyle, Shape, StyleProvider, StyleSheet,
};
