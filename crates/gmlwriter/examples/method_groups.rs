//! Method access diagram example for gmlwriter
//!
//! This example demonstrates:
//! - Grouping vertices into a yEd group node
//! - Styling vertices and edges per element
//! - Writing the result to a `.gml` file

use gmlwriter::{
    ArrowType, Color, EdgeStyle, GmlWriter, GroupMapping, LineType, NodeStyle, PrintLabels, Shape,
    SimpleGraph, StyleProvider, WriterConfig,
};
use std::collections::HashSet;

/// Data fields are ellipses, writes are dashed red edges.
struct AccessStyle;

impl StyleProvider<String, String, String> for AccessStyle {
    fn vertex_style(&self, vertex: &String) -> gmlwriter::Result<Option<NodeStyle>> {
        let style = if vertex.starts_with("field:") {
            NodeStyle::new().with_shape(Shape::Ellipse).with_fill(Color::YELLOW)
        } else {
            NodeStyle::new().with_shape(Shape::RoundRectangle)
        };
        Ok(Some(style))
    }

    fn edge_style(
        &self,
        edge: &String,
        _source: &String,
        _target: &String,
    ) -> gmlwriter::Result<Option<EdgeStyle>> {
        let style = EdgeStyle::new().with_target_arrow(ArrowType::Delta);
        if edge.starts_with('w') {
            Ok(Some(style.with_line_color(Color::RED).with_line_type(LineType::Dashed)))
        } else {
            Ok(Some(style))
        }
    }

    fn group_style(
        &self,
        _group: &String,
        _members: &HashSet<String>,
    ) -> gmlwriter::Result<Option<NodeStyle>> {
        Ok(Some(NodeStyle::new().with_fill(Color::LIGHT_GRAY)))
    }
}

fn main() -> gmlwriter::Result<()> {
    let mut graph: SimpleGraph<String, String> = SimpleGraph::directed();

    let field = "field:count".to_string();
    let methods = ["increment", "decrement", "reset", "get"].map(String::from);

    graph.add_vertex(field.clone());
    for method in &methods {
        graph.add_vertex(method.clone());
    }

    graph.add_edge(&methods[0], &field, "w:1".to_string())?;
    graph.add_edge(&methods[1], &field, "w:2".to_string())?;
    graph.add_edge(&methods[2], &field, "w:3".to_string())?;
    graph.add_edge(&methods[3], &field, "r:1".to_string())?;
    println!(
        "Built graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let groups = GroupMapping::new().with_group("Counter".to_string(), methods.clone());

    let writer = GmlWriter::new(
        WriterConfig::new(AccessStyle)
            .with_print_labels(PrintLabels::ALL)
            .with_display_labels()
            .with_groups(groups),
    )?;

    let path = std::env::temp_dir().join("method_groups.gml");
    writer.export_to_path(&graph, &path)?;
    println!("✓ Wrote {}", path.display());

    Ok(())
}
