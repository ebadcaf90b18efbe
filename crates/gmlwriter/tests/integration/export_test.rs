//! Integration tests for GML export
//!
//! Tests cover:
//! - Id assignment order and sharing across categories
//! - Group nodes, `gid` references and group keys that are vertices
//! - Label toggles and escaping
//! - Style provider queries and failures
//! - Custom id functions and file output

use gmlwriter::{
    ArrowType, Color, EdgeStyle, FontStyle, GmlError, GmlWriter, GroupMapping, IdScheme,
    LabelStyle, LineType, NoStyle, NodeStyle, PrintLabels, SimpleGraph, StyleProvider,
    WriterConfig,
};
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

type StrGraph = SimpleGraph<&'static str, &'static str>;

// Helper to create a small undirected graph: a - b - c, plus a - c
fn create_test_graph() -> StrGraph {
    let mut graph = SimpleGraph::undirected();
    for v in ["a", "b", "c"] {
        graph.add_vertex(v);
    }
    graph.add_edge(&"a", &"b", "a-b").unwrap();
    graph.add_edge(&"b", &"c", "b-c").unwrap();
    graph.add_edge(&"a", &"c", "a-c").unwrap();
    graph
}

type StrWriter = GmlWriter<&'static str, &'static str, &'static str>;

fn writer_with(config: WriterConfig<&'static str, &'static str, &'static str>) -> StrWriter {
    GmlWriter::new(config).unwrap()
}

/// Split the document into `node`/`edge` blocks (content between brackets).
fn blocks<'a>(gml: &'a str, kind: &str) -> Vec<&'a str> {
    let opener = format!("\t{kind}\n\t[\n");
    gml.match_indices(&opener)
        .map(|(start, _)| {
            let body = &gml[start + opener.len()..];
            let end = body.find("\n\t]\n").unwrap();
            &body[..end]
        })
        .collect()
}

#[test]
fn test_header_and_footer() {
    let writer = writer_with(WriterConfig::new(NoStyle));
    let gml = writer.export_to_string(&create_test_graph()).unwrap();

    assert!(gml.starts_with(
        "Creator \"gmlwriter - yEd GML exporter\"\nVersion \"1\"\ngraph\n[\n\tlabel \"\"\n"
    ));
    assert!(gml.ends_with("\t]\n]\n"));
}

#[test]
fn test_directedness_follows_graph() {
    let writer = writer_with(WriterConfig::new(NoStyle));

    let undirected = writer.export_to_string(&create_test_graph()).unwrap();
    assert!(undirected.contains("\tdirected 0\n"));

    let mut directed: StrGraph = SimpleGraph::directed();
    directed.add_vertex("x");
    let gml = writer.export_to_string(&directed).unwrap();
    assert!(gml.contains("\tdirected 1\n"));
}

#[test]
fn test_ids_follow_vertex_order_then_edges() {
    let writer = writer_with(WriterConfig::new(NoStyle));
    let gml = writer.export_to_string(&create_test_graph()).unwrap();

    let nodes = blocks(&gml, "node");
    assert_eq!(nodes.len(), 3);
    assert!(nodes[0].starts_with("\t\tid 1"));
    assert!(nodes[1].starts_with("\t\tid 2"));
    assert!(nodes[2].starts_with("\t\tid 3"));

    let edges = blocks(&gml, "edge");
    assert_eq!(
        edges,
        vec![
            "\t\tid 4\n\t\tsource 1\n\t\ttarget 2",
            "\t\tid 5\n\t\tsource 2\n\t\ttarget 3",
            "\t\tid 6\n\t\tsource 1\n\t\ttarget 3",
        ]
    );
}

#[test]
fn test_repeated_exports_are_identical() {
    let writer = writer_with(
        WriterConfig::new(NoStyle)
            .with_print_labels(PrintLabels::ALL)
            .with_display_labels(),
    );
    let graph = create_test_graph();
    assert_eq!(
        writer.export_to_string(&graph).unwrap(),
        writer.export_to_string(&graph).unwrap()
    );
}

#[test]
fn test_vertex_labels_disabled() {
    let writer = writer_with(
        WriterConfig::new(NoStyle)
            .with_print_labels(PrintLabels::NONE.with_edges())
            .with_display_labels(),
    );
    let gml = writer.export_to_string(&create_test_graph()).unwrap();

    for node in blocks(&gml, "node") {
        assert!(!node.contains("label"), "unexpected label in {node:?}");
    }
    for edge in blocks(&gml, "edge") {
        assert!(edge.contains("\t\tlabel \""));
    }
}

#[test]
fn test_labels_are_escaped() {
    let mut graph: StrGraph = SimpleGraph::directed();
    graph.add_vertex("say \"hi\" & bye");
    let writer = writer_with(
        WriterConfig::new(NoStyle)
            .with_print_labels(PrintLabels::NONE.with_vertices())
            .with_display_labels(),
    );
    let gml = writer.export_to_string(&graph).unwrap();
    assert!(gml.contains("\t\tlabel \"say &quot;hi&quot; &amp; bye\"\n"));
}

#[test]
fn test_groups_and_gid_references() {
    let mut graph: StrGraph = SimpleGraph::directed();
    for v in ["data", "create", "read"] {
        graph.add_vertex(v);
    }
    graph.add_edge(&"create", &"data", "w").unwrap();
    graph.add_edge(&"read", &"data", "r").unwrap();

    let groups = GroupMapping::new().with_group("methods", ["create", "read"]);
    let writer = writer_with(
        WriterConfig::new(NoStyle)
            .with_print_labels(PrintLabels::NONE.with_groups())
            .with_group_labels(|g: &&str| format!("group {g}"))
            .with_groups(groups),
    );
    let gml = writer.export_to_string(&graph).unwrap();
    let nodes = blocks(&gml, "node");

    // 3 vertices + 1 group; group id continues the shared sequence
    assert_eq!(nodes.len(), 4);
    assert_eq!(nodes[0], "\t\tid 1");
    assert_eq!(nodes[1], "\t\tid 2\n\t\tgid 4");
    assert_eq!(nodes[2], "\t\tid 3\n\t\tgid 4");
    assert_eq!(nodes[3], "\t\tid 4\n\t\tlabel \"group methods\"\n\t\tisGroup 1");
}

#[test]
fn test_group_key_vertex_is_written_once_as_group() {
    let mut graph: StrGraph = SimpleGraph::directed();
    for v in ["cluster", "x", "y", "z"] {
        graph.add_vertex(v);
    }
    graph.add_edge(&"z", &"cluster", "z->cluster").unwrap();

    let groups = GroupMapping::new().with_group("cluster", ["x", "y"]);
    let writer = writer_with(WriterConfig::new(NoStyle).with_groups(groups));
    let gml = writer.export_to_string(&graph).unwrap();
    let nodes = blocks(&gml, "node");

    let group_nodes: Vec<_> = nodes.iter().filter(|n| n.contains("isGroup 1")).collect();
    assert_eq!(group_nodes.len(), 1);
    // "cluster" got id 1 in the vertex pre-pass and keeps it as a group
    assert!(group_nodes[0].starts_with("\t\tid 1\n"));
    let with_id_1 = nodes
        .iter()
        .filter(|n| n.starts_with("\t\tid 1\n") || **n == "\t\tid 1")
        .count();
    assert_eq!(with_id_1, 1);

    // Edges into the group point at the group node
    let edges = blocks(&gml, "edge");
    assert_eq!(edges, vec!["\t\tid 5\n\t\tsource 4\n\t\ttarget 1"]);
}

// Graph with a vertex that is also a group key: cluster [x], edge z -> cluster
fn create_cluster_graph() -> StrGraph {
    let mut graph = SimpleGraph::directed();
    for v in ["cluster", "x", "z"] {
        graph.add_vertex(v);
    }
    graph.add_edge(&"z", &"cluster", "z->cluster").unwrap();
    graph
}

#[test]
fn test_group_key_vertex_uses_custom_group_id() {
    let groups = GroupMapping::new().with_group("cluster", ["x"]);
    let writer = writer_with(
        WriterConfig::new(NoStyle)
            .with_groups(groups)
            .with_group_ids(|g: &&str| format!("g_{g}")),
    );
    let gml = writer.export_to_string(&create_cluster_graph()).unwrap();
    let nodes = blocks(&gml, "node");

    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0], "\t\tid 1\n\t\tgid g_cluster");
    assert_eq!(nodes[2], "\t\tid g_cluster\n\t\tisGroup 1");

    let edges = blocks(&gml, "edge");
    assert_eq!(edges, vec!["\t\tid 3\n\t\tsource 2\n\t\ttarget g_cluster"]);
}

#[test]
fn test_group_key_vertex_ignores_custom_vertex_id() {
    let groups = GroupMapping::new().with_group("cluster", ["x"]);
    let writer = writer_with(
        WriterConfig::new(NoStyle)
            .with_groups(groups)
            .with_vertex_ids(|v: &&str| format!("v_{v}")),
    );
    let gml = writer.export_to_string(&create_cluster_graph()).unwrap();
    let nodes = blocks(&gml, "node");

    assert_eq!(nodes[0], "\t\tid v_x\n\t\tgid 1");
    assert_eq!(nodes[1], "\t\tid v_z");
    assert_eq!(nodes[2], "\t\tid 1\n\t\tisGroup 1");

    // Every edge endpoint names a written node
    let node_ids: HashSet<&str> = nodes
        .iter()
        .map(|n| n.lines().next().unwrap().trim_start_matches("\t\tid "))
        .collect();
    let edges = blocks(&gml, "edge");
    assert_eq!(edges, vec!["\t\tid 2\n\t\tsource v_z\n\t\ttarget 1"]);
    for endpoint in edges[0].lines().skip(1) {
        let id = endpoint.split(' ').nth(1).unwrap();
        assert!(node_ids.contains(id), "dangling endpoint {id}");
    }
}

#[test]
fn test_custom_id_functions() {
    let writer = writer_with(
        WriterConfig::new(NoStyle)
            .with_vertex_ids(|v: &&str| format!("v_{v}"))
            .with_edge_ids(|e: &&str| format!("e_{}", e.replace('-', "_"))),
    );
    let gml = writer.export_to_string(&create_test_graph()).unwrap();

    assert!(gml.contains("\t\tid v_a\n"));
    assert!(gml.contains("\t\tid e_a_b\n\t\tsource v_a\n\t\ttarget v_b\n"));
}

#[test]
fn test_uuid_scheme_keeps_references_consistent() {
    let writer = writer_with(WriterConfig::new(NoStyle).with_id_scheme(IdScheme::Uuid));
    let gml = writer.export_to_string(&create_test_graph()).unwrap();

    let node_ids: HashSet<_> = blocks(&gml, "node")
        .iter()
        .map(|n| n.trim_start_matches("\t\tid ").to_string())
        .collect();
    assert_eq!(node_ids.len(), 3);
    for edge in blocks(&gml, "edge") {
        let source = edge.lines().nth(1).unwrap().trim_start_matches("\t\tsource ");
        assert!(node_ids.contains(source));
    }
}

struct AccessStyle;

impl StyleProvider<&'static str, &'static str, &'static str> for AccessStyle {
    fn vertex_style(&self, vertex: &&'static str) -> gmlwriter::Result<Option<NodeStyle>> {
        Ok((*vertex != "b").then(|| {
            NodeStyle::new()
                .with_fill(Color::LIGHT_GRAY)
                .with_label(LabelStyle {
                    font_style: FontStyle::Italic,
                    ..Default::default()
                })
        }))
    }

    fn edge_style(
        &self,
        _edge: &&'static str,
        source: &&'static str,
        _target: &&'static str,
    ) -> gmlwriter::Result<Option<EdgeStyle>> {
        let line_type = if *source == "a" {
            LineType::Dashed
        } else {
            LineType::Normal
        };
        Ok(Some(
            EdgeStyle::new()
                .with_line_type(line_type)
                .with_target_arrow(ArrowType::Short),
        ))
    }
}

#[test]
fn test_style_provider_blocks() {
    let writer = writer_with(
        WriterConfig::new(AccessStyle)
            .with_print_labels(PrintLabels::NONE.with_vertices())
            .with_display_labels(),
    );
    let gml = writer.export_to_string(&create_test_graph()).unwrap();
    let nodes = blocks(&gml, "node");

    assert!(nodes[0].contains("\t\t\tfill\t\"#c0c0c0ff\""));
    assert!(nodes[0].contains("LabelGraphics"));
    assert!(nodes[0].contains("\t\t\tfontStyle\t\"ITALIC\""));
    assert!(!nodes[1].contains("graphics"));

    let edges = blocks(&gml, "edge");
    assert!(edges[0].contains("\t\t\tstyle\t\"DASHED\""));
    assert!(!edges[1].contains("style\t"));
    // Edge labels are off, so no label block on edges
    assert!(edges.iter().all(|e| !e.contains("LabelGraphics")));
    assert!(edges.iter().all(|e| e.contains("\t\t\ttargetArrow\t\"short\"")));
}

struct GroupSizeStyle;

impl StyleProvider<&'static str, &'static str, &'static str> for GroupSizeStyle {
    fn group_style(
        &self,
        _group: &&'static str,
        members: &HashSet<&'static str>,
    ) -> gmlwriter::Result<Option<NodeStyle>> {
        let width = 50.0 * members.len() as f64;
        Ok(Some(NodeStyle::new().with_geometry(gmlwriter::Geometry::new(
            0.0, 0.0, width, 40.0,
        ))))
    }
}

#[test]
fn test_group_style_sees_members() {
    let groups = GroupMapping::new().with_group("g", ["a", "b", "c"]);
    let writer = writer_with(WriterConfig::new(GroupSizeStyle).with_groups(groups));
    let gml = writer.export_to_string(&create_test_graph()).unwrap();
    assert!(gml.contains("\t\t\tw\t150.0\n"));
}

struct FailingStyle;

impl StyleProvider<&'static str, &'static str, &'static str> for FailingStyle {
    fn edge_style(
        &self,
        edge: &&'static str,
        _source: &&'static str,
        _target: &&'static str,
    ) -> gmlwriter::Result<Option<EdgeStyle>> {
        Err(GmlError::provider(
            format!("no style for {edge}"),
            None::<std::io::Error>,
        ))
    }
}

#[test]
fn test_provider_error_aborts_export() {
    let writer = writer_with(WriterConfig::new(FailingStyle));
    let mut out = Vec::new();
    let err = writer.export(&mut out, &create_test_graph()).unwrap_err();

    assert!(matches!(err, GmlError::Provider { .. }));
    assert_eq!(err.to_string(), "Style provider error: no style for a-b");
    // Vertices were already written; no rollback
    let partial = String::from_utf8(out).unwrap();
    assert!(partial.contains("\tnode\n"));
    assert!(!partial.ends_with("]\n]\n"));
}

struct BrokenSink;

impl std::io::Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_sink_failure_is_io_error() {
    let writer = writer_with(WriterConfig::new(NoStyle));
    let err = writer
        .export(&mut BrokenSink, &create_test_graph())
        .unwrap_err();
    assert!(matches!(err, GmlError::Io { .. }));
}

#[test]
fn test_export_to_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("graph.gml");

    let writer = writer_with(
        WriterConfig::new(NoStyle)
            .with_print_labels(PrintLabels::ALL)
            .with_display_labels(),
    );
    let graph = create_test_graph();
    writer.export_to_path(&graph, &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, writer.export_to_string(&graph).unwrap());
}

#[test]
fn test_export_to_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("graph.gml");

    let writer = writer_with(WriterConfig::new(NoStyle));
    let err = writer
        .export_to_path(&create_test_graph(), &path)
        .unwrap_err();
    assert!(err.to_string().contains("Failed to create GML file"));
}
