//! DOT format export for Graphviz visualization.
//!
//! Directed graphs render as `digraph` with `->` edges, undirected graphs as
//! `graph` with `--` edges, each undirected edge emitted once.

use super::unique_edges;
use crate::graph::{Graph, NodeKey, PropertyValue};
use crate::ontology::{RELATIONSHIP_KEY, TYPE_KEY};
use std::collections::HashMap;
use std::fmt::Write;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Fill colors keyed by the node's `type` attribute
    pub node_colors: HashMap<String, String>,
    /// Node shapes keyed by the node's `type` attribute
    pub node_shapes: HashMap<String, String>,
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Property names to show in node labels
    pub show_properties: Vec<String>,
}

impl Default for DotOptions {
    fn default() -> Self {
        let mut node_colors = HashMap::new();
        node_colors.insert("GOTerm".to_string(), "#90CAF9".to_string());
        node_colors.insert("GeneProduct".to_string(), "#FFE082".to_string());

        let mut node_shapes = HashMap::new();
        node_shapes.insert("GOTerm".to_string(), "box".to_string());
        node_shapes.insert("GeneProduct".to_string(), "ellipse".to_string());

        DotOptions {
            node_colors,
            node_shapes,
            rankdir: "BT".to_string(),
            show_properties: vec![],
        }
    }
}

/// Export graph to Graphviz DOT format
pub fn export_dot<N: NodeKey>(graph: &Graph<N>) -> String {
    export_dot_styled(graph, &DotOptions::default())
}

/// Export graph to Graphviz DOT format with custom styling
pub fn export_dot_styled<N: NodeKey>(graph: &Graph<N>, options: &DotOptions) -> String {
    let (keyword, arrow) = if graph.is_directed() {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };

    let mut output = String::new();
    let _ = writeln!(output, "{keyword} ontology {{");
    let _ = writeln!(output, "    rankdir={};", options.rankdir);
    output.push_str("    node [style=filled];\n\n");

    for (id, attrs) in graph.nodes() {
        let id = id.to_string();
        let mut label = escape_dot_label(attrs.get_string("name").unwrap_or(id.as_str()));

        for prop_name in &options.show_properties {
            if let Some(value) = attrs.get(prop_name) {
                label.push_str(&format!(
                    "\\n{}:{}",
                    prop_name,
                    escape_dot_label(&format_property_value(value))
                ));
            }
        }

        let kind = attrs.get_string(TYPE_KEY).unwrap_or_default();
        let color = options
            .node_colors
            .get(kind)
            .map(|s| s.as_str())
            .unwrap_or("#FFFFFF");
        let shape = options
            .node_shapes
            .get(kind)
            .map(|s| s.as_str())
            .unwrap_or("box");

        let _ = writeln!(
            output,
            "    \"{}\" [label=\"{label}\", shape={shape}, fillcolor=\"{color}\"];",
            escape_dot_label(&id)
        );
    }

    output.push('\n');

    for (source, target, props) in unique_edges(graph) {
        let label = props
            .borrow()
            .get_string(RELATIONSHIP_KEY)
            .map(|r| format!(" [label=\"{}\"]", escape_dot_label(r)))
            .unwrap_or_default();

        let _ = writeln!(
            output,
            "    \"{}\" {arrow} \"{}\"{label};",
            escape_dot_label(&source.to_string()),
            escape_dot_label(&target.to_string())
        );
    }

    output.push_str("}\n");
    output
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

fn format_property_value(value: &PropertyValue) -> String {
    match value {
        PropertyValue::StringList(v) => v.join(","),
        other => other.to_string(),
    }
}
