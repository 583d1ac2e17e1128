//! Plain-text reports for graphs and traversal results.

use crate::graph::{BfsResult, DfsResult, Graph, NodeKey};
use std::fmt::{self, Display, Write};

/// One `id: {attributes}` line per node, in insertion order.
pub fn format_nodes<N: NodeKey>(graph: &Graph<N>) -> String {
    let mut output = String::from("Nodes:\n");
    for (id, attrs) in graph.nodes() {
        let _ = writeln!(output, "{id}: {attrs}");
    }
    output
}

/// One `source -> target: {attributes}` line per stored edge.
pub fn format_edges<N: NodeKey>(graph: &Graph<N>) -> String {
    let mut output = String::from("Edges:\n");
    for (source, target, props) in graph.edges() {
        let _ = writeln!(output, "{source} -> {target}: {}", props.borrow());
    }
    output
}

/// Describe a shortest path as returned by [`Graph::get_shortest_path`].
pub fn format_path<N: Display>(start: &N, end: &N, path: &[N]) -> String {
    if path.is_empty() {
        return format!("No path found from {start} to {end}.");
    }
    let hops: Vec<String> = path.iter().map(ToString::to_string).collect();
    format!("Shortest path from {start} to {end}:\n{}", hops.join(" -> "))
}

impl<N: NodeKey> Display for BfsResult<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BFS Traversal:")?;
        writeln!(f, "State:")?;
        for (node, state) in &self.state {
            writeln!(f, "  {node}: {state}")?;
        }
        writeln!(f, "Distance from start node:")?;
        for (node, distance) in &self.distance {
            match distance {
                Some(d) => writeln!(f, "  {node}: {d}")?,
                None => writeln!(f, "  {node}: inf")?,
            }
        }
        writeln!(f, "Predecessor nodes:")?;
        for (node, parent) in &self.predecessor {
            writeln!(f, "  {node}: {}", display_parent(parent))?;
        }
        Ok(())
    }
}

impl<N: NodeKey> Display for DfsResult<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DFS Traversal:")?;
        writeln!(f, "State:")?;
        for (node, state) in &self.state {
            writeln!(f, "  {node}: {state}")?;
        }
        writeln!(f, "Predecessor nodes:")?;
        for (node, parent) in &self.predecessor {
            writeln!(f, "  {node}: {}", display_parent(parent))?;
        }
        writeln!(f, "Discovery times:")?;
        for (node, time) in &self.discovered {
            writeln!(f, "  {node}: {time}")?;
        }
        writeln!(f, "Edge classifications:")?;
        for ((source, target), class) in &self.classification {
            writeln!(f, "  {source} -> {target}: {class}")?;
        }
        writeln!(f, "Finish times:")?;
        for (node, time) in &self.finished {
            writeln!(f, "  {node}: {time}")?;
        }
        Ok(())
    }
}

fn display_parent<N: Display>(parent: &Option<N>) -> String {
    parent
        .as_ref()
        .map_or_else(|| "-".to_string(), ToString::to_string)
}
