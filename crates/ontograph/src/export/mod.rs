//! Export module for visualizing and inspecting graphs in external tools.
//!
//! Supports:
//! - **DOT**: Graphviz visualization
//! - **JSON**: D3.js and web-based tools
//! - **Reports**: plain-text listings of nodes, edges and traversal results

pub mod dot;
pub mod json;
pub mod report;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::export_json;
pub use report::{format_edges, format_nodes, format_path};

use crate::graph::{Graph, NodeKey, SharedProperties};
use std::collections::HashSet;

/// Stored edges, with undirected edges reported for one direction only.
pub(crate) fn unique_edges<N: NodeKey>(
    graph: &Graph<N>,
) -> impl Iterator<Item = (&N, &N, &SharedProperties)> {
    let directed = graph.is_directed();
    let mut emitted: HashSet<(&N, &N)> = HashSet::new();
    graph.edges().filter(move |(source, target, _)| {
        if directed {
            return true;
        }
        if emitted.contains(&(*target, *source)) {
            return false;
        }
        emitted.insert((*source, *target));
        true
    })
}
