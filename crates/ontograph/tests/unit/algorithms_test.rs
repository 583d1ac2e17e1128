//! Unit tests for graph algorithms
//!
//! Tests cover:
//! - BFS distances, predecessors and unreachable nodes
//! - DFS timestamps and edge classification
//! - Cycle detection and topological ordering
//! - Shortest paths and root-to-leaf depth

use ontograph::{EdgeClass, Graph, GraphError, NodeState};

fn graph_from(edges: &[(&str, &str)]) -> Graph {
    let mut graph = Graph::directed();
    for (source, target) in edges {
        graph.add_edge(*source, *target);
    }
    graph
}

// A -> B, A -> C, B -> D
fn create_tree() -> Graph {
    graph_from(&[("A", "B"), ("A", "C"), ("B", "D")])
}

// A -> B -> C -> A
fn create_cycle() -> Graph {
    graph_from(&[("A", "B"), ("B", "C"), ("C", "A")])
}

#[test]
fn test_bfs_tree_distances_and_predecessors() {
    let graph = create_tree();
    let result = graph.bfs("A").unwrap();

    assert_eq!(result.distance_to("D"), Some(2));
    assert_eq!(result.predecessor["D"].as_deref(), Some("B"));
    assert_eq!(result.predecessor["A"], None);
    assert!(result.state.values().all(|s| *s == NodeState::Finished));
    assert_eq!(graph.max_depth().unwrap(), 2);
}

#[test]
fn test_bfs_covers_every_node() {
    let mut graph = create_tree();
    graph.add_node("Z");

    let result = graph.bfs("B").unwrap();
    assert_eq!(result.state.len(), graph.nb_nodes());
    assert_eq!(result.state["A"], NodeState::Unexplored);
    assert_eq!(result.distance_to("A"), None);
    assert_eq!(result.distance_to("D"), Some(1));
    assert_eq!(result.state["Z"], NodeState::Unexplored);
}

#[test]
fn test_bfs_triangle_property() {
    let graph = graph_from(&[
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
        ("C", "D"),
        ("D", "E"),
        ("B", "E"),
        ("E", "A"),
    ]);
    let result = graph.bfs("A").unwrap();

    for (u, v, _) in graph.edges() {
        if let Some(du) = result.distance_to(u.as_str()) {
            let dv = result.distance_to(v.as_str()).unwrap();
            assert!(dv <= du + 1, "{u} -> {v}: {dv} > {du} + 1");
        }
    }
}

#[test]
fn test_bfs_missing_start() {
    let graph = create_tree();
    assert!(matches!(
        graph.bfs("Q"),
        Err(GraphError::NodeNotFound { .. })
    ));
}

#[test]
fn test_dfs_finish_after_discovery_and_descendants() {
    let graph = graph_from(&[("A", "B"), ("B", "C"), ("A", "D"), ("E", "C")]);
    let result = graph.dfs();

    for (node, discovered) in &result.discovered {
        assert!(result.finished[node] > *discovered);
    }
    for (node, parent) in &result.predecessor {
        if let Some(parent) = parent {
            assert!(result.discovered[parent] < result.discovered[node]);
            assert!(result.finished[node] < result.finished[parent]);
        }
    }
    assert!(result.state.values().all(|s| *s == NodeState::Finished));
}

#[test]
fn test_dfs_edge_classes() {
    // A -> B -> C, A -> C (forward), D -> C (cross), C -> B (back)
    let graph = graph_from(&[("A", "B"), ("B", "C"), ("A", "C"), ("D", "C"), ("C", "B")]);
    let result = graph.dfs();

    let class = |s: &str, t: &str| result.classification[&(s.to_string(), t.to_string())];
    assert_eq!(class("A", "B"), EdgeClass::Tree);
    assert_eq!(class("B", "C"), EdgeClass::Tree);
    assert_eq!(class("C", "B"), EdgeClass::Back);
    assert_eq!(class("A", "C"), EdgeClass::Forward);
    assert_eq!(class("D", "C"), EdgeClass::Cross);
    assert_eq!(result.classification.len(), 5);
}

#[test]
fn test_is_acyclic_matches_back_edges() {
    for graph in [create_tree(), create_cycle()] {
        let has_back = graph.dfs().edges_of(EdgeClass::Back).next().is_some();
        assert_eq!(graph.is_acyclic(), !has_back);
    }
}

#[test]
fn test_cycle_rejects_topological_sort_and_depth() {
    let graph = create_cycle();
    assert!(!graph.is_acyclic());
    assert!(matches!(
        graph.topological_sort(),
        Err(GraphError::Cyclic { .. })
    ));
    assert!(matches!(graph.max_depth(), Err(GraphError::Cyclic { .. })));
}

#[test]
fn test_topological_order_respects_edges() {
    let graph = graph_from(&[
        ("shirt", "tie"),
        ("tie", "jacket"),
        ("pants", "shoes"),
        ("pants", "belt"),
        ("belt", "jacket"),
        ("shirt", "belt"),
        ("socks", "shoes"),
        ("undershorts", "pants"),
        ("undershorts", "shoes"),
    ]);
    let order = graph.topological_sort().unwrap();
    assert_eq!(order.len(), graph.nb_nodes());

    let position = |id: &str| order.iter().position(|n| n == id).unwrap();
    for (u, v, _) in graph.edges() {
        assert!(position(u.as_str()) < position(v.as_str()), "{u} must precede {v}");
    }
}

#[test]
fn test_shortest_path_prefers_fewer_hops() {
    let mut graph = graph_from(&[("A", "B"), ("B", "C"), ("A", "C")]);
    graph.add_edge("C", "D");
    assert_eq!(graph.get_shortest_path("A", "D").unwrap(), vec!["A", "C", "D"]);
}

#[test]
fn test_shortest_path_disconnected() {
    let graph = graph_from(&[("A", "B"), ("C", "D")]);
    assert!(graph.get_shortest_path("A", "D").unwrap().is_empty());
    assert_eq!(graph.get_shortest_path("C", "D").unwrap(), vec!["C", "D"]);
}

#[test]
fn test_shortest_path_to_self() {
    let graph = create_tree();
    assert_eq!(graph.get_shortest_path("B", "B").unwrap(), vec!["B"]);
}

#[test]
fn test_shortest_path_missing_endpoints() {
    let graph = create_tree();
    assert!(matches!(
        graph.get_shortest_path("X", "A"),
        Err(GraphError::NodeNotFound { .. })
    ));
    assert!(matches!(
        graph.get_shortest_path("A", "X"),
        Err(GraphError::NodeNotFound { .. })
    ));
}

#[test]
fn test_max_depth_uses_longest_root_to_leaf() {
    // Two roots; R2 reaches the deepest leaf
    let graph = graph_from(&[
        ("R1", "L1"),
        ("R2", "M1"),
        ("M1", "M2"),
        ("M2", "L2"),
        ("R2", "L1"),
    ]);
    assert_eq!(graph.max_depth().unwrap(), 3);
}

#[test]
fn test_max_depth_of_isolated_node() {
    let mut graph = Graph::directed();
    graph.add_node("A");
    assert_eq!(graph.max_depth().unwrap(), 0);
}
