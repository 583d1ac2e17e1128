//! Integration tests for deep and wide graphs.

use ontograph::{EdgeClass, Graph, PropertyMap};

fn node(i: usize) -> String {
    format!("GO:{i:07}")
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let depth = 100_000;
    let mut graph = Graph::directed();
    for i in 0..depth {
        graph.add_edge(node(i), node(i + 1));
    }

    assert!(graph.is_acyclic());
    assert_eq!(graph.max_depth().unwrap(), depth);

    let order = graph.topological_sort().unwrap();
    assert_eq!(order.first(), Some(&node(0)));
    assert_eq!(order.last(), Some(&node(depth)));

    let dfs = graph.dfs();
    assert_eq!(dfs.edges_of(EdgeClass::Tree).count(), depth);
    assert_eq!(dfs.finished[&node(0)], 2 * (depth + 1));

    assert_eq!(graph.get_descendants(node(0).as_str()).unwrap().len(), depth);
    assert_eq!(graph.get_ascendants(node(depth).as_str()).unwrap().len(), depth);
}

#[test]
fn test_medium_dag_10k_nodes() {
    let num_nodes = 10_000;
    let mut graph = Graph::directed();

    // Each node points to up to three lower-numbered parents
    for i in 1..num_nodes {
        for parent in [i / 2, i / 3, i - 1] {
            graph.add_edge_with(
                node(i),
                node(parent),
                PropertyMap::new().with("relationship", "is a"),
            );
        }
    }

    assert_eq!(graph.nb_nodes(), num_nodes);
    assert!(graph.is_acyclic());
    assert_eq!(graph.leaves().cloned().collect::<Vec<_>>(), vec![node(0)]);

    let order = graph.topological_sort().unwrap();
    let position: std::collections::HashMap<&String, usize> =
        order.iter().enumerate().map(|(i, id)| (id, i)).collect();
    for (source, target, _) in graph.edges() {
        assert!(position[source] < position[target]);
    }

    let path = graph.get_shortest_path(node(9_999).as_str(), node(0).as_str()).unwrap();
    assert_eq!(path.first(), Some(&node(9_999)));
    assert_eq!(path.last(), Some(&node(0)));

    let ascendants = graph.get_ascendants(node(0).as_str()).unwrap();
    assert_eq!(ascendants.len(), num_nodes - 1);
}

#[test]
#[ignore] // This test is slow, run with --ignored flag
fn test_wide_graph_100k_nodes() {
    let num_nodes = 100_000;
    let edges_per_node = 5;
    let mut graph = Graph::directed();

    for i in 0..num_nodes {
        for j in 1..=edges_per_node {
            graph.add_edge(node(i), node((i + j) % num_nodes));
        }
    }

    assert_eq!(graph.nb_edges(), num_nodes * edges_per_node);
    assert!(!graph.is_acyclic());
    let reached = graph.bfs(node(0).as_str()).unwrap();
    assert_eq!(reached.distance_to(node(5).as_str()), Some(1));
    assert_eq!(reached.distance_to(node(10).as_str()), Some(2));
}
