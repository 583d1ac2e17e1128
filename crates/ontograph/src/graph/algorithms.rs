//! Graph traversal and analysis algorithms.
//!
//! Provides BFS with distances, a full DFS forest with timestamps and edge
//! classification, cycle detection, topological sorting, unweighted shortest
//! paths and root-to-leaf depth. All traversals are iterative so deep
//! ontologies cannot exhaust the call stack.

use super::engine::Graph;
use super::types::{EdgeClass, NodeKey, NodeState};
use crate::error::{GraphError, Result};
use indexmap::IndexMap;
use log::debug;
use std::borrow::Borrow;
use std::collections::{HashSet, VecDeque};
use std::fmt::Display;
use std::hash::Hash;

/// Outcome of a breadth-first search over every node of a graph.
#[derive(Debug, Clone)]
pub struct BfsResult<N> {
    /// Final visit state; unreachable nodes stay `Unexplored`
    pub state: IndexMap<N, NodeState>,
    /// Edge count from the start node; `None` means unreachable (infinite)
    pub distance: IndexMap<N, Option<usize>>,
    /// BFS tree parent; `None` for the start node and unreachable nodes
    pub predecessor: IndexMap<N, Option<N>>,
}

impl<N: NodeKey> BfsResult<N> {
    /// Distance to `target`, or `None` if unreachable or unknown.
    pub fn distance_to<Q>(&self, target: &Q) -> Option<usize>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.distance.get(target).copied().flatten()
    }

    /// Path from the start node to `target` along BFS tree edges.
    ///
    /// Empty when `target` is unreachable.
    pub fn path_to<Q>(&self, target: &Q) -> Vec<N>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.distance.get_key_value(target) {
            Some((end, Some(_))) => self.trace_back(end),
            _ => Vec::new(),
        }
    }

    fn trace_back(&self, end: &N) -> Vec<N> {
        let mut path = vec![end.clone()];
        let mut current = end;
        while let Some(Some(parent)) = self.predecessor.get(current) {
            path.push(parent.clone());
            current = parent;
        }
        path.reverse();
        path
    }
}

/// Outcome of a full depth-first traversal.
#[derive(Debug, Clone)]
pub struct DfsResult<N> {
    /// Final visit state (every node ends `Finished`)
    pub state: IndexMap<N, NodeState>,
    /// DFS forest parent; `None` for tree roots
    pub predecessor: IndexMap<N, Option<N>>,
    /// Discovery timestamp per node
    pub discovered: IndexMap<N, usize>,
    /// Class of every edge examined, keyed by `(source, target)`
    pub classification: IndexMap<(N, N), EdgeClass>,
    /// Finish timestamp per node
    pub finished: IndexMap<N, usize>,
}

impl<N: NodeKey> PartialEq for BfsResult<N> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && self.distance == other.distance
            && self.predecessor == other.predecessor
    }
}

impl<N: NodeKey> DfsResult<N> {
    /// True if any edge closes a cycle.
    pub fn has_back_edge(&self) -> bool {
        self.classification.values().any(|class| *class == EdgeClass::Back)
    }

    /// Edges with the given classification, in discovery order.
    pub fn edges_of(&self, class: EdgeClass) -> impl Iterator<Item = &(N, N)> {
        self.classification
            .iter()
            .filter(move |(_, c)| **c == class)
            .map(|(edge, _)| edge)
    }
}

impl<N: NodeKey> PartialEq for DfsResult<N> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && self.predecessor == other.predecessor
            && self.discovered == other.discovered
            && self.classification == other.classification
            && self.finished == other.finished
    }
}

/// Breadth-First Search from `start`.
///
/// Every node of the graph appears in the result. Reachable nodes end
/// `Finished` with a finite distance; the rest stay `Unexplored`.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`] if `start` is absent.
pub fn bfs<N, Q>(graph: &Graph<N>, start: &Q) -> Result<BfsResult<N>>
where
    N: NodeKey + Borrow<Q>,
    Q: Hash + Eq + Display + ?Sized,
{
    let start = graph.require_node(start)?;
    Ok(bfs_from(graph, start))
}

fn bfs_from<N: NodeKey>(graph: &Graph<N>, start: &N) -> BfsResult<N> {
    let mut state: IndexMap<N, NodeState> = graph
        .node_ids()
        .map(|id| (id.clone(), NodeState::Unexplored))
        .collect();
    let mut distance: IndexMap<N, Option<usize>> =
        graph.node_ids().map(|id| (id.clone(), None)).collect();
    let mut predecessor: IndexMap<N, Option<N>> =
        graph.node_ids().map(|id| (id.clone(), None)).collect();

    state[start] = NodeState::Discovered;
    distance[start] = Some(0);
    let mut queue = VecDeque::from([start]);

    while let Some(u) = queue.pop_front() {
        let next = distance[u].map(|d| d + 1);
        for v in graph.adjacency(u).into_iter().flat_map(|adj| adj.keys()) {
            if state[v] == NodeState::Unexplored {
                state[v] = NodeState::Discovered;
                distance[v] = next;
                predecessor[v] = Some(u.clone());
                queue.push_back(v);
            }
        }
        state[u] = NodeState::Finished;
    }

    BfsResult {
        state,
        distance,
        predecessor,
    }
}

/// Depth-First Search over the whole graph.
///
/// Unexplored nodes are taken as new tree roots in insertion order. A single
/// clock stamps each discovery and each finish, so a node always finishes
/// after its own discovery and after every node discovered beneath it.
pub fn dfs<N: NodeKey>(graph: &Graph<N>) -> DfsResult<N> {
    let mut state: IndexMap<N, NodeState> = graph
        .node_ids()
        .map(|id| (id.clone(), NodeState::Unexplored))
        .collect();
    let mut predecessor: IndexMap<N, Option<N>> =
        graph.node_ids().map(|id| (id.clone(), None)).collect();
    let mut discovered: IndexMap<N, usize> = IndexMap::with_capacity(graph.nb_nodes());
    let mut finished: IndexMap<N, usize> = IndexMap::with_capacity(graph.nb_nodes());
    let mut classification = IndexMap::new();

    let mut time = 0usize;
    // (node, index of the next outgoing edge to examine)
    let mut stack: Vec<(&N, usize)> = Vec::new();

    for root in graph.node_ids() {
        if state[root] != NodeState::Unexplored {
            continue;
        }

        time += 1;
        state[root] = NodeState::Discovered;
        discovered.insert(root.clone(), time);
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let u = frame.0;
            let next = graph
                .adjacency(u)
                .and_then(|adj| adj.get_index(frame.1))
                .map(|(v, _)| v);
            frame.1 += 1;

            let Some(v) = next else {
                stack.pop();
                time += 1;
                state[u] = NodeState::Finished;
                finished.insert(u.clone(), time);
                continue;
            };

            let seen = state[v];
            let class = match seen {
                NodeState::Unexplored => {
                    predecessor[v] = Some(u.clone());
                    time += 1;
                    state[v] = NodeState::Discovered;
                    discovered.insert(v.clone(), time);
                    stack.push((v, 0));
                    EdgeClass::Tree
                }
                NodeState::Discovered => EdgeClass::Back,
                NodeState::Finished if discovered[u] > discovered[v] => EdgeClass::Cross,
                NodeState::Finished => EdgeClass::Forward,
            };
            classification.insert((u.clone(), v.clone()), class);
        }
    }

    debug!(
        "DFS classified {} edges over {} nodes",
        classification.len(),
        discovered.len()
    );

    DfsResult {
        state,
        predecessor,
        discovered,
        classification,
        finished,
    }
}

/// True iff a full DFS classifies no edge as a back edge.
pub fn is_acyclic<N: NodeKey>(graph: &Graph<N>) -> bool {
    !dfs(graph).has_back_edge()
}

/// Topological order via DFS post-order, reversed.
///
/// Every edge `(u, v)` has `u` before `v`. The relative order of unrelated
/// components follows node insertion order and is otherwise unspecified.
///
/// # Errors
///
/// Returns [`GraphError::Cyclic`] if the graph is not acyclic.
pub fn topological_sort<N: NodeKey>(graph: &Graph<N>) -> Result<Vec<N>> {
    if !is_acyclic(graph) {
        return Err(GraphError::Cyclic {
            operation: "topological sort",
        });
    }

    let mut visited: HashSet<&N> = HashSet::with_capacity(graph.nb_nodes());
    let mut order = Vec::with_capacity(graph.nb_nodes());
    let mut stack: Vec<(&N, usize)> = Vec::new();

    for root in graph.node_ids() {
        if !visited.insert(root) {
            continue;
        }
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let u = frame.0;
            let next = graph
                .adjacency(u)
                .and_then(|adj| adj.get_index(frame.1))
                .map(|(v, _)| v);
            frame.1 += 1;

            match next {
                Some(v) => {
                    if visited.insert(v) {
                        stack.push((v, 0));
                    }
                }
                None => {
                    stack.pop();
                    order.push(u.clone());
                }
            }
        }
    }

    order.reverse();
    Ok(order)
}

/// Shortest unweighted path from `start` to `end`.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`] if either endpoint is absent.
pub fn shortest_path<N, Q>(graph: &Graph<N>, start: &Q, end: &Q) -> Result<Vec<N>>
where
    N: NodeKey + Borrow<Q>,
    Q: Hash + Eq + Display + ?Sized,
{
    let start = graph.require_node(start)?;
    graph.require_node(end)?;
    Ok(bfs_from(graph, start).path_to(end))
}

/// Maximum, over all roots, of the longest shortest path to any leaf.
///
/// A root that reaches no leaf contributes 0. A graph without roots (empty or
/// undirected) has depth 0.
///
/// # Errors
///
/// Returns [`GraphError::Cyclic`] if the graph is not acyclic.
pub fn max_depth<N: NodeKey>(graph: &Graph<N>) -> Result<usize> {
    if !is_acyclic(graph) {
        return Err(GraphError::Cyclic {
            operation: "max depth",
        });
    }

    let leaves: Vec<&N> = graph.leaves().collect();
    let mut depth = 0;

    for root in graph.roots() {
        let reached = bfs_from(graph, root);
        let root_depth = leaves
            .iter()
            .filter_map(|leaf| reached.distance_to(*leaf))
            .max()
            .unwrap_or(0);
        depth = depth.max(root_depth);
    }

    debug!("Max depth {depth} over {} roots", graph.roots().count());
    Ok(depth)
}
