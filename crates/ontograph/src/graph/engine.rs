//! Main Graph interface: storage, mutation and directional queries.

use super::algorithms::{self, BfsResult, DfsResult};
use super::property::{PropertyMap, SharedProperties};
use super::types::{NodeId, NodeKey};
use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};
use std::borrow::Borrow;
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::rc::Rc;

/// Outgoing edges of one node, keyed by target in insertion order.
pub type Adjacency<N> = IndexMap<N, SharedProperties>;

/// An attribute-bearing directed or undirected graph.
///
/// Nodes and edges are only ever added. Tables keep insertion order, which
/// makes DFS forests and topological orders reproducible; neighbor listings
/// are additionally sorted.
///
/// Edge attributes are `Rc<RefCell<_>>` handles, so a `Graph` is neither
/// `Send` nor `Sync` and stays on the thread that built it.
///
/// # Example
///
/// ```
/// use ontograph::Graph;
///
/// let mut graph = Graph::directed();
/// graph.add_edge("A", "B");
/// graph.add_edge("B", "C");
///
/// assert_eq!(graph.get_shortest_path("A", "C").unwrap(), vec!["A", "B", "C"]);
/// assert_eq!(graph.roots().collect::<Vec<_>>(), vec!["A"]);
/// ```
#[derive(Debug)]
pub struct Graph<N = NodeId> {
    config: GraphConfig,
    nodes: IndexMap<N, PropertyMap>,
    edges: IndexMap<N, Adjacency<N>>,
    alt_ids: IndexMap<N, N>,
    // Only maintained for directed graphs
    roots: IndexSet<N>,
    leaves: IndexSet<N>,
}

impl Graph<NodeId> {
    /// Create an empty, unweighted, directed graph with string ids.
    pub fn directed() -> Self {
        Self::with_config(GraphConfig::directed())
    }

    /// Create an empty, unweighted, undirected graph with string ids.
    pub fn undirected() -> Self {
        Self::with_config(GraphConfig::undirected())
    }
}

impl Default for Graph<NodeId> {
    fn default() -> Self {
        Self::directed()
    }
}

impl<N: NodeKey> Graph<N> {
    /// Create an empty graph. The config flags cannot change afterwards.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
            alt_ids: IndexMap::new(),
            roots: IndexSet::new(),
            leaves: IndexSet::new(),
        }
    }

    /// Construction flags of this graph.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Whether edges are directed.
    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    /// Whether edges carry a weight attribute.
    pub fn is_weighted(&self) -> bool {
        self.config.weighted
    }

    /// Name of the edge attribute holding weights, if any.
    pub fn weight_attribute(&self) -> Option<&str> {
        self.config.weight_attribute.as_deref()
    }

    // ===== Storage & Mutation =====

    /// Add a node with empty attributes.
    ///
    /// Returns the node's attributes; an existing node is left untouched.
    pub fn add_node(&mut self, id: impl Into<N>) -> &mut PropertyMap {
        self.insert_node(id.into(), None)
    }

    /// Add a node with the given attributes.
    ///
    /// If the node already exists its stored attributes are returned as-is and
    /// `properties` is discarded.
    pub fn add_node_with(&mut self, id: impl Into<N>, properties: PropertyMap) -> &mut PropertyMap {
        self.insert_node(id.into(), Some(properties))
    }

    /// Add an edge with empty attributes, creating missing endpoints.
    ///
    /// Returns the edge's shared attributes (existing or new).
    pub fn add_edge(&mut self, source: impl Into<N>, target: impl Into<N>) -> SharedProperties {
        self.add_edge_seeded(source, target, None, None, None)
    }

    /// Add an edge with the given attributes, creating missing endpoints.
    ///
    /// Re-inserting an existing edge keeps the first payload and returns it.
    pub fn add_edge_with(
        &mut self,
        source: impl Into<N>,
        target: impl Into<N>,
        properties: PropertyMap,
    ) -> SharedProperties {
        self.add_edge_seeded(source, target, Some(properties), None, None)
    }

    /// Add an edge, seeding the attributes of endpoints that do not exist yet.
    ///
    /// Endpoint seeds are ignored for nodes already in the graph and the edge
    /// payload is ignored if the ordered pair already has an edge. For
    /// undirected graphs the same attribute handle is stored for both
    /// directions.
    pub fn add_edge_seeded(
        &mut self,
        source: impl Into<N>,
        target: impl Into<N>,
        properties: Option<PropertyMap>,
        source_properties: Option<PropertyMap>,
        target_properties: Option<PropertyMap>,
    ) -> SharedProperties {
        let source = source.into();
        let target = target.into();

        if !self.nodes.contains_key(&source) {
            self.insert_node(source.clone(), source_properties);
        }
        if !self.nodes.contains_key(&target) {
            self.insert_node(target.clone(), target_properties);
        }

        if let Some(existing) = self.edges.get(&source).and_then(|adj| adj.get(&target)) {
            trace!("Edge {source} -> {target} already present");
            return Rc::clone(existing);
        }

        trace!("Adding edge: {source} -> {target}");
        let shared = Rc::new(RefCell::new(properties.unwrap_or_default()));

        self.edges
            .entry(source.clone())
            .or_default()
            .insert(target.clone(), Rc::clone(&shared));

        if self.config.directed {
            self.roots.shift_remove(&target);
            self.leaves.shift_remove(&source);
        } else {
            self.edges
                .entry(target)
                .or_default()
                .insert(source, Rc::clone(&shared));
        }

        shared
    }

    fn insert_node(&mut self, id: N, properties: Option<PropertyMap>) -> &mut PropertyMap {
        if !self.nodes.contains_key(&id) {
            trace!("Adding node: {id}");
            self.edges.insert(id.clone(), IndexMap::new());
            if self.config.directed {
                self.roots.insert(id.clone());
                self.leaves.insert(id.clone());
            }
        }
        self.nodes.entry(id).or_insert_with(|| properties.unwrap_or_default())
    }

    /// Attributes of a node.
    pub fn node<Q>(&self, id: &Q) -> Option<&PropertyMap>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.nodes.get(id)
    }

    /// Mutable attributes of a node.
    pub fn node_mut<Q>(&mut self, id: &Q) -> Option<&mut PropertyMap>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.nodes.get_mut(id)
    }

    /// Check whether a node exists.
    pub fn contains_node<Q>(&self, id: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.nodes.contains_key(id)
    }

    /// Iterate over nodes and their attributes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (&N, &PropertyMap)> {
        self.nodes.iter()
    }

    /// Iterate over node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &N> {
        self.nodes.keys()
    }

    /// Shared attributes of the edge `source -> target`.
    pub fn edge<Q>(&self, source: &Q, target: &Q) -> Option<SharedProperties>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.edges
            .get(source)
            .and_then(|adj| adj.get(target))
            .map(Rc::clone)
    }

    /// Iterate over every stored `(source, target, attributes)` triple.
    ///
    /// Undirected edges appear once per stored direction.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, &SharedProperties)> {
        self.edges
            .iter()
            .flat_map(|(source, adj)| adj.iter().map(move |(target, props)| (source, target, props)))
    }

    /// Outgoing adjacency of a node.
    pub fn adjacency<Q>(&self, id: &Q) -> Option<&Adjacency<N>>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.edges.get(id)
    }

    /// Sorted neighbor ids, or `None` for an unknown node.
    pub fn neighbors<Q>(&self, id: &Q) -> Option<Vec<N>>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.edges.get(id).map(sorted_keys)
    }

    /// Number of nodes.
    pub fn nb_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored adjacency entries.
    ///
    /// An undirected edge is stored once per direction and counted twice.
    pub fn nb_edges(&self) -> usize {
        self.edges.values().map(IndexMap::len).sum()
    }

    /// Nodes without incoming edges, in insertion order. Empty when undirected.
    pub fn roots(&self) -> impl Iterator<Item = &N> {
        self.roots.iter()
    }

    /// Nodes without outgoing edges, in insertion order. Empty when undirected.
    pub fn leaves(&self) -> impl Iterator<Item = &N> {
        self.leaves.iter()
    }

    // ===== Alternate ids =====

    /// Register `alias` as an alternate identifier for `canonical`.
    pub fn add_alt_id(&mut self, alias: impl Into<N>, canonical: impl Into<N>) {
        self.alt_ids.insert(alias.into(), canonical.into());
    }

    /// Alias table, in registration order.
    pub fn alt_ids(&self) -> &IndexMap<N, N> {
        &self.alt_ids
    }

    /// Resolve an identifier to a node id, following alias chains.
    ///
    /// Returns `None` when neither the id nor any alias it leads to is a node,
    /// including alias chains that loop.
    pub fn resolve_id<Q>(&self, id: &Q) -> Option<&N>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Some((key, _)) = self.nodes.get_key_value(id) {
            return Some(key);
        }
        self.follow_aliases(self.alt_ids.get(id)?)
    }

    fn follow_aliases<'a>(&'a self, mut current: &'a N) -> Option<&'a N> {
        for _ in 0..self.alt_ids.len() {
            if let Some((key, _)) = self.nodes.get_key_value(current) {
                return Some(key);
            }
            current = self.alt_ids.get(current)?;
        }
        None
    }

    // ===== Directional Queries =====

    /// Sorted direct successors of a node.
    ///
    /// # Errors
    ///
    /// [`GraphError::Undirected`] on undirected graphs,
    /// [`GraphError::NodeNotFound`] for an absent node.
    pub fn get_successors<Q>(&self, id: &Q) -> Result<Vec<N>>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.require_directed("successors")?;
        let key = self.require_node(id)?;
        Ok(self.successors_of(key))
    }

    /// Direct predecessors of a node, in node insertion order.
    ///
    /// Scans every adjacency entry.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::get_successors`].
    pub fn get_predecessors<Q>(&self, id: &Q) -> Result<Vec<N>>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.require_directed("predecessors")?;
        let key = self.require_node(id)?;
        Ok(self.predecessors_of(key))
    }

    /// Every node reachable from `id` by following edges forward.
    ///
    /// Nodes are reported once, in depth-first stack order. `id` itself is
    /// only included when it lies on a cycle.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::get_successors`].
    pub fn get_descendants<Q>(&self, id: &Q) -> Result<Vec<N>>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.require_directed("descendants")?;
        let key = self.require_node(id)?;
        Ok(self.descendants_of(key))
    }

    /// Every node from which `id` is reachable.
    ///
    /// Nodes are reported once, in depth-first stack order. `id` itself is
    /// only included when it lies on a cycle.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::get_successors`].
    pub fn get_ascendants<Q>(&self, id: &Q) -> Result<Vec<N>>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.require_directed("ascendants")?;
        let key = self.require_node(id)?;
        Ok(self.ascendants_of(key))
    }

    fn successors_of(&self, key: &N) -> Vec<N> {
        sorted_keys(&self.edges[key])
    }

    fn predecessors_of(&self, key: &N) -> Vec<N> {
        self.edges
            .iter()
            .filter(|(_, adj)| adj.contains_key(key))
            .map(|(node, _)| node.clone())
            .collect()
    }

    fn descendants_of(&self, key: &N) -> Vec<N> {
        reach(key, |node| self.edges[node].keys())
    }

    fn ascendants_of(&self, key: &N) -> Vec<N> {
        let reverse = self.reverse_adjacency();
        let reverse = &reverse;
        reach(key, move |node| {
            reverse.get(node).into_iter().flatten().copied()
        })
    }

    /// Incoming adjacency for every node, built in one pass.
    pub(crate) fn reverse_adjacency(&self) -> IndexMap<&N, Vec<&N>> {
        let mut reverse: IndexMap<&N, Vec<&N>> = IndexMap::with_capacity(self.nodes.len());
        for (source, adj) in &self.edges {
            for target in adj.keys() {
                reverse.entry(target).or_default().push(source);
            }
        }
        reverse
    }

    fn require_directed(&self, operation: &'static str) -> Result<()> {
        if self.config.directed {
            Ok(())
        } else {
            Err(GraphError::Undirected { operation })
        }
    }

    pub(crate) fn require_node<Q>(&self, id: &Q) -> Result<&N>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.nodes
            .get_key_value(id)
            .map(|(key, _)| key)
            .ok_or_else(|| GraphError::node_not_found(id))
    }

    // ===== Algorithm Methods =====

    /// Breadth-first search from `start` over all nodes.
    ///
    /// See [`algorithms::bfs`].
    pub fn bfs<Q>(&self, start: &Q) -> Result<BfsResult<N>>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        algorithms::bfs(self, start)
    }

    /// Full depth-first forest with timestamps and edge classification.
    ///
    /// See [`algorithms::dfs`].
    pub fn dfs(&self) -> DfsResult<N> {
        algorithms::dfs(self)
    }

    /// True iff no edge is classified as a back edge.
    pub fn is_acyclic(&self) -> bool {
        algorithms::is_acyclic(self)
    }

    /// Nodes ordered so that every edge points forward.
    ///
    /// # Errors
    ///
    /// [`GraphError::Cyclic`] if the graph has a cycle.
    pub fn topological_sort(&self) -> Result<Vec<N>> {
        algorithms::topological_sort(self)
    }

    /// Shortest unweighted path from `start` to `end`, inclusive.
    ///
    /// Empty when `end` is unreachable; `[start]` when both are the same node.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if either endpoint is absent.
    pub fn get_shortest_path<Q>(&self, start: &Q, end: &Q) -> Result<Vec<N>>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        algorithms::shortest_path(self, start, end)
    }

    /// Longest root-to-leaf shortest-path length, in edges.
    ///
    /// # Errors
    ///
    /// [`GraphError::Cyclic`] if the graph has a cycle.
    pub fn max_depth(&self) -> Result<usize> {
        algorithms::max_depth(self)
    }
}

fn sorted_keys<N: NodeKey>(adj: &Adjacency<N>) -> Vec<N> {
    let mut keys: Vec<N> = adj.keys().cloned().collect();
    keys.sort();
    keys
}

/// Stack-based reachability; each node is reported once.
fn reach<'a, N, F, I>(start: &'a N, mut next: F) -> Vec<N>
where
    N: NodeKey + 'a,
    F: FnMut(&'a N) -> I,
    I: Iterator<Item = &'a N>,
{
    let mut seen: HashSet<&N> = HashSet::new();
    let mut found = Vec::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        for neighbor in next(current) {
            if seen.insert(neighbor) {
                found.push(neighbor.clone());
                stack.push(neighbor);
            }
        }
    }

    debug!("Reached {} nodes from {start}", found.len());
    found
}
