//! Convenience helpers for ontology terms and gene product annotations.
//!
//! Record parsers (OBO, GAF) live outside this crate; they call these helpers
//! to build the graph and then delegate structural questions to [`Graph`].
//! Term edges point from child to parent, annotation edges from gene product
//! to term, so a term's ancestors are its descendants in graph terms.

use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeId, PropertyMap, SharedProperties};
use log::{debug, warn};
use std::collections::BTreeSet;

/// Node attribute naming the kind of node.
pub const TYPE_KEY: &str = "type";

/// Edge attribute naming the relationship.
pub const RELATIONSHIP_KEY: &str = "relationship";

/// Edge attribute accumulating annotation evidence codes.
pub const EVIDENCE_CODES_KEY: &str = "evidence-codes";

/// Kind of node, stored under [`TYPE_KEY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Ontology concept
    GoTerm,
    /// Annotated biological entity
    GeneProduct,
}

impl NodeKind {
    /// Value stored in the node's `type` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::GoTerm => "GOTerm",
            NodeKind::GeneProduct => "GeneProduct",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Relationship carried by an edge, stored under [`RELATIONSHIP_KEY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relationship {
    /// Child term specializes parent term
    IsA,
    /// Child term is a component of parent term
    PartOf,
    /// Gene product is annotated with term
    Annotation,
}

impl Relationship {
    /// Value stored in the edge's `relationship` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::IsA => "is a",
            Relationship::PartOf => "part of",
            Relationship::Annotation => "annotation",
        }
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Descriptive fields of an ontology term.
#[derive(Debug, Clone, Default)]
pub struct TermInfo<'a> {
    /// Human-readable name
    pub name: &'a str,
    /// Sub-ontology (e.g. "biological_process")
    pub namespace: &'a str,
    /// Textual definition
    pub definition: Option<&'a str>,
}

/// One gene product to term association.
#[derive(Debug, Clone)]
pub struct Annotation<'a> {
    /// Gene product accession
    pub gene_product: &'a str,
    /// Term id, possibly an alternate id
    pub term: &'a str,
    /// Evidence code supporting the association (e.g. "IEA")
    pub evidence_code: &'a str,
    /// Gene product symbol
    pub name: &'a str,
    /// Gene product description
    pub description: &'a str,
    /// Gene product synonyms
    pub aliases: Vec<String>,
}

/// Add a term node, or update the descriptive fields of an existing one.
///
/// # Returns
///
/// The term's attributes for further updates.
pub fn add_term<'g>(graph: &'g mut Graph, id: &str, info: TermInfo<'_>) -> &'g mut PropertyMap {
    let attrs = graph.add_node(id);
    attrs.insert(TYPE_KEY, NodeKind::GoTerm.as_str());
    attrs.insert("name", info.name);
    attrs.insert("namespace", info.namespace);
    if let Some(definition) = info.definition {
        attrs.insert("def", definition);
    }
    attrs
}

/// Link a child term to its parent.
///
/// An existing edge keeps its original relationship.
pub fn add_relationship(
    graph: &mut Graph,
    child: &str,
    parent: &str,
    relationship: Relationship,
) -> SharedProperties {
    graph.add_edge_with(
        child,
        parent,
        PropertyMap::new().with(RELATIONSHIP_KEY, relationship.as_str()),
    )
}

/// Attach a gene product to a term.
///
/// The term is resolved through the alternate-id table first. Repeated
/// annotations of the same pair accumulate their evidence codes on one edge.
///
/// # Returns
///
/// The annotation edge, or `None` (with a warning) if the term cannot be
/// resolved.
///
/// # Errors
///
/// Returns [`GraphError::PropertyTypeMismatch`](crate::GraphError::PropertyTypeMismatch)
/// if the edge already holds a non-list `evidence-codes` attribute.
pub fn annotate(graph: &mut Graph, annotation: &Annotation<'_>) -> Result<Option<SharedProperties>> {
    let term = match graph.resolve_id(annotation.term) {
        Some(term) => term.clone(),
        None => {
            warn!(
                "Could not attach gene product {} to unknown term {}",
                annotation.gene_product, annotation.term
            );
            return Ok(None);
        }
    };

    let gene_product = annotation.gene_product;
    let attrs = graph.add_node_with(
        gene_product,
        PropertyMap::new()
            .with("id", gene_product)
            .with(TYPE_KEY, NodeKind::GeneProduct.as_str()),
    );
    attrs.insert("name", annotation.name);
    attrs.insert("desc", annotation.description);
    attrs.insert("aliases", annotation.aliases.clone());

    let edge = graph.add_edge(gene_product, term);
    {
        let mut props = edge.borrow_mut();
        props.insert(RELATIONSHIP_KEY, Relationship::Annotation.as_str());
        props.push_to_list(EVIDENCE_CODES_KEY, annotation.evidence_code)?;
    }

    Ok(Some(edge))
}

/// Check whether `id` is a node of the given kind.
pub fn is_kind(graph: &Graph, id: &str, kind: NodeKind) -> bool {
    graph
        .node(id)
        .and_then(|attrs| attrs.get_string(TYPE_KEY))
        .is_some_and(|value| value == kind.as_str())
}

/// Terms a gene product is annotated with.
///
/// With `recursive`, every term reachable from those terms is included too.
/// Results are sorted; an unknown gene product yields an empty list.
pub fn go_terms(graph: &Graph, gene_product: &str, recursive: bool) -> Vec<NodeId> {
    let Some(direct) = graph.neighbors(gene_product) else {
        return Vec::new();
    };

    if !recursive {
        return direct;
    }

    let mut found = BTreeSet::new();
    let mut stack = direct;
    while let Some(node) = stack.pop() {
        if !is_kind(graph, &node, NodeKind::GoTerm) || found.contains(&node) {
            continue;
        }
        if let Some(next) = graph.neighbors(node.as_str()) {
            stack.extend(next);
        }
        found.insert(node);
    }

    debug!("{} terms reachable from {gene_product}", found.len());
    found.into_iter().collect()
}

/// Gene products annotated with a term.
///
/// With `recursive`, gene products annotated with any of the term's
/// descendant terms are included too. Results are sorted; an unknown term
/// yields an empty list.
///
/// # Errors
///
/// Returns [`GraphError::Undirected`](crate::GraphError::Undirected) for an
/// undirected graph.
pub fn gene_products(graph: &Graph, term: &str, recursive: bool) -> Result<Vec<NodeId>> {
    if graph.is_directed() && !graph.contains_node(term) {
        return Ok(Vec::new());
    }

    let candidates = if recursive {
        graph.get_ascendants(term)?
    } else {
        graph.get_predecessors(term)?
    };

    let mut products: Vec<NodeId> = candidates
        .into_iter()
        .filter(|id| is_kind(graph, id, NodeKind::GeneProduct))
        .collect();
    products.sort();
    products.dedup();
    Ok(products)
}

/// Depth of the term hierarchy, or `None` (with a warning) if it has a cycle.
pub fn hierarchy_depth(graph: &Graph) -> Option<usize> {
    match graph.max_depth() {
        Ok(depth) => Some(depth),
        Err(GraphError::Cyclic { .. }) => {
            warn!("Ontology graph is not acyclic; depth is undefined");
            None
        }
        Err(e) => {
            warn!("Could not compute ontology depth: {e}");
            None
        }
    }
}
