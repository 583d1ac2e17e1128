//! # ontograph
//!
//! An attribute-bearing directed/undirected graph engine for ontologies and
//! their annotations.
//!
//! ## Core Principles
//!
//! - **Parser Agnostic**: Bring your own OBO/GAF reader, we handle the graph
//! - **Deterministic**: Insertion-ordered tables, sorted neighbor listings
//! - **Iterative**: Traversals never recurse, deep hierarchies are safe
//! - **Zero Magic**: Explicit over implicit, always
//!
//! ## Architecture
//!
//! ```text
//! Record parsers (OBO terms, GAF rows)      <- outside this crate
//!     ↓
//! Ontology helpers / delimited loader
//!     ↓
//! Core Graph (nodes, edges, alternate ids, roots/leaves)
//!     ↓
//! Algorithms (BFS, DFS, topological sort, shortest path, depth)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use ontograph::{Graph, PropertyMap};
//!
//! let mut graph = Graph::directed();
//! graph.add_edge_with("GO:0009987", "GO:0008150", PropertyMap::new().with("relationship", "is a"));
//! graph.add_edge("O05154", "GO:0009987");
//!
//! assert!(graph.is_acyclic());
//! assert_eq!(graph.max_depth().unwrap(), 2);
//! assert_eq!(graph.get_descendants("O05154").unwrap().len(), 2);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod loader;
pub mod ontology;

// Re-export main types
pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use graph::{
    BfsResult, DfsResult, EdgeClass, Graph, NodeId, NodeKey, NodeState, PropertyMap,
    PropertyValue, SharedProperties,
};
pub use loader::{load_delim, read_delim, DelimOptions};
