//! Core graph types: node keys, traversal states, and edge classes.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Default node identifier (ontology term ids, gene product accessions).
pub type NodeId = String;

/// Bound satisfied by every type usable as a node identifier.
///
/// `Ord` keeps neighbor listings deterministic and `Display` feeds error
/// messages and exports.
pub trait NodeKey: Clone + Eq + Hash + Ord + Debug + Display {}

impl<T> NodeKey for T where T: Clone + Eq + Hash + Ord + Debug + Display {}

/// Visit state of a node during BFS or DFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeState {
    /// Not reached yet
    Unexplored,
    /// Reached, neighbors still being processed
    Discovered,
    /// All neighbors processed
    Finished,
}

impl std::fmt::Display for NodeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeState::Unexplored => write!(f, "UNEXPLORED"),
            NodeState::Discovered => write!(f, "DISCOVERED"),
            NodeState::Finished => write!(f, "FINISHED"),
        }
    }
}

/// Classification of an edge relative to a depth-first forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeClass {
    /// Edge to a node discovered through it
    Tree,
    /// Edge to a node still on the DFS stack; witnesses a cycle
    Back,
    /// Edge to a finished node discovered earlier
    Cross,
    /// Edge to a finished descendant
    Forward,
}

impl std::fmt::Display for EdgeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeClass::Tree => write!(f, "TREE EDGE"),
            EdgeClass::Back => write!(f, "BACK EDGE"),
            EdgeClass::Cross => write!(f, "CROSS EDGE"),
            EdgeClass::Forward => write!(f, "FORWARD EDGE"),
        }
    }
}
