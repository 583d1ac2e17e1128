//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Graph`]: node/edge storage, root/leaf bookkeeping and directional queries
//! - [`PropertyMap`]: schema-free, type-safe node and edge attributes
//! - [`algorithms`]: BFS, DFS, cycle detection, topological sort, shortest paths

mod engine;
mod property;
mod types;
pub mod algorithms;

pub use algorithms::{BfsResult, DfsResult};
pub use engine::{Adjacency, Graph};
pub use property::{PropertyMap, PropertyValue, SharedProperties};
pub use types::{EdgeClass, NodeId, NodeKey, NodeState};
