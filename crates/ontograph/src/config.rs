//! Graph construction settings.

use serde::{Deserialize, Serialize};

/// Flags fixed when a [`Graph`](crate::Graph) is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Directed graphs track roots/leaves and answer directional queries
    pub directed: bool,

    /// Whether edges carry a weight attribute
    pub weighted: bool,

    /// Edge attribute holding the weight (only meaningful when `weighted`)
    pub weight_attribute: Option<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: true,
            weighted: false,
            weight_attribute: None,
        }
    }
}

impl GraphConfig {
    /// Config for an unweighted directed graph.
    pub fn directed() -> Self {
        Self::default()
    }

    /// Config for an unweighted undirected graph.
    pub fn undirected() -> Self {
        Self {
            directed: false,
            ..Default::default()
        }
    }

    /// Mark the graph weighted, reading weights from `attribute`.
    pub fn with_weight_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.weighted = true;
        self.weight_attribute = Some(attribute.into());
        self
    }
}
