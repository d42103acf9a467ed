//! Node identity rendering
//!
//! The identity string is the canonical key for a node: the graph builder
//! dedups nodes and edges by it. Equal artifacts must render to equal
//! strings, distinct artifacts to distinct strings.

use crate::graph::types::DependencyNode;

#[derive(Debug, Clone, Copy)]
pub struct NodeIdRenderer {
    with_version: bool,
    with_classifier: bool,
}

impl Default for NodeIdRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeIdRenderer {
    /// Identity over group id and artifact id only
    pub fn new() -> Self {
        Self {
            with_version: false,
            with_classifier: false,
        }
    }

    /// Include the version in the identity, keeping multiple versions of one
    /// artifact as distinct nodes
    pub fn with_version(mut self, with_version: bool) -> Self {
        self.with_version = with_version;
        self
    }

    /// Include the classifier in the identity when one is present
    pub fn with_classifier(mut self, with_classifier: bool) -> Self {
        self.with_classifier = with_classifier;
        self
    }

    pub fn render(&self, node: &DependencyNode) -> String {
        let mut id = format!("{}:{}", node.group_id, node.artifact_id);

        if self.with_classifier
            && let Some(classifier) = &node.classifier
        {
            id.push(':');
            id.push_str(classifier);
        }

        if self.with_version {
            id.push(':');
            id.push_str(&node.version);
        }

        id
    }
}
