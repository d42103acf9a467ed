//! Core graph types
//!
//! This module contains the fundamental data structures used in the dependency
//! graph.

use std::collections::BTreeSet;

use crate::common::ConfigBuilder;
use crate::error::DepvizError;

/// Where a graph node comes from: a module of the build itself or an
/// external artifact pulled in as a dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Module,
    External,
}

/// Represents one artifact in the dependency graph
///
/// Nodes are immutable once inserted into a [`GraphBuilder`]; re-adding an
/// equal node is a no-op keyed by the identity renderer's string.
///
/// [`GraphBuilder`]: crate::graph::GraphBuilder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub classifier: Option<String>,
    pub scope: Option<String>,
    pub optional: bool,
    pub provenance: Provenance,
}

impl DependencyNode {
    pub fn builder() -> DependencyNodeBuilder {
        DependencyNodeBuilder::new()
    }
}

pub struct DependencyNodeBuilder {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    classifier: Option<String>,
    scope: Option<String>,
    optional: bool,
    provenance: Provenance,
}

impl Default for DependencyNodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyNodeBuilder {
    pub fn new() -> Self {
        Self {
            group_id: None,
            artifact_id: None,
            version: None,
            classifier: None,
            scope: None,
            optional: false,
            provenance: Provenance::External,
        }
    }

    pub fn with_group_id(mut self, group_id: &str) -> Self {
        self.group_id = Some(group_id.to_string());
        self
    }

    pub fn with_artifact_id(mut self, artifact_id: &str) -> Self {
        self.artifact_id = Some(artifact_id.to_string());
        self
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn with_classifier(mut self, classifier: Option<String>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_scope(mut self, scope: Option<String>) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }
}

impl ConfigBuilder for DependencyNodeBuilder {
    type Config = DependencyNode;

    fn build(self) -> Result<Self::Config, DepvizError> {
        Ok(DependencyNode {
            group_id: self.group_id.ok_or_else(|| DepvizError::ConfigurationError {
                message: "Missing required field: group_id".to_string(),
            })?,
            artifact_id: self
                .artifact_id
                .ok_or_else(|| DepvizError::ConfigurationError {
                    message: "Missing required field: artifact_id".to_string(),
                })?,
            version: self.version.ok_or_else(|| DepvizError::ConfigurationError {
                message: "Missing required field: version".to_string(),
            })?,
            classifier: self.classifier,
            scope: self.scope,
            optional: self.optional,
            provenance: self.provenance,
        })
    }
}

/// Decoration attached to a directed edge between two nodes
///
/// At most one edge exists per ordered node pair; inserting the same pair
/// again merges decorations instead of duplicating the edge. Sets keep the
/// merge commutative and the label output sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeDecoration {
    pub scopes: BTreeSet<String>,
    pub versions: BTreeSet<String>,
    pub optional: bool,
}

impl EdgeDecoration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoration derived from the target node of the edge
    pub fn for_target(node: &DependencyNode) -> Self {
        let mut decoration = Self::new();
        if let Some(scope) = &node.scope {
            decoration.scopes.insert(scope.clone());
        }
        decoration.versions.insert(node.version.clone());
        decoration.optional = node.optional;
        decoration
    }

    /// Union-combine another decoration into this one
    pub fn merge(&mut self, other: &EdgeDecoration) {
        self.scopes.extend(other.scopes.iter().cloned());
        self.versions.extend(other.versions.iter().cloned());
        self.optional = self.optional || other.optional;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(artifact_id: &str, version: &str, scope: Option<&str>) -> DependencyNode {
        DependencyNode::builder()
            .with_group_id("com.example")
            .with_artifact_id(artifact_id)
            .with_version(version)
            .with_scope(scope.map(str::to_string))
            .build()
            .unwrap()
    }

    #[test]
    fn test_node_builder_defaults() {
        let node = node("lib-a", "1.0.0", None);

        assert_eq!(node.group_id, "com.example");
        assert!(!node.optional);
        assert_eq!(node.provenance, Provenance::External);
    }

    #[test]
    fn test_node_builder_missing_field() {
        let result = DependencyNode::builder().with_artifact_id("lib-a").build();

        assert!(matches!(
            result,
            Err(DepvizError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_decoration_merge_is_commutative() {
        let a = EdgeDecoration::for_target(&node("lib-a", "1.0.0", Some("compile")));
        let b = EdgeDecoration::for_target(&node("lib-a", "2.0.0", Some("test")));

        let mut ab = a.clone();
        ab.merge(&b);
        let mut ba = b.clone();
        ba.merge(&a);

        assert_eq!(ab, ba);
        assert_eq!(ab.scopes.len(), 2);
        assert_eq!(ab.versions.len(), 2);
    }

    #[test]
    fn test_decoration_merge_is_idempotent() {
        let a = EdgeDecoration::for_target(&node("lib-a", "1.0.0", Some("compile")));
        let mut merged = a.clone();
        merged.merge(&a);

        assert_eq!(merged, a);
    }
}
