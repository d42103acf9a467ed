//! Node and edge label rendering
//!
//! Labels are what the output formats display; they are independent of node
//! identity. Both renderers are pure functions parameterized by the style
//! toggles at construction time.

use crate::graph::types::{DependencyNode, EdgeDecoration};

#[derive(Debug, Clone, Copy, Default)]
pub struct NodeLabelRenderer {
    show_group_ids: bool,
    show_artifact_ids: bool,
    show_versions: bool,
}

impl NodeLabelRenderer {
    pub fn new(show_group_ids: bool, show_artifact_ids: bool, show_versions: bool) -> Self {
        Self {
            show_group_ids,
            show_artifact_ids,
            show_versions,
        }
    }

    /// Render the display label for a node.
    ///
    /// Empty labels break several output syntaxes, so when every toggle is
    /// off the artifact id is used as a fallback.
    pub fn render(&self, node: &DependencyNode) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3);

        if self.show_group_ids {
            parts.push(&node.group_id);
        }
        if self.show_artifact_ids {
            parts.push(&node.artifact_id);
        }
        if self.show_versions {
            parts.push(&node.version);
        }

        if parts.is_empty() {
            return node.artifact_id.clone();
        }

        parts.join(":")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeLabelRenderer {
    show_versions: bool,
    show_scopes: bool,
}

impl EdgeLabelRenderer {
    pub fn new(show_versions: bool, show_scopes: bool) -> Self {
        Self {
            show_versions,
            show_scopes,
        }
    }

    /// Render the display label for an edge.
    ///
    /// Every decoration part sits behind a toggle; with both toggles off the
    /// label is empty regardless of what the decoration carries.
    pub fn render(&self, decoration: &EdgeDecoration) -> String {
        let mut parts: Vec<String> = Vec::new();

        if self.show_versions && !decoration.versions.is_empty() {
            parts.push(
                decoration
                    .versions
                    .iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", "),
            );
        }

        if self.show_scopes {
            if !decoration.scopes.is_empty() {
                parts.push(
                    decoration
                        .scopes
                        .iter()
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(", "),
                );
            }

            if decoration.optional {
                parts.push("optional".to_string());
            }
        }

        parts.join(" ")
    }
}
