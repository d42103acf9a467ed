//! Graph factories
//!
//! Factories own a configured [`GraphBuilder`], convert an input document
//! into edge insertions, and hand back the serialized text. Repeated
//! traversal reconstructs equal-but-distinct node instances, so all dedup
//! goes through the builder's identity-renderer strings, never through
//! reference equality.

use std::collections::HashMap;

use miette::Result;

use crate::error::DepvizError;
use crate::graph::builder::GraphBuilder;
use crate::graph::types::{DependencyNode, EdgeDecoration, Provenance};
use crate::input::{DependencyTreeNode, ReactorModel};

/// Builds a graph from a resolved dependency tree
pub struct TreeGraphFactory {
    builder: GraphBuilder,
    include_optional: bool,
}

impl TreeGraphFactory {
    pub fn new(builder: GraphBuilder, include_optional: bool) -> Self {
        Self {
            builder,
            include_optional,
        }
    }

    /// Walk the tree, insert parent→child edges, and serialize.
    ///
    /// Optional dependencies are filtered here, before insertion, so an
    /// excluded artifact appears neither as an edge nor (without another
    /// referrer) as a node.
    pub fn create_graph(mut self, tree: &DependencyTreeNode) -> Result<String> {
        let root = tree.artifact.to_node(Provenance::Module)?;
        // A project without dependencies still renders as a single node
        self.builder.add_node(&root)?;
        self.walk(&root, tree)?;

        self.builder.serialize()
    }

    fn walk(
        &mut self,
        parent: &DependencyNode,
        tree: &DependencyTreeNode,
    ) -> Result<(), DepvizError> {
        for subtree in &tree.dependencies {
            let child = subtree.artifact.to_node(Provenance::External)?;
            if child.optional && !self.include_optional {
                continue;
            }

            self.builder
                .add_edge(parent, &child, EdgeDecoration::for_target(&child))?;
            self.walk(&child, subtree)?;
        }

        Ok(())
    }
}

/// Builds a graph from a multi-module reactor
pub struct ReactorGraphFactory {
    builder: GraphBuilder,
}

impl ReactorGraphFactory {
    pub fn new(builder: GraphBuilder) -> Self {
        Self { builder }
    }

    /// Walk the reactor ordering from the least-depended-upon end backward
    /// and insert one edge per parent/downstream pair.
    ///
    /// Both endpoint nodes ride in on the edge insertion; duplicate pairs
    /// and repeated nodes merge inside the builder by identity string.
    pub fn create_graph(mut self, reactor: &ReactorModel) -> Result<String> {
        // Downstream references are artifact ids, so colliding ids would
        // silently rewire edges to whichever module won the map slot.
        let mut projects_by_id: HashMap<&str, &crate::input::ReactorProject> =
            HashMap::with_capacity(reactor.projects.len());
        for project in &reactor.projects {
            let artifact_id = project.artifact.artifact_id.as_str();
            if projects_by_id.insert(artifact_id, project).is_some() {
                return Err(DepvizError::GraphError {
                    message: format!(
                        "duplicate artifact id '{artifact_id}' in the reactor"
                    ),
                }
                .into());
            }
        }

        // Start at the end of the reactor
        let mut sorted_projects: Vec<&crate::input::ReactorProject> =
            reactor.projects.iter().collect();
        sorted_projects.reverse();

        for parent_project in sorted_projects {
            let parent = parent_project.artifact.to_node(Provenance::Module)?;

            for downstream in &parent_project.downstream {
                let downstream_project = projects_by_id.get(downstream.as_str()).ok_or_else(
                    || DepvizError::GraphError {
                        message: format!(
                            "downstream project '{downstream}' is not part of the reactor"
                        ),
                    },
                )?;
                let child = downstream_project.artifact.to_node(Provenance::Module)?;

                self.builder
                    .add_edge(&parent, &child, EdgeDecoration::for_target(&child))?;
            }
        }

        self.builder.serialize()
    }
}
