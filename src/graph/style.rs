//! Per-format style configuration
//!
//! A [`GraphStyleConfigurer`] turns boolean display flags into the concrete
//! renderer/formatter wiring for one output format. The format is fixed per
//! invocation; the configurer is a closed set of variants, not a plugin
//! registry.

use crate::error::DepvizError;
use crate::graph::builder::{GraphBuilder, GraphWiring};
use crate::graph::format::{
    DotGraphFormatter, GmlGraphFormatter, GraphFormatter, PumlGraphFormatter, TextGraphFormatter,
};
use crate::graph::identity::NodeIdRenderer;
use crate::graph::label::{EdgeLabelRenderer, NodeLabelRenderer};

/// Target output syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Dot,
    Gml,
    Puml,
    Text,
}

#[derive(Debug, Clone, Copy)]
pub struct GraphStyleConfigurer {
    format: GraphFormat,
    show_group_ids: bool,
    show_artifact_ids: bool,
    show_versions_on_nodes: bool,
    show_versions_on_edges: bool,
    show_scopes_on_edges: bool,
    merge_versions: bool,
}

impl GraphStyleConfigurer {
    pub fn new(format: GraphFormat) -> Self {
        Self {
            format,
            show_group_ids: false,
            show_artifact_ids: true,
            show_versions_on_nodes: false,
            show_versions_on_edges: false,
            show_scopes_on_edges: false,
            merge_versions: false,
        }
    }

    pub fn show_group_ids(mut self, show_group_ids: bool) -> Self {
        self.show_group_ids = show_group_ids;
        self
    }

    pub fn show_artifact_ids(mut self, show_artifact_ids: bool) -> Self {
        self.show_artifact_ids = show_artifact_ids;
        self
    }

    pub fn show_versions_on_nodes(mut self, show_versions_on_nodes: bool) -> Self {
        self.show_versions_on_nodes = show_versions_on_nodes;
        self
    }

    pub fn show_versions_on_edges(mut self, show_versions_on_edges: bool) -> Self {
        self.show_versions_on_edges = show_versions_on_edges;
        self
    }

    pub fn show_scopes_on_edges(mut self, show_scopes_on_edges: bool) -> Self {
        self.show_scopes_on_edges = show_scopes_on_edges;
        self
    }

    /// Collapse all versions of one artifact into a single node by leaving
    /// the version out of the node identity
    pub fn merge_versions(mut self, merge_versions: bool) -> Self {
        self.merge_versions = merge_versions;
        self
    }

    /// Wire the builder with renderers matching the flags and the formatter
    /// matching the format tag. Must be called exactly once, before any
    /// insertion into the builder.
    pub fn configure(self, mut builder: GraphBuilder) -> Result<GraphBuilder, DepvizError> {
        let formatter: Box<dyn GraphFormatter> = match self.format {
            GraphFormat::Dot => Box::new(DotGraphFormatter::new()),
            GraphFormat::Gml => Box::new(GmlGraphFormatter::new()),
            GraphFormat::Puml => Box::new(PumlGraphFormatter::new()),
            GraphFormat::Text => Box::new(TextGraphFormatter::new()),
        };

        builder.install_wiring(GraphWiring {
            id_renderer: NodeIdRenderer::new()
                .with_version(!self.merge_versions)
                .with_classifier(true),
            node_labels: NodeLabelRenderer::new(
                self.show_group_ids,
                self.show_artifact_ids,
                self.show_versions_on_nodes,
            ),
            edge_labels: EdgeLabelRenderer::new(
                self.show_versions_on_edges,
                self.show_scopes_on_edges,
            ),
            formatter,
        })?;

        Ok(builder)
    }
}
