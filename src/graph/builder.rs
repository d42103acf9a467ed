//! Format-agnostic graph accumulation
//!
//! [`GraphBuilder`] collects unique nodes and merged edges, then delegates
//! serialization to the formatter installed by a
//! [`GraphStyleConfigurer`](crate::graph::GraphStyleConfigurer). Nodes are
//! keyed by their identity string, never by reference equality, so the same
//! artifact observed twice collapses into one node.

use std::collections::HashMap;

use miette::Result;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};

use crate::error::DepvizError;
use crate::graph::format::{GraphFormatter, RenderedEdge, RenderedNode};
use crate::graph::identity::NodeIdRenderer;
use crate::graph::label::{EdgeLabelRenderer, NodeLabelRenderer};
use crate::graph::types::{DependencyNode, EdgeDecoration};

/// Renderers and formatter installed by a style configurer
pub struct GraphWiring {
    pub id_renderer: NodeIdRenderer,
    pub node_labels: NodeLabelRenderer,
    pub edge_labels: EdgeLabelRenderer,
    pub formatter: Box<dyn GraphFormatter>,
}

pub struct GraphBuilder {
    graph: DiGraph<DependencyNode, EdgeDecoration>,
    node_indices: HashMap<String, NodeIndex>,
    edge_indices: HashMap<(String, String), EdgeIndex>,
    wiring: Option<GraphWiring>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
            edge_indices: HashMap::new(),
            wiring: None,
        }
    }

    /// Install renderers and formatter. Exactly once, before any insertion.
    pub(crate) fn install_wiring(&mut self, wiring: GraphWiring) -> Result<(), DepvizError> {
        if self.wiring.is_some() {
            return Err(DepvizError::ConfigurationError {
                message: "graph builder is already configured".to_string(),
            });
        }
        if self.graph.node_count() > 0 {
            return Err(DepvizError::ConfigurationError {
                message: "graph builder already has nodes; configure before inserting"
                    .to_string(),
            });
        }
        self.wiring = Some(wiring);
        Ok(())
    }

    fn wiring(&self) -> Result<&GraphWiring, DepvizError> {
        self.wiring
            .as_ref()
            .ok_or_else(|| DepvizError::ConfigurationError {
                message: "graph builder is not configured; apply a style configurer first"
                    .to_string(),
            })
    }

    /// The identity string used to key this node
    pub fn node_id(&self, node: &DependencyNode) -> Result<String, DepvizError> {
        Ok(self.wiring()?.id_renderer.render(node))
    }

    /// Insert a node if its identity is absent; no-op otherwise.
    /// Returns the canonical (possibly pre-existing) node index.
    pub fn add_node(&mut self, node: &DependencyNode) -> Result<NodeIndex, DepvizError> {
        if node.artifact_id.is_empty() {
            return Err(DepvizError::MalformedNode {
                message: format!("empty artifact id (group id '{}')", node.group_id),
            });
        }

        let id = self.node_id(node)?;
        if let Some(&index) = self.node_indices.get(&id) {
            return Ok(index);
        }

        let index = self.graph.add_node(node.clone());
        self.node_indices.insert(id, index);
        Ok(index)
    }

    /// Insert an edge, implicitly inserting both endpoint nodes. The edge is
    /// keyed by the ordered pair of endpoint identities; re-inserting merges
    /// the decoration instead of creating a parallel edge.
    pub fn add_edge(
        &mut self,
        from: &DependencyNode,
        to: &DependencyNode,
        decoration: EdgeDecoration,
    ) -> Result<(), DepvizError> {
        let from_index = self.add_node(from)?;
        let to_index = self.add_node(to)?;

        let key = (self.node_id(from)?, self.node_id(to)?);
        match self.edge_indices.get(&key) {
            Some(&edge_index) => {
                let existing = self.graph.edge_weight_mut(edge_index).ok_or_else(|| {
                    DepvizError::GraphError {
                        message: "edge weight not found for existing edge".to_string(),
                    }
                })?;
                existing.merge(&decoration);
            }
            None => {
                let edge_index = self.graph.add_edge(from_index, to_index, decoration);
                self.edge_indices.insert(key, edge_index);
            }
        }

        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn graph(&self) -> &DiGraph<DependencyNode, EdgeDecoration> {
        &self.graph
    }

    /// Serialize the graph through the installed formatter.
    ///
    /// Reads builder state without consuming it; repeated calls yield
    /// byte-identical output. Node and edge order is insertion order (the
    /// petgraph index order), never the iteration order of the identity maps.
    pub fn serialize(&self) -> Result<String> {
        let wiring = self.wiring()?;

        let nodes: Vec<RenderedNode> = self
            .graph
            .node_indices()
            .map(|index| {
                let node = &self.graph[index];
                RenderedNode {
                    id: wiring.id_renderer.render(node),
                    label: wiring.node_labels.render(node),
                }
            })
            .collect();

        let mut edges: Vec<RenderedEdge> = Vec::with_capacity(self.graph.edge_count());
        for edge_index in self.graph.edge_indices() {
            let (source, target) =
                self.graph
                    .edge_endpoints(edge_index)
                    .ok_or_else(|| DepvizError::GraphError {
                        message: "edge must have endpoints".to_string(),
                    })?;
            let decoration =
                self.graph
                    .edge_weight(edge_index)
                    .ok_or_else(|| DepvizError::GraphError {
                        message: "edge weight not found for existing edge".to_string(),
                    })?;
            edges.push(RenderedEdge {
                from: wiring.id_renderer.render(&self.graph[source]),
                to: wiring.id_renderer.render(&self.graph[target]),
                label: wiring.edge_labels.render(decoration),
            });
        }

        wiring.formatter.format(&nodes, &edges)
    }
}
