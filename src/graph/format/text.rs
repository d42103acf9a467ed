//! Indented plain-text emitter
//!
//! Renders the graph as one tree per root, in the style of a build tool's
//! dependency tree listing. A root is every node without an incoming edge,
//! unless an explicit root set is supplied.

use std::collections::{HashMap, HashSet};
use std::fmt::Write;

use miette::Result;

use crate::error::DepvizError;
use crate::graph::format::{GraphFormatter, RenderedEdge, RenderedNode, writeln_out};

#[derive(Debug, Clone, Default)]
pub struct TextGraphFormatter {
    roots: Option<Vec<String>>,
}

impl TextGraphFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render from these node ids instead of the computed root set
    pub fn with_roots(mut self, roots: Vec<String>) -> Self {
        self.roots = Some(roots);
        self
    }

    fn write_subtree(
        &self,
        output: &mut String,
        id: &str,
        prefix: &str,
        labels: &HashMap<&str, &str>,
        children: &HashMap<&str, Vec<&RenderedEdge>>,
        path: &mut Vec<String>,
    ) -> Result<()> {
        path.push(id.to_string());

        let edges = children.get(id).map(Vec::as_slice).unwrap_or(&[]);
        for (index, edge) in edges.iter().enumerate() {
            let is_last = index == edges.len() - 1;
            let connector = if is_last { r"\- " } else { "+- " };
            let child_label = resolve_label(labels, &edge.to)?;

            let mut line = format!("{prefix}{connector}{child_label}");
            if !edge.label.is_empty() {
                line.push_str(&format!(" ({})", edge.label));
            }

            // A child already on the current path is a back-edge; render it
            // as a leaf reference instead of descending again.
            if path.iter().any(|ancestor| ancestor == &edge.to) {
                writeln_out!(output, "{line} (cycle)")?;
                continue;
            }

            writeln_out!(output, "{line}")?;

            let child_prefix = if is_last {
                format!("{prefix}   ")
            } else {
                format!("{prefix}|  ")
            };
            self.write_subtree(output, &edge.to, &child_prefix, labels, children, path)?;
        }

        path.pop();
        Ok(())
    }
}

impl GraphFormatter for TextGraphFormatter {
    fn format(&self, nodes: &[RenderedNode], edges: &[RenderedEdge]) -> Result<String> {
        let mut labels: HashMap<&str, &str> = HashMap::with_capacity(nodes.len());
        for node in nodes {
            labels.insert(node.id.as_str(), node.label.as_str());
        }

        let mut children: HashMap<&str, Vec<&RenderedEdge>> = HashMap::new();
        let mut has_incoming: HashSet<&str> = HashSet::new();
        for edge in edges {
            children.entry(edge.from.as_str()).or_default().push(edge);
            has_incoming.insert(edge.to.as_str());
        }

        let roots: Vec<&str> = match &self.roots {
            Some(explicit) => {
                for root in explicit {
                    if !labels.contains_key(root.as_str()) {
                        return Err(DepvizError::GraphError {
                            message: format!("explicit root '{root}' is not in the node set"),
                        }
                        .into());
                    }
                }
                explicit.iter().map(String::as_str).collect()
            }
            None => {
                let mut computed: Vec<&str> = nodes
                    .iter()
                    .filter(|node| !has_incoming.contains(node.id.as_str()))
                    .map(|node| node.id.as_str())
                    .collect();
                // Fully cyclic input has no natural root; start at the first
                // inserted node so the output is still deterministic.
                if computed.is_empty()
                    && let Some(first) = nodes.first()
                {
                    computed.push(first.id.as_str());
                }
                computed
            }
        };

        let mut output = String::new();
        let mut path: Vec<String> = Vec::new();

        for root in roots {
            writeln_out!(output, "{}", resolve_label(&labels, root)?)?;
            self.write_subtree(&mut output, root, "", &labels, &children, &mut path)?;
        }

        Ok(output)
    }
}

fn resolve_label<'a>(
    labels: &HashMap<&str, &'a str>,
    id: &str,
) -> Result<&'a str, DepvizError> {
    labels.get(id).copied().ok_or_else(|| DepvizError::GraphError {
        message: format!("edge endpoint '{id}' is not in the node set"),
    })
}
