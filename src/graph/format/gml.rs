//! GML (Graph Modelling Language) emitter

use std::collections::HashMap;
use std::fmt::Write;

use miette::Result;

use crate::error::DepvizError;
use crate::graph::format::{GraphFormatter, RenderedEdge, RenderedNode, writeln_out};

#[derive(Debug, Clone, Copy, Default)]
pub struct GmlGraphFormatter;

impl GmlGraphFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl GraphFormatter for GmlGraphFormatter {
    fn format(&self, nodes: &[RenderedNode], edges: &[RenderedEdge]) -> Result<String> {
        // GML has no string node ids. The integer mapping is scoped to this
        // call so repeated serialization stays byte-identical.
        let mut numeric_ids: HashMap<&str, usize> = HashMap::with_capacity(nodes.len());

        let mut output = String::new();
        writeln_out!(output, "graph [")?;
        writeln_out!(output, "  directed 1")?;

        for (index, node) in nodes.iter().enumerate() {
            numeric_ids.insert(node.id.as_str(), index);
            writeln_out!(
                output,
                "  node [ id {} label {} ]",
                index,
                quote(&node.label)
            )?;
        }

        for edge in edges {
            let source = resolve(&numeric_ids, &edge.from)?;
            let target = resolve(&numeric_ids, &edge.to)?;
            writeln_out!(
                output,
                "  edge [ source {} target {} label {} ]",
                source,
                target,
                quote(&edge.label)
            )?;
        }

        writeln_out!(output, "]")?;
        Ok(output)
    }
}

fn resolve(numeric_ids: &HashMap<&str, usize>, id: &str) -> Result<usize, DepvizError> {
    numeric_ids
        .get(id)
        .copied()
        .ok_or_else(|| DepvizError::GraphError {
            message: format!("edge endpoint '{id}' is not in the node set"),
        })
}

fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push(' '),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
