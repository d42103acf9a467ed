//! PlantUML emitter

use std::collections::HashMap;
use std::fmt::Write;

use miette::Result;

use crate::error::DepvizError;
use crate::graph::format::{GraphFormatter, RenderedEdge, RenderedNode, writeln_out};

#[derive(Debug, Clone, Copy, Default)]
pub struct PumlGraphFormatter;

impl PumlGraphFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl GraphFormatter for PumlGraphFormatter {
    fn format(&self, nodes: &[RenderedNode], edges: &[RenderedEdge]) -> Result<String> {
        // Identity strings contain characters PlantUML treats as syntax, so
        // every node gets a synthetic alias scoped to this call.
        let mut aliases: HashMap<&str, String> = HashMap::with_capacity(nodes.len());

        let mut output = String::new();
        writeln_out!(output, "@startuml")?;
        writeln_out!(output, "skinparam defaultTextAlignment center")?;
        writeln_out!(output)?;

        for (index, node) in nodes.iter().enumerate() {
            let alias = format!("n{index}");
            writeln_out!(output, "rectangle \"{}\" as {}", escape(&node.label), alias)?;
            aliases.insert(node.id.as_str(), alias);
        }

        writeln_out!(output)?;

        for edge in edges {
            let from = resolve(&aliases, &edge.from)?;
            let to = resolve(&aliases, &edge.to)?;
            if edge.label.is_empty() {
                writeln_out!(output, "{from} --> {to}")?;
            } else {
                writeln_out!(output, "{} --> {} : {}", from, to, escape(&edge.label))?;
            }
        }

        writeln_out!(output, "@enduml")?;
        Ok(output)
    }
}

fn resolve<'a>(
    aliases: &'a HashMap<&str, String>,
    id: &str,
) -> Result<&'a String, DepvizError> {
    aliases.get(id).ok_or_else(|| DepvizError::GraphError {
        message: format!("edge endpoint '{id}' is not in the node set"),
    })
}

/// Escape characters that terminate a PlantUML statement or label
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push('\''),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}
