//! Graphviz DOT emitter

use std::fmt::Write;

use miette::Result;

use crate::graph::format::{GraphFormatter, RenderedEdge, RenderedNode, writeln_out};

#[derive(Debug, Clone, Copy, Default)]
pub struct DotGraphFormatter;

impl DotGraphFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl GraphFormatter for DotGraphFormatter {
    fn format(&self, nodes: &[RenderedNode], edges: &[RenderedEdge]) -> Result<String> {
        let mut output = String::new();

        writeln_out!(output, "digraph \"G\" {{")?;
        writeln_out!(output, "  node [shape=box]")?;
        writeln_out!(output)?;

        for node in nodes {
            writeln_out!(
                output,
                "  {} [label={}]",
                quote(&node.id),
                quote(&node.label)
            )?;
        }

        writeln_out!(output)?;

        for edge in edges {
            if edge.label.is_empty() {
                writeln_out!(output, "  {} -> {}", quote(&edge.from), quote(&edge.to))?;
            } else {
                writeln_out!(
                    output,
                    "  {} -> {} [label={}]",
                    quote(&edge.from),
                    quote(&edge.to),
                    quote(&edge.label)
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(output)
    }
}

/// Quote a DOT identifier, escaping everything outside the bare-word set
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, label: &str) -> RenderedNode {
        RenderedNode {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_dot_structure() {
        let nodes = vec![node("com.example:a", "a"), node("com.example:b", "b")];
        let edges = vec![RenderedEdge {
            from: "com.example:a".to_string(),
            to: "com.example:b".to_string(),
            label: "compile".to_string(),
        }];

        let output = DotGraphFormatter::new().format(&nodes, &edges).unwrap();

        assert!(output.starts_with("digraph \"G\" {"));
        assert!(output.ends_with("}\n"));
        assert!(output.contains("\"com.example:a\" [label=\"a\"]"));
        assert!(
            output.contains("\"com.example:a\" -> \"com.example:b\" [label=\"compile\"]")
        );
    }

    #[test]
    fn test_dot_omits_empty_edge_labels() {
        let nodes = vec![node("a", "a"), node("b", "b")];
        let edges = vec![RenderedEdge {
            from: "a".to_string(),
            to: "b".to_string(),
            label: String::new(),
        }];

        let output = DotGraphFormatter::new().format(&nodes, &edges).unwrap();

        assert!(output.contains("\"a\" -> \"b\"\n"));
        assert!(!output.contains("label=\"\""));
    }

    #[test]
    fn test_dot_escapes_quotes() {
        let nodes = vec![node("we\"ird", "la\"bel")];
        let output = DotGraphFormatter::new().format(&nodes, &[]).unwrap();

        assert!(output.contains(r#""we\"ird" [label="la\"bel"]"#));
    }
}
