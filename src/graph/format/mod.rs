//! Format-specific graph emitters
//!
//! Each formatter owns exactly the quoting and escaping rules of its target
//! syntax. The builder hands over insertion-ordered node and edge sequences
//! with identities and labels already rendered; formatters never look at the
//! raw artifact attributes.

mod dot;
mod gml;
mod puml;
mod text;

pub use dot::DotGraphFormatter;
pub use gml::GmlGraphFormatter;
pub use puml::PumlGraphFormatter;
pub use text::TextGraphFormatter;

use miette::Result;

/// A node as seen by a formatter: identity key plus display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNode {
    pub id: String,
    pub label: String,
}

/// An edge as seen by a formatter: endpoint identity keys plus display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEdge {
    pub from: String,
    pub to: String,
    pub label: String,
}

/// Serializes a built graph into one textual syntax
///
/// Implementations must be deterministic: same input sequences, byte-equal
/// output. Any per-call state (like GML's integer id mapping) is built fresh
/// inside `format` and never leaks across calls.
pub trait GraphFormatter {
    fn format(&self, nodes: &[RenderedNode], edges: &[RenderedEdge]) -> Result<String>;
}

// Helper macro for write operations that converts formatting errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err($crate::error::DepvizError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err($crate::error::DepvizError::from)
    };
}

pub(crate) use writeln_out;
