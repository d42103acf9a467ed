//! Dependency graph construction and rendering
//!
//! The pipeline is: a style configurer wires renderers and a formatter into a
//! builder, factories feed nodes and edges into the builder, and serialization
//! walks insertion order through the installed formatter. Node identity is a
//! rendered string, so dedup and version merging fall out of the identity
//! renderer's settings.

pub mod builder;
pub mod factory;
pub mod format;
pub mod identity;
pub mod label;
pub mod style;
pub mod types;

pub use builder::GraphBuilder;
pub use factory::{ReactorGraphFactory, TreeGraphFactory};
pub use format::{
    DotGraphFormatter, GmlGraphFormatter, GraphFormatter, PumlGraphFormatter, RenderedEdge,
    RenderedNode, TextGraphFormatter,
};
pub use identity::NodeIdRenderer;
pub use label::{EdgeLabelRenderer, NodeLabelRenderer};
pub use style::{GraphFormat, GraphStyleConfigurer};
pub use types::{DependencyNode, EdgeDecoration, Provenance};
