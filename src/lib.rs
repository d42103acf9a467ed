//! # Depviz - Render Build-Artifact Dependency Graphs
//!
//! Depviz turns dependency documents produced by build tooling into graph
//! renderings. It reads either a resolved dependency tree of one project or a
//! reactor listing the modules of a multi-module build, deduplicates artifacts
//! by their coordinates, merges parallel edges, and emits the result as
//! Graphviz DOT, GML, PlantUML, or an indented plain-text tree.
//!
//! ## Main Components
//!
//! - **Input**: Serde models and loaders for the JSON input documents
//! - **Graph**: The builder, node/edge renderers, and per-format emitters
//! - **Factories**: Walk an input document and feed the graph builder
//!
//! ## Usage
//!
//! ### Example: Rendering a Dependency Tree as DOT
//!
//! ```no_run
//! use std::path::Path;
//!
//! use depviz::graph::{GraphBuilder, GraphFormat, GraphStyleConfigurer, TreeGraphFactory};
//! use depviz::input;
//!
//! # fn main() -> miette::Result<()> {
//! // Step 1: Load the resolved dependency tree
//! let tree = input::load_dependency_tree(Path::new("deps.json"))?;
//!
//! // Step 2: Wire a builder for the target format and label style
//! let builder = GraphStyleConfigurer::new(GraphFormat::Dot)
//!     .show_versions_on_nodes(true)
//!     .configure(GraphBuilder::new())?;
//!
//! // Step 3: Walk the tree and serialize
//! let dot = TreeGraphFactory::new(builder, true).create_graph(&tree)?;
//! println!("{dot}");
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Collapsing Versions
//!
//! ```no_run
//! # use std::path::Path;
//! # use depviz::graph::{GraphBuilder, GraphFormat, GraphStyleConfigurer, TreeGraphFactory};
//! # use depviz::input;
//! # fn main() -> miette::Result<()> {
//! # let tree = input::load_dependency_tree(Path::new("deps.json"))?;
//! // With merged versions, lib-a 1.0.0 and lib-a 2.0.0 become one node
//! let builder = GraphStyleConfigurer::new(GraphFormat::Text)
//!     .merge_versions(true)
//!     .configure(GraphBuilder::new())?;
//!
//! let text = TreeGraphFactory::new(builder, true).create_graph(&tree)?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod graph;
pub mod input;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
