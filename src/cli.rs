use clap::{Parser, Subcommand};

use crate::common::{IoArgs, StyleArgs};

#[derive(Parser)]
#[command(
    name = "depviz",
    about = "Render build-artifact dependency graphs in multiple formats",
    long_about = "depviz reads a dependency document produced by your build tooling and renders \
                  it as a graph. It supports resolved dependency trees of a single project as \
                  well as multi-module reactor structures, and emits Graphviz DOT, GML, PlantUML, \
                  or an indented plain-text tree.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dependency graph of a single project
    ///
    /// Reads a resolved dependency tree and renders it as a graph. Repeated
    /// occurrences of the same artifact collapse into one node, and parallel
    /// edges between the same pair of artifacts merge their scopes and
    /// versions into one decorated edge.
    #[command(
        long_about = "Build and render the dependency graph of one project from its resolved \
                      dependency tree. Artifacts are deduplicated by their coordinates, so the \
                      output is a graph rather than a tree even though the input is tree shaped. \
                      Use the style flags to control which coordinate parts appear in node and \
                      edge labels."
    )]
    Tree {
        #[command(flatten)]
        io: IoArgs,

        #[command(flatten)]
        style: StyleArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = "dot",
            env = "DEPVIZ_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Leave optional dependencies (and their subtrees) out of the graph
        #[arg(long, env = "DEPVIZ_EXCLUDE_OPTIONAL")]
        exclude_optional: bool,
    },

    /// Render the module graph of a multi-module build
    ///
    /// Reads a reactor document listing the modules of a multi-module build
    /// in build order and renders the dependency relationships between the
    /// modules themselves, without external artifacts.
    #[command(
        long_about = "Build and render the inter-module dependency graph of a multi-module \
                      build. The input lists modules in build order together with the modules \
                      directly downstream of each; depviz walks that ordering and emits one \
                      merged edge per module pair."
    )]
    Reactor {
        #[command(flatten)]
        io: IoArgs,

        #[command(flatten)]
        style: StyleArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = "dot",
            env = "DEPVIZ_GRAPH_FORMAT"
        )]
        format: GraphFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Dot,
    Gml,
    Puml,
    Text,
}

impl From<GraphFormat> for crate::graph::GraphFormat {
    fn from(format: GraphFormat) -> Self {
        match format {
            GraphFormat::Dot => crate::graph::GraphFormat::Dot,
            GraphFormat::Gml => crate::graph::GraphFormat::Gml,
            GraphFormat::Puml => crate::graph::GraphFormat::Puml,
            GraphFormat::Text => crate::graph::GraphFormat::Text,
        }
    }
}
