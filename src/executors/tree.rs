//! Tree command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::TreeOptions;
use crate::executors::{CommandExecutor, write_output};
use crate::graph::{GraphBuilder, GraphStyleConfigurer, TreeGraphFactory};
use crate::input;

pub struct TreeExecutor;

impl CommandExecutor for TreeExecutor {
    type Config = TreeOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Rendering {} dependency graph from {}...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase(),
            style(config.input.display()).bold()
        );

        let tree = input::load_dependency_tree(&config.input)
            .wrap_err("Failed to load dependency tree")?;

        let builder = GraphStyleConfigurer::new(config.format.into())
            .show_group_ids(config.show_group_ids)
            .show_artifact_ids(config.show_artifact_ids)
            .show_versions_on_nodes(config.show_versions_on_nodes)
            .show_versions_on_edges(config.show_versions_on_edges)
            .show_scopes_on_edges(config.show_scopes_on_edges)
            .merge_versions(config.merge_versions)
            .configure(GraphBuilder::new())
            .wrap_err("Failed to configure graph style")?;

        let rendered = TreeGraphFactory::new(builder, !config.exclude_optional)
            .create_graph(&tree)
            .wrap_err("Failed to build dependency graph")?;

        write_output(&rendered, config.output.as_ref())
    }
}
