//! Reactor command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::ReactorOptions;
use crate::executors::{CommandExecutor, write_output};
use crate::graph::{GraphBuilder, GraphStyleConfigurer, ReactorGraphFactory};
use crate::input;

pub struct ReactorExecutor;

impl CommandExecutor for ReactorExecutor {
    type Config = ReactorOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Rendering {} module graph from {}...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase(),
            style(config.input.display()).bold()
        );

        let reactor = input::load_reactor(&config.input)
            .wrap_err("Failed to load reactor document")?;

        if reactor.projects.is_empty() {
            eprintln!("{} No projects in the reactor to visualize", style("ℹ").blue());
            return Ok(());
        }

        let builder = GraphStyleConfigurer::new(config.format.into())
            .show_group_ids(config.show_group_ids)
            .show_artifact_ids(config.show_artifact_ids)
            .show_versions_on_nodes(config.show_versions_on_nodes)
            .show_versions_on_edges(config.show_versions_on_edges)
            .show_scopes_on_edges(config.show_scopes_on_edges)
            .merge_versions(config.merge_versions)
            .configure(GraphBuilder::new())
            .wrap_err("Failed to configure graph style")?;

        let rendered = ReactorGraphFactory::new(builder)
            .create_graph(&reactor)
            .wrap_err("Failed to build module graph")?;

        write_output(&rendered, config.output.as_ref())
    }
}
