//! Tree command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::TreeOptions;
use crate::error::DepvizError;

impl FromCommand for TreeOptions {
    fn from_command(command: Commands) -> Result<Self, DepvizError> {
        match command {
            Commands::Tree {
                io,
                style,
                format,
                exclude_optional,
            } => TreeOptions::builder()
                .with_input(io.input)
                .with_output(io.output)
                .with_format(format)
                .with_show_group_ids(style.show_group_ids)
                .with_show_artifact_ids(style.show_artifact_ids)
                .with_show_versions_on_nodes(style.show_versions_on_nodes)
                .with_show_versions_on_edges(style.show_versions_on_edges)
                .with_show_scopes_on_edges(style.show_scopes_on_edges)
                .with_merge_versions(style.merge_versions)
                .with_exclude_optional(exclude_optional)
                .build(),
            _ => Err(DepvizError::ConfigurationError {
                message: "Invalid command type for TreeOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(TreeOptions);

/// Execute the tree command for rendering a project dependency graph
pub fn execute_tree_command(command: Commands) -> Result<()> {
    let config = TreeOptions::from_command(command)
        .wrap_err("Failed to parse tree command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::tree::TreeExecutor;
    TreeExecutor::execute(config)
}
