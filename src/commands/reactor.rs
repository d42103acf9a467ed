//! Reactor command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ReactorOptions;
use crate::error::DepvizError;

impl FromCommand for ReactorOptions {
    fn from_command(command: Commands) -> Result<Self, DepvizError> {
        match command {
            Commands::Reactor { io, style, format } => ReactorOptions::builder()
                .with_input(io.input)
                .with_output(io.output)
                .with_format(format)
                .with_show_group_ids(style.show_group_ids)
                .with_show_artifact_ids(style.show_artifact_ids)
                .with_show_versions_on_nodes(style.show_versions_on_nodes)
                .with_show_versions_on_edges(style.show_versions_on_edges)
                .with_show_scopes_on_edges(style.show_scopes_on_edges)
                .with_merge_versions(style.merge_versions)
                .build(),
            _ => Err(DepvizError::ConfigurationError {
                message: "Invalid command type for ReactorOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ReactorOptions);

/// Execute the reactor command for rendering a module dependency graph
pub fn execute_reactor_command(command: Commands) -> Result<()> {
    let config = ReactorOptions::from_command(command)
        .wrap_err("Failed to parse reactor command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::reactor::ReactorExecutor;
    ReactorExecutor::execute(config)
}
