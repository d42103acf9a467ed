//! Command implementations for the depviz CLI
//!
//! This module contains the implementations for each CLI command:
//! - tree: Render the dependency graph of a single project
//! - reactor: Render the module graph of a multi-module build

pub mod reactor;
pub mod tree;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Tree { .. } => tree::execute_tree_command(command),
        Commands::Reactor { .. } => reactor::execute_reactor_command(command),
    }
}
