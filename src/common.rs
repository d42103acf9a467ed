//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Style toggles shared by every rendering command
#[derive(Args, Debug, Clone)]
pub struct StyleArgs {
    /// Show group ids in node labels
    #[arg(long, env = "DEPVIZ_SHOW_GROUP_IDS")]
    pub show_group_ids: bool,

    /// Show artifact ids in node labels
    #[arg(long, default_value = "true", env = "DEPVIZ_SHOW_ARTIFACT_IDS")]
    pub show_artifact_ids: bool,

    /// Show versions in node labels
    #[arg(long, env = "DEPVIZ_SHOW_VERSIONS_ON_NODES")]
    pub show_versions_on_nodes: bool,

    /// Show versions on edge labels
    #[arg(long, env = "DEPVIZ_SHOW_VERSIONS_ON_EDGES")]
    pub show_versions_on_edges: bool,

    /// Show scopes and optional markers on edge labels
    #[arg(long, env = "DEPVIZ_SHOW_SCOPES_ON_EDGES")]
    pub show_scopes_on_edges: bool,

    /// Collapse all versions of an artifact into a single node
    #[arg(long, env = "DEPVIZ_MERGE_VERSIONS")]
    pub merge_versions: bool,
}

/// Common input/output arguments
#[derive(Args, Debug, Clone)]
pub struct IoArgs {
    /// Input document describing the dependency data
    #[arg(value_name = "INPUT", env = "DEPVIZ_INPUT")]
    pub input: PathBuf,

    /// Output file (stdout if not specified)
    #[arg(short, long, env = "DEPVIZ_OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::DepvizError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::DepvizError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::DepvizError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Macro that generates a `with_*` style builder for a config struct.
/// Every field is required; missing fields surface as configuration errors
/// through [`ConfigBuilder::build`].
#[macro_export]
macro_rules! impl_builder {
    ($builder:ident => $config:ident { $($setter:ident => $field:ident: $ty:ty),* $(,)? }) => {
        #[derive(Default)]
        pub struct $builder {
            $($field: Option<$ty>,)*
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $setter(mut self, $field: $ty) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }

        impl $crate::common::ConfigBuilder for $builder {
            type Config = $config;

            fn build(self) -> Result<Self::Config, $crate::error::DepvizError> {
                Ok($config {
                    $(
                        $field: self.$field.ok_or_else(|| {
                            $crate::error::DepvizError::ConfigurationError {
                                message: format!(
                                    "Missing required field: {}",
                                    stringify!($field)
                                ),
                            }
                        })?,
                    )*
                })
            }
        }
    };
}
