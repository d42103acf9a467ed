use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DepvizError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(depviz::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in '{file}'")]
    #[diagnostic(
        code(depviz::json_error),
        help("Check the input document against the expected dependency/reactor schema")
    )]
    JsonParseError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("String formatting error")]
    #[diagnostic(
        code(depviz::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(code(depviz::io_error), help("Check file permissions and disk space"))]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(depviz::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Malformed node: {message}")]
    #[diagnostic(
        code(depviz::malformed_node),
        help("Every artifact record needs a non-empty artifact id")
    )]
    MalformedNode { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(depviz::graph_error),
        help("This may be an internal error with graph processing")
    )]
    GraphError { message: String },
}
