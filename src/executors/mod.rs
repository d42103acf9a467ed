//! Command executors that handle the actual logic for each command

pub mod reactor;
pub mod tree;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Write rendered graph text to the configured destination.
///
/// Status lines go to stderr so stdout stays clean for piping.
pub(crate) fn write_output(content: &str, output: Option<&PathBuf>) -> Result<()> {
    let mut writer: Box<dyn io::Write> = if let Some(output_path) = output {
        Box::new(BufWriter::new(
            File::create(output_path)
                .into_diagnostic()
                .wrap_err_with(|| {
                    format!("Failed to create output file '{}'", output_path.display())
                })?,
        ))
    } else {
        Box::new(io::stdout())
    };

    writer
        .write_all(content.as_bytes())
        .into_diagnostic()
        .wrap_err("Failed to write graph output")?;
    writer
        .flush()
        .into_diagnostic()
        .wrap_err("Failed to flush graph output")?;

    if let Some(output_path) = output {
        eprintln!(
            "{} Graph written to {}",
            style("✓").green(),
            style(output_path.display()).bold()
        );
    }

    Ok(())
}
