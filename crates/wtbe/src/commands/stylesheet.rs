//! Stylesheet command - emit the CSS consumed by the style tokens.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the stylesheet command.
#[derive(Args)]
pub(crate) struct StylesheetArgs {
    /// Write the stylesheet to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl StylesheetArgs {
    /// Execute the stylesheet command.
    pub(crate) fn execute(self, out: &Output) -> Result<(), CliError> {
        let css = wtbe_style::stylesheet();

        match &self.output {
            Some(path) => {
                std::fs::write(path, css)?;
                out.success(&format!("Wrote stylesheet to {}", path.display()));
            }
            None => std::io::stdout().write_all(css.as_bytes())?,
        }

        Ok(())
    }
}
