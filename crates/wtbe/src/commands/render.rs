//! Render command - expand shortcodes in a document.

use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Args;
use wtbe_config::{CliSettings, Config};
use wtbe_shortcodes::{CtaShortcode, PlaceholderShortcode, ShortcodeProcessor};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Document to process (stdin when omitted).
    pub file: Option<PathBuf>,

    /// Write the result to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to the configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not expand the CTA shortcode.
    #[arg(long)]
    pub no_cta: bool,

    /// Do not expand the placeholder shortcode.
    #[arg(long)]
    pub no_placeholder: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    pub(crate) fn execute(self, out: &Output) -> Result<(), CliError> {
        let settings = CliSettings {
            cta: self.no_cta.then_some(false),
            placeholder: self.no_placeholder.then_some(false),
            source_dir: None,
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;

        let input = match &self.file {
            Some(path) => std::fs::read_to_string(config.resolve_document(path))?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        tracing::debug!(
            bytes = input.len(),
            cta = config.render.cta,
            placeholder = config.render.placeholder,
            "rendering document"
        );

        let mut processor = ShortcodeProcessor::new();
        if config.render.cta {
            processor = processor.with_shortcode(CtaShortcode::new());
        }
        if config.render.placeholder {
            processor = processor.with_shortcode(PlaceholderShortcode::new());
        }

        let rendered = processor.process(&input);

        // Shortcode errors are inline fragments by contract; warnings go
        // to stderr without affecting the exit code.
        for warning in processor.warnings() {
            out.warning(&warning);
        }

        match &self.output {
            Some(path) => std::fs::write(path, rendered)?,
            None => std::io::stdout().write_all(rendered.as_bytes())?,
        }

        Ok(())
    }
}
