//! wtbe CLI - table block enhancement tools.
//!
//! Provides commands for:
//! - `render`: Expand shortcodes in a document
//! - `stylesheet`: Emit the stylesheet consumed by the style tokens

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, StylesheetArgs};
use output::Output;

/// wtbe - table block enhancement tools.
#[derive(Parser)]
#[command(name = "wtbe", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand shortcodes in a document.
    Render(RenderArgs),
    /// Emit the stylesheet for the style tokens.
    Stylesheet(StylesheetArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Render(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(&output),
        Commands::Stylesheet(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
