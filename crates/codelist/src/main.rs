//! codelist CLI - format source code as an HTML list fragment.
//!
//! Provides commands for:
//! - `format`: Escape code and wrap each line in `<li><pre>` markup
//! - `sample`: Print the bundled sample code

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::FormatArgs;
use output::Output;

/// codelist - source code to HTML list markup.
#[derive(Parser)]
#[command(name = "codelist", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format code as an HTML list fragment.
    Format(FormatArgs),
    /// Print the bundled sample code.
    Sample,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Format(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Format(args) => args.execute(),
        Commands::Sample => commands::sample::execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
