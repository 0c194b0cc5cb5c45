//! Entigen CLI - generate value-object source from a schema document
//!
//! This tool reads a TOML schema document describing entities and emits the
//! generated Rust model, a Mermaid class diagram, or a standalone model
//! crate.

use clap::{Parser, Subcommand};
use commands::generate::GenerateCommand;

mod commands;
mod error;

/// Entigen CLI - schema-entity value object generator
#[derive(Debug, Parser)]
#[command(name = "entigen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output (debug-level tracing on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate model artefacts from a schema document
    #[command(name = "generate")]
    Generate(GenerateCommand),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Generate(cmd) => cmd.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install a stderr subscriber; `RUST_LOG` overrides the level.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
