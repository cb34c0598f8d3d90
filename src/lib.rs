//! anytype - client-side object model for the note-taking REST API

pub mod api;
pub mod cli;
pub mod domain;
pub mod infra;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_completions, handle_draft, handle_properties, handle_sanitize},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load(cli.config.as_deref())?;

    match &cli.command {
        Command::Sanitize(args) => handle_sanitize(args),
        Command::Properties(args) => handle_properties(args),
        Command::Draft(args) => handle_draft(args, &config),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose > 0 { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
