//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// anytype - build objects for the note-taking API from drafts and type schemas
#[derive(Parser, Debug)]
#[command(name = "anytype", version, about, long_about = None)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/anytype/config.toml)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the property alias for one or more labels
    Sanitize(SanitizeArgs),

    /// List a type's user properties and their aliases
    Properties(PropertiesArgs),

    /// Build an object from a draft file and print or submit it
    Draft(DraftArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `sanitize` command
#[derive(Parser, Debug)]
pub struct SanitizeArgs {
    /// Property labels, e.g. "Release Year"
    #[arg(required = true)]
    pub labels: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `properties` command
#[derive(Parser, Debug)]
pub struct PropertiesArgs {
    /// Type schema file (YAML or JSON)
    pub schema: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `draft` command
#[derive(Parser, Debug)]
pub struct DraftArgs {
    /// Draft file (YAML or JSON)
    pub draft: PathBuf,

    /// Space to create the object in (overrides the draft and config)
    #[arg(short, long)]
    pub space: Option<String>,

    /// Send the object to the API instead of only printing the request
    #[arg(long)]
    pub submit: bool,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
