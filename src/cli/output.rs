//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::SkippedAlias;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A label and the alias it sanitizes to.
#[derive(Debug, Serialize)]
pub struct AliasListing {
    pub label: String,
    pub alias: String,
}

/// A user property of a type.
#[derive(Debug, Serialize)]
pub struct PropertyListing {
    pub key: String,
    pub name: String,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// The properties of a type, with the aliases that could not be registered.
#[derive(Debug, Serialize)]
pub struct TypeListing {
    pub key: String,
    pub properties: Vec<PropertyListing>,
    pub skipped: Vec<SkippedAlias>,
}
