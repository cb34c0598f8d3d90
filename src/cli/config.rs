//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_API_URL;

/// Environment variable consulted when the config has no API key.
pub const API_KEY_ENV: &str = "ANYTYPE_API_KEY";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the API
    pub api_url: Option<String>,

    /// Bearer API key
    pub api_key: Option<String>,

    /// Default space for new objects
    pub space: Option<String>,
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/anytype/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("anytype")
            .join("config.toml")
    }

    /// Resolve the API base URL.
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Resolve the API key.
    ///
    /// Precedence order:
    /// 1. Config file `api_key` setting
    /// 2. $ANYTYPE_API_KEY environment variable
    ///
    /// Empty values are skipped at both levels.
    pub fn api_key(&self) -> Option<String> {
        self.api_key_with_env(std::env::var(API_KEY_ENV).ok())
    }

    fn api_key_with_env(&self, env_key: Option<String>) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| env_key.filter(|key| !key.is_empty()))
    }

    /// Resolve the target space, with the CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--space` argument
    /// 2. Draft `space_id`
    /// 3. Config file `space` setting
    pub fn space(&self, cli_space: Option<&str>, draft_space: Option<&str>) -> Option<String> {
        cli_space
            .or(draft_space)
            .or(self.space.as_deref())
            .map(str::to_string)
    }
}
