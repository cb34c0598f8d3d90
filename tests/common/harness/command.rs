//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `anytype` binary.
pub struct AnytypeCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl AnytypeCommand {
    /// Creates a new command for the `anytype` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    /// Sets the `--config` option.
    pub fn config(mut self, path: &Path) -> Self {
        self.args.push("--config".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Sets an environment variable for the child process.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("anytype").expect("Failed to find anytype binary");
        cmd.args(&self.args);
        cmd.env_remove("ANYTYPE_API_KEY").env_remove("RUST_LOG");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `sanitize` command with labels.
    pub fn sanitize<I, S>(self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args(["sanitize"]).args(labels)
    }

    /// Configures for the `properties` command with a schema file.
    pub fn properties(self, schema: &Path) -> Self {
        self.args(["properties".to_string(), schema.to_string_lossy().to_string()])
    }

    /// Configures for the `draft` command with a draft file.
    pub fn draft(self, draft: &Path) -> Self {
        self.args(["draft".to_string(), draft.to_string_lossy().to_string()])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for AnytypeCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        AnytypeCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        let cmd = AnytypeCommand::new().config(&path);
        let args = cmd.get_args();
        assert_eq!(args[0], "--config");
        assert_eq!(args[1], path.to_string_lossy());
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = AnytypeCommand::new().sanitize(["Release Year"]).format_json();
        let args = cmd.get_args();
        assert_eq!(args[0], "sanitize");
        assert_eq!(args[1], "Release Year");
        assert!(args.contains(&"json".to_string()));
    }
}
