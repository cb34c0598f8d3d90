//! Isolated test environment with temp directory.

use super::{AnytypeCommand, TestDraft};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary working directory.
///
/// Every command built from the environment points `--config` at a file
/// inside the directory, so the user's real config is never read.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment without a config file.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the path to the environment's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the config file used by [`TestEnv::cmd`].
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Writes the config file.
    pub fn write_config(&self, content: &str) -> PathBuf {
        self.write_file("config.toml", content)
    }

    /// Writes a draft file and returns its path.
    pub fn add_draft(&self, name: &str, draft: &TestDraft) -> PathBuf {
        self.write_file(name, &draft.to_yaml())
    }

    /// Creates an AnytypeCommand configured for this test environment.
    pub fn cmd(&self) -> AnytypeCommand {
        AnytypeCommand::new().config(&self.config_path())
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.root().is_dir());
        assert!(!env.config_path().exists());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--config");
        assert_eq!(args[1], env.config_path().to_string_lossy());
    }

    #[test]
    fn test_env_add_draft_writes_yaml() {
        let env = TestEnv::new();
        let path = env.add_draft("note.yaml", &TestDraft::new("Hello"));
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("name: Hello"));
    }
}
