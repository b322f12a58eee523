//! Shared testing utilities for storectl CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `storectl` binary.
    ///
    /// `$HOME` points into the sandbox and config/log variables are cleared,
    /// so the developer's own config never leaks in.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("storectl").expect("Failed to locate storectl binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env_remove("STORECTL_CONFIG")
            .env_remove("STORECTL_LOG");
        cmd
    }

    /// Build a command already pointed at a server.
    pub fn cli_for(&self, base_url: &str) -> Command {
        let mut cmd = self.cli();
        cmd.args(["--base-url", base_url]);
        cmd
    }

    /// Write the per-user default config file.
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.home().join(".config").join("storectl");
        fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Create a file inside the work directory.
    pub fn write_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}
