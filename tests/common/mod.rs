//! Shared testing utilities for taigabot CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory with a template directory and config file.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an empty `templates/` directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::create_dir_all(root.path().join("templates"))
            .expect("Failed to create templates directory");
        let ctx = Self { root };
        ctx.write_config("[templates]\nbase_dir = \"templates\"\n");
        ctx
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Overwrite `taigabot.toml` in the working directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.root.path().join("taigabot.toml"), content)
            .expect("Failed to write config");
    }

    pub fn write_template(&self, name: &str, content: &str) {
        fs::write(self.root.path().join("templates").join(name), content)
            .expect("Failed to write template");
    }

    /// Write a payload file and return its path.
    pub fn write_payload(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("payload.json");
        fs::write(&path, content).expect("Failed to write payload");
        path
    }

    /// Build a command for the compiled binary with no Taiga credentials set.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("taigabot").expect("Failed to locate taigabot binary");
        cmd.current_dir(self.work_dir())
            .env_remove("TAIGA_DOMAIN")
            .env_remove("TAIGABOT_ACCOUNT")
            .env_remove("TAIGABOT_PASSWORD")
            .env_remove("TAIGABOT_CONFIG")
            .env("RUST_LOG", "off");
        cmd
    }

    /// Build a command authenticated against the given Taiga URL.
    pub fn cli_with_credentials(&self, taiga_url: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("TAIGA_DOMAIN", taiga_url)
            .env("TAIGABOT_ACCOUNT", "taigabot")
            .env("TAIGABOT_PASSWORD", "secret");
        cmd
    }
}
