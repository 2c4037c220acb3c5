//! Shared helpers for integration tests.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Path to the fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path to a named fixture.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Isolated config + store for running the CLI.
pub struct TestEnv {
    pub dir: TempDir,
    pub config_path: PathBuf,
    pub store_path: PathBuf,
}

impl TestEnv {
    /// Create an environment whose config points the store into a temp dir.
    pub fn new() -> Self {
        Self::with_config("")
    }

    /// Like [`TestEnv::new`], with extra TOML appended to the config.
    pub fn with_config(extra: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = dir.path().join("config.toml");
        let store_path = dir.path().join("data").join("store.json");
        let log_path = dir.path().join("pacer.log");
        let config = format!(
            "[storage]\npath = {:?}\n\n[log]\nfile = {:?}\n\n{}",
            store_path.display().to_string(),
            log_path.display().to_string(),
            extra
        );
        fs::write(&config_path, config).expect("Failed to write config");
        Self {
            dir,
            config_path,
            store_path,
        }
    }

    /// `pacer` command wired to this environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("pacer").expect("pacer binary should build");
        cmd.env("PACER_CONFIG", &self.config_path)
            .env_remove("RUST_LOG");
        cmd
    }

    /// Raw store file contents, if written.
    pub fn store_contents(&self) -> Option<String> {
        fs::read_to_string(&self.store_path).ok()
    }
}
