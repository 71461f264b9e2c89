//! Shared fixture for CLI integration tests.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".catalog");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// `catalog --data-dir <tmp>` with the environment cleared of overrides
    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("catalog");
        cmd.env_remove("CATALOG_PATH")
            .env_remove("RUST_LOG")
            .arg("--data-dir")
            .arg(self.data_dir());
        cmd
    }

    pub fn write_seed(&self, name: &str, json: &str) -> PathBuf {
        let path = self.data_dir.join(name);
        fs::write(&path, json).expect("Failed to write seed");
        path
    }

    pub fn write_config(&self, toml: &str) {
        fs::write(self.data_dir.join("config.toml"), toml).expect("Failed to write config");
    }
}
