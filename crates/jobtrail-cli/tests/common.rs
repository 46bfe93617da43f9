//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
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
        let data_dir = temp_dir.path().to_path_buf();

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn csv_path(&self) -> PathBuf {
        self.data_dir.join("applications.csv")
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("applications.db")
    }

    /// A `jobtrail` command pointed at this fixture's data directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("jobtrail").expect("Failed to find jobtrail binary");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    pub fn write_csv(&self, contents: &str) {
        fs::write(self.csv_path(), contents).expect("Failed to write csv store");
    }

    pub fn read_csv(&self) -> String {
        fs::read_to_string(self.csv_path()).expect("Failed to read csv store")
    }
}
