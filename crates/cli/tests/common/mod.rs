// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch data directory for one test
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// A project whose roster already holds `alice` (Alice Smith) and `bob`
    pub fn with_roster() -> Self {
        let project = Self::empty();
        project
            .tally(&["roster", "add", "alice", "--first", "Alice", "--last", "Smith"])
            .assert()
            .success();
        project.tally(&["roster", "add", "bob"]).assert().success();
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// `tally` bound to this project's data directory
    pub fn tally(&self, args: &[&str]) -> Command {
        let mut cmd = Command::cargo_bin("tally").unwrap();
        cmd.current_dir(self.dir.path())
            .env("TALLY_DATA_DIR", self.data_dir())
            .env_remove("TALLY_LOG")
            .args(args);
        cmd
    }

    /// Run a command that must succeed and return its stdout
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self.tally(args).assert().success().get_output().clone();
        String::from_utf8(output.stdout).unwrap()
    }

    /// Run a command that must succeed and compare its stdout exactly
    pub fn stdout_eq(&self, args: &[&str], expected: &str) {
        similar_asserts::assert_eq!(self.stdout(args).as_str(), expected);
    }
}
