#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// The day every harness command treats as today
pub const REFERENCE_TODAY: &str = "2024-04-15";

/// Test harness for running CLI commands against an isolated configuration
pub struct CliTestHarness {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl CliTestHarness {
    /// Create a new test harness with no configuration file
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("fieldate.toml");

        Self {
            temp_dir,
            config_path,
        }
    }

    /// Create a harness whose configuration file holds `contents`
    pub fn with_config(contents: &str) -> Self {
        let harness = Self::new();
        std::fs::write(&harness.config_path, contents).expect("Failed to write config file");
        harness
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("fieldate").expect("Failed to find fieldate binary");

        cmd.env("FIELDATE_CONFIG", &self.config_path);
        cmd.env_remove("FIELDATE_TIMEZONE");
        cmd.env_remove("FIELDATE_OUTPUT");
        cmd.env_remove("FIELDATE_COLOR");
        cmd.env("TZ", "UTC");

        cmd
    }

    /// Command pinned to the reference day in UTC
    pub fn pinned(&self) -> Command {
        let mut cmd = self.command();
        cmd.args(["--today", REFERENCE_TODAY, "--timezone", "UTC"]);
        cmd
    }

    /// Helper to run a pinned command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.pinned().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Run a pinned command and return its stdout
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.run_success(args).get_output().stdout.clone();
        String::from_utf8(output).expect("stdout should be UTF-8")
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check if output contains due table headers
    pub fn has_due_table_headers() -> impl Predicate<str> {
        predicate::str::contains("Input")
            .and(predicate::str::contains("Due"))
            .and(predicate::str::contains("Urgency"))
    }

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error").or(predicate::str::contains("error"))
    }
}
