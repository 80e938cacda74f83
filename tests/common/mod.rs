//! # Test Harness
//!
//! Provides utilities for integration testing hashtagger without affecting user
//! configuration. Library tests use the thread-local home override; CLI tests
//! point `HOME` at the temporary home directory.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::Command;
use tempfile::TempDir;

use hashtagger::set_home_override;

/// Global lock to ensure tests touching the config run sequentially.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment with a temporary home directory.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/hashtagger/config)
    pub home_dir: TempDir,
    /// Guard for the test lock
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment with a temporary home directory.
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        set_home_override(Some(home_dir.path().to_path_buf()));

        Self {
            home_dir,
            test_guard,
        }
    }

    pub fn home_path(&self) -> &Path {
        self.home_dir.path()
    }

    /// Returns the path where the config would be stored.
    pub fn config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("hashtagger")
            .join("config")
    }

    /// Creates a config file with the given content.
    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config directory");
        }
        fs::write(path, content).expect("Failed to write config");
    }

    /// Reads the config file content.
    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).unwrap_or_default()
    }

    /// Path inside the temp home used as a fake clipboard target.
    pub fn clipboard_path(&self) -> PathBuf {
        self.home_dir.path().join("clipboard.txt")
    }

    /// A `clipboard_command` value that writes copied text to [`Self::clipboard_path`].
    pub fn clipboard_command(&self) -> String {
        let path = self.clipboard_path();
        let quoted = shell_quote(&path.to_string_lossy());
        format!("tee {quoted}")
    }

    /// Reads what the fake clipboard received.
    pub fn read_clipboard(&self) -> Option<String> {
        fs::read_to_string(self.clipboard_path()).ok()
    }

    /// Creates an `htg` command configured to run in the test environment.
    pub fn htg(&self) -> Command {
        let mut cmd = Command::cargo_bin("htg").unwrap();
        cmd.current_dir(self.home_dir.path());
        cmd.env("HOME", self.home_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        set_home_override(None);
    }
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

// =============================================================================
// Config Builder Helpers
// =============================================================================

/// Builder for creating test configurations.
pub struct ConfigBuilder {
    default_count: Option<i64>,
    auto_copy: Option<bool>,
    clipboard_command: Option<String>,
    delay_ms: Option<u64>,
    format: Option<String>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            default_count: None,
            auto_copy: None,
            clipboard_command: None,
            delay_ms: Some(0),
            format: None,
        }
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_count(mut self, count: i64) -> Self {
        self.default_count = Some(count);
        self
    }

    pub fn auto_copy(mut self, auto_copy: bool) -> Self {
        self.auto_copy = Some(auto_copy);
        self
    }

    pub fn clipboard_command(mut self, command: impl Into<String>) -> Self {
        self.clipboard_command = Some(command.into());
        self
    }

    pub fn delay_ms(mut self, delay: u64) -> Self {
        self.delay_ms = Some(delay);
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn build(&self) -> String {
        let mut lines = Vec::new();
        if let Some(count) = self.default_count {
            lines.push(format!("default_count = {count}"));
        }
        if let Some(auto_copy) = self.auto_copy {
            lines.push(format!("auto_copy = {auto_copy}"));
        }
        if let Some(command) = &self.clipboard_command {
            lines.push(format!("clipboard_command = {}", toml::Value::String(command.clone())));
        }
        if let Some(delay) = self.delay_ms {
            lines.push(format!("delay_ms = {delay}"));
        }
        if let Some(format) = &self.format {
            lines.push(format!("format = \"{format}\""));
        }
        lines.join("\n")
    }
}
