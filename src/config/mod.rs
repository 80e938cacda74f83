//! # Configuration
//!
//! Effective settings: command-line flags override the config file, which
//! overrides built-in defaults.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;

use std::time::Duration;

use anyhow::Result;

pub use self::global::{set_home_override, ConfigValidation, GlobalConfig};
use crate::output::OutputFormat;

/// Copy flags shared by commands that can copy their output.
///
/// Consolidates the `--copy` / `--no-copy` flag pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyArgs {
    /// Force copying
    pub copy: bool,
    /// Force not copying
    pub no_copy: bool,
}

impl CopyArgs {
    /// Priority: explicit `--copy` > explicit `--no-copy` > config default
    pub const fn resolve(&self, config_default: bool) -> bool {
        if self.copy {
            true
        } else if self.no_copy {
            false
        } else {
            config_default
        }
    }
}

/// Loaded configuration with resolution helpers
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub global: GlobalConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            global: GlobalConfig::load()?,
        })
    }

    /// Requested count, or the configured default
    pub fn count(&self, requested: Option<i64>) -> i64 {
        requested.unwrap_or(self.global.default_count)
    }

    /// Requested format, or the configured default
    pub fn format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.unwrap_or(self.global.format)
    }

    pub const fn auto_copy(&self) -> bool {
        self.global.auto_copy
    }

    pub fn clipboard_command(&self) -> Option<&str> {
        self.global.clipboard_command.as_deref()
    }

    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.global.delay_ms)
    }
}
