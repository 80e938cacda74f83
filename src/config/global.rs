//! # Global Configuration
//!
//! Handles the user configuration stored at `~/.config/hashtagger/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{DEFAULT_HASHTAG_COUNT, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME},
    output::OutputFormat,
};

/// Valid field names in the config file.
/// Used for validation to detect unknown/invalid fields.
const VALID_FIELDS: &[&str] = &[
    "default_count",
    "auto_copy",
    "clipboard_command",
    "delay_ms",
    "format",
];

/// Fields that should be present with actual values. `clipboard_command`
/// stays commented out when not set.
const REQUIRED_FIELDS: &[&str] = &["default_count", "auto_copy", "delay_ms", "format"];

/// Result of validating a config file.
#[derive(Debug, Default)]
pub struct ConfigValidation {
    /// Fields that were missing and have been added with defaults
    pub missing: Vec<String>,
    /// Fields that were unrecognized and have been removed
    pub invalid: Vec<String>,
}

impl ConfigValidation {
    /// Returns true if any changes were made to the config.
    pub fn has_changes(&self) -> bool {
        !self.missing.is_empty() || !self.invalid.is_empty()
    }
}

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Global configuration stored at ~/.config/hashtagger/config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Number of hashtags generated when `--count` is not given
    #[serde(default = "default_count")]
    pub default_count: i64,

    /// Whether to copy results to the clipboard without `--copy`
    #[serde(default)]
    pub auto_copy: bool,

    /// Command receiving copied text on stdin (e.g., "wl-copy")
    #[serde(default)]
    pub clipboard_command: Option<String>,

    /// Pause before generating, in milliseconds
    #[serde(default)]
    pub delay_ms: u64,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_HASHTAG_COUNT,
            auto_copy: false,
            clipboard_command: None,
            delay_ms: 0,
            format: OutputFormat::default(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_count() -> i64 {
    DEFAULT_HASHTAG_COUNT
}

impl GlobalConfig {
    /// Returns the path to the config file (~/.config/hashtagger/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        let home = get_home_override().or_else(dirs::home_dir)?;
        Some(
            home.join(".config")
                .join(GLOBAL_CONFIG_DIR)
                .join(GLOBAL_CONFIG_FILENAME),
        )
    }

    /// Loads the config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Loads the config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Creates the config with default values and comments.
    /// Returns true if created, false if already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine config directory");
        };

        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        Self::default().save_with_comments(&path)?;
        Ok(true)
    }

    /// Saves the config with detailed comments for all options.
    ///
    /// `clipboard_command` is shown as a commented example when not set.
    fn save_with_comments(&self, path: &Path) -> Result<()> {
        let clipboard_line = self.clipboard_command.as_ref().map_or_else(
            || "# clipboard_command = \"wl-copy\"".to_string(),
            |command| format!("clipboard_command = {}", toml::Value::String(command.clone())),
        );

        let content = format!(
            r#"# hashtagger Configuration
# Location: ~/.config/hashtagger/config

# Number of hashtags to generate when --count is not given.
# Values are clamped to 1..=500.
# Default: 30
default_count = {default_count}

# Copy generated hashtags to the clipboard without passing --copy.
# Use --no-copy to skip copying for a single run.
# Default: false
auto_copy = {auto_copy}

# Command that receives the copied text on stdin.
# Supports arguments and shell quoting (e.g., "xclip -selection clipboard").
# If not set, the first available of pbcopy, clip, wl-copy, xclip and xsel is used.
{clipboard_line}

# Pause before generating, in milliseconds. Purely cosmetic.
# Default: 0
delay_ms = {delay_ms}

# Output format: "lines" (one per line), "plain" (space-separated) or "json".
# Default: "lines"
format = "{format}"
"#,
            default_count = self.default_count,
            auto_copy = self.auto_copy,
            clipboard_line = clipboard_line,
            delay_ms = self.delay_ms,
            format = self.format.as_str(),
        );

        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }

    /// Validates the config file and returns any issues found.
    ///
    /// Parses the raw TOML to detect unknown fields and missing required
    /// fields.
    pub fn validate() -> Result<ConfigValidation> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if !path.exists() {
            anyhow::bail!("Config not found: {}", path.display());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        let mut validation = ConfigValidation::default();

        for key in table.keys() {
            if !VALID_FIELDS.contains(&key.as_str()) {
                validation.invalid.push(key.clone());
            }
        }

        for &field in REQUIRED_FIELDS {
            if !table.contains_key(field) {
                validation.missing.push(field.to_string());
            }
        }

        Ok(validation)
    }

    /// Validates and rewrites the config file if needed.
    ///
    /// Serde fills defaults for missing fields and ignores unknown ones, so
    /// re-saving the loaded config repairs the file.
    pub fn update_if_needed() -> Result<ConfigValidation> {
        let validation = Self::validate()?;

        if !validation.has_changes() {
            return Ok(validation);
        }

        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        Self::load_from(&path)?.save_with_comments(&path)?;

        Ok(validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GlobalConfig::default();
        assert_eq!(config.default_count, 30);
        assert!(!config.auto_copy);
        assert!(config.clipboard_command.is_none());
        assert_eq!(config.delay_ms, 0);
        assert_eq!(config.format, OutputFormat::Lines);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: GlobalConfig = toml::from_str("auto_copy = true\n").unwrap();
        assert!(config.auto_copy);
        assert_eq!(config.default_count, 30); // default
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
default_count = 12
auto_copy = true
clipboard_command = "xclip -selection clipboard"
delay_ms = 500
format = "json"
"#;
        let config: GlobalConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.default_count, 12);
        assert_eq!(
            config.clipboard_command.as_deref(),
            Some("xclip -selection clipboard")
        );
        assert_eq!(config.delay_ms, 500);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(toml::from_str::<GlobalConfig>("format = \"csv\"").is_err());
    }

    #[test]
    fn test_commented_file_round_trips() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config");
        let config = GlobalConfig {
            clipboard_command: Some("sh -c \"cat > clip\"".to_string()),
            format: OutputFormat::Plain,
            ..GlobalConfig::default()
        };

        config.save_with_comments(&path).unwrap();
        assert_eq!(GlobalConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_home_override() {
        let temp = tempfile::tempdir().unwrap();
        let expected_path = temp
            .path()
            .join(".config")
            .join("hashtagger")
            .join("config");

        set_home_override(Some(temp.path().to_path_buf()));
        assert_eq!(GlobalConfig::path().unwrap(), expected_path);
        assert_eq!(GlobalConfig::load().unwrap(), GlobalConfig::default());

        set_home_override(None);
        assert_ne!(GlobalConfig::path(), Some(expected_path));
    }
}
