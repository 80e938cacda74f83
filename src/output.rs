//! # Output Rendering
//!
//! Formats a generated hashtag list for stdout and for the clipboard.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How generated hashtags are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One hashtag per line
    #[default]
    Lines,
    /// A single space-separated line (same text as the clipboard copy)
    Plain,
    /// JSON object with title, count and hashtags
    Json,
}

impl OutputFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lines => "lines",
            Self::Plain => "plain",
            Self::Json => "json",
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    title: &'a str,
    count: usize,
    hashtags: &'a [String],
}

/// The text placed on the clipboard: hashtags joined by single spaces.
pub fn copy_text(hashtags: &[String]) -> String {
    hashtags.join(" ")
}

/// Renders hashtags in the given format, without a trailing newline.
pub fn render(format: OutputFormat, title: &str, hashtags: &[String]) -> Result<String> {
    match format {
        OutputFormat::Lines => Ok(hashtags.join("\n")),
        OutputFormat::Plain => Ok(copy_text(hashtags)),
        OutputFormat::Json => serde_json::to_string_pretty(&JsonOutput {
            title,
            count: hashtags.len(),
            hashtags,
        })
        .context("Failed to serialize hashtags"),
    }
}
