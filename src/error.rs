//! # Errors
//!
//! Typed errors for hashtag generation and clipboard access.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

/// Errors raised while validating or running a generation request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashtagError {
    /// The title is empty or whitespace only.
    #[error("Please enter a post title")]
    EmptyTitle,

    /// The requested hashtag count is negative.
    #[error("Invalid hashtag count {0}: must be between 1 and 500")]
    InvalidCount(i64),

    /// Random padding kept colliding with existing hashtags.
    #[error("Could only produce {produced} of {requested} unique hashtags")]
    PaddingExhausted { produced: usize, requested: usize },
}

/// Errors raised while copying text to the system clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No configured or known clipboard tool could be started.
    #[error("No clipboard tool available (tried: {0})")]
    Unavailable(String),

    /// The configured clipboard command could not be parsed.
    #[error("Invalid clipboard command: {0}")]
    InvalidCommand(String),

    /// The clipboard tool ran but reported failure.
    #[error("Clipboard command `{command}` exited with {status}")]
    CommandFailed { command: String, status: String },

    /// Writing to the clipboard tool failed.
    #[error("Failed to write to clipboard command `{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
