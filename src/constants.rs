//! # Constants
//!
//! Centralized constants for magic values used throughout hashtagger.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Generation
// =============================================================================

/// Smallest number of hashtags a request can ask for.
pub const MIN_HASHTAG_COUNT: i64 = 1;

/// Largest number of hashtags a request can ask for.
pub const MAX_HASHTAG_COUNT: i64 = 500;

/// Number of hashtags generated when neither CLI nor config specify one.
pub const DEFAULT_HASHTAG_COUNT: i64 = 30;

/// Words with this many characters or fewer get no per-word hashtag.
pub const SHORT_WORD_MAX_LEN: usize = 2;

/// Length of the random base-36 suffix used for padding hashtags.
pub const PADDING_SUFFIX_LEN: usize = 5;

/// Padding attempts allowed per missing hashtag before giving up.
pub const PADDING_ATTEMPTS_PER_SLOT: usize = 64;

/// Prefix of every hashtag.
pub const HASHTAG_PREFIX: char = '#';

/// Separator between custom tags in the tag input.
pub const CUSTOM_TAG_SEPARATOR: char = ',';

/// Suffix of the whole-title context variant.
pub const INSIGHTS_SUFFIX: &str = "Insights";

/// Suffix of the first-word context variant.
pub const EXPERTS_SUFFIX: &str = "Experts";

/// Suffix of the last-word context variant.
pub const TRENDS_SUFFIX: &str = "Trends";

// =============================================================================
// File System
// =============================================================================

/// Global configuration directory name (inside user's config directory).
pub const GLOBAL_CONFIG_DIR: &str = "hashtagger";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

// =============================================================================
// Clipboard
// =============================================================================

/// Clipboard tools tried in order on macOS.
pub const CLIPBOARD_COMMANDS_MACOS: &[&[&str]] = &[&["pbcopy"]];

/// Clipboard tools tried in order on Windows.
pub const CLIPBOARD_COMMANDS_WINDOWS: &[&[&str]] = &[&["clip"]];

/// Clipboard tools tried in order on other Unix systems (Wayland first).
pub const CLIPBOARD_COMMANDS_UNIX: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];
