//! # hashtagger
//!
//! Contextual hashtag suggestions for a post title.
//!
//! A title and optional custom tags are turned into an ordered list of
//! unique hashtags: the custom tags, per-word and whole-title case
//! variants, context variants and random padding up to the requested count.
//!
//! ## Features
//!
//! - **Deterministic core**: every derived variant is a pure function of the input
//! - **Seedable padding**: inject any `rand::Rng` for reproducible output
//! - **Clipboard copy**: space-joined output piped to the platform clipboard tool
//! - **Scriptable output**: lines, plain or JSON
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod hashtag;
pub mod output;
pub mod ui;

pub use config::{set_home_override, Config};
pub use error::{ClipboardError, HashtagError};
pub use hashtag::{generate, GenerationRequest, HashtagGenerator};
