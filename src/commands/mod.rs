//! # Commands
//!
//! CLI command implementations for hashtagger.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod completions;
pub mod generate;
pub mod setup;

pub use self::{
    completions::execute as completions,
    generate::{copy_hashtags, execute as generate, GenerateArgs},
    setup::execute as setup,
};
