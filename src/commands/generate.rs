//! # Generate Command
//!
//! Generates hashtags for a post title, prints them and optionally copies
//! them to the clipboard.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{
    clipboard::{ClipboardWriter, CommandClipboard},
    config::{Config, CopyArgs},
    error::{ClipboardError, HashtagError},
    hashtag::{GenerationRequest, HashtagGenerator},
    output::{self, OutputFormat},
    ui,
};

/// Arguments for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Post title; prompted for when missing and stdin is a terminal
    pub title: Option<String>,
    /// Comma-separated custom hashtags
    pub tags: Option<String>,
    pub count: Option<i64>,
    pub format: Option<OutputFormat>,
    /// Seed for reproducible padding
    pub seed: Option<u64>,
    pub copy: CopyArgs,
}

/// Executes the generate command.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let config = Config::load()?;
    let (title, tags) = resolve_input(args.title, args.tags)?;
    let request = GenerationRequest::new(title, tags, config.count(args.count))?;

    let generator = args
        .seed
        .map_or_else(HashtagGenerator::from_os_rng, HashtagGenerator::seeded);
    let mut generator = generator.with_delay(config.delay());

    if !generator.delay().is_zero() {
        ui::print_progress("Generating...");
    }
    let hashtags = generator.generate(&request)?;

    let format = config.format(args.format);
    println!("{}", output::render(format, request.title(), hashtags)?);

    if args.copy.resolve(config.auto_copy()) {
        let copied = CommandClipboard::new(config.clipboard_command())
            .and_then(|mut clipboard| copy_hashtags(&mut clipboard, hashtags));
        report_copy(copied);
    }

    Ok(())
}

/// Copies the space-joined hashtags and returns how many were copied.
pub fn copy_hashtags(
    clipboard: &mut dyn ClipboardWriter,
    hashtags: &[String],
) -> Result<usize, ClipboardError> {
    clipboard.write_text(&output::copy_text(hashtags))?;
    Ok(hashtags.len())
}

/// Clipboard failures are reported but never fail the command.
fn report_copy(result: Result<usize, ClipboardError>) {
    match result {
        Ok(count) => ui::print_success(&format!("Copied {count} hashtags!")),
        Err(err) => {
            tracing::debug!(error = %err, "clipboard copy failed");
            ui::print_warning(&format!("Could not copy to clipboard: {err}"));
        }
    }
}

/// Uses the given title and tags, prompting for a missing title when
/// running in a terminal.
fn resolve_input(title: Option<String>, tags: Option<String>) -> Result<(String, String)> {
    if let Some(title) = title {
        return Ok((title, tags.unwrap_or_default()));
    }

    if !ui::is_interactive() {
        return Err(HashtagError::EmptyTitle.into());
    }

    let title = ui::prompt_line("Post title:")?;
    if title.trim().is_empty() {
        return Err(HashtagError::EmptyTitle.into());
    }

    let tags = match tags {
        Some(tags) => tags,
        None => ui::prompt_line("Custom hashtags (comma-separated, optional):")?,
    };

    Ok((title, tags))
}
