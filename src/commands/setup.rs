//! # Setup Command
//!
//! Creates the config file, or repairs an existing one.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{config::GlobalConfig, ui};

/// Executes the setup command.
pub fn execute() -> Result<()> {
    eprintln!("{}\n", "Setting up hashtagger...".bold());

    let path = GlobalConfig::path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    if GlobalConfig::create_default_if_missing()? {
        ui::print_success(&format!("Created config: {}", path.display()));
        return Ok(());
    }

    let validation = GlobalConfig::update_if_needed()?;
    if validation.has_changes() {
        let notes: Vec<String> = validation
            .invalid
            .iter()
            .map(|field| format!("Removed unknown field: {field}"))
            .chain(
                validation
                    .missing
                    .iter()
                    .map(|field| format!("Added missing field: {field}")),
            )
            .collect();
        ui::print_warnings(&notes);
        ui::print_success(&format!("Updated config: {}", path.display()));
    } else {
        ui::print_success(&format!("Config is up to date: {}", path.display()));
    }

    Ok(())
}
