//! # UI Utilities
//!
//! Notices and prompts shared across commands. Everything here writes to
//! stderr so stdout carries only generated output.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Result;
use owo_colors::OwoColorize;

/// Whether stdin is attached to a terminal, i.e. prompting makes sense.
pub fn is_interactive() -> bool {
    io::stdin().is_terminal()
}

/// Prints a success message.
///
/// Format: `✓ {message}`
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

/// Prints a warning with yellow prefix.
pub fn print_warning(warning: &str) {
    eprintln!("{} {}", "warning:".yellow(), warning);
}

/// Prints warnings with yellow prefix.
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        print_warning(warning);
    }
}

/// Prints a dimmed progress note.
pub fn print_progress(message: &str) {
    eprintln!("{}", message.dimmed());
}

/// Asks for one line of input on stderr and returns it without the newline.
pub fn prompt_line(prompt: &str) -> Result<String> {
    let stdin = io::stdin();
    read_prompted_line(prompt, &mut stdin.lock(), &mut io::stderr())
}

fn read_prompted_line(
    prompt: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<String> {
    write!(output, "{} ", prompt.bold())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let trimmed = line.trim_end_matches(['\n', '\r']);
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_prompted_line_strips_newline() {
        let mut input = io::Cursor::new("My Trip\r\n");
        let mut output: Vec<u8> = Vec::new();
        let line = read_prompted_line("Post title:", &mut input, &mut output).unwrap();
        assert_eq!(line, "My Trip");
        assert!(String::from_utf8_lossy(&output).contains("Post title:"));
    }

    #[test]
    fn test_read_prompted_line_eof() {
        let mut input = io::Cursor::new("");
        let line = read_prompted_line("Tags:", &mut input, &mut Vec::<u8>::new()).unwrap();
        assert_eq!(line, "");
    }
}
