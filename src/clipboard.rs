//! # Clipboard Integration
//!
//! Copies text to the system clipboard by piping it into a clipboard tool.
//!
//! The tool is determined by (in order of priority):
//! 1. `clipboard_command` setting in config
//! 2. The first platform tool that can be started (`pbcopy`, `clip`,
//!    `wl-copy`, `xclip`, `xsel`)
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    io::{self, Write},
    process::{Command, Stdio},
};

use crate::{
    constants::{CLIPBOARD_COMMANDS_MACOS, CLIPBOARD_COMMANDS_UNIX, CLIPBOARD_COMMANDS_WINDOWS},
    error::ClipboardError,
};

/// Destination for copied text.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by an external command reading from stdin.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    candidates: Vec<Vec<String>>,
}

impl CommandClipboard {
    /// Uses `command` if given (split with shell quoting rules), otherwise
    /// the platform defaults.
    pub fn new(command: Option<&str>) -> Result<Self, ClipboardError> {
        match command {
            Some(command) => Self::from_command(command),
            None => Ok(Self::platform_default()),
        }
    }

    /// Single configured command, e.g. `"xclip -selection clipboard"`.
    pub fn from_command(command: &str) -> Result<Self, ClipboardError> {
        let argv = shlex::split(command)
            .filter(|argv| !argv.is_empty())
            .ok_or_else(|| ClipboardError::InvalidCommand(command.to_string()))?;
        Ok(Self {
            candidates: vec![argv],
        })
    }

    /// The known clipboard tools of the current platform.
    pub fn platform_default() -> Self {
        let table = if cfg!(target_os = "macos") {
            CLIPBOARD_COMMANDS_MACOS
        } else if cfg!(windows) {
            CLIPBOARD_COMMANDS_WINDOWS
        } else {
            CLIPBOARD_COMMANDS_UNIX
        };

        Self {
            candidates: table
                .iter()
                .map(|argv| argv.iter().map(|s| (*s).to_string()).collect())
                .collect(),
        }
    }

    /// Candidate command lines, tried in order.
    pub fn candidates(&self) -> &[Vec<String>] {
        &self.candidates
    }
}

impl ClipboardWriter for CommandClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        for argv in &self.candidates {
            match pipe_to(argv, text) {
                Ok(()) => {
                    tracing::debug!(command = %argv.join(" "), bytes = text.len(), "copied to clipboard");
                    return Ok(());
                }
                // Tool not installed, try the next one
                Err(ClipboardError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!(command = %argv.join(" "), "clipboard tool not found");
                }
                Err(err) => return Err(err),
            }
        }

        let tried: Vec<_> = self.candidates.iter().map(|argv| argv[0].as_str()).collect();
        Err(ClipboardError::Unavailable(tried.join(", ")))
    }
}

/// Spawns `argv`, writes `text` to its stdin and waits for it to exit.
fn pipe_to(argv: &[String], text: &str) -> Result<(), ClipboardError> {
    let command = argv.join(" ");
    let io_err = |source| ClipboardError::Io {
        command: command.clone(),
        source,
    };

    let (program, args) = argv
        .split_first()
        .ok_or_else(|| ClipboardError::InvalidCommand(String::new()))?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(io_err)?;

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(source) = stdin.write_all(text.as_bytes()) {
            // close the pipe and reap the child before reporting
            drop(stdin);
            let _ = child.wait();
            return Err(io_err(source));
        }
    }

    let status = child.wait().map_err(io_err)?;
    if !status.success() {
        return Err(ClipboardError::CommandFailed {
            command,
            status: status.to_string(),
        });
    }

    Ok(())
}

/// In-memory clipboard, for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
