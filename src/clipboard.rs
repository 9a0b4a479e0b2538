use std::io::{self, Write};
use std::process::{Command, Stdio};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_warn};

/// A clipboard utility that takes the text on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Shown when the program is not installed.
    pub install_hint: String,
}

impl ClipboardCommand {
    pub fn new(program: &str, args: &[&str], install_hint: &str) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            install_hint: install_hint.to_string(),
        }
    }

    #[cfg_attr(target_os = "macos", allow(dead_code))]
    fn xclip() -> Self {
        Self::new(
            "xclip",
            &["-selection", "clipboard"],
            "install with: sudo apt install xclip",
        )
    }

    #[cfg_attr(target_os = "macos", allow(dead_code))]
    fn wl_copy() -> Self {
        Self::new("wl-copy", &[], "install with: sudo apt install wl-clipboard")
    }

    #[cfg(target_os = "macos")]
    fn pbcopy() -> Self {
        Self::new("pbcopy", &[], "pbcopy ships with macOS")
    }
}

/// Utilities to try, in order, for this platform and session.
pub fn default_commands() -> Vec<ClipboardCommand> {
    #[cfg(target_os = "macos")]
    {
        vec![ClipboardCommand::pbcopy()]
    }

    #[cfg(not(target_os = "macos"))]
    {
        // wl-copy first on Wayland; xclip still works under XWayland.
        if std::env::var("WAYLAND_DISPLAY").is_ok() {
            vec![ClipboardCommand::wl_copy(), ClipboardCommand::xclip()]
        } else {
            vec![ClipboardCommand::xclip()]
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardOutcome {
    Copied { program: String },
    /// None of the utilities are installed.
    Missing { program: String, install_hint: String },
    Failed { program: String, reason: String },
}

fn pipe_to(command: &ClipboardCommand, text: &str) -> io::Result<std::process::ExitStatus> {
    // xclip forks to keep serving the selection, so its stdio must not be
    // captured or waiting would block on the forked child.
    let mut child = Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // Dropping stdin closes the pipe. The child must be reaped even when it
    // stopped reading early; its exit status decides the outcome.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait()?;

    match written {
        Err(err) if !status.success() => Err(err),
        _ => Ok(status),
    }
}

/// Hand `text` to the first available clipboard utility.
///
/// Never fails: a missing utility moves on to the next candidate, and any
/// other error is returned as [`ClipboardOutcome::Failed`].
pub fn copy_to_clipboard(text: &str, commands: &[ClipboardCommand]) -> ClipboardOutcome {
    let mut missing = None;

    for command in commands {
        match pipe_to(command, text) {
            Ok(status) if status.success() => {
                log_debug!("[clipboard] copied {} bytes via {}", text.len(), command.program);
                return ClipboardOutcome::Copied {
                    program: command.program.clone(),
                };
            }
            Ok(status) => {
                log_warn!("[clipboard] {} exited with {}", command.program, status);
                return ClipboardOutcome::Failed {
                    program: command.program.clone(),
                    reason: format!("{} exited with {}", command.program, status),
                };
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log_debug!("[clipboard] {} not installed", command.program);
                missing.get_or_insert(command);
            }
            Err(err) => {
                log_warn!("[clipboard] {} failed: {err}", command.program);
                return ClipboardOutcome::Failed {
                    program: command.program.clone(),
                    reason: err.to_string(),
                };
            }
        }
    }

    match missing {
        Some(command) => ClipboardOutcome::Missing {
            program: command.program.clone(),
            install_hint: command.install_hint.clone(),
        },
        None => ClipboardOutcome::Failed {
            program: String::new(),
            reason: "no clipboard utility configured".to_string(),
        },
    }
}
