//! Interactive terminal detection.
//!
//! Attaching to tmux only makes sense from a terminal. Detection combines
//! several checks and treats the terminal as interactive if any succeeds,
//! since each check alone misfires under some launchers.

use std::io::IsTerminal;
use std::process::{Command, Stdio};

/// Results of the individual terminal checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalChecks {
    /// Stdin is a TTY.
    pub stdin_tty: bool,
    /// The `tty` utility names a terminal device for stdin.
    pub tty_device: bool,
    /// `/dev/stdin` is a character device.
    pub stdin_char_device: bool,
    /// `TERM` is set and non-empty.
    pub term_env: bool,
}

impl TerminalChecks {
    /// Run all checks against the current process.
    pub fn detect() -> Self {
        Self {
            stdin_tty: std::io::stdin().is_terminal(),
            tty_device: has_tty_device(),
            stdin_char_device: stdin_is_char_device(),
            term_env: std::env::var("TERM").is_ok_and(|t| !t.is_empty()),
        }
    }

    /// Whether any check reported a terminal.
    pub fn is_interactive(&self) -> bool {
        self.stdin_tty || self.tty_device || self.stdin_char_device || self.term_env
    }
}

/// Interpret the outcome of running `tty`.
fn tty_output_names_device(success: bool, stdout: &[u8]) -> bool {
    success && !String::from_utf8_lossy(stdout).contains("not a tty")
}

/// Ask the `tty` utility whether the inherited stdin is a terminal.
///
/// A missing `tty` binary counts as no terminal.
fn has_tty_device() -> bool {
    Command::new("tty")
        .stdin(Stdio::inherit())
        .stderr(Stdio::null())
        .output()
        .is_ok_and(|out| tty_output_names_device(out.status.success(), &out.stdout))
}

#[cfg(unix)]
fn stdin_is_char_device() -> bool {
    use std::os::unix::fs::FileTypeExt;
    std::fs::metadata("/dev/stdin").is_ok_and(|m| m.file_type().is_char_device())
}

#[cfg(not(unix))]
fn stdin_is_char_device() -> bool {
    false
}

/// Check if the current process is running in an interactive terminal.
pub fn is_interactive() -> bool {
    TerminalChecks::detect().is_interactive()
}
