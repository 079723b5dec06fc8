//! Executing generated commands against tmux.
//!
//! Commands run one at a time through `sh -c`, in the order
//! [`crate::command::generate_commands`] produced them. The leading
//! `has-session` check decides what runs at all: a missing session is built
//! from scratch, an existing one only gets its first window selected. Other
//! failures are logged and skipped, so a broken pane command leaves a
//! partially built session rather than none.

use crate::config::SessionConfig;
use crate::error::{PaneError, Result};
use crate::terminal;
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// Something that can run a shell command string.
pub trait Executor {
    /// Run `command`, failing if it cannot be spawned or exits non-zero.
    fn run(&mut self, command: &str) -> Result<()>;
}

/// Runs commands through `sh -c`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShell;

impl Executor for SystemShell {
    fn run(&mut self, command: &str) -> Result<()> {
        debug!(command, "Executing");
        let output = Command::new("sh")
            .args(["-c", command])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| PaneError::TmuxError(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PaneError::TmuxError(format!(
                "{} ({})",
                stderr.trim(),
                output.status
            )));
        }

        Ok(())
    }
}

/// Options for [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Attach to the session afterwards when running in a terminal.
    pub auto_attach: bool,
}

/// Whether [`build_session`] found the session or created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The session was created by this run.
    Created,
    /// The session already existed; only the first window was selected.
    Existing,
}

/// Run a generated command list, skipping creation if the session exists.
///
/// The last command (attach) is never run here; see [`attach`].
///
/// # Errors
///
/// Returns [`PaneError::TmuxError`] if `commands` is too short to contain the
/// session check and attach command. Failures of individual commands are
/// logged as warnings instead.
pub fn build_session<E: Executor>(executor: &mut E, commands: &[String]) -> Result<SessionState> {
    let [check, body @ .., _attach] = commands else {
        return Err(PaneError::TmuxError(
            "command list has no session check and attach command".into(),
        ));
    };

    if executor.run(check).is_ok() {
        info!("Session already exists, skipping window creation");
        if let Some(select) = body.last() {
            run_best_effort(executor, select);
        }
        return Ok(SessionState::Existing);
    }

    for command in body {
        run_best_effort(executor, command);
    }
    Ok(SessionState::Created)
}

fn run_best_effort<E: Executor>(executor: &mut E, command: &str) {
    if let Err(e) = executor.run(command) {
        warn!(command, error = %e, "Command failed");
    }
}

/// Build the session and attach to it or explain how to.
pub fn run(config: &SessionConfig, commands: &[String], options: &RunOptions) -> Result<()> {
    build_session(&mut SystemShell, commands)?;

    let session = &config.session;
    if options.auto_attach {
        let interactive = terminal::is_interactive();
        info!(interactive, "Interactive terminal detection");
        if interactive {
            println!("\nAttaching to tmux session '{}'...", session);
            return attach(session);
        }
        println!("\nTmux session '{}' is ready.", session);
        println!("Cannot attach automatically - not running in an interactive terminal.");
        println!("To attach to this session, run the following command in your terminal:");
        println!("  tmux attach -t {}", session);
    } else {
        println!("\nTmux session '{}' is ready.", session);
        println!("To attach to this session, run the following command in your terminal:");
        println!("  tmux attach -t {}", session);
        println!("\nRun with --preview to see the full list of commands executed.");
    }

    Ok(())
}

/// Replace the current process with `tmux attach-session`.
///
/// Only returns if tmux could not be started.
#[cfg(unix)]
pub fn attach(session: &str) -> Result<()> {
    use std::os::unix::process::CommandExt;

    let err = Command::new("tmux")
        .args(["attach-session", "-t", session])
        .exec();
    Err(PaneError::TmuxError(format!("attach-session failed: {}", err)))
}

/// Run `tmux attach-session` and wait for it to detach.
#[cfg(not(unix))]
pub fn attach(session: &str) -> Result<()> {
    let status = Command::new("tmux")
        .args(["attach-session", "-t", session])
        .status()
        .map_err(|e| PaneError::TmuxError(e.to_string()))?;

    if !status.success() {
        return Err(PaneError::TmuxError(format!(
            "attach-session {} failed",
            session
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records commands and fails the ones containing any of `failing`.
    struct Recorder {
        ran: Vec<String>,
        failing: Vec<&'static str>,
    }

    impl Recorder {
        fn new(failing: &[&'static str]) -> Self {
            Self {
                ran: Vec::new(),
                failing: failing.to_vec(),
            }
        }
    }

    impl Executor for Recorder {
        fn run(&mut self, command: &str) -> Result<()> {
            self.ran.push(command.to_string());
            if self.failing.iter().any(|f| command.contains(f)) {
                Err(PaneError::TmuxError("boom".into()))
            } else {
                Ok(())
            }
        }
    }

    fn commands() -> Vec<String> {
        ["has-session", "new-session", "split-window", "send-keys", "select-window", "attach"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_new_session_runs_everything_but_attach() {
        let mut exec = Recorder::new(&["has-session"]);
        let state = build_session(&mut exec, &commands()).unwrap();
        assert_eq!(state, SessionState::Created);
        assert_eq!(
            exec.ran,
            vec!["has-session", "new-session", "split-window", "send-keys", "select-window"]
        );
    }

    #[test]
    fn test_failures_do_not_stop_execution() {
        let mut exec = Recorder::new(&["has-session", "split-window"]);
        let state = build_session(&mut exec, &commands()).unwrap();
        assert_eq!(state, SessionState::Created);
        assert_eq!(exec.ran.len(), 5);
        assert_eq!(exec.ran[4], "select-window");
    }

    #[test]
    fn test_existing_session_only_selects() {
        let mut exec = Recorder::new(&[]);
        let state = build_session(&mut exec, &commands()).unwrap();
        assert_eq!(state, SessionState::Existing);
        assert_eq!(exec.ran, vec!["has-session", "select-window"]);
    }

    #[test]
    fn test_too_few_commands() {
        let mut exec = Recorder::new(&[]);
        assert!(build_session(&mut exec, &["only".to_string()]).is_err());
        assert!(exec.ran.is_empty());
    }
}
