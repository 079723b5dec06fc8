//! Dry-run output for `pane --preview`.
//!
//! The preview prints what a real run would decide and execute: the loaded
//! config, the terminal checks behind auto-attach, whether the session is
//! already running, and every tmux command in order.

use crate::command::window_label;
use crate::config::SessionConfig;
use crate::runner::{Executor, SystemShell};
use crate::terminal::TerminalChecks;
use std::io::{self, Write};

/// Everything the preview shows, gathered up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewReport {
    /// Session name.
    pub session: String,
    /// File the config was loaded from, if any.
    pub config_path: Option<String>,
    /// Configured root directory.
    pub root: String,
    /// Window labels in order.
    pub windows: Vec<String>,
    /// Terminal check results.
    pub terminal: TerminalChecks,
    /// Whether `--no-attach` was given.
    pub no_attach: bool,
    /// Whether the session is already running.
    pub session_running: bool,
    /// The generated command list.
    pub commands: Vec<String>,
}

impl PreviewReport {
    /// Gather a report, checking the terminal and running the session check.
    pub fn collect(config: &SessionConfig, commands: Vec<String>, no_attach: bool) -> Self {
        let session_running = commands
            .first()
            .is_some_and(|check| SystemShell.run(check).is_ok());

        Self {
            session: config.session.clone(),
            config_path: config
                .config_path
                .as_ref()
                .map(|p| p.display().to_string()),
            root: config.root.clone(),
            windows: config.windows.iter().map(window_label).collect(),
            terminal: TerminalChecks::detect(),
            no_attach,
            session_running,
            commands,
        }
    }

    /// Whether a real run would attach automatically.
    pub fn would_auto_attach(&self) -> bool {
        !self.no_attach && self.terminal.is_interactive()
    }
}

fn check_result(ok: bool) -> &'static str {
    if ok {
        "0 (0=true, 1=false)"
    } else {
        "1 (0=true, 1=false)"
    }
}

/// Write the preview report.
pub fn render<W: Write>(out: &mut W, report: &PreviewReport) -> io::Result<()> {
    writeln!(out, "\n# Configuration")?;
    writeln!(out, "# -------------")?;
    writeln!(out, "# Session: {}", report.session)?;
    writeln!(
        out,
        "# Config file: {}",
        report.config_path.as_deref().unwrap_or("(built-in)")
    )?;
    writeln!(out, "#   root: {}", report.root)?;
    writeln!(out, "#   windows: [{}]", report.windows.join(", "))?;

    writeln!(out, "\n\n# Terminal detection")?;
    writeln!(out, "# ------------------")?;
    writeln!(out, "# is_tty_0?")?;
    writeln!(out, "test -t 0")?;
    writeln!(out, "# result: {}", check_result(report.terminal.stdin_tty))?;
    writeln!(out, "\n# has_tty_device?")?;
    writeln!(out, "tty | grep -v \"not a tty\" > /dev/null")?;
    writeln!(out, "# result: {}", check_result(report.terminal.tty_device))?;
    writeln!(out, "\n# is_stdin_char_device?")?;
    writeln!(out, "test -c /dev/stdin")?;
    writeln!(out, "# result: {}", check_result(report.terminal.stdin_char_device))?;
    writeln!(out, "\n# has_term_env?")?;
    writeln!(out, "[ -n \"$TERM\" ]")?;
    writeln!(out, "# result: {}", check_result(report.terminal.term_env))?;

    writeln!(out, "\n# Flag processing")?;
    writeln!(out, "# --------------")?;
    writeln!(out, "# --no-attach specified?: {}", report.no_attach)?;
    writeln!(out, "# can_auto_attach?: {}", report.terminal.is_interactive())?;
    writeln!(out, "# auto_attach_enabled?: {}", report.would_auto_attach())?;

    let (check, rest) = match report.commands.split_first() {
        Some(split) => split,
        None => return Ok(()),
    };
    writeln!(out, "\n\n# Session detection")?;
    writeln!(out, "# -----------------")?;
    writeln!(out, "# check for running session")?;
    writeln!(out, "{}", check)?;
    writeln!(out, "# session_running?: {}", report.session_running)?;

    writeln!(out, "\n\n# TMux commands that would be executed")?;
    writeln!(out, "# -----------------------------------")?;
    if report.session_running {
        writeln!(out, "# Session already exists, only the first window will be selected")?;
    } else {
        writeln!(out, "# Creating new session")?;
    }
    let (attach, body) = match rest.split_last() {
        Some(split) => split,
        None => return Ok(()),
    };
    for command in body {
        writeln!(out, "{}", command)?;
    }

    writeln!(out, "\n# Auto attach command")?;
    writeln!(out, "# -----------------")?;
    if !report.would_auto_attach() {
        writeln!(
            out,
            "# Would not auto-attach (--no-attach specified or not in an interactive terminal)"
        )?;
        writeln!(out, "# To manually attach, you would run:")?;
    }
    writeln!(out, "{}", attach)?;

    Ok(())
}

/// Print the preview for `config` to stdout.
pub fn preview(config: &SessionConfig, commands: Vec<String>, no_attach: bool) -> io::Result<()> {
    let report = PreviewReport::collect(config, commands, no_attach);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&mut out, &report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(no_attach: bool, running: bool) -> PreviewReport {
        PreviewReport {
            session: "demo".into(),
            config_path: Some("/cfg/demo.yaml".into()),
            root: "~/".into(),
            windows: vec!["api".into(), "web".into()],
            terminal: TerminalChecks {
                stdin_tty: true,
                ..Default::default()
            },
            no_attach,
            session_running: running,
            commands: vec![
                "CHECK".into(),
                "CREATE".into(),
                "SELECT".into(),
                "ATTACH".into(),
            ],
        }
    }

    fn rendered(report: &PreviewReport) -> String {
        let mut buf = Vec::new();
        render(&mut buf, report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_sections_and_command_placement() {
        let text = rendered(&report(false, false));
        assert!(text.contains("# Session: demo"));
        assert!(text.contains("# Config file: /cfg/demo.yaml"));
        assert!(text.contains("#   windows: [api, web]"));
        assert!(text.contains("# auto_attach_enabled?: true"));
        assert!(text.contains("# has_tty_device?\ntty | grep -v \"not a tty\" > /dev/null\n"));
        assert!(text.contains("# Creating new session"));

        let check = text.find("CHECK").unwrap();
        let create = text.find("CREATE").unwrap();
        let select = text.find("SELECT").unwrap();
        let attach_header = text.find("# Auto attach command").unwrap();
        let attach = text.find("ATTACH").unwrap();
        assert!(check < create && create < select && select < attach_header);
        assert!(attach_header < attach);
        assert!(!text.contains("Would not auto-attach"));
    }

    #[test]
    fn test_no_attach_explains_manual_attach() {
        let text = rendered(&report(true, true));
        assert!(text.contains("# --no-attach specified?: true"));
        assert!(text.contains("# auto_attach_enabled?: false"));
        assert!(text.contains("# session_running?: true"));
        assert!(text.contains("Would not auto-attach"));
        assert!(text.contains("only the first window will be selected"));
    }
}
