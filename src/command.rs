//! Session command generation.
//!
//! [`generate_commands`] turns a [`SessionConfig`] into the full, ordered list
//! of tmux commands that builds the session. The list has a fixed shape that
//! [`crate::runner`] and [`crate::preview`] rely on:
//!
//! | Position    | Command                                      |
//! |-------------|----------------------------------------------|
//! | first       | `has-session` check for the session          |
//! | ...         | per window: `new-session`/`new-window`, layout |
//! | second-last | `select-window` on window 0                  |
//! | last        | `attach-session`                             |

use crate::config::{SessionConfig, WindowConfig};
use crate::error::Result;
use crate::interpolate::expand_home;
use crate::layout::{self, WindowContext};
use crate::tmux::{self, NewSession, NewWindow};
use std::path::PathBuf;
use tracing::info;

/// Label used for a window with no label, path or command.
pub const FALLBACK_LABEL: &str = "cmd";

/// Environment-derived inputs to command generation.
///
/// Kept separate from the config so that [`generate_commands`] is a pure
/// function of its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Home directory used to expand `~`.
    pub home: Option<PathBuf>,
    /// Shell started in split panes when a layout does not set one.
    pub shell: String,
}

impl GenerateOptions {
    /// Detect from the current environment the home directory and shell.
    pub fn from_env() -> Self {
        Self {
            home: dirs::home_dir(),
            shell: layout::detect_shell(),
        }
    }
}

/// Name shown for a window.
///
/// Uses the explicit label if non-blank, else the last segment of the path, else the first
/// word of the command, else [`FALLBACK_LABEL`]. Taking the first word is a
/// rough guess: `FOO=1 make` is labelled `FOO=1`.
///
/// # Examples
///
/// ```
/// use pane::command::window_label;
/// use pane::config::WindowConfig;
///
/// let win = WindowConfig { path: Some("src/api/".into()), ..Default::default() };
/// assert_eq!(window_label(&win), "api");
///
/// let win = WindowConfig { command: Some("npm run dev".into()), ..Default::default() };
/// assert_eq!(window_label(&win), "npm");
/// ```
pub fn window_label(window: &WindowConfig) -> String {
    if let Some(label) = window.label.as_deref().filter(|l| !l.trim().is_empty()) {
        return label.to_string();
    }
    let from_path = window
        .path
        .as_deref()
        .and_then(|p| p.split('/').filter(|s| !s.is_empty()).next_back());
    let from_command = window
        .command
        .as_deref()
        .and_then(|c| c.split_whitespace().next());

    from_path
        .or(from_command)
        .unwrap_or(FALLBACK_LABEL)
        .to_string()
}

/// Working directory of a window: the root joined with the window's path,
/// or the root alone for command-only windows.
pub fn window_path(
    config: &SessionConfig,
    window: &WindowConfig,
    options: &GenerateOptions,
) -> PathBuf {
    let home = options.home.as_deref();
    let root = expand_home(&config.root, home);
    match window.path.as_deref() {
        Some(path) => root.join(expand_home(path, home)).components().collect(),
        None => root,
    }
}

/// Generate every tmux command needed to build the session.
///
/// Windows are processed strictly in config order. The first window is
/// created together with the session as `session:0`; each following window
/// `i` is inserted as `session:i`.
///
/// # Errors
///
/// - [`crate::PaneError::LayoutNotFound`] if a window names an unknown layout
/// - [`crate::PaneError::TemplateNotFound`] if a layout names an unknown template
pub fn generate_commands(
    config: &SessionConfig,
    options: &GenerateOptions,
) -> Result<Vec<String>> {
    let session = config.session.as_str();
    let mut commands = vec![tmux::has_session(session)];

    for (index, window) in config.windows.iter().enumerate() {
        let index = index as u32;
        let cwd = window_path(config, window, options)
            .to_string_lossy()
            .into_owned();
        let label = window_label(window);
        let layout_name = config.layout_name(window);

        info!(
            window = %label,
            layout = layout_name,
            "Creating {}",
            if index == 0 { "first window" } else { "window" }
        );

        let layout_config = layout::resolve_layout(config, layout_name)?;

        if index == 0 {
            commands.push(tmux::new_session(
                session,
                &NewSession {
                    cwd: Some(cwd.as_str()),
                    window_name: Some(label.as_str()),
                    create_or_attach: true,
                },
            ));
        } else {
            commands.push(tmux::new_window(
                &label,
                &NewWindow {
                    target_session: session,
                    cwd: Some(cwd.as_str()),
                    window_index: Some(index),
                },
            ));
        }

        let target = format!("{}:{}", session, index);
        let ctx = WindowContext {
            target: &target,
            cwd: &cwd,
            command: window.command.as_deref(),
        };
        commands.extend(layout::apply_layout(&layout_config, &ctx, &options.shell)?);
    }

    commands.push(tmux::select_window(&format!("{}:0", session)));
    commands.push(tmux::attach_session(Some(session)));

    Ok(commands)
}
