//! Placeholder and path expansion.
//!
//! Layout pane commands may contain `{command}`, which is replaced with the
//! command of the window the layout is applied to. Paths in the config may
//! start with `~`, which is expanded to the user's home directory.
//!
//! # Example
//!
//! ```
//! use pane::interpolate::interpolate_command;
//!
//! let cmd = interpolate_command("{command}", Some("htop"));
//! assert_eq!(cmd.as_deref(), Some("htop"));
//! ```

use std::path::{Path, PathBuf};

/// Placeholder substituted with a window's own command.
pub const COMMAND_PLACEHOLDER: &str = "{command}";

/// Replace `{command}` in a pane command with the window's command.
///
/// Returns `None` when nothing should be typed into the pane: the command is
/// blank, or it consists only of the placeholder and the window has no
/// command.
///
/// # Examples
///
/// ```
/// use pane::interpolate::interpolate_command;
///
/// assert_eq!(interpolate_command("watch {command}", Some("ls")).as_deref(), Some("watch ls"));
/// assert_eq!(interpolate_command("{command}", None), None);
/// assert_eq!(interpolate_command("  ", Some("ls")), None);
/// ```
pub fn interpolate_command(command: &str, window_command: Option<&str>) -> Option<String> {
    let resolved = match window_command {
        Some(wc) => command.replace(COMMAND_PLACEHOLDER, wc),
        None if command.trim() == COMMAND_PLACEHOLDER => return None,
        None => command.to_string(),
    };

    if resolved.trim().is_empty() {
        None
    } else {
        Some(resolved)
    }
}

/// Expand a leading `~` to `home` and normalize the result.
///
/// Only `~` and `~/...` are expanded; `~user` forms and paths without a home
/// directory are returned unchanged apart from normalization, which drops
/// trailing slashes and `.` components.
///
/// # Examples
///
/// ```
/// use pane::interpolate::expand_home;
/// use std::path::{Path, PathBuf};
///
/// let home = Path::new("/home/me");
/// assert_eq!(expand_home("~/", Some(home)), PathBuf::from("/home/me"));
/// assert_eq!(expand_home("~/src/app", Some(home)), PathBuf::from("/home/me/src/app"));
/// assert_eq!(expand_home("/opt/app/", Some(home)), PathBuf::from("/opt/app"));
/// ```
pub fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    let expanded = match (path.strip_prefix('~'), home) {
        (Some(rest), Some(home)) if rest.is_empty() || rest.starts_with('/') => {
            home.join(rest.trim_start_matches('/'))
        }
        _ => PathBuf::from(path),
    };
    expanded.components().collect()
}
