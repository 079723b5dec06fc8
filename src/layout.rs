//! Layout resolution and application.
//!
//! Applying a layout to a window produces, in order:
//!
//! 1. the template's split/select commands, with every split starting the
//!    layout's shell so each new pane runs an interactive shell, then
//! 2. one `send-keys` per pane position that has a command.
//!
//! Panes must exist before anything is typed into them, so the structural
//! commands always come first.

use crate::config::{LayoutConfig, SessionConfig, builtin_layout};
use crate::error::{PaneError, Result};
use crate::interpolate::interpolate_command;
use crate::template::{PaneOp, Template};
use crate::tmux;
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Shell preferred for new panes when a layout does not set one.
pub const PREFERRED_SHELL: &str = "zsh";
/// Shell used when [`PREFERRED_SHELL`] is not installed.
pub const FALLBACK_SHELL: &str = "bash";

/// Pick the shell for panes created by splits.
///
/// Uses `zsh` when `/bin/zsh` exists, `bash` otherwise.
pub fn detect_shell() -> String {
    if Path::new("/bin/zsh").exists() {
        PREFERRED_SHELL.to_string()
    } else {
        FALLBACK_SHELL.to_string()
    }
}

/// Find the layout named `name`.
///
/// Layouts defined in the config are used first, then the built-in layouts.
///
/// # Errors
///
/// Returns [`PaneError::LayoutNotFound`] if neither has the name.
pub fn resolve_layout<'a>(
    config: &'a SessionConfig,
    name: &str,
) -> Result<Cow<'a, LayoutConfig>> {
    if let Some(layout) = config.layouts.get(name) {
        return Ok(Cow::Borrowed(layout));
    }
    builtin_layout(name)
        .map(Cow::Owned)
        .ok_or_else(|| PaneError::LayoutNotFound(name.to_string()))
}

/// Window-specific inputs for [`apply_layout`].
#[derive(Debug, Clone, Copy)]
pub struct WindowContext<'a> {
    /// Window target, `session:index`.
    pub target: &'a str,
    /// Working directory of every pane in the window.
    pub cwd: &'a str,
    /// The window's own command, used for `{command}` placeholders.
    pub command: Option<&'a str>,
}

/// Build the commands that arrange and populate one window.
///
/// `default_shell` is used for new panes when the layout has no `shell`.
///
/// # Errors
///
/// Returns [`PaneError::TemplateNotFound`] if the layout's template is not
/// one of the built-in templates.
pub fn apply_layout(
    layout: &LayoutConfig,
    window: &WindowContext<'_>,
    default_shell: &str,
) -> Result<Vec<String>> {
    let template: Template = layout.template.parse()?;
    let output = template.apply(window.target, window.cwd);
    let shell = layout.shell.as_deref().unwrap_or(default_shell);

    let mut commands: Vec<String> = output
        .ops
        .into_iter()
        .map(|op| match op {
            PaneOp::Split(mut split) => {
                if split.command.is_none() {
                    split.command = Some(shell.to_string());
                }
                PaneOp::Split(split).render()
            }
            other => other.render(),
        })
        .collect();

    for (position, pane) in &output.panes {
        let Some(configured) = layout.command_for(position) else {
            continue;
        };
        match interpolate_command(configured, window.command) {
            Some(cmd) => {
                commands.push(tmux::send_keys(&cmd, &pane.to_string(), Some(window.cwd)));
            }
            None => debug!(position = *position, pane = %pane, "no command for pane"),
        }
    }

    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(command: Option<&'a str>) -> WindowContext<'a> {
        WindowContext {
            target: "s:1",
            cwd: "/src/app",
            command,
        }
    }

    fn layout(template: &str, panes: &[(&str, &str)]) -> LayoutConfig {
        LayoutConfig {
            template: template.to_string(),
            panes: panes
                .iter()
                .map(|(p, c)| (p.to_string(), c.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_configured_then_builtin() {
        let mut config = SessionConfig::default();
        config.layouts.clear();
        config.layouts.insert("mine".into(), layout("Quad", &[]));

        assert_eq!(resolve_layout(&config, "mine").unwrap().template, "Quad");
        assert_eq!(
            resolve_layout(&config, "dev").unwrap().template,
            "TopSplitBottom"
        );
        assert!(matches!(
            resolve_layout(&config, "missing"),
            Err(PaneError::LayoutNotFound(name)) if name == "missing"
        ));
    }

    #[test]
    fn test_unknown_template() {
        let result = apply_layout(&layout("Triangle", &[]), &ctx(None), "bash");
        assert!(matches!(result, Err(PaneError::TemplateNotFound(name)) if name == "Triangle"));
    }

    #[test]
    fn test_splits_start_shell_and_keys_follow() {
        let l = layout("SplitVertical", &[("left", "nvim ."), ("right", "cargo test")]);
        let cmds = apply_layout(&l, &ctx(None), "bash").unwrap();
        assert_eq!(
            cmds,
            vec![
                r#"tmux split-window -t "s:1.0" -h -p 50 -c "/src/app" 'bash'"#.to_string(),
                r#"tmux send-keys -t "s:1.0" "cd \"/src/app\" && nvim ." C-m"#.to_string(),
                r#"tmux send-keys -t "s:1.1" "cd \"/src/app\" && cargo test" C-m"#.to_string(),
            ]
        );
    }

    #[test]
    fn test_layout_shell_overrides_default() {
        let mut l = layout("TopSplitBottom", &[]);
        l.shell = Some("fish".into());
        let cmds = apply_layout(&l, &ctx(None), "bash").unwrap();
        assert_eq!(cmds.len(), 3);
        assert!(cmds[0].ends_with("'fish'"));
        assert!(cmds[1].ends_with("'fish'"));
        assert_eq!(cmds[2], r#"tmux select-pane -t "s:1.0""#);
    }

    #[test]
    fn test_commands_override_panes() {
        let mut l = layout("Single", &[("main", "nvim .")]);
        l.commands.insert("main".into(), "hx .".into());
        let cmds = apply_layout(&l, &ctx(None), "bash").unwrap();
        assert_eq!(cmds, vec![r#"tmux send-keys -t "s:1.0" "cd \"/src/app\" && hx ." C-m"#]);
    }

    #[test]
    fn test_blank_command_falls_back_to_pane() {
        let mut l = layout("Single", &[("main", "nvim .")]);
        l.commands.insert("main".into(), "".into());
        let cmds = apply_layout(&l, &ctx(None), "bash").unwrap();
        assert_eq!(
            cmds,
            vec![r#"tmux send-keys -t "s:1.0" "cd \"/src/app\" && nvim ." C-m"#]
        );
    }

    #[test]
    fn test_placeholder_uses_window_command() {
        let l = layout("Single", &[("main", "{command}")]);
        let cmds = apply_layout(&l, &ctx(Some("htop")), "bash").unwrap();
        assert_eq!(cmds, vec![r#"tmux send-keys -t "s:1.0" "cd \"/src/app\" && htop" C-m"#]);

        let cmds = apply_layout(&l, &ctx(None), "bash").unwrap();
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_empty_and_undeclared_positions_are_skipped() {
        let l = layout("SplitVertical", &[("left", ""), ("middle", "echo no")]);
        let cmds = apply_layout(&l, &ctx(None), "bash").unwrap();
        assert_eq!(cmds.len(), 1);
        assert!(cmds[0].starts_with("tmux split-window"));
    }

    #[test]
    fn test_keys_follow_declared_position_order() {
        let l = layout(
            "Quad",
            &[
                ("bottomRight", "d"),
                ("bottomLeft", "c"),
                ("topRight", "b"),
                ("topLeft", "a"),
            ],
        );
        let cmds = apply_layout(&l, &ctx(None), "bash").unwrap();
        let keys: Vec<&String> = cmds.iter().filter(|c| c.contains("send-keys")).collect();
        assert_eq!(keys.len(), 4);
        assert!(keys[0].contains(r#""s:1.0""#) && keys[0].ends_with("&& a\" C-m"));
        assert!(keys[1].contains(r#""s:1.2""#) && keys[1].ends_with("&& b\" C-m"));
        assert!(keys[2].contains(r#""s:1.1""#) && keys[2].ends_with("&& c\" C-m"));
        assert!(keys[3].contains(r#""s:1.3""#) && keys[3].ends_with("&& d\" C-m"));
    }
}
