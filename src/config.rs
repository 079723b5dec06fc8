//! Configuration types for pane.
//!
//! A config describes one tmux session: its name, a root directory, named
//! layouts, and the ordered list of windows to create.
//!
//! # Config Format
//!
//! ```yaml
//! session: work
//! root: ~/src
//! defaultLayout: dev
//!
//! layouts:
//!   editor:
//!     template: SplitVertical
//!     panes:
//!       left: nvim .
//!       right: cargo watch -x test
//!   runner:
//!     template: Single
//!     shell: bash
//!     panes:
//!       main: "{command}"
//!
//! windows:
//!   - path: api
//!     layout: editor
//!   - path: web
//!   - command: htop
//!     layout: runner
//! ```
//!
//! The built-in layouts `dev`, `single` and `aiCoding` are always available
//! and can be overridden by defining a layout of the same name.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Session name used when the config does not set one.
pub const DEFAULT_SESSION: &str = "pane";
/// Root directory used when the config does not set one.
pub const DEFAULT_ROOT: &str = "~/";
/// Layout used by windows that do not name one, unless overridden.
pub const DEFAULT_LAYOUT: &str = "dev";

fn default_session() -> String {
    DEFAULT_SESSION.to_string()
}

fn default_root() -> String {
    DEFAULT_ROOT.to_string()
}

fn default_layout() -> String {
    DEFAULT_LAYOUT.to_string()
}

/// A named pane arrangement and the commands to run in each pane.
///
/// # Example
///
/// ```yaml
/// template: TopSplitBottom
/// shell: zsh
/// panes:
///   top: nvim .
///   bottomLeft: cargo watch -x check
/// commands:
///   bottomRight: git status
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LayoutConfig {
    /// Template name (`Single`, `SplitVertical`, `TopSplitBottom`, `Quad`).
    pub template: String,
    /// Command per pane position.
    #[serde(default)]
    pub panes: BTreeMap<String, String>,
    /// Command per pane position, taking precedence over `panes`.
    #[serde(default)]
    pub commands: BTreeMap<String, String>,
    /// Program started in panes created by splits.
    #[serde(default)]
    pub shell: Option<String>,
}

impl LayoutConfig {
    fn with_panes(template: &str, panes: &[(&str, &str)]) -> Self {
        Self {
            template: template.to_string(),
            panes: panes
                .iter()
                .map(|(pos, cmd)| (pos.to_string(), cmd.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    /// Command configured for a pane position, if any.
    ///
    /// Non-blank entries in `commands` win over entries in `panes`.
    pub fn command_for(&self, position: &str) -> Option<&str> {
        self.commands
            .get(position)
            .filter(|c| !c.trim().is_empty())
            .or_else(|| self.panes.get(position))
            .map(String::as_str)
    }
}

/// Look up one of the layouts that ship with pane.
///
/// Returns `None` for names other than `dev`, `single` and `aiCoding`.
pub fn builtin_layout(name: &str) -> Option<LayoutConfig> {
    match name {
        "dev" => Some(LayoutConfig::with_panes(
            "TopSplitBottom",
            &[("top", "nvim ."), ("bottomLeft", "zsh"), ("bottomRight", "zsh")],
        )),
        "single" => Some(LayoutConfig::with_panes("Single", &[("main", "")])),
        "aiCoding" => Some(LayoutConfig::with_panes(
            "SplitVertical",
            &[("left", "nvim ."), ("right", "claude code")],
        )),
        _ => None,
    }
}

/// Names of the built-in layouts.
pub const BUILTIN_LAYOUTS: [&str; 3] = ["dev", "single", "aiCoding"];

/// One window of the session.
///
/// A window is normally either path-based (its panes start in `root/path`)
/// or command-only (its panes start in `root` and `command` fills any
/// `{command}` placeholder of the layout).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WindowConfig {
    /// Window name; derived from `path` or `command` when omitted.
    #[serde(default)]
    pub label: Option<String>,
    /// Directory relative to the session root.
    #[serde(default)]
    pub path: Option<String>,
    /// Command substituted into the layout's `{command}` placeholders.
    #[serde(default)]
    pub command: Option<String>,
    /// Layout name; the session's `defaultLayout` when omitted.
    #[serde(default)]
    pub layout: Option<String>,
}

/// Top-level configuration structure.
///
/// Parsed from `~/.config/pane/<name>.yaml` (or a `.toml` file with the
/// same keys). Use [`SessionConfig::from_yaml_str`] or
/// [`SessionConfig::from_toml_str`]; both return a normalized config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Tmux session name.
    #[serde(default = "default_session")]
    pub session: String,
    /// Base directory for window paths. May start with `~`.
    #[serde(default = "default_root")]
    pub root: String,
    /// Layout for windows that do not name one.
    #[serde(default = "default_layout")]
    pub default_layout: String,
    /// Named layouts, always including the built-ins after normalization.
    #[serde(default)]
    pub layouts: BTreeMap<String, LayoutConfig>,
    /// Windows in creation order.
    #[serde(default)]
    pub windows: Vec<WindowConfig>,
    /// File this config was loaded from.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session: default_session(),
            root: default_root(),
            default_layout: default_layout(),
            layouts: BTreeMap::new(),
            windows: Vec::new(),
            config_path: None,
        }
        .normalized()
    }
}

impl SessionConfig {
    /// Parse config from a YAML string.
    ///
    /// An empty document yields the default config.
    ///
    /// # Errors
    ///
    /// Returns `serde_yaml::Error` if the YAML is malformed or doesn't match
    /// the expected structure.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SessionConfig = serde_yaml::from_str(yaml)?;
        Ok(config.normalized())
    }

    /// Parse config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `toml::de::Error` if the TOML is malformed or doesn't match
    /// the expected structure.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: SessionConfig = toml::from_str(toml_str)?;
        Ok(config.normalized())
    }

    /// Fill in the built-in layouts that the config does not define itself.
    pub fn normalized(mut self) -> Self {
        for name in BUILTIN_LAYOUTS {
            if !self.layouts.contains_key(name) {
                if let Some(layout) = builtin_layout(name) {
                    self.layouts.insert(name.to_string(), layout);
                }
            }
        }
        self
    }

    /// Layout name a window resolves to.
    pub fn layout_name<'a>(&'a self, window: &'a WindowConfig) -> &'a str {
        window.layout.as_deref().unwrap_or(&self.default_layout)
    }

    /// List all layout names, sorted alphabetically.
    pub fn list_layouts(&self) -> Vec<&str> {
        self.layouts.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let config = SessionConfig::from_yaml_str("").unwrap();
        assert_eq!(config.session, "pane");
        assert_eq!(config.root, "~/");
        assert_eq!(config.default_layout, "dev");
        assert!(config.windows.is_empty());
        assert_eq!(config.list_layouts(), vec!["aiCoding", "dev", "single"]);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
session: work
root: ~/src
defaultLayout: single
layouts:
  editor:
    template: SplitVertical
    shell: fish
    panes:
      left: nvim .
      right: "{command}"
    commands:
      left: hx .
windows:
  - path: api
    layout: editor
  - command: htop
    label: top
"#;
        let config = SessionConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.session, "work");
        assert_eq!(config.default_layout, "single");
        assert_eq!(config.windows.len(), 2);
        assert_eq!(config.windows[0].path.as_deref(), Some("api"));
        assert_eq!(config.windows[1].label.as_deref(), Some("top"));

        let editor = &config.layouts["editor"];
        assert_eq!(editor.shell.as_deref(), Some("fish"));
        assert_eq!(editor.command_for("left"), Some("hx ."));
        assert_eq!(editor.command_for("right"), Some("{command}"));
        assert_eq!(editor.command_for("middle"), None);

        assert_eq!(config.layout_name(&config.windows[0]), "editor");
        assert_eq!(config.layout_name(&config.windows[1]), "single");
    }

    #[test]
    fn test_user_layout_overrides_builtin() {
        let yaml = r#"
layouts:
  dev:
    template: Quad
"#;
        let config = SessionConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.layouts["dev"].template, "Quad");
        assert_eq!(config.layouts["single"].template, "Single");
        assert_eq!(config.layouts["aiCoding"].template, "SplitVertical");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
session = "demo"
defaultLayout = "aiCoding"

[[windows]]
path = "proj"
"#;
        let config = SessionConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.session, "demo");
        assert_eq!(config.root, "~/");
        assert_eq!(config.default_layout, "aiCoding");
        assert_eq!(config.windows[0].path.as_deref(), Some("proj"));
        assert!(config.layouts.contains_key("dev"));
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(SessionConfig::from_yaml_str("windows: [").is_err());
        assert!(SessionConfig::from_yaml_str("windows: 3").is_err());
    }

    #[test]
    fn test_builtin_layouts() {
        let dev = builtin_layout("dev").unwrap();
        assert_eq!(dev.template, "TopSplitBottom");
        assert_eq!(dev.command_for("top"), Some("nvim ."));
        assert_eq!(builtin_layout("single").unwrap().command_for("main"), Some(""));
        assert_eq!(
            builtin_layout("aiCoding").unwrap().command_for("right"),
            Some("claude code")
        );
        assert!(builtin_layout("nope").is_none());
    }
}
