//! Config file discovery and loading.
//!
//! Configs live in `~/.config/pane/`. The search order for `pane -c <name>` is:
//!
//! 1. `<name>` as given (absolute, or relative to the current directory)
//! 2. `~/.config/pane/<name>`
//!
//! A bare name without `/` or `.` gets `.yaml` appended first, so
//! `pane -c work` finds `~/.config/pane/work.yaml`. Without `-c`,
//! `~/.config/pane/default.yaml` is used, falling back to the default config
//! built into the binary.

use crate::config::SessionConfig;
use crate::error::{PaneError, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default config shipped with pane.
pub const BUILTIN_CONFIG: &str = include_str!("../config/default.yaml");

/// File name of the default config inside the config directory.
pub const DEFAULT_CONFIG_FILE: &str = "default.yaml";

/// Where a config comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A file on disk.
    File(PathBuf),
    /// The config compiled into the binary.
    Builtin,
}

/// The pane config directory, `~/.config/pane`.
///
/// # Errors
///
/// Returns [`PaneError::NoConfigDir`] if the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".config").join("pane"))
        .ok_or(PaneError::NoConfigDir)
}

/// Append `.yaml` to bare config names.
fn with_extension(name: &str) -> String {
    if name.contains('/') || name.contains('.') {
        name.to_string()
    } else {
        format!("{}.yaml", name)
    }
}

/// Resolve a config name against an explicit config directory.
///
/// `None` selects `default.yaml` in `dir`, or the built-in config when that
/// file does not exist.
///
/// # Errors
///
/// Returns [`PaneError::ConfigNotFound`] with the name as given when a named
/// config exists in none of the searched locations.
pub fn resolve_config_in(name: Option<&str>, dir: Option<&Path>) -> Result<ConfigSource> {
    let Some(name) = name else {
        return Ok(dir
            .map(|d| d.join(DEFAULT_CONFIG_FILE))
            .filter(|p| p.exists())
            .map(ConfigSource::File)
            .unwrap_or(ConfigSource::Builtin));
    };

    let file = with_extension(name);
    let direct = PathBuf::from(&file);
    if direct.exists() {
        return Ok(ConfigSource::File(direct));
    }
    if let Some(dir) = dir {
        let in_dir = dir.join(&file);
        if in_dir.exists() {
            return Ok(ConfigSource::File(in_dir));
        }
    }

    Err(PaneError::ConfigNotFound(direct))
}

/// Resolve a config name using `~/.config/pane` as the config directory.
pub fn resolve_config(name: Option<&str>) -> Result<ConfigSource> {
    let dir = config_dir().ok();
    resolve_config_in(name, dir.as_deref())
}

/// Parse config text, choosing TOML for `.toml` files and YAML otherwise.
pub fn parse_config(contents: &str, path: &Path) -> Result<SessionConfig> {
    let is_toml = path.extension().is_some_and(|ext| ext == "toml");
    let config = if is_toml {
        SessionConfig::from_toml_str(contents)?
    } else {
        SessionConfig::from_yaml_str(contents)?
    };
    Ok(config)
}

/// Load and parse a config file from the given path.
///
/// # Errors
///
/// - [`PaneError::ConfigNotFound`] if the file doesn't exist
/// - [`PaneError::IoError`] if reading fails
/// - [`PaneError::ParseError`] or [`PaneError::TomlError`] if parsing fails
pub fn load_config(path: &Path) -> Result<SessionConfig> {
    if !path.exists() {
        return Err(PaneError::ConfigNotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path)?;
    let mut config = parse_config(&contents, path)?;
    config.config_path = Some(path.to_path_buf());
    Ok(config)
}

/// Load a config from a resolved source.
pub fn load_source(source: &ConfigSource) -> Result<SessionConfig> {
    let config = match source {
        ConfigSource::File(path) => {
            info!(path = %path.display(), "Loading configuration");
            load_config(path)?
        }
        ConfigSource::Builtin => {
            info!("Loading built-in configuration");
            SessionConfig::from_yaml_str(BUILTIN_CONFIG)?
        }
    };

    info!(session = %config.session, "Session name");
    info!(root = %config.root, "Root directory");
    info!(layout = %config.default_layout, "Default layout");
    info!(layouts = %config.list_layouts().join(", "), "Available layouts");
    info!(windows = config.windows.len(), "Windows");
    if config.windows.is_empty() {
        warn!("config defines no windows; no session will be created");
    }

    Ok(config)
}

/// Resolve and load a config by name (`None` for the default config).
///
/// Convenience wrapper that combines [`resolve_config`] and [`load_source`].
pub fn load_named_config(name: Option<&str>) -> Result<SessionConfig> {
    let source = resolve_config(name)?;
    load_source(&source)
}
