//! Error types for pane.
//!
//! All errors in pane are represented by [`PaneError`], which covers
//! configuration loading, layout resolution, and tmux failures.

use std::path::PathBuf;
use thiserror::Error;

/// All possible errors that can occur in pane.
#[derive(Error, Debug)]
pub enum PaneError {
    /// Config file does not exist at any of the searched locations.
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Could not determine the user's home directory.
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// Failed to read a file from disk.
    #[error("Failed to read config: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing failed.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// TOML parsing failed.
    #[error("Failed to parse config: {0}")]
    TomlError(#[from] toml::de::Error),

    /// A window names a layout that is neither configured nor built in.
    #[error("Layout not found: {0}")]
    LayoutNotFound(String),

    /// A layout names a template outside the fixed template set.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// A tmux command failed to execute.
    #[error("Tmux error: {0}")]
    TmuxError(String),
}

/// Convenient Result type alias for pane operations.
pub type Result<T> = std::result::Result<T, PaneError>;
