//! # Pane
//!
//! A tmux session manager that builds reproducible multi-pane workspaces from
//! YAML configuration.
//!
//! Pane compiles a session description (windows, working directories, pane
//! layouts, commands) into an ordered list of tmux commands, then runs them.
//!
//! ## Features
//!
//! - **Layouts**: Named pane arrangements built on four templates
//!   (`Single`, `SplitVertical`, `TopSplitBottom`, `Quad`)
//! - **Windows**: Path-based windows start in `root/path`; command-only
//!   windows fill a layout's `{command}` placeholder
//! - **Idempotent**: An already running session is reused, not rebuilt
//! - **Preview**: Print every tmux command without running anything
//!
//! ## Quick Example
//!
//! ```yaml
//! # ~/.config/pane/default.yaml
//! session: work
//! root: ~/src
//! windows:
//!   - path: api
//!   - path: web
//!     layout: aiCoding
//! ```
//!
//! ```
//! use pane::command::{generate_commands, GenerateOptions};
//! use pane::config::SessionConfig;
//!
//! let yaml = "session: demo\nwindows:\n  - path: proj\n    layout: single\n";
//! let config = SessionConfig::from_yaml_str(yaml).unwrap();
//! let options = GenerateOptions { home: Some("/home/me".into()), shell: "zsh".into() };
//! let commands = generate_commands(&config, &options).unwrap();
//! assert_eq!(commands[0], r#"tmux has-session -t "demo" 2>/dev/null"#);
//! assert_eq!(commands.last().unwrap(), r#"tmux attach-session -t "demo""#);
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into these modules:
//!
//! - [`config`]: YAML/TOML configuration parsing and data structures
//! - [`cli`]: Command-line argument parsing with clap
//! - [`loader`]: Config file discovery and loading
//! - [`logging`]: Tracing subscriber setup
//! - [`tmux`]: Tmux command string rendering
//! - [`template`]: Pane arrangement templates and pane address allocation
//! - [`layout`]: Layout resolution and application
//! - [`command`]: Session command generation
//! - [`interpolate`]: `{command}` placeholder and `~` expansion
//! - [`runner`]: Command execution and attaching
//! - [`preview`]: Dry-run output
//! - [`terminal`]: Interactive terminal detection
//! - [`error`]: Error types

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod interpolate;
pub mod layout;
pub mod loader;
pub mod logging;
pub mod preview;
pub mod runner;
pub mod template;
pub mod terminal;
pub mod tmux;

pub use config::{LayoutConfig, SessionConfig, WindowConfig};
pub use error::{PaneError, Result};
pub use template::{PaneAddress, Template};
