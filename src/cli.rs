//! Command-line interface for pane.
//!
//! Parses arguments using clap and provides the [`Cli`] struct containing
//! all user-specified options.

use crate::runner::RunOptions;
use clap::Parser;

/// Command-line arguments for pane.
///
/// # Examples
///
/// ```bash
/// # Build the default session and attach to it
/// pane
///
/// # Use ~/.config/pane/myproject.yaml
/// pane -c myproject
///
/// # Show the tmux commands without running them
/// pane -v -p
/// ```
#[derive(Parser, Debug, Default)]
#[command(name = "pane")]
#[command(version)]
#[command(about = "A tmux session manager for creating consistent development environments")]
#[command(long_about = "Pane builds a tmux session from a YAML config: one window per entry,\n\
    each split into panes by a named layout, with commands typed into each pane.\n\n\
    Configs are looked up as given, then in ~/.config/pane/. Without --config,\n\
    ~/.config/pane/default.yaml is used, falling back to a built-in default.")]
pub struct Cli {
    /// Show commands without executing them.
    #[arg(short, long)]
    pub preview: bool,

    /// Config name (e.g. `myproject`) or file (e.g. `path/to/config.yaml`).
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<String>,

    /// Show detailed information during execution.
    #[arg(short, long)]
    pub verbose: bool,

    /// Attach to the session directly, without creating anything.
    #[arg(short, long, conflicts_with = "no_attach")]
    pub attach: bool,

    /// Create the session but don't automatically attach to it.
    #[arg(long)]
    pub no_attach: bool,

    /// Print the session name from the config and exit.
    #[arg(long)]
    pub print_session: bool,
}

impl Cli {
    /// Execution options implied by the flags.
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            auto_attach: !self.no_attach,
        }
    }
}
