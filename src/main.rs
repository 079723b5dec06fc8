//! Pane CLI entry point.
//!
//! This binary provides the `pane` command for building tmux sessions from
//! YAML configuration.

use clap::Parser;
use pane::cli::Cli;
use pane::command::{GenerateOptions, generate_commands};
use pane::error::Result;
use pane::{loader, logging, preview, runner};
use tracing::info;

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = loader::load_named_config(cli.config.as_deref())?;

    if cli.print_session {
        println!("{}", config.session);
        return Ok(());
    }

    if cli.attach {
        info!("Attempting direct attachment");
        println!("\nAttaching to tmux session '{}'...", config.session);
        return runner::attach(&config.session);
    }

    let commands = generate_commands(&config, &GenerateOptions::from_env())?;

    if cli.preview {
        preview::preview(&config, commands, cli.no_attach)?;
        return Ok(());
    }

    let options = cli.run_options();
    info!(auto_attach = options.auto_attach, "Auto-attach enabled");
    runner::run(&config, &commands, &options)
}
