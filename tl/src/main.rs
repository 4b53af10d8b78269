//! TodoList - interactive semicolon-command task list
//!
//! CLI entry point: loads config, then runs the dispatcher on stdin.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::info;

use todolist::cli::Cli;
use todolist::config::Config;
use todolist::{Dispatcher, ReadlineSource, TerminalPresenter};

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("todolist")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Write to log file, stdout belongs to the task table
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("todolist.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);

    if !config.display.color {
        colored::control::set_override(false);
    }

    info!(
        "TodoList loaded config: clear_screen={}, color={}",
        config.display.clear_screen, config.display.color
    );

    let presenter = TerminalPresenter::stdout(config.display.clone());
    let mut dispatcher = Dispatcher::new(config.initial_store(), presenter);
    let mut input = ReadlineSource::new(config.history_size)?;

    dispatcher.run(&mut input, &config.prompt)?;

    println!("{}", "Goodbye!".dimmed());
    Ok(())
}
