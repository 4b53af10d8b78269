//! CLI argument parsing for todolist

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// TodoList - interactive semicolon-command task list
#[derive(Parser, Debug)]
#[command(
    name = "tl",
    author,
    version,
    about = "Interactive semicolon-command task list",
    after_help = "Type 'info' at the prompt for the command reference.\nLogs are written to: ~/.local/share/todolist/logs/todolist.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Never clear the terminal between commands
    #[arg(long)]
    pub no_clear: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply_overrides(&self, config: &mut Config) {
        if self.no_clear {
            config.display.clear_screen = false;
        }
        if self.no_color {
            config.display.color = false;
        }
    }
}
