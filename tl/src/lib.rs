//! TodoList - interactive semicolon-command task list
//!
//! A line-oriented task manager: every input line is a short command such as
//! `a;Buy milk;low` or `d;2`, and the task table is redrawn after each one.
//!
//! # Architecture
//!
//! ```text
//! LineSource -> parser -> validator -> Dispatcher -> TaskStore
//!                                          |
//!                                          v
//!                                      Presenter
//! ```
//!
//! # Modules
//!
//! - [`domain`] - Task record and id type
//! - [`store`] - Ordered task collection with the id counter
//! - [`command`] - Tokenizer, validator and the [`Command`] variant
//! - [`dispatcher`] - Request/response loop tying everything together
//! - [`input`] - Line sources (rustyline, scripted)
//! - [`view`] - Terminal presentation
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```
//! use todolist::{Command, TaskStore, command};
//!
//! let mut store = TaskStore::new();
//! let tokens = command::parse("a;Buy milk;low\n");
//! if let Ok(Command::Add { description, priority }) = command::validate(&tokens) {
//!     store.add(description, priority);
//! }
//! assert_eq!(store.list()[0].description, "Buy milk");
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod dispatcher;
pub mod domain;
pub mod error;
pub mod input;
pub mod store;
pub mod view;

pub use command::{Command, CommandKind};
pub use config::{Config, DisplayConfig, SeedConfig};
pub use dispatcher::{Dispatcher, Outcome};
pub use domain::{Task, TaskId};
pub use error::TodoError;
pub use input::{LineSource, ReadlineSource, ScriptedSource};
pub use store::TaskStore;
pub use view::{Presenter, TerminalPresenter};

/// Command delimiter within an input line
pub const DELIMITER: char = ';';

/// Default interactive prompt
pub const DEFAULT_PROMPT: &str = "Enter command: ";
