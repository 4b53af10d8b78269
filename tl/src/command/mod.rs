//! Command language
//!
//! One command per line, tokens separated by `;`, command name first:
//!
//! | Command | Syntax                      |
//! |---------|-----------------------------|
//! | add     | `a;<description>;<priority>`|
//! | done    | `d;<id>`                    |
//! | priority| `p;<id>;<priority>`         |
//! | remove  | `r;<id>`                    |
//! | all     | `ra`                        |
//! | help    | `info`                      |

mod parser;
mod validator;

pub use parser::parse;
pub use validator::{check_arity, parse_id, validate};

use crate::domain::TaskId;

/// A validated command, ready to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { description: String, priority: String },
    Done { id: TaskId },
    SetPriority { id: TaskId, priority: String },
    Remove { id: TaskId },
    RemoveAll,
    Info,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Add { .. } => CommandKind::Add,
            Self::Done { .. } => CommandKind::Done,
            Self::SetPriority { .. } => CommandKind::Priority,
            Self::Remove { .. } => CommandKind::Remove,
            Self::RemoveAll => CommandKind::RemoveAll,
            Self::Info => CommandKind::Info,
        }
    }
}

/// The fixed command vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Add,
    Done,
    Priority,
    Remove,
    RemoveAll,
    Info,
}

impl CommandKind {
    pub const ALL: [CommandKind; 6] = [
        Self::Add,
        Self::Done,
        Self::Priority,
        Self::Remove,
        Self::RemoveAll,
        Self::Info,
    ];

    /// Exact, case-sensitive lookup by command name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "a" => Some(Self::Add),
            "d" => Some(Self::Done),
            "p" => Some(Self::Priority),
            "r" => Some(Self::Remove),
            "ra" => Some(Self::RemoveAll),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "a",
            Self::Done => "d",
            Self::Priority => "p",
            Self::Remove => "r",
            Self::RemoveAll => "ra",
            Self::Info => "info",
        }
    }

    /// Required token count, command name included
    pub fn arity(self) -> usize {
        match self {
            Self::Add | Self::Priority => 3,
            Self::Done | Self::Remove => 2,
            Self::RemoveAll | Self::Info => 1,
        }
    }

    /// Whether the second token is a task id
    pub fn takes_id(self) -> bool {
        matches!(self, Self::Done | Self::Priority | Self::Remove)
    }

    /// Canonical usage shown on an arity mismatch
    pub fn usage(self) -> &'static str {
        match self {
            Self::Add => "Command format for add: a;title;priority",
            Self::Done => "Command format for done: d;id",
            Self::Priority => "Command format for changing priority: p;id;priority",
            Self::Remove => "Command format for remove: r;id",
            Self::RemoveAll => "Command format for deleting all tasks: ra",
            Self::Info => "Write 'info' for more information.",
        }
    }

    /// Short description for the help view
    pub fn operation(self) -> &'static str {
        match self {
            Self::Add => "adding new todo",
            Self::Done => "making your todo done",
            Self::Priority => "changing priority of your todo",
            Self::Remove => "removing todo",
            Self::RemoveAll => "removing all your todos",
            Self::Info => "showing this help",
        }
    }

    /// Syntax template for the help view
    pub fn format(self) -> &'static str {
        match self {
            Self::Add => "a;yourTodo;priority",
            Self::Done => "d;id",
            Self::Priority => "p;id;newPriority",
            Self::Remove => "r;id",
            Self::RemoveAll => "ra",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
