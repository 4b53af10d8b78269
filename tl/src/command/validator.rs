//! Arity and id checks, producing a [`Command`]

use tracing::debug;

use super::{Command, CommandKind};
use crate::domain::TaskId;
use crate::error::TodoError;

/// Turn parsed tokens into a command
///
/// The arity check runs first, then the id check for commands that take an
/// id. Nothing here touches the store.
pub fn validate(tokens: &[String]) -> Result<Command, TodoError> {
    let name = tokens.first().map(String::as_str).unwrap_or_default();
    let kind = CommandKind::from_name(name).ok_or_else(|| TodoError::UnknownCommand { name: name.to_string() })?;

    check_arity(kind, tokens)?;

    let command = match (kind, tokens) {
        (CommandKind::Add, [_, description, priority]) => Command::Add {
            description: description.clone(),
            priority: priority.clone(),
        },
        (CommandKind::Priority, [_, id, priority]) => Command::SetPriority {
            id: parse_id(id)?,
            priority: priority.clone(),
        },
        (CommandKind::Done, [_, id]) => Command::Done { id: parse_id(id)? },
        (CommandKind::Remove, [_, id]) => Command::Remove { id: parse_id(id)? },
        (CommandKind::RemoveAll, [_]) => Command::RemoveAll,
        (CommandKind::Info, [_]) => Command::Info,
        _ => return Err(TodoError::Arity { usage: kind.usage() }),
    };

    debug!(?command, "Validated command");
    Ok(command)
}

/// Fail unless `tokens` has exactly the count `kind` requires
pub fn check_arity(kind: CommandKind, tokens: &[String]) -> Result<(), TodoError> {
    if tokens.len() != kind.arity() {
        debug!(command = %kind, expected = kind.arity(), got = tokens.len(), "Arity mismatch");
        return Err(TodoError::Arity { usage: kind.usage() });
    }
    Ok(())
}

/// Parse an id token as a signed integer
pub fn parse_id(token: &str) -> Result<TaskId, TodoError> {
    token.parse::<TaskId>().map_err(|_| TodoError::InvalidIdFormat {
        token: token.to_string(),
    })
}
