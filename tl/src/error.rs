//! Command error types

use thiserror::Error;

use crate::domain::TaskId;

/// Errors reported to the user for a single command
///
/// All variants are recoverable: the dispatcher shows the message and waits
/// for the next line with the store untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Invalid input. {usage}")]
    Arity { usage: &'static str },

    #[error("Invalid ID format. ID should be a number.")]
    InvalidIdFormat { token: String },

    #[error("Todo with this ID doesn't exist.")]
    TaskNotFound { id: TaskId },

    #[error("Oops, something went wrong. Try again or write 'info' for more information.")]
    UnknownCommand { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_message_includes_usage() {
        let err = TodoError::Arity {
            usage: "Command format for add: a;title;priority",
        };

        let msg = err.to_string();
        assert_eq!(msg, "Invalid input. Command format for add: a;title;priority");
    }

    #[test]
    fn test_id_format_message() {
        let err = TodoError::InvalidIdFormat {
            token: "abc".to_string(),
        };
        assert!(err.to_string().contains("should be a number"));
    }

    #[test]
    fn test_unknown_command_points_to_info() {
        let err = TodoError::UnknownCommand { name: "x".to_string() };
        assert!(err.to_string().contains("'info'"));
    }
}
