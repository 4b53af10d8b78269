//! Task record

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store, starting at 1
///
/// Signed so that any integer typed by the user is a well-formed id, even
/// one that can never match (zero or negative).
pub type TaskId = i64;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Free-form label, fixed at creation
    pub description: String,
    /// Free-form label, changed by the priority command
    pub priority: String,
    pub done: bool,
}

impl Task {
    /// Create a new open task
    pub fn new(id: TaskId, description: impl Into<String>, priority: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            priority: priority.into(),
            done: false,
        }
    }

    /// Mark the task as done; there is no way back
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}
