//! In-memory task store

use tracing::{debug, info};

use crate::domain::{Task, TaskId};
use crate::error::TodoError;

/// Ordered task collection plus the id counter
///
/// Insertion order is display order. The counter only ever grows, so an id
/// is never handed out twice, not even after `remove_all`.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    last_id: TaskId,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding one initial task (id 1)
    pub fn seeded(description: impl Into<String>, priority: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.add(description, priority);
        store
    }

    /// Append a new open task and return it
    pub fn add(&mut self, description: impl Into<String>, priority: impl Into<String>) -> &Task {
        self.last_id += 1;
        let task = Task::new(self.last_id, description, priority);
        info!(id = task.id, description = %task.description, priority = %task.priority, "Added task");
        let index = self.tasks.len();
        self.tasks.push(task);
        &self.tasks[index]
    }

    /// Mark a task done; marking an already done task is a no-op
    pub fn mark_done(&mut self, id: TaskId) -> Result<(), TodoError> {
        let task = self.find_mut(id)?;
        task.mark_done();
        info!(id, "Marked task done");
        Ok(())
    }

    /// Overwrite the priority of a task
    pub fn set_priority(&mut self, id: TaskId, priority: impl Into<String>) -> Result<(), TodoError> {
        let task = self.find_mut(id)?;
        task.priority = priority.into();
        info!(id, priority = %task.priority, "Changed task priority");
        Ok(())
    }

    /// Remove a task, keeping the order of the rest
    pub fn remove(&mut self, id: TaskId) -> Result<(), TodoError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TodoError::TaskNotFound { id })?;
        self.tasks.remove(index);
        info!(id, "Removed task");
        Ok(())
    }

    /// Drop every task; the id counter is left alone
    pub fn remove_all(&mut self) {
        let count = self.tasks.len();
        self.tasks.clear();
        info!(count, "Removed all tasks");
    }

    /// Current tasks in display order
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Highest id issued so far (0 if none)
    pub fn last_id(&self) -> TaskId {
        self.last_id
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn find_mut(&mut self, id: TaskId) -> Result<&mut Task, TodoError> {
        let found = self.tasks.iter_mut().find(|t| t.id == id);
        if found.is_none() {
            debug!(id, "Task lookup missed");
        }
        found.ok_or(TodoError::TaskNotFound { id })
    }
}
