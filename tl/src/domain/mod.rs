//! Domain types for the task list

mod task;

pub use task::{Task, TaskId};
