// src/dag/task_info.rs

//! Task descriptors as seen by the scheduler.

use chrono::{DateTime, Utc};

/// Name of a task; unique within one scheduling request.
pub type TaskName = String;

/// One task of a scheduling request.
///
/// Immutable for the duration of a scheduling call. `dependencies` lists the
/// titles of tasks that must come before this one; their order does not
/// matter and repeating a title has no extra effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDescriptor {
    pub title: TaskName,
    pub due_date: DateTime<Utc>,
    pub estimated_hours: u32,
    pub dependencies: Vec<TaskName>,
}

impl TaskDescriptor {
    pub fn new(title: impl Into<TaskName>, due_date: DateTime<Utc>, estimated_hours: u32) -> Self {
        Self {
            title: title.into(),
            due_date,
            estimated_hours,
            dependencies: Vec::new(),
        }
    }

    /// Add a prerequisite (builder style).
    pub fn after(mut self, dependency: impl Into<TaskName>) -> Self {
        self.dependencies.push(dependency.into());
        self
    }
}
