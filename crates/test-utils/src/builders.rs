#![allow(dead_code)]

use duedag::config::{ScheduleRequest, TaskEntry};
use duedag::dag::TaskDescriptor;

use crate::date;

/// Builder for `TaskDescriptor` to simplify test setup.
///
/// Defaults: due `2025-01-01`, 0 hours, no dependencies.
pub struct TaskBuilder {
    task: TaskDescriptor,
}

impl TaskBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            task: TaskDescriptor::new(title, date("2025-01-01"), 0),
        }
    }

    pub fn due(mut self, due: &str) -> Self {
        self.task.due_date = date(due);
        self
    }

    pub fn hours(mut self, hours: u32) -> Self {
        self.task.estimated_hours = hours;
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.dependencies.push(dep.to_string());
        self
    }

    pub fn build(self) -> TaskDescriptor {
        self.task
    }
}

/// Builder for `ScheduleRequest` (the wire shape, before defaults).
pub struct RequestBuilder {
    request: ScheduleRequest,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            request: ScheduleRequest::default(),
        }
    }

    pub fn with_task(mut self, entry: TaskEntry) -> Self {
        self.request.tasks.push(entry);
        self
    }

    pub fn build(self) -> ScheduleRequest {
        self.request
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskEntry`.
pub struct TaskEntryBuilder {
    entry: TaskEntry,
}

impl TaskEntryBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            entry: TaskEntry::new(title),
        }
    }

    pub fn due(mut self, due: &str) -> Self {
        self.entry.due_date = Some(due.to_string());
        self
    }

    pub fn hours(mut self, hours: u32) -> Self {
        self.entry.estimated_hours = hours;
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.entry.dependencies.push(dep.to_string());
        self
    }

    pub fn build(self) -> TaskEntry {
        self.entry
    }
}
