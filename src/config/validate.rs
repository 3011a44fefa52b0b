// src/config/validate.rs

use chrono::{DateTime, Utc};

use crate::config::due_date::parse_due_date;
use crate::config::model::{ScheduleRequest, TaskEntry};
use crate::dag::TaskDescriptor;
use crate::errors::{DuedagError, Result, SchedulingError};

impl ScheduleRequest {
    /// Turn the request into scheduler input.
    ///
    /// This is the caller-side half of validation:
    /// - there is at least one task
    /// - every due date parses; missing ones become `default_due`
    ///
    /// Duplicate titles, unknown dependencies and cycles are left to the
    /// scheduler, which reports them as [`SchedulingError`]s.
    pub fn into_descriptors(self, default_due: DateTime<Utc>) -> Result<Vec<TaskDescriptor>> {
        ensure_has_tasks(&self)?;
        self.tasks
            .into_iter()
            .map(|entry| entry_to_descriptor(entry, default_due))
            .collect()
    }
}

fn ensure_has_tasks(request: &ScheduleRequest) -> Result<()> {
    if request.tasks.is_empty() {
        return Err(DuedagError::Scheduling(SchedulingError::EmptyInput));
    }
    Ok(())
}

fn entry_to_descriptor(entry: TaskEntry, default_due: DateTime<Utc>) -> Result<TaskDescriptor> {
    let due_date = match entry.due_date.as_deref() {
        Some(raw) => parse_due_date(raw).map_err(|reason| DuedagError::InvalidDueDate {
            task: entry.title.clone(),
            value: raw.to_string(),
            reason,
        })?,
        None => default_due,
    };

    Ok(TaskDescriptor {
        title: entry.title,
        due_date,
        estimated_hours: entry.estimated_hours,
        dependencies: entry.dependencies,
    })
}
