// src/config/model.rs

use serde::{Deserialize, Serialize};

/// A scheduling request as read from JSON or TOML.
///
/// JSON uses the same shape as the schedule endpoint:
///
/// ```json
/// {
///   "tasks": [
///     { "title": "A", "estimatedHours": 2, "dueDate": "2025-01-01" },
///     { "title": "B", "dueDate": "2025-01-02", "dependencies": ["A"] }
///   ]
/// }
/// ```
///
/// TOML files use an array of tables and may spell keys in snake_case:
///
/// ```toml
/// [[tasks]]
/// title = "A"
/// estimated_hours = 2
/// due_date = "2025-01-01"
///
/// [[tasks]]
/// title = "B"
/// due_date = "2025-01-02"
/// after = ["A"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default)]
    pub tasks: Vec<TaskEntry>,
}

/// One entry of [`ScheduleRequest::tasks`], before defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEntry {
    pub title: String,

    /// Defaults to 0 when absent.
    #[serde(default, alias = "estimated_hours")]
    pub estimated_hours: u32,

    /// RFC 3339 timestamp or plain `YYYY-MM-DD` date.
    ///
    /// If `None`, the caller's "now" is used (see
    /// [`ScheduleRequest::into_descriptors`](crate::config::ScheduleRequest::into_descriptors)).
    #[serde(default, alias = "due_date", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Titles of tasks that must come first. `after` is accepted as well.
    #[serde(default, alias = "after")]
    pub dependencies: Vec<String>,
}

impl TaskEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            estimated_hours: 0,
            due_date: None,
            dependencies: Vec::new(),
        }
    }
}
