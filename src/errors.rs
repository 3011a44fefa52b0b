// src/errors.rs

//! Crate-wide error types.
//!
//! [`SchedulingError`] is what the pure scheduling core returns. Everything
//! around it (loading files, parsing dates, the CLI) reports through
//! [`DuedagError`].

use thiserror::Error;

use crate::dag::TaskName;

/// Coarse category of a [`SchedulingError`].
///
/// Useful for callers that only need to branch on the kind of failure
/// (e.g. to pick a status code) without inspecting the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulingErrorKind {
    EmptyInput,
    DuplicateTitle,
    UnknownDependency,
    CyclicDependency,
}

/// Why a set of tasks could not be ordered.
///
/// Every variant rejects the whole request: there is never a partial order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("no tasks provided")]
    EmptyInput,

    #[error("duplicate task title '{title}'")]
    DuplicateTitle { title: TaskName },

    #[error("task '{task}' has unknown dependency '{dependency}'")]
    UnknownDependency { task: TaskName, dependency: TaskName },

    /// `cycles` holds each strongly connected component that forms a cycle,
    /// `unresolved` every task that could not be placed (cycle members plus
    /// anything downstream of them).
    #[error("cyclic dependency detected: {}", describe_cycles(.cycles))]
    CyclicDependency {
        cycles: Vec<Vec<TaskName>>,
        unresolved: Vec<TaskName>,
    },
}

impl SchedulingError {
    pub fn kind(&self) -> SchedulingErrorKind {
        match self {
            SchedulingError::EmptyInput => SchedulingErrorKind::EmptyInput,
            SchedulingError::DuplicateTitle { .. } => SchedulingErrorKind::DuplicateTitle,
            SchedulingError::UnknownDependency { .. } => SchedulingErrorKind::UnknownDependency,
            SchedulingError::CyclicDependency { .. } => SchedulingErrorKind::CyclicDependency,
        }
    }
}

fn describe_cycles(cycles: &[Vec<TaskName>]) -> String {
    if cycles.is_empty() {
        return "no cycle members identified".to_string();
    }
    cycles
        .iter()
        .map(|cycle| format!("[{}]", cycle.join(", ")))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug)]
pub enum DuedagError {
    #[error(transparent)]
    Scheduling(#[from] SchedulingError),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Invalid due date '{value}' for task '{task}': {reason}")]
    InvalidDueDate {
        task: TaskName,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, DuedagError>;
