// src/dag/mod.rs

//! Dependency graph and scheduling.
//!
//! - [`task_info`] defines the task descriptors a request is made of.
//! - [`graph`] validates a request and holds its adjacency structure.
//! - [`cycles`] reports the cycles of an infeasible graph.
//! - [`ready`] is the priority-ordered frontier of schedulable tasks.
//! - [`scheduler`] runs the ordering itself.

pub mod cycles;
pub mod graph;
pub mod ready;
pub mod scheduler;
pub mod task_info;

pub use graph::DependencyGraph;
pub use ready::compare_priority;
pub use scheduler::{DependencyScheduler, schedule};
pub use task_info::{TaskDescriptor, TaskName};
