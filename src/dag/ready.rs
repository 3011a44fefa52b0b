// src/dag/ready.rs

//! The "ready" frontier of the scheduler: tasks whose prerequisites are all
//! placed, kept in priority order.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use chrono::{DateTime, Utc};

use crate::dag::task_info::TaskDescriptor;

/// Priority key of a ready task. Field order is the comparison order:
/// earliest due date, then fewest hours, then title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ReadyTask<'a> {
    due_date: DateTime<Utc>,
    estimated_hours: u32,
    title: &'a str,
    index: usize,
}

impl<'a> ReadyTask<'a> {
    fn new(index: usize, task: &'a TaskDescriptor) -> Self {
        Self {
            due_date: task.due_date,
            estimated_hours: task.estimated_hours,
            title: task.title.as_str(),
            index,
        }
    }
}

/// Ordering used to pick the next task among those that are ready.
///
/// `Ordering::Less` means `a` runs first.
pub fn compare_priority(a: &TaskDescriptor, b: &TaskDescriptor) -> Ordering {
    a.due_date
        .cmp(&b.due_date)
        .then_with(|| a.estimated_hours.cmp(&b.estimated_hours))
        .then_with(|| a.title.cmp(&b.title))
}

/// Min-heap over [`ReadyTask`] keys.
#[derive(Debug, Default)]
pub(crate) struct ReadySet<'a> {
    heap: BinaryHeap<Reverse<ReadyTask<'a>>>,
}

impl<'a> ReadySet<'a> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, index: usize, task: &'a TaskDescriptor) {
        self.heap.push(Reverse(ReadyTask::new(index, task)));
    }

    /// Remove the highest-priority task and return its node index.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse(ready)| ready.index)
    }
}
