use crate::dag::graph::DependencyGraph;
use crate::dag::ready::ReadySet;
use crate::dag::task_info::{TaskDescriptor, TaskName};
use crate::errors::SchedulingError;

/// Orders a set of tasks so that every task comes after its prerequisites,
/// picking earliest-due-date-first among the tasks that are ready.
///
/// The scheduler holds no state: every call builds its own graph and ready
/// set, and drops them on return. It is a plain value that can be shared
/// freely across threads.
///
/// Algorithm (Kahn's topological sort with a priority frontier):
/// - seed the ready set with tasks that have no prerequisites
/// - repeatedly emit the ready task with the earliest due date, then the
///   fewest estimated hours, then the smallest title
/// - release dependents whose prerequisites are now all emitted
/// - if tasks remain once the ready set is exhausted, the graph has a cycle
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyScheduler;

impl DependencyScheduler {
    pub fn new() -> Self {
        Self
    }

    /// Validate `tasks` and compute their execution order.
    ///
    /// Fails without a partial result on empty input, duplicate titles,
    /// unknown dependencies or cycles.
    pub fn schedule(&self, tasks: &[TaskDescriptor]) -> Result<Vec<TaskName>, SchedulingError> {
        let graph = DependencyGraph::build(tasks)?;
        self.schedule_graph(&graph)
    }

    /// Compute the execution order of an already validated graph.
    pub fn schedule_graph(
        &self,
        graph: &DependencyGraph<'_>,
    ) -> Result<Vec<TaskName>, SchedulingError> {
        let mut in_degree = graph.in_degrees();
        let mut ready = ReadySet::with_capacity(graph.len());

        for (idx, &degree) in in_degree.iter().enumerate() {
            if degree == 0 {
                ready.push(idx, graph.task(idx));
            }
        }

        let mut order = Vec::with_capacity(graph.len());

        while let Some(idx) = ready.pop() {
            order.push(graph.title_at(idx));

            for &dependent in graph.dependent_indices(idx) {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    ready.push(dependent, graph.task(dependent));
                }
            }
        }

        if order.len() == graph.len() {
            return Ok(order);
        }

        // Anything never emitted still waits on a prerequisite.
        let unresolved = in_degree
            .iter()
            .enumerate()
            .filter(|&(_, &degree)| degree > 0)
            .map(|(idx, _)| graph.title_at(idx))
            .collect();

        Err(SchedulingError::CyclicDependency {
            cycles: graph.find_cycles(),
            unresolved,
        })
    }
}

/// Shorthand for [`DependencyScheduler::schedule`].
pub fn schedule(tasks: &[TaskDescriptor]) -> Result<Vec<TaskName>, SchedulingError> {
    DependencyScheduler::new().schedule(tasks)
}
