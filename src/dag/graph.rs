// src/dag/graph.rs

use std::collections::{HashMap, HashSet};

use crate::dag::task_info::{TaskDescriptor, TaskName};
use crate::errors::SchedulingError;

/// Internal node structure: stores immediate deps and dependents.
#[derive(Debug, Clone)]
struct DagNode<'a> {
    task: &'a TaskDescriptor,
    /// Distinct prerequisites, as indices into `DependencyGraph::nodes`.
    deps: Vec<usize>,
    /// Tasks that list this one as a prerequisite.
    dependents: Vec<usize>,
}

/// Dependency graph of one scheduling request.
///
/// Borrows the request's descriptors; nodes keep the input order so that
/// diagnostics read the same way the request was written. Edges point from
/// prerequisite to dependent.
#[derive(Debug, Clone)]
pub struct DependencyGraph<'a> {
    nodes: Vec<DagNode<'a>>,
    index: HashMap<&'a str, usize>,
}

impl<'a> DependencyGraph<'a> {
    /// Validate a request and build its adjacency structure.
    ///
    /// Checks, in this order:
    /// - the request is not empty
    /// - titles are unique
    /// - every dependency names a task of the request
    ///
    /// The first offending reference is reported, walking tasks and their
    /// dependencies in input order. Cycles are *not* detected here; that is
    /// the scheduler's job.
    pub fn build(tasks: &'a [TaskDescriptor]) -> Result<Self, SchedulingError> {
        if tasks.is_empty() {
            return Err(SchedulingError::EmptyInput);
        }

        let mut index: HashMap<&'a str, usize> = HashMap::with_capacity(tasks.len());
        for (i, task) in tasks.iter().enumerate() {
            if index.insert(task.title.as_str(), i).is_some() {
                return Err(SchedulingError::DuplicateTitle {
                    title: task.title.clone(),
                });
            }
        }

        let mut nodes: Vec<DagNode<'a>> = tasks
            .iter()
            .map(|task| DagNode {
                task,
                deps: Vec::new(),
                dependents: Vec::new(),
            })
            .collect();

        for (i, task) in tasks.iter().enumerate() {
            let mut seen = HashSet::new();
            for dep in task.dependencies.iter() {
                let Some(&dep_idx) = index.get(dep.as_str()) else {
                    return Err(SchedulingError::UnknownDependency {
                        task: task.title.clone(),
                        dependency: dep.clone(),
                    });
                };
                // Repeating a dependency must not count twice towards in-degree.
                if seen.insert(dep_idx) {
                    nodes[i].deps.push(dep_idx);
                    nodes[dep_idx].dependents.push(i);
                }
            }
        }

        Ok(Self { nodes, index })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All task titles, in input order.
    pub fn titles(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.nodes.iter().map(|n| n.task.title.as_str())
    }

    pub fn contains(&self, title: &str) -> bool {
        self.index.contains_key(title)
    }

    /// Immediate prerequisites of a task (deduplicated).
    pub fn dependencies_of(&self, title: &str) -> Vec<&'a str> {
        self.index
            .get(title)
            .map(|&i| self.titles_at(&self.nodes[i].deps))
            .unwrap_or_default()
    }

    /// Immediate dependents of a task (tasks that list this one as a prerequisite).
    pub fn dependents_of(&self, title: &str) -> Vec<&'a str> {
        self.index
            .get(title)
            .map(|&i| self.titles_at(&self.nodes[i].dependents))
            .unwrap_or_default()
    }

    /// Tasks without prerequisites, in input order.
    pub fn roots(&self) -> Vec<&'a str> {
        self.nodes
            .iter()
            .filter(|n| n.deps.is_empty())
            .map(|n| n.task.title.as_str())
            .collect()
    }

    /// Number of distinct prerequisites per node, indexed like the input.
    pub(crate) fn in_degrees(&self) -> Vec<usize> {
        self.nodes.iter().map(|n| n.deps.len()).collect()
    }

    pub(crate) fn task(&self, idx: usize) -> &'a TaskDescriptor {
        self.nodes[idx].task
    }

    pub(crate) fn dependent_indices(&self, idx: usize) -> &[usize] {
        &self.nodes[idx].dependents
    }

    pub(crate) fn dependency_indices(&self, idx: usize) -> &[usize] {
        &self.nodes[idx].deps
    }

    pub(crate) fn title_at(&self, idx: usize) -> TaskName {
        self.nodes[idx].task.title.clone()
    }

    fn titles_at(&self, indices: &[usize]) -> Vec<&'a str> {
        indices
            .iter()
            .map(|&i| self.nodes[i].task.title.as_str())
            .collect()
    }
}
