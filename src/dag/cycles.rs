// src/dag/cycles.rs

//! Cycle diagnostics for a [`DependencyGraph`].

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

use crate::dag::graph::DependencyGraph;
use crate::dag::task_info::TaskName;

impl DependencyGraph<'_> {
    /// Dependency cycles of the graph, one entry per strongly connected
    /// component that contains a cycle (including a task that lists itself).
    ///
    /// Titles within a cycle are sorted, and cycles are sorted by their first
    /// title, so the result does not depend on input order. Empty for a DAG.
    pub fn find_cycles(&self) -> Vec<Vec<TaskName>> {
        // Edge direction: dep -> task, same as the scheduler walks it.
        let mut graph: DiGraphMap<usize, ()> = DiGraphMap::new();

        for idx in 0..self.len() {
            graph.add_node(idx);
        }

        for idx in 0..self.len() {
            for &dep in self.dependency_indices(idx) {
                graph.add_edge(dep, idx, ());
            }
        }

        let mut cycles: Vec<Vec<TaskName>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
            .map(|scc| {
                let mut titles: Vec<TaskName> =
                    scc.into_iter().map(|idx| self.title_at(idx)).collect();
                titles.sort();
                titles
            })
            .collect();

        cycles.sort();
        cycles
    }
}
