use std::collections::{HashMap, HashSet};

use chrono::Duration;
use duedag::dag::{TaskDescriptor, compare_priority, schedule};
use duedag::errors::SchedulingError;
use duedag_test_utils::date;
use proptest::prelude::*;

// Strategy to generate a valid DAG of tasks.
// We ensure acyclicity by only allowing task N to depend on tasks 0..N-1.
fn dag_tasks_strategy(max_tasks: usize) -> impl Strategy<Value = Vec<TaskDescriptor>> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        let task_strat = (
            0..20i64,                                                  // due date offset (days)
            0..6u32,                                                   // estimated hours
            proptest::collection::vec(any::<usize>(), 0..num_tasks), // potential deps
        );

        proptest::collection::vec(task_strat, num_tasks).prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (offset, hours, potential_deps))| {
                    // Sanitize dependencies: only allow deps < i
                    let mut deps = Vec::new();
                    if i > 0 {
                        for dep_idx in potential_deps {
                            deps.push(format!("task_{}", dep_idx % i));
                        }
                    }
                    TaskDescriptor {
                        title: format!("task_{}", i),
                        due_date: date("2025-01-01") + Duration::days(offset),
                        estimated_hours: hours,
                        dependencies: deps,
                    }
                })
                .collect()
        })
    })
}

fn positions(order: &[String]) -> HashMap<&str, usize> {
    order
        .iter()
        .enumerate()
        .map(|(i, t)| (t.as_str(), i))
        .collect()
}

proptest! {
    #[test]
    fn order_respects_every_dependency(tasks in dag_tasks_strategy(12)) {
        let order = schedule(&tasks).unwrap();
        let pos = positions(&order);

        for task in &tasks {
            for dep in &task.dependencies {
                prop_assert!(
                    pos[dep.as_str()] < pos[task.title.as_str()],
                    "{} scheduled before its dependency {}", task.title, dep
                );
            }
        }
    }

    #[test]
    fn order_is_a_permutation_of_the_input(tasks in dag_tasks_strategy(12)) {
        let order = schedule(&tasks).unwrap();

        let mut expected: Vec<String> = tasks.iter().map(|t| t.title.clone()).collect();
        let mut actual = order.clone();
        expected.sort();
        actual.sort();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn order_does_not_depend_on_input_order(
        (tasks, shuffled) in dag_tasks_strategy(10)
            .prop_flat_map(|tasks| (Just(tasks.clone()), Just(tasks).prop_shuffle()))
    ) {
        prop_assert_eq!(schedule(&tasks).unwrap(), schedule(&shuffled).unwrap());
    }

    #[test]
    fn each_pick_is_the_best_ready_task(tasks in dag_tasks_strategy(10)) {
        let order = schedule(&tasks).unwrap();
        let by_title: HashMap<&str, &TaskDescriptor> =
            tasks.iter().map(|t| (t.title.as_str(), t)).collect();

        let mut placed: HashSet<&str> = HashSet::new();
        for title in &order {
            let picked = by_title[title.as_str()];
            let ready = tasks.iter().filter(|t| {
                !placed.contains(t.title.as_str())
                    && t.dependencies.iter().all(|d| placed.contains(d.as_str()))
            });
            for candidate in ready {
                prop_assert!(
                    compare_priority(picked, candidate).is_le(),
                    "{} picked while {} was ready and preferred", picked.title, candidate.title
                );
            }
            placed.insert(title.as_str());
        }
    }

    #[test]
    fn back_edge_is_always_detected(
        tasks in dag_tasks_strategy(8).prop_filter("need two tasks", |t| t.len() >= 2),
        a in any::<usize>(),
        b in any::<usize>(),
    ) {
        let mut tasks = tasks;
        let n = tasks.len();
        let first = a % n;
        let mut second = b % n;
        if second == first {
            second = (first + 1) % n;
        }

        let first_title = tasks[first].title.clone();
        let second_title = tasks[second].title.clone();
        tasks[first].dependencies.push(second_title.clone());
        tasks[second].dependencies.push(first_title.clone());

        match schedule(&tasks) {
            Err(SchedulingError::CyclicDependency { cycles, unresolved }) => {
                prop_assert!(cycles.iter().any(|c| c.contains(&first_title) && c.contains(&second_title)));
                prop_assert!(unresolved.contains(&first_title));
                prop_assert!(unresolved.contains(&second_title));
            }
            other => {
                prop_assert!(false, "expected CyclicDependency, got {:?}", other);
            }
        }
    }
}
