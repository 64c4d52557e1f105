//! Round-robin mapping heuristics.
//!
//! [`Fifo`] walks the task list in input order; [`ShortestFirst`] walks
//! a stable length-sorted copy. Both cycle through the resource list by
//! position, blind to length differences between resources and to the
//! accumulated load.

use super::{MapResult, MappingHeuristic};
use crate::models::{Mapping, Resource, Task};
use crate::validation::validate_input;

/// First-in-first-out round-robin.
///
/// Task `i` (input order) lands on resource `i mod R`. Neither task
/// length nor committed load enters the decision; the load vector is
/// still recorded so the mapping carries the same invariants as the
/// load-aware heuristics.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl MappingHeuristic for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn run(&self, tasks: &[Task], resources: &[Resource]) -> MapResult {
        validate_input(tasks, resources)?;

        let mut mapping = Mapping::new(resources.len());
        for (i, task) in tasks.iter().enumerate() {
            let slot = i % resources.len();
            mapping.commit(task, &resources[slot], slot);
        }
        Ok(mapping)
    }

    fn description(&self) -> &'static str {
        "First-in-first-out round-robin"
    }
}

/// Shortest-job-first round-robin.
///
/// Stable ascending sort by length, then the round-robin rule over the
/// sorted sequence. Equal lengths keep their input order.
#[derive(Debug, Clone, Copy)]
pub struct ShortestFirst;

impl MappingHeuristic for ShortestFirst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&self, tasks: &[Task], resources: &[Resource]) -> MapResult {
        validate_input(tasks, resources)?;

        let mut order: Vec<&Task> = tasks.iter().collect();
        order.sort_by(|a, b| {
            a.length
                .partial_cmp(&b.length)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut mapping = Mapping::new(resources.len());
        for (i, task) in order.iter().enumerate() {
            let slot = i % resources.len();
            mapping.commit(task, &resources[slot], slot);
        }
        Ok(mapping)
    }

    fn description(&self) -> &'static str {
        "Shortest-job-first round-robin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_tasks() -> Vec<Task> {
        vec![
            Task::sized("t0", 4.0),
            Task::sized("t1", 2.0),
            Task::sized("t2", 6.0),
        ]
    }

    fn scenario_resources() -> Vec<Resource> {
        vec![Resource::rated("r0", 1.0), Resource::rated("r1", 2.0)]
    }

    #[test]
    fn test_fifo_round_robin_placement() {
        let tasks = scenario_tasks();
        let mapping = Fifo.run(&tasks, &scenario_resources()).unwrap();

        assert_eq!(mapping.resource_for("t0"), Some("r0"));
        assert_eq!(mapping.resource_for("t1"), Some("r1"));
        assert_eq!(mapping.resource_for("t2"), Some("r0"));
    }

    #[test]
    fn test_fifo_index_mod_rule() {
        let tasks: Vec<Task> = (0..7).map(|i| Task::sized(format!("t{i}"), 1.0)).collect();
        let resources: Vec<Resource> = (0..3)
            .map(|i| Resource::rated(format!("r{i}"), 1.0))
            .collect();

        let mapping = Fifo.run(&tasks, &resources).unwrap();
        for (i, task) in tasks.iter().enumerate() {
            let expected = format!("r{}", i % 3);
            assert_eq!(mapping.resource_for(&task.id), Some(expected.as_str()));
        }
    }

    #[test]
    fn test_fifo_records_load() {
        let mapping = Fifo
            .run(&scenario_tasks(), &scenario_resources())
            .unwrap();
        // r0: 4/1 + 6/1 = 10, r1: 2/2 = 1
        assert!((mapping.loads.committed(0) - 10.0).abs() < 1e-10);
        assert!((mapping.loads.committed(1) - 1.0).abs() < 1e-10);
        assert!((mapping.makespan() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_shortest_first_sorted_placement() {
        // Sorted order: t1(2), t0(4), t2(6)
        let mapping = ShortestFirst
            .run(&scenario_tasks(), &scenario_resources())
            .unwrap();

        assert_eq!(mapping.resource_for("t1"), Some("r0"));
        assert_eq!(mapping.resource_for("t0"), Some("r1"));
        assert_eq!(mapping.resource_for("t2"), Some("r0"));
        // r0: 2/1 + 6/1 = 8, r1: 4/2 = 2
        assert!((mapping.makespan() - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_shortest_first_equals_fifo_on_sorted_input() {
        let tasks = vec![
            Task::sized("a", 1.0),
            Task::sized("b", 2.0),
            Task::sized("c", 3.0),
        ];
        let resources = scenario_resources();
        let sjf = ShortestFirst.run(&tasks, &resources).unwrap();
        let fifo = Fifo.run(&tasks, &resources).unwrap();
        assert_eq!(sjf, fifo);
    }

    #[test]
    fn test_shortest_first_stable_on_ties() {
        let tasks = vec![
            Task::sized("first", 3.0),
            Task::sized("second", 3.0),
            Task::sized("third", 3.0),
        ];
        let resources = scenario_resources();
        let mapping = ShortestFirst.run(&tasks, &resources).unwrap();

        // Ties keep input order, so placement matches plain round-robin.
        assert_eq!(mapping.resource_for("first"), Some("r0"));
        assert_eq!(mapping.resource_for("second"), Some("r1"));
        assert_eq!(mapping.resource_for("third"), Some("r0"));
    }

    #[test]
    fn test_single_resource_takes_everything() {
        let tasks = scenario_tasks();
        let resources = vec![Resource::rated("only", 2.0)];
        let mapping = Fifo.run(&tasks, &resources).unwrap();
        assert_eq!(mapping.assignments_for_resource("only").len(), 3);
        // (4 + 2 + 6) / 2 = 6
        assert!((mapping.makespan() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_tasks() {
        let mapping = Fifo.run(&[], &scenario_resources()).unwrap();
        assert_eq!(mapping.assignment_count(), 0);
        assert_eq!(mapping.loads.as_slice(), &[0.0, 0.0]);
    }

    #[test]
    fn test_empty_resources_rejected() {
        assert!(Fifo.run(&scenario_tasks(), &[]).is_err());
        assert!(ShortestFirst.run(&scenario_tasks(), &[]).is_err());
    }
}
