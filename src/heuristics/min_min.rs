//! Min-Min mapping heuristic.

use super::{completion_time, MapResult, MappingHeuristic};
use crate::models::{Mapping, Resource, Task};
use crate::validation::validate_input;

/// Min-Min: commit the globally fastest-finishing pair each round.
///
/// Every round scans all (remaining task, resource) pairs against the
/// current load vector and commits the pair with the smallest
/// completion time, so short tasks fill in early and each placement is
/// the best available system-wide at that moment.
///
/// Scan order is task-outer, resource-inner; strict `<` keeps the
/// first minimum encountered, so input order breaks ties.
#[derive(Debug, Clone, Copy)]
pub struct MinMin;

impl MappingHeuristic for MinMin {
    fn name(&self) -> &'static str {
        "MIN-MIN"
    }

    fn run(&self, tasks: &[Task], resources: &[Resource]) -> MapResult {
        validate_input(tasks, resources)?;

        let mut mapping = Mapping::new(resources.len());
        let mut remaining: Vec<&Task> = tasks.iter().collect();

        while !remaining.is_empty() {
            // (index into remaining, resource index, completion time)
            let mut selected: Option<(usize, usize, f64)> = None;

            for (t_idx, task) in remaining.iter().enumerate() {
                for (r_idx, resource) in resources.iter().enumerate() {
                    let finish =
                        completion_time(task, resource, mapping.loads.committed(r_idx));
                    if selected.map_or(true, |(_, _, best)| finish < best) {
                        selected = Some((t_idx, r_idx, finish));
                    }
                }
            }

            let Some((t_idx, r_idx, _)) = selected else { break };
            let task = remaining.remove(t_idx);
            mapping.commit(task, &resources[r_idx], r_idx);
        }

        Ok(mapping)
    }

    fn description(&self) -> &'static str {
        "Minimum completion time pair first"
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
    fn test_min_min_scenario() {
        // Round 1: t1/r1 = 1 is the global minimum.
        // Round 2: t0/r1 = 2+1 = 3 beats t0/r0 = 4 and t2 everywhere.
        // Round 3: t2/r0 = 6 ties t2/r1 = 3+3 = 6; first encountered (r0) wins.
        let mapping = MinMin
            .run(&scenario_tasks(), &scenario_resources())
            .unwrap();

        assert_eq!(mapping.resource_for("t1"), Some("r1"));
        assert_eq!(mapping.resource_for("t0"), Some("r1"));
        assert_eq!(mapping.resource_for("t2"), Some("r0"));

        assert!((mapping.loads.committed(0) - 6.0).abs() < 1e-10);
        assert!((mapping.loads.committed(1) - 3.0).abs() < 1e-10);
        assert!((mapping.makespan() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_commit_order_is_shortest_first() {
        let mapping = MinMin
            .run(&scenario_tasks(), &scenario_resources())
            .unwrap();
        let order: Vec<&str> = mapping
            .assignments
            .iter()
            .map(|a| a.task_id.as_str())
            .collect();
        assert_eq!(order, ["t1", "t0", "t2"]);
    }

    #[test]
    fn test_first_round_picks_global_minimum() {
        let tasks = scenario_tasks();
        let resources = scenario_resources();
        let mapping = MinMin.run(&tasks, &resources).unwrap();

        // The first committed pair must not exceed any pair's initial
        // completion time on an empty load vector.
        let first = &mapping.assignments[0];
        for task in &tasks {
            for resource in &resources {
                let finish = completion_time(task, resource, 0.0);
                assert!(first.exec_time <= finish + 1e-10);
            }
        }
    }

    #[test]
    fn test_tie_prefers_first_resource() {
        let tasks = vec![Task::sized("t0", 2.0)];
        let resources = vec![Resource::rated("r0", 1.0), Resource::rated("r1", 1.0)];
        let mapping = MinMin.run(&tasks, &resources).unwrap();
        assert_eq!(mapping.resource_for("t0"), Some("r0"));
    }

    #[test]
    fn test_tie_prefers_first_task() {
        let tasks = vec![Task::sized("a", 3.0), Task::sized("b", 3.0)];
        let resources = vec![Resource::rated("r0", 1.0)];
        let mapping = MinMin.run(&tasks, &resources).unwrap();
        assert_eq!(mapping.assignments[0].task_id, "a");
        assert_eq!(mapping.assignments[1].task_id, "b");
    }

    #[test]
    fn test_empty_tasks() {
        let mapping = MinMin.run(&[], &scenario_resources()).unwrap();
        assert_eq!(mapping.assignment_count(), 0);
        assert_eq!(mapping.makespan(), 0.0);
    }

    #[test]
    fn test_empty_resources_rejected() {
        assert!(MinMin.run(&scenario_tasks(), &[]).is_err());
    }
}
