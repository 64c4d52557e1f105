//! Max-Min mapping heuristic.

use super::{completion_time, MapResult, MappingHeuristic};
use crate::models::{Mapping, Resource, Task};
use crate::validation::validate_input;

/// Max-Min: among per-task best placements, commit the slowest first.
///
/// Every round finds each remaining task's own best resource (smallest
/// completion time against the current load vector), then commits the
/// task whose best is largest. Long tasks land early on their
/// preferred resource instead of straggling at the end.
///
/// Ties at both levels keep the first candidate encountered in input
/// order (strict `<` for the inner minimum, strict `>` for the outer
/// maximum).
#[derive(Debug, Clone, Copy)]
pub struct MaxMin;

impl MappingHeuristic for MaxMin {
    fn name(&self) -> &'static str {
        "MAX-MIN"
    }

    fn run(&self, tasks: &[Task], resources: &[Resource]) -> MapResult {
        validate_input(tasks, resources)?;

        let mut mapping = Mapping::new(resources.len());
        let mut remaining: Vec<&Task> = tasks.iter().collect();

        while !remaining.is_empty() {
            // (index into remaining, the task's best resource, its minimum
            // completion time)
            let mut selected: Option<(usize, usize, f64)> = None;

            for (t_idx, task) in remaining.iter().enumerate() {
                let mut best_r = 0;
                let mut best_finish =
                    completion_time(task, &resources[0], mapping.loads.committed(0));
                for (r_idx, resource) in resources.iter().enumerate().skip(1) {
                    let finish =
                        completion_time(task, resource, mapping.loads.committed(r_idx));
                    if finish < best_finish {
                        best_finish = finish;
                        best_r = r_idx;
                    }
                }

                if selected.map_or(true, |(_, _, largest)| best_finish > largest) {
                    selected = Some((t_idx, best_r, best_finish));
                }
            }

            let Some((t_idx, r_idx, _)) = selected else { break };
            let task = remaining.remove(t_idx);
            mapping.commit(task, &resources[r_idx], r_idx);
        }

        Ok(mapping)
    }

    fn description(&self) -> &'static str {
        "Largest minimum completion time first"
    }
}
