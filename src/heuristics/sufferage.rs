//! Sufferage mapping heuristic.

use super::{completion_time, MapResult, MappingHeuristic};
use crate::models::{Mapping, Resource, Task};
use crate::validation::validate_input;

/// Sufferage: prioritize tasks that lose the most if denied their
/// best resource.
///
/// Every round tracks, per remaining task, its two smallest completion
/// times against the current load vector. The gap between them (second
/// minus best) is the task's sufferage; the largest sufferage wins the
/// round and takes its best resource. Tasks whose options are nearly
/// interchangeable wait, tasks with one standout resource go first.
///
/// A time strictly below the current best shifts best to second and
/// becomes the new best; a time strictly below the current second (but
/// not below best) replaces second. With a single resource no second
/// time exists and every sufferage is zero, so input order decides.
#[derive(Debug, Clone, Copy)]
pub struct Sufferage;

impl MappingHeuristic for Sufferage {
    fn name(&self) -> &'static str {
        "SUFFERAGE"
    }

    fn run(&self, tasks: &[Task], resources: &[Resource]) -> MapResult {
        validate_input(tasks, resources)?;

        let mut mapping = Mapping::new(resources.len());
        let mut remaining: Vec<&Task> = tasks.iter().collect();

        while !remaining.is_empty() {
            // (index into remaining, the task's best resource, sufferage)
            let mut selected: Option<(usize, usize, f64)> = None;

            for (t_idx, task) in remaining.iter().enumerate() {
                let mut best_r = 0;
                let mut best =
                    completion_time(task, &resources[0], mapping.loads.committed(0));
                let mut second: Option<f64> = None;

                for (r_idx, resource) in resources.iter().enumerate().skip(1) {
                    let finish =
                        completion_time(task, resource, mapping.loads.committed(r_idx));
                    if finish < best {
                        second = Some(best);
                        best = finish;
                        best_r = r_idx;
                    } else if second.map_or(true, |s| finish < s) {
                        second = Some(finish);
                    }
                }

                let sufferage = second.map_or(0.0, |s| s - best);
                if selected.map_or(true, |(_, _, largest)| sufferage > largest) {
                    selected = Some((t_idx, best_r, sufferage));
                }
            }

            let Some((t_idx, r_idx, _)) = selected else { break };
            let task = remaining.remove(t_idx);
            mapping.commit(task, &resources[r_idx], r_idx);
        }

        Ok(mapping)
    }

    fn description(&self) -> &'static str {
        "Largest gap between two best completion times first"
    }
}
