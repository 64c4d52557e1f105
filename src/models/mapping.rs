//! Mapping (solution) model.
//!
//! A mapping is a complete assignment of tasks to resources together
//! with the cumulative execution time committed to each resource. One
//! heuristic run produces one mapping; runs never share load state.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{Resource, Task};

/// Per-resource cumulative committed execution time.
///
/// Slots are positionally aligned with the resource list of the run
/// that produced the vector. Entries start at zero and only grow while
/// a heuristic runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadVector(Vec<f64>);

impl LoadVector {
    /// Creates an all-zero vector with one slot per resource.
    pub fn zeroed(resource_count: usize) -> Self {
        Self(vec![0.0; resource_count])
    }

    /// Committed time on the resource at `idx`.
    #[inline]
    pub fn committed(&self, idx: usize) -> f64 {
        self.0[idx]
    }

    /// Adds `exec_time` to the resource at `idx`.
    pub fn commit(&mut self, idx: usize, exec_time: f64) {
        self.0[idx] += exec_time;
    }

    /// Largest committed load across all resources (the makespan).
    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(0.0, f64::max)
    }

    /// All committed loads in resource-list order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector has no slots.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys each slot by its resource ID.
    ///
    /// `resources` must be the list the vector was created for.
    pub fn by_resource_id(&self, resources: &[Resource]) -> HashMap<String, f64> {
        resources
            .iter()
            .zip(self.0.iter())
            .map(|(r, &load)| (r.id.clone(), load))
            .collect()
    }
}

/// A single task-to-resource assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned task ID.
    pub task_id: String,
    /// Target resource ID.
    pub resource_id: String,
    /// Execution time of the task on the target: `length / speed`.
    pub exec_time: f64,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(
        task_id: impl Into<String>,
        resource_id: impl Into<String>,
        exec_time: f64,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            resource_id: resource_id.into(),
            exec_time,
        }
    }
}

/// A complete mapping (solution to a batch assignment problem).
///
/// Contains the task→resource pairs in commit order and the final
/// per-resource load vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    /// Assignments in the order the heuristic committed them.
    pub assignments: Vec<Assignment>,
    /// Cumulative load per resource.
    pub loads: LoadVector,
}

impl Mapping {
    /// Creates an empty mapping over `resource_count` resources.
    pub fn new(resource_count: usize) -> Self {
        Self {
            assignments: Vec::new(),
            loads: LoadVector::zeroed(resource_count),
        }
    }

    /// Commits `task` to the resource at `resource_idx`.
    ///
    /// Records the assignment and adds `length / speed` to that
    /// resource's load, keeping the load vector equal to the sum of
    /// committed execution times.
    pub fn commit(&mut self, task: &Task, resource: &Resource, resource_idx: usize) {
        let exec_time = task.length / resource.speed;
        self.loads.commit(resource_idx, exec_time);
        self.assignments
            .push(Assignment::new(&task.id, &resource.id, exec_time));
    }

    /// Resource a task was mapped to, if any.
    pub fn resource_for(&self, task_id: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.task_id == task_id)
            .map(|a| a.resource_id.as_str())
    }

    /// All assignments committed to a given resource.
    pub fn assignments_for_resource(&self, resource_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.resource_id == resource_id)
            .collect()
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Makespan: largest committed load across all resources.
    pub fn makespan(&self) -> f64 {
        self.loads.max()
    }

    /// Whether every input task appears in exactly one assignment.
    pub fn is_complete(&self, tasks: &[Task]) -> bool {
        if self.assignments.len() != tasks.len() {
            return false;
        }
        let mapped: HashSet<&str> = self
            .assignments
            .iter()
            .map(|a| a.task_id.as_str())
            .collect();
        mapped.len() == tasks.len() && tasks.iter().all(|t| mapped.contains(t.id.as_str()))
    }
}
