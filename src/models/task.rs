//! Task model.
//!
//! A task is an indivisible unit of work with a fixed length, to be
//! mapped onto exactly one resource. Tasks are independent: no
//! precedence, no deadlines, no preemption.
//!
//! # Reference
//! Braun et al. (2001), "A Comparison of Eleven Static Heuristics for
//! Mapping Independent Tasks onto Heterogeneous Distributed Computing
//! Systems", §2

use serde::{Deserialize, Serialize};

/// An independent task to be mapped.
///
/// Length is measured in abstract work units (e.g. instruction count)
/// and stays fixed for the duration of a planning run. The resulting
/// placement lives in the returned [`Mapping`](super::Mapping), not on
/// the task itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Amount of work (work units). Never negative.
    pub length: f64,
}

impl Task {
    /// Creates a zero-length task with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            length: 0.0,
        }
    }

    /// Sets the task length.
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    /// Creates a task with the given ID and length.
    pub fn sized(id: impl Into<String>, length: f64) -> Self {
        Self {
            id: id.into(),
            length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new("t1").with_length(4.0);
        assert_eq!(task.id, "t1");
        assert!((task.length - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_task_sized() {
        let task = Task::sized("t2", 6.0);
        assert_eq!(task, Task::new("t2").with_length(6.0));
    }

    #[test]
    fn test_task_default_length() {
        let task = Task::new("empty");
        assert_eq!(task.length, 0.0);
    }
}
