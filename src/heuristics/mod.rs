//! Greedy mapping heuristics.
//!
//! Five alternative strategies over the same task and resource lists:
//!
//! - **Round-robin**: [`Fifo`] (input order), [`ShortestFirst`]
//!   (stable length-sorted order)
//! - **Load-aware**: [`MinMin`], [`MaxMin`], [`Sufferage`]
//!
//! Every heuristic validates its inputs identically, owns a private
//! load vector for the run, and returns a complete [`Mapping`]. Ties
//! are broken by strict comparison during left-to-right scans, so the
//! input order of tasks and resources is part of the contract.
//!
//! # Usage
//!
//! ```
//! use u_assign::heuristics::{MappingHeuristic, Sufferage};
//! use u_assign::models::{Resource, Task};
//!
//! let tasks = vec![Task::sized("t0", 4.0), Task::sized("t1", 2.0)];
//! let resources = vec![Resource::rated("r0", 1.0), Resource::rated("r1", 2.0)];
//!
//! let mapping = Sufferage.run(&tasks, &resources).unwrap();
//! assert!(mapping.is_complete(&tasks));
//! ```
//!
//! # References
//!
//! - Maheswaran et al. (1999), "Dynamic Mapping of a Class of
//!   Independent Tasks onto Heterogeneous Computing Systems"
//! - Braun et al. (2001), "A Comparison of Eleven Static Heuristics for
//!   Mapping Independent Tasks onto Heterogeneous Distributed Computing
//!   Systems"

mod max_min;
mod min_min;
mod round_robin;
mod sufferage;

pub use max_min::MaxMin;
pub use min_min::MinMin;
pub use round_robin::{Fifo, ShortestFirst};
pub use sufferage::Sufferage;

use crate::models::{Mapping, Resource, Task};
use crate::validation::ValidationError;
use std::fmt::Debug;

/// Result of a single heuristic run.
///
/// On success the mapping is complete: every input task assigned
/// exactly once. On validation failure no partial mapping exists.
pub type MapResult = Result<Mapping, Vec<ValidationError>>;

/// A greedy mapping heuristic.
///
/// Implementations are stateless: each `run` validates its inputs,
/// owns its load vector, and returns an independent mapping, so
/// separate runs never observe one another and may be driven in
/// parallel by the caller.
pub trait MappingHeuristic: Send + Sync + Debug {
    /// Heuristic name (e.g. "FIFO", "MIN-MIN").
    fn name(&self) -> &'static str;

    /// Maps every task onto exactly one resource.
    fn run(&self, tasks: &[Task], resources: &[Resource]) -> MapResult;

    /// Heuristic description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Completion time of `task` on `resource`, given the execution time
/// already committed to that resource.
///
/// Pure: `length / speed + committed`. Validation guarantees a
/// positive speed before any heuristic calls this.
#[inline]
pub fn completion_time(task: &Task, resource: &Resource, committed: f64) -> f64 {
    task.length / resource.speed + committed
}
