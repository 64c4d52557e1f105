//! Batch task-to-resource mapping under comparable greedy heuristics.
//!
//! An offline planner for a batch of independent tasks on a fixed pool of
//! heterogeneous resources. All task lengths and resource speeds are known
//! up front; five alternative heuristics each produce a complete mapping
//! from the same inputs, so their makespans can be compared side by side.
//! Nothing executes and nothing changes after assignment.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `Resource`, `Mapping`,
//!   `Assignment`, `LoadVector`
//! - **`heuristics`**: The five mapping heuristics and the shared
//!   completion-time model
//! - **`validation`**: Input integrity checks (empty pool, bad speeds,
//!   duplicate IDs)
//! - **`comparison`**: Per-heuristic KPIs and the makespan table
//! - **`workload`**: Seeded random task/resource set construction
//!
//! # Quick Start
//!
//! ```
//! use u_assign::heuristics::{MappingHeuristic, MinMin};
//! use u_assign::models::{Resource, Task};
//!
//! let tasks = vec![Task::sized("t0", 4.0), Task::sized("t1", 2.0)];
//! let resources = vec![Resource::rated("r0", 1.0), Resource::rated("r1", 2.0)];
//!
//! let mapping = MinMin.run(&tasks, &resources).unwrap();
//! assert_eq!(mapping.assignment_count(), 2);
//! ```
//!
//! # References
//!
//! - Ibarra & Kim (1977), "Heuristic Algorithms for Scheduling Independent
//!   Tasks on Nonidentical Processors"
//! - Maheswaran et al. (1999), "Dynamic Mapping of a Class of Independent
//!   Tasks onto Heterogeneous Computing Systems"
//! - Braun et al. (2001), "A Comparison of Eleven Static Heuristics for
//!   Mapping Independent Tasks onto Heterogeneous Distributed Computing
//!   Systems"

pub mod comparison;
pub mod heuristics;
pub mod models;
pub mod validation;
pub mod workload;
