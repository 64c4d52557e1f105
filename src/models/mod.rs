//! Mapping domain models.
//!
//! Provides the core data types for representing batch assignment
//! problems and their solutions. Domain-agnostic within offline
//! mapping: applicable to cloud brokering, cluster batch queues, and
//! grid meta-scheduling.
//!
//! # Domain Mappings
//!
//! | u-assign | Cloud | Cluster | Grid |
//! |----------|-------|---------|------|
//! | Task | Cloudlet | Job | Work Unit |
//! | Resource | VM | Node | Host |
//! | Mapping | Placement | Allocation | Schedule |

mod mapping;
mod resource;
mod task;

pub use mapping::{Assignment, LoadVector, Mapping};
pub use resource::Resource;
pub use task::Task;
