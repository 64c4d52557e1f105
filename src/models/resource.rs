//! Resource model.
//!
//! Resources are the processing units tasks are mapped onto: virtual
//! machines, cluster nodes, grid hosts. Each resource has a fixed
//! speed; heterogeneity in speed is what makes the placement choice
//! matter.

use serde::{Deserialize, Serialize};

/// A processing resource tasks can be mapped onto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: String,
    /// Processing speed (work units per time unit). Must be positive.
    pub speed: f64,
}

impl Resource {
    /// Creates a unit-speed resource with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            speed: 1.0,
        }
    }

    /// Sets the processing speed.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Creates a resource with the given ID and speed.
    pub fn rated(id: impl Into<String>, speed: f64) -> Self {
        Self {
            id: id.into(),
            speed,
        }
    }
}
