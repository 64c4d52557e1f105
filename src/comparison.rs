//! Mapping quality metrics and heuristic comparison.
//!
//! Computes standard indicators from a completed mapping and runs all
//! five heuristics over the same inputs to tabulate their makespans
//! side by side.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Largest committed load across resources |
//! | Total Work | Sum of committed execution times |
//! | Avg Utilization | Mean of per-resource load / makespan |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::HashMap;
use std::fmt;

use crate::heuristics::{
    Fifo, MapResult, MappingHeuristic, MaxMin, MinMin, ShortestFirst, Sufferage,
};
use crate::models::{Mapping, Resource, Task};

/// Mapping performance indicators.
#[derive(Debug, Clone)]
pub struct MappingKpi {
    /// Makespan: largest committed load across resources.
    pub makespan: f64,
    /// Sum of committed execution times over all assignments.
    pub total_work: f64,
    /// Per-resource load / makespan.
    pub utilization_by_resource: HashMap<String, f64>,
    /// Average resource utilization (0.0..1.0).
    pub avg_utilization: f64,
}

impl MappingKpi {
    /// Computes KPIs from a mapping and the resource list it was
    /// produced against.
    pub fn calculate(mapping: &Mapping, resources: &[Resource]) -> Self {
        let makespan = mapping.makespan();
        let total_work: f64 = mapping.loads.as_slice().iter().sum();

        let utilization_by_resource: HashMap<String, f64> = if makespan > 0.0 {
            resources
                .iter()
                .enumerate()
                .map(|(idx, r)| (r.id.clone(), mapping.loads.committed(idx) / makespan))
                .collect()
        } else {
            HashMap::new()
        };

        let avg_utilization = if utilization_by_resource.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_resource.values().sum();
            sum / utilization_by_resource.len() as f64
        };

        Self {
            makespan,
            total_work,
            utilization_by_resource,
            avg_utilization,
        }
    }
}

/// One heuristic's row in a comparison.
#[derive(Debug)]
pub struct ComparisonEntry {
    /// Heuristic name.
    pub heuristic: &'static str,
    /// The run outcome. A failed run keeps its row with the errors.
    pub outcome: MapResult,
}

/// Five-way heuristic comparison over one task/resource set.
///
/// Each heuristic runs independently on the same inputs; a validation
/// failure in one run never suppresses the others' rows.
///
/// # Example
///
/// ```
/// use u_assign::comparison::Comparison;
/// use u_assign::models::{Resource, Task};
///
/// let tasks = vec![Task::sized("t0", 4.0), Task::sized("t1", 2.0)];
/// let resources = vec![Resource::rated("r0", 1.0), Resource::rated("r1", 2.0)];
///
/// let comparison = Comparison::run(&tasks, &resources);
/// let (name, makespan) = comparison.best().unwrap();
/// assert!(makespan <= 3.0 + 1e-10);
/// println!("{name} wins:\n{comparison}");
/// ```
#[derive(Debug)]
pub struct Comparison {
    entries: Vec<ComparisonEntry>,
    resources: Vec<Resource>,
}

impl Comparison {
    /// Runs every heuristic independently over the same inputs.
    pub fn run(tasks: &[Task], resources: &[Resource]) -> Self {
        let heuristics: [&dyn MappingHeuristic; 5] =
            [&Fifo, &ShortestFirst, &MinMin, &MaxMin, &Sufferage];

        let entries = heuristics
            .iter()
            .map(|h| ComparisonEntry {
                heuristic: h.name(),
                outcome: h.run(tasks, resources),
            })
            .collect();

        Self {
            entries,
            resources: resources.to_vec(),
        }
    }

    /// All rows, in run order.
    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    /// KPIs for a heuristic by name, if its run succeeded.
    pub fn kpi_for(&self, heuristic: &str) -> Option<MappingKpi> {
        self.entries
            .iter()
            .find(|e| e.heuristic == heuristic)
            .and_then(|e| e.outcome.as_ref().ok())
            .map(|m| MappingKpi::calculate(m, &self.resources))
    }

    /// Heuristic with the smallest makespan among successful runs.
    pub fn best(&self) -> Option<(&'static str, f64)> {
        self.entries
            .iter()
            .filter_map(|e| {
                e.outcome
                    .as_ref()
                    .ok()
                    .map(|m| (e.heuristic, m.makespan()))
            })
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<12} {:>10} {:>10}", "Heuristic", "Makespan", "Avg Util")?;
        for entry in &self.entries {
            match &entry.outcome {
                Ok(mapping) => {
                    let kpi = MappingKpi::calculate(mapping, &self.resources);
                    writeln!(
                        f,
                        "{:<12} {:>10.3} {:>10.3}",
                        entry.heuristic, kpi.makespan, kpi.avg_utilization
                    )?;
                }
                Err(errors) => {
                    writeln!(
                        f,
                        "{:<12} {:>10} {:>10}  ({} validation errors)",
                        entry.heuristic,
                        "-",
                        "-",
                        errors.len()
                    )?;
                }
            }
        }
        Ok(())
    }
}
