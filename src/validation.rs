//! Input validation for mapping runs.
//!
//! Checks structural integrity of the task and resource lists before
//! any heuristic touches a load vector. Detects:
//! - Empty resource pool
//! - Non-positive resource speeds
//! - Negative task lengths
//! - Duplicate IDs
//!
//! All heuristics run the same checks, so a malformed input fails
//! identically no matter which heuristic sees it first.

use crate::models::{Resource, Task};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The resource list is empty; no completion time can be computed.
    NoResources,
    /// A resource has speed ≤ 0.
    NonPositiveSpeed,
    /// A task has a negative length.
    NegativeLength,
    /// Two entities share the same ID.
    DuplicateId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a mapping run.
///
/// Checks:
/// 1. The resource list is not empty
/// 2. Every resource speed is positive
/// 3. No task length is negative
/// 4. No duplicate task or resource IDs
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
/// An empty task list is valid; an empty resource list never is.
pub fn validate_input(tasks: &[Task], resources: &[Resource]) -> ValidationResult {
    let mut errors = Vec::new();

    if resources.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoResources,
            "Resource list is empty",
        ));
    }

    let mut resource_ids = HashSet::new();
    for r in resources {
        if !resource_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate resource ID: {}", r.id),
            ));
        }
        if r.speed <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveSpeed,
                format!("Resource '{}' has non-positive speed {}", r.id, r.speed),
            ));
        }
    }

    let mut task_ids = HashSet::new();
    for t in tasks {
        if !task_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", t.id),
            ));
        }
        if t.length < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeLength,
                format!("Task '{}' has negative length {}", t.id, t.length),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
