//! Batch input validation for task lists.
//!
//! Checks structural integrity of a task list before a registry is
//! built. Detects:
//! - Duplicate task names
//! - Non-positive work-hours
//!
//! [`TaskRegistry::add`](crate::models::TaskRegistry::add) applies the
//! same rules incrementally and fails on the first offender; this module
//! is for callers assembling whole task lists who want every problem
//! reported at once.

use crate::models::Task;
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
    /// Two tasks share the same name.
    DuplicateName,
    /// A task requires zero or negative hours.
    NonPositiveHours,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a task list before scheduling.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_input(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for task in tasks {
        if !names.insert(task.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate task name: {}", task.name),
            ));
        }

        if task.hours_remaining <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveHours,
                format!(
                    "Task '{}' requires non-positive hours: {}",
                    task.name, task.hours_remaining
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
