//! Task model.
//!
//! A task is a unit of work with an inclusive calendar deadline and a
//! scalar amount of work-hours still required. It carries no internal
//! structure — dependencies, sub-operations, and variable effort are
//! out of scope.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A task that must be completed by a due date.
///
/// `hours_remaining` is decremented in place each time the scheduler
/// commits a slot to this task. The final slot is never clipped, so the
/// value may end up slightly negative — a quantization artifact of the
/// fixed slot size, accepted by design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Task name, unique within a registry for one scheduling run.
    pub name: String,
    /// Inclusive deadline: the task may still be worked on this date.
    pub due_date: NaiveDate,
    /// Non-negative work-hours still required.
    pub hours_remaining: f64,
}

impl Task {
    /// Creates a new task.
    ///
    /// Field validation happens at the registry boundary
    /// ([`TaskRegistry::add`](crate::models::TaskRegistry::add)) and in
    /// [`validation::validate_input`](crate::validation::validate_input),
    /// not here.
    pub fn new(name: impl Into<String>, due_date: NaiveDate, hours: f64) -> Self {
        Self {
            name: name.into(),
            due_date,
            hours_remaining: hours,
        }
    }

    /// Whether all required work has been committed.
    ///
    /// True at exactly zero or below (the overshoot case).
    pub fn is_complete(&self) -> bool {
        self.hours_remaining <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_task_new() {
        let task = Task::new("code", date(2020, 6, 15), 6.0);
        assert_eq!(task.name, "code");
        assert_eq!(task.due_date, date(2020, 6, 15));
        assert_eq!(task.hours_remaining, 6.0);
        assert!(!task.is_complete());
    }

    #[test]
    fn test_task_complete_at_zero_and_below() {
        let mut task = Task::new("eat", date(2020, 6, 16), 1.0);
        task.hours_remaining = 0.0;
        assert!(task.is_complete());
        task.hours_remaining = -0.5; // overshot final slot
        assert!(task.is_complete());
    }

    #[test]
    fn test_task_serde_round_trip() {
        let task = Task::new("sleep", date(2020, 6, 16), 8.0);
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(task, back);
    }
}
