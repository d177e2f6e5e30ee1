//! Triage engine: feasibility and priority scoring.
//!
//! Converts "how much time is left before a task is due" and "how much
//! time the task still needs" into a feasibility flag and a priority
//! score, per task at one instant, and aggregates that across the whole
//! registry while pruning tasks that can no longer make their deadline.
//!
//! # Scoring
//!
//! ```text
//! hours_available = ((due_date - current_date).days + 1) * day_length - current_hour
//! feasible        = hours_needed > 0 AND hours_needed <= hours_available
//! priority        = hours_needed / hours_available    (when feasible, else 0)
//! ```
//!
//! Priority is a slack-consumption ratio: a task needing exactly the
//! remaining capacity scores 1.0 (most urgent); abundant slack scores
//! near 0. This is the reciprocal view of the classic Critical Ratio
//! dispatching rule, with higher = more urgent.
//!
//! # Feasibility boundary
//!
//! The boundary is inclusive: a task needing exactly its remaining
//! capacity is feasible (priority 1.0). A strict `<` policy would drop
//! such tasks; this crate applies `<=` everywhere.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::models::{Task, TaskRegistry};

/// The evaluation context for one triage pass.
///
/// A point in simulated time: a calendar day, the working-hour capacity
/// of a day, and how many of today's hours are already spent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriageInstant {
    /// The simulated calendar day being scheduled.
    pub current_date: NaiveDate,
    /// Working-hour capacity per calendar day.
    pub day_length: f64,
    /// Hours already consumed today.
    pub current_hour: f64,
}

impl TriageInstant {
    /// Creates an instant at the start of a day.
    pub fn at_day_start(current_date: NaiveDate, day_length: f64) -> Self {
        Self {
            current_date,
            day_length,
            current_hour: 0.0,
        }
    }

    /// Sets the hours already consumed today.
    pub fn with_current_hour(mut self, current_hour: f64) -> Self {
        self.current_hour = current_hour;
        self
    }

    /// Capacity remaining before an inclusive deadline, from this instant.
    ///
    /// Counts whole days from `current_date` through `due_date` at
    /// `day_length` hours each, minus the hours already spent today.
    /// Negative or zero once the deadline has passed.
    pub fn hours_until(&self, due_date: NaiveDate) -> f64 {
        let days = (due_date - self.current_date).num_days() + 1;
        days as f64 * self.day_length - self.current_hour
    }
}

/// Per-task triage outcome at one instant.
///
/// Ephemeral and derived — recomputed from scratch at every slot, never
/// persisted, and holds no reference to the task it describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageReport {
    /// Name of the assessed task.
    pub name: String,
    /// Work-hours the task still requires.
    pub hours_needed: f64,
    /// Capacity remaining before the task's deadline.
    pub hours_available: f64,
    /// Whether the task can still be completed in time.
    pub feasible: bool,
    /// Slack-consumption ratio; 0 when infeasible.
    pub priority: f64,
}

/// Aggregate triage over the whole registry at one instant.
///
/// Holds the feasible reports only, plus diagnostic totals. Owned by one
/// scheduler iteration and snapshotted into the [`Event`] it produces.
///
/// [`Event`]: crate::models::Event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriageSummary {
    /// Reports for tasks that remain feasible, in registry order.
    pub reports: Vec<TriageReport>,
    /// Sum of `hours_needed` over the feasible set. Diagnostic only.
    pub total_hours_needed: f64,
    /// Sum of `hours_available` over the feasible set. Diagnostic only.
    pub total_hours_available: f64,
}

impl TriageSummary {
    /// The most urgent feasible report.
    ///
    /// Maximum priority; ties go to the first encounter in registry
    /// order, so selection is deterministic for a fixed registry.
    /// `None` when no task is feasible — the normal termination signal
    /// for a day's loop, not a fault.
    pub fn top_priority(&self) -> Option<&TriageReport> {
        let mut best: Option<&TriageReport> = None;
        for report in &self.reports {
            match best {
                Some(b) if report.priority <= b.priority => {}
                _ => best = Some(report),
            }
        }
        best
    }

    /// Whether any task remains feasible.
    pub fn has_feasible(&self) -> bool {
        !self.reports.is_empty()
    }
}

/// Assesses one task at one instant.
pub fn assess(task: &Task, instant: &TriageInstant) -> TriageReport {
    let hours_available = instant.hours_until(task.due_date);
    let hours_needed = task.hours_remaining;
    let feasible = hours_needed > 0.0 && hours_needed <= hours_available;
    let priority = if feasible {
        hours_needed / hours_available
    } else {
        0.0
    };
    TriageReport {
        name: task.name.clone(),
        hours_needed,
        hours_available,
        feasible,
        priority,
    }
}

/// Runs aggregate triage over the registry, pruning infeasible tasks.
///
/// Two-pass: all reports are computed over the current task list first,
/// then the registry is rebuilt from the feasible subset — no task is
/// removed while the list is being scanned. Pruning is permanent and
/// silent: capacity only shrinks as simulated time advances and
/// remaining hours never grow, so an infeasible task can never recover.
pub fn triage_registry(registry: &mut TaskRegistry, instant: &TriageInstant) -> TriageSummary {
    let reports: Vec<TriageReport> = registry.iter().map(|t| assess(t, instant)).collect();

    let (feasible, pruned): (Vec<_>, Vec<_>) = reports.into_iter().partition(|r| r.feasible);

    if !pruned.is_empty() {
        for report in &pruned {
            trace!(
                task = %report.name,
                hours_needed = report.hours_needed,
                hours_available = report.hours_available,
                "pruning infeasible task"
            );
        }
        let keep: Vec<String> = feasible.iter().map(|r| r.name.clone()).collect();
        registry.retain_named(&keep);
    }

    let total_hours_needed = feasible.iter().map(|r| r.hours_needed).sum();
    let total_hours_available = feasible.iter().map(|r| r.hours_available).sum();

    TriageSummary {
        reports: feasible,
        total_hours_needed,
        total_hours_available,
    }
}
