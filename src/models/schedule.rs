//! Schedule (output) model.
//!
//! A schedule is the complete multi-day plan produced by one scheduling
//! run: an ordered sequence of daily plans, each an ordered sequence of
//! slot-sized events. Built once per run and read-only thereafter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::triage::TriageSummary;

/// One committed time slot.
///
/// Records which task received the slot, where the slot sits in the day
/// (`start_hour..end_hour`, working hours from the start of that day),
/// the run-global `time_from_start` offset, and the triage summary that
/// produced the decision. Owned by exactly one [`DailyPlan`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Name of the task the slot was committed to.
    pub task_name: String,
    /// Hours of committed work since the start of the run.
    ///
    /// Strictly increasing across the whole schedule, stepping by the
    /// slot size; idle remainder of a short day does not advance it.
    pub time_from_start: f64,
    /// Slot start, in working hours from the start of its day.
    pub start_hour: f64,
    /// Slot end, in working hours from the start of its day.
    pub end_hour: f64,
    /// The whole-registry triage snapshot that selected this task.
    pub triage: TriageSummary,
}

/// All events committed on one calendar day, in commit order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    /// The simulated calendar day.
    pub date: NaiveDate,
    /// Events in the order they were committed.
    pub events: Vec<Event>,
}

impl DailyPlan {
    /// Opens an empty plan for a day.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            events: Vec::new(),
        }
    }

    /// Appends an event.
    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Whether any slot was committed on this day.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Hours committed on this day (sum of slot durations).
    pub fn hours_committed(&self) -> f64 {
        self.events.iter().map(|e| e.end_hour - e.start_hour).sum()
    }
}

/// A flattened schedule row, for tabular export.
///
/// Downstream table or plot adapters consume these rows keyed by
/// `time_from_start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Calendar day the slot falls on.
    pub date: NaiveDate,
    /// Run-global offset of the slot.
    pub time_from_start: f64,
    /// Task the slot was committed to.
    pub task_name: String,
    /// Slot start within the day.
    pub start_hour: f64,
    /// Slot end within the day.
    pub end_hour: f64,
}

/// The complete multi-day plan for one scheduling run.
///
/// Contains one [`DailyPlan`] per simulated day that received at least
/// one event; a day that yields no events terminates the run and is
/// discarded, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Daily plans in calendar order.
    pub days: Vec<DailyPlan>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a completed day.
    pub fn add_day(&mut self, day: DailyPlan) {
        self.days.push(day);
    }

    /// Total number of committed events across all days.
    pub fn event_count(&self) -> usize {
        self.days.iter().map(|d| d.events.len()).sum()
    }

    /// Number of days that received work.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Whether no slot was ever committed.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total hours committed to a task across all events.
    pub fn total_hours_for_task(&self, name: &str) -> f64 {
        self.days
            .iter()
            .flat_map(|d| d.events.iter())
            .filter(|e| e.task_name == name)
            .map(|e| e.end_hour - e.start_hour)
            .sum()
    }

    /// Names of all tasks that received at least one slot, in first-slot order.
    pub fn task_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for event in self.days.iter().flat_map(|d| d.events.iter()) {
            if !names.contains(&event.task_name) {
                names.push(event.task_name.clone());
            }
        }
        names
    }

    /// Hours committed per task.
    pub fn hours_by_task(&self) -> HashMap<String, f64> {
        let mut hours = HashMap::new();
        for event in self.days.iter().flat_map(|d| d.events.iter()) {
            *hours.entry(event.task_name.clone()).or_insert(0.0) += event.end_hour - event.start_hour;
        }
        hours
    }

    /// The day a task received its last slot.
    pub fn completion_date(&self, name: &str) -> Option<NaiveDate> {
        self.days
            .iter()
            .filter(|d| d.events.iter().any(|e| e.task_name == name))
            .map(|d| d.date)
            .max()
    }

    /// Last planned calendar day.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.last().map(|d| d.date)
    }

    /// Flattens the schedule into export rows, in `time_from_start` order.
    pub fn flatten(&self) -> Vec<ScheduleRow> {
        self.days
            .iter()
            .flat_map(|d| {
                d.events.iter().map(|e| ScheduleRow {
                    date: d.date,
                    time_from_start: e.time_from_start,
                    task_name: e.task_name.clone(),
                    start_hour: e.start_hour,
                    end_hour: e.end_hour,
                })
            })
            .collect()
    }
}
