//! Schedule diagnostics.
//!
//! Read-only summary metrics over a finished schedule: how many days it
//! spans, how much work was committed, and where each task's allocation
//! landed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::Schedule;

/// Summary statistics for one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStats {
    /// Days that received at least one slot.
    pub day_count: usize,
    /// Total committed slots.
    pub event_count: usize,
    /// Total committed work-hours.
    pub total_hours: f64,
    /// Committed hours per task.
    pub hours_by_task: HashMap<String, f64>,
    /// Day each task received its final slot.
    pub completion_dates: HashMap<String, NaiveDate>,
    /// Mean committed hours per planned day; 0 for an empty schedule.
    pub avg_hours_per_day: f64,
}

impl ScheduleStats {
    /// Computes statistics from a finished schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let day_count = schedule.day_count();
        let event_count = schedule.event_count();
        let hours_by_task = schedule.hours_by_task();
        let total_hours: f64 = hours_by_task.values().sum();

        let completion_dates = schedule
            .task_names()
            .into_iter()
            .filter_map(|name| {
                let date = schedule.completion_date(&name)?;
                Some((name, date))
            })
            .collect();

        let avg_hours_per_day = if day_count > 0 {
            total_hours / day_count as f64
        } else {
            0.0
        };

        Self {
            day_count,
            event_count,
            total_hours,
            hours_by_task,
            completion_dates,
            avg_hours_per_day,
        }
    }
}
