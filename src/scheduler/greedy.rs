//! Greedy day-by-day, slot-by-slot allocation loop.
//!
//! # Algorithm
//!
//! 1. Start at the explicit start date, or the registry's earliest due date.
//! 2. While tasks remain: open a daily plan and fill it slot by slot.
//! 3. Each slot re-triages the whole registry and commits one
//!    `minimum_hours` block to the top-priority task.
//! 4. A day that produces zero events ends the run; otherwise advance one
//!    calendar day.
//!
//! # Complexity
//! O(d * s * n) where d = days, s = slots per day, n = registry size.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::models::{DailyPlan, Event, RegistryError, Schedule, TaskRegistry};
use crate::triage::{triage_registry, TriageInstant};

/// Errors fatal to a scheduling run.
///
/// Everything else — infeasible tasks, a day with nothing to do — is a
/// normal in-loop outcome handled internally, never an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// A scheduling parameter must be strictly positive.
    #[error("{name} must be positive, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    /// Registry failure — in practice, an empty registry with no explicit
    /// start date, leaving no way to pick one.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// The calendar ran out while advancing to the next day.
    #[error("calendar date overflow while advancing the plan")]
    DateOverflow,
}

/// Greedy deadline-triage scheduler.
///
/// Consumes a [`TaskRegistry`] and produces a [`Schedule`]: one
/// [`DailyPlan`] per simulated day that received work, each holding the
/// slot-sized [`Event`]s committed that day. The run terminates when the
/// registry is exhausted or a day yields no feasible task.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use daysched::models::{Task, TaskRegistry};
/// use daysched::scheduler::GreedyScheduler;
///
/// let registry = TaskRegistry::from_tasks(vec![
///     Task::new("code", NaiveDate::from_ymd_opt(2020, 6, 15).unwrap(), 6.0),
/// ]).unwrap();
///
/// let scheduler = GreedyScheduler::new()
///     .with_start_date(NaiveDate::from_ymd_opt(2020, 6, 14).unwrap());
/// let schedule = scheduler.schedule(registry).unwrap();
///
/// assert_eq!(schedule.total_hours_for_task("code"), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GreedyScheduler {
    start_date: Option<NaiveDate>,
    minimum_hours: f64,
    day_length: f64,
}

impl GreedyScheduler {
    /// Creates a scheduler with default granularity: 1-hour slots,
    /// 8-hour days, start date taken from the registry.
    pub fn new() -> Self {
        Self {
            start_date: None,
            minimum_hours: 1.0,
            day_length: 8.0,
        }
    }

    /// Sets an explicit start date.
    ///
    /// Without one, the run starts on the registry's earliest due date.
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the slot granularity in hours.
    pub fn with_minimum_hours(mut self, minimum_hours: f64) -> Self {
        self.minimum_hours = minimum_hours;
        self
    }

    /// Sets the working-hour capacity per calendar day.
    pub fn with_day_length(mut self, day_length: f64) -> Self {
        self.day_length = day_length;
        self
    }

    /// Runs the scheduling simulation, consuming the registry.
    ///
    /// The final slot committed to a task is never clipped: a full
    /// `minimum_hours` block is committed even when less work remains,
    /// so a task's total allocation is its hours rounded up to the next
    /// slot multiple. The finished (overshot) task is pruned on the next
    /// triage pass rather than at commit time.
    pub fn schedule(&self, mut registry: TaskRegistry) -> Result<Schedule, ScheduleError> {
        self.validate_params()?;

        let mut current_date = match self.start_date {
            Some(date) => date,
            None => registry.minimum_due_date()?,
        };

        let mut schedule = Schedule::new();
        let mut time_from_start = 0.0;

        while !registry.is_empty() {
            let mut plan = DailyPlan::new(current_date);
            let mut current_hour = 0.0;
            let mut hours_left_in_day = self.day_length;
            debug!(date = %current_date, pending = registry.len(), "opening day");

            while hours_left_in_day > 0.0 {
                let instant = TriageInstant::at_day_start(current_date, self.day_length)
                    .with_current_hour(current_hour);
                let summary = triage_registry(&mut registry, &instant);

                // No feasible task left: the day is done, and if it is
                // still empty the whole run is.
                let task_name = match summary.top_priority() {
                    Some(top) => top.name.clone(),
                    None => break,
                };

                debug!(task = %task_name, hour = current_hour, "slot committed");
                plan.add_event(Event {
                    task_name: task_name.clone(),
                    time_from_start,
                    start_hour: current_hour,
                    end_hour: current_hour + self.minimum_hours,
                    triage: summary,
                });

                if let Some(task) = registry.get_mut(&task_name) {
                    task.hours_remaining -= self.minimum_hours;
                }

                current_hour += self.minimum_hours;
                time_from_start += self.minimum_hours;
                hours_left_in_day -= self.minimum_hours;
            }

            if plan.is_empty() {
                debug!(date = %current_date, "no feasible task today, run terminated");
                break;
            }

            schedule.add_day(plan);
            current_date = current_date.succ_opt().ok_or(ScheduleError::DateOverflow)?;
        }

        debug!(
            days = schedule.day_count(),
            events = schedule.event_count(),
            "run complete"
        );
        Ok(schedule)
    }

    fn validate_params(&self) -> Result<(), ScheduleError> {
        if self.minimum_hours <= 0.0 {
            return Err(ScheduleError::InvalidParameter {
                name: "minimum_hours",
                value: self.minimum_hours,
            });
        }
        if self.day_length <= 0.0 {
            return Err(ScheduleError::InvalidParameter {
                name: "day_length",
                value: self.day_length,
            });
        }
        Ok(())
    }
}

impl Default for GreedyScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn scenario_registry() -> TaskRegistry {
        TaskRegistry::from_tasks(vec![
            Task::new("code", date(2020, 6, 15), 6.0),
            Task::new("eat", date(2020, 6, 16), 10.0),
            Task::new("sleep", date(2020, 6, 16), 8.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_scenario_full_run() {
        let scheduler = GreedyScheduler::new().with_start_date(date(2020, 6, 14));
        let schedule = scheduler.schedule(scenario_registry()).unwrap();

        // 24 hours of work over three full 8-hour days.
        assert_eq!(schedule.day_count(), 3);
        assert_eq!(schedule.event_count(), 24);
        let dates: Vec<_> = schedule.days.iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![date(2020, 6, 14), date(2020, 6, 15), date(2020, 6, 16)]
        );

        // Every task fully allocated.
        assert_eq!(schedule.total_hours_for_task("code"), 6.0);
        assert_eq!(schedule.total_hours_for_task("eat"), 10.0);
        assert_eq!(schedule.total_hours_for_task("sleep"), 8.0);
    }

    #[test]
    fn test_scenario_first_day_sequence() {
        // eat opens (10/24 beats 6/16 and 8/24), then the margins chase
        // each other slot by slot; the 8/20 tie at hour 4 goes to eat by
        // registry order.
        let scheduler = GreedyScheduler::new().with_start_date(date(2020, 6, 14));
        let schedule = scheduler.schedule(scenario_registry()).unwrap();

        let day1: Vec<_> = schedule.days[0]
            .events
            .iter()
            .map(|e| e.task_name.as_str())
            .collect();
        assert_eq!(
            day1,
            vec!["eat", "code", "eat", "code", "eat", "sleep", "code", "eat"]
        );
    }

    #[test]
    fn test_time_from_start_strictly_increasing() {
        let scheduler = GreedyScheduler::new().with_start_date(date(2020, 6, 14));
        let schedule = scheduler.schedule(scenario_registry()).unwrap();

        let rows = schedule.flatten();
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.time_from_start, i as f64);
        }
    }

    #[test]
    fn test_deterministic_runs() {
        let scheduler = GreedyScheduler::new().with_start_date(date(2020, 6, 14));
        let first = scheduler.schedule(scenario_registry()).unwrap();
        let second = scheduler.schedule(scenario_registry()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_overshoot_rounds_up_to_slot_multiple() {
        // 2.5h of work in 1h slots → three slots committed, never two.
        let registry =
            TaskRegistry::from_tasks(vec![Task::new("odd", date(2020, 6, 20), 2.5)]).unwrap();
        let scheduler = GreedyScheduler::new().with_start_date(date(2020, 6, 14));
        let schedule = scheduler.schedule(registry).unwrap();

        assert_eq!(schedule.event_count(), 3);
        assert_eq!(schedule.total_hours_for_task("odd"), 3.0);
    }

    #[test]
    fn test_task_due_before_start_yields_empty_schedule() {
        let registry =
            TaskRegistry::from_tasks(vec![Task::new("missed", date(2020, 6, 10), 4.0)]).unwrap();
        let scheduler = GreedyScheduler::new().with_start_date(date(2020, 6, 14));
        let schedule = scheduler.schedule(registry).unwrap();
        assert!(schedule.is_empty());
        assert_eq!(schedule.event_count(), 0);
    }

    #[test]
    fn test_default_start_is_minimum_due_date() {
        let registry = TaskRegistry::from_tasks(vec![
            Task::new("later", date(2020, 6, 20), 2.0),
            Task::new("soon", date(2020, 6, 15), 2.0),
        ])
        .unwrap();
        let schedule = GreedyScheduler::new().schedule(registry).unwrap();
        assert_eq!(schedule.days[0].date, date(2020, 6, 15));
    }

    #[test]
    fn test_empty_registry_without_start_date_fails() {
        let err = GreedyScheduler::new().schedule(TaskRegistry::new());
        assert_eq!(err, Err(ScheduleError::Registry(RegistryError::Empty)));
    }

    #[test]
    fn test_empty_registry_with_start_date_is_empty_schedule() {
        let scheduler = GreedyScheduler::new().with_start_date(date(2020, 6, 14));
        let schedule = scheduler.schedule(TaskRegistry::new()).unwrap();
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let registry =
            TaskRegistry::from_tasks(vec![Task::new("t", date(2020, 6, 15), 1.0)]).unwrap();

        let err = GreedyScheduler::new()
            .with_minimum_hours(0.0)
            .schedule(registry.clone());
        assert!(matches!(
            err,
            Err(ScheduleError::InvalidParameter {
                name: "minimum_hours",
                ..
            })
        ));

        let err = GreedyScheduler::new()
            .with_day_length(-8.0)
            .schedule(registry);
        assert!(matches!(
            err,
            Err(ScheduleError::InvalidParameter {
                name: "day_length",
                ..
            })
        ));
    }

    #[test]
    fn test_fractional_slot_size() {
        // 1.5h of work in half-hour slots on a 4-hour day.
        let registry =
            TaskRegistry::from_tasks(vec![Task::new("short", date(2020, 6, 14), 1.5)]).unwrap();
        let scheduler = GreedyScheduler::new()
            .with_start_date(date(2020, 6, 14))
            .with_minimum_hours(0.5)
            .with_day_length(4.0);
        let schedule = scheduler.schedule(registry).unwrap();

        assert_eq!(schedule.event_count(), 3);
        assert_eq!(schedule.total_hours_for_task("short"), 1.5);
        let last = schedule.days[0].events.last().unwrap();
        assert_eq!(last.start_hour, 1.0);
        assert_eq!(last.end_hour, 1.5);
    }

    #[test]
    fn test_event_carries_triage_snapshot() {
        let scheduler = GreedyScheduler::new().with_start_date(date(2020, 6, 14));
        let schedule = scheduler.schedule(scenario_registry()).unwrap();

        let first = &schedule.days[0].events[0];
        assert_eq!(first.triage.reports.len(), 3);
        assert_eq!(first.triage.total_hours_needed, 24.0);
        // The snapshot's top pick is the task the slot went to.
        assert_eq!(
            first.triage.top_priority().unwrap().name,
            first.task_name
        );
    }

    #[test]
    fn test_mid_run_deadline_pass_prunes_silently() {
        // "quick" fits comfortably; "doomed" needs more than its window
        // and is pruned on the first pass without surfacing an error.
        let registry = TaskRegistry::from_tasks(vec![
            Task::new("quick", date(2020, 6, 20), 2.0),
            Task::new("doomed", date(2020, 6, 14), 20.0),
        ])
        .unwrap();
        let scheduler = GreedyScheduler::new().with_start_date(date(2020, 6, 14));
        let schedule = scheduler.schedule(registry).unwrap();

        assert_eq!(schedule.total_hours_for_task("quick"), 2.0);
        assert_eq!(schedule.total_hours_for_task("doomed"), 0.0);
        assert!(!schedule.task_names().contains(&"doomed".to_string()));
    }
}
