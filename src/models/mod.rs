//! Scheduling domain models.
//!
//! Provides the core data types for representing a pool of due-dated
//! tasks and the multi-day plan produced for them. All types are plain
//! values — the registry owns its tasks, the schedule owns its days,
//! and nothing here holds a reference into anything else.
//!
//! # Time Representation
//!
//! Calendar days are `chrono::NaiveDate`; positions within a day are
//! fractional work-hours (`f64`) counted from the start of the working
//! day, not wall-clock time. The consumer defines when hour 0 falls.

mod registry;
mod schedule;
mod task;

pub use registry::{RegistryError, TaskRegistry};
pub use schedule::{DailyPlan, Event, Schedule, ScheduleRow};
pub use task::Task;
