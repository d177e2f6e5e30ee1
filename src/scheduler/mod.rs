//! Greedy slot-by-slot scheduler and schedule statistics.
//!
//! # Algorithm
//!
//! `GreedyScheduler` walks simulated calendar days and, within each day,
//! fixed-size slots. Every slot re-runs aggregate triage over the whole
//! registry and commits the slot to the current top-priority task. This
//! is a continuous re-optimization, not a static priority queue: one
//! task's capacity margin can shrink faster than another's, so the
//! most-urgent task may change mid-day.
//!
//! # Stats
//!
//! `ScheduleStats` computes read-only diagnostics over a finished
//! schedule: days used, hours committed, per-task totals and completion
//! days.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod greedy;
mod stats;

pub use greedy::{GreedyScheduler, ScheduleError};
pub use stats::ScheduleStats;
