//! Deadline-driven task triage and greedy multi-day scheduling.
//!
//! Assigns a finite set of due-dated tasks, each needing a known number of
//! work-hours, to fixed-size time slots across successive calendar days so
//! that the most urgent task is always worked on next. Urgency is the
//! critical-ratio-style score `hours_needed / hours_available`, recomputed
//! from scratch at every slot so the "most urgent" task can change mid-day.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `TaskRegistry`, `Event`,
//!   `DailyPlan`, `Schedule`
//! - **`triage`**: Per-task feasibility and priority scoring, and
//!   whole-registry aggregation with infeasibility pruning
//! - **`scheduler`**: The greedy day-by-day, slot-by-slot allocation loop
//!   and schedule statistics
//! - **`validation`**: Batch input integrity checks (duplicate names,
//!   non-positive hours)
//!
//! # Architecture
//!
//! Control flow per slot: Scheduler → Triage Engine → Task Registry
//! (read/prune) → back to Scheduler. Single-threaded and fully
//! synchronous — one scheduling run owns its registry exclusively, since
//! the algorithm is an ordered simulation of calendar time, not a live
//! service.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

pub mod models;
pub mod scheduler;
pub mod triage;
pub mod validation;
