//! Task registry: the mutable pool of pending tasks.
//!
//! Tasks are stored in insertion order. The registry itself promises no
//! priority ordering — all prioritization is produced by the triage
//! engine — but insertion order is the deterministic tie-break order
//! when two tasks score equally.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Task;

/// Errors raised at the registry boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// A task with this name is already registered.
    #[error("duplicate task name: {0}")]
    DuplicateName(String),
    /// Task hours must be strictly positive at registration.
    #[error("task '{name}' has non-positive hours: {hours}")]
    NonPositiveHours { name: String, hours: f64 },
    /// The registry holds no tasks, so no earliest due date exists.
    #[error("registry is empty")]
    Empty,
}

/// The pool of tasks still awaiting scheduling.
///
/// Owned exclusively by one scheduling run; the run prunes it as tasks
/// complete or become infeasible, and drains it to empty (or to an
/// all-infeasible terminal state) by the time the run finishes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
}

impl TaskRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a task list, applying the same checks as
    /// repeated [`add`](Self::add) calls.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for task in tasks {
            registry.add(task)?;
        }
        Ok(registry)
    }

    /// Registers a new task.
    ///
    /// Rejects duplicate names and non-positive hours; both are fatal to
    /// the call and leave the registry unchanged.
    pub fn add(&mut self, task: Task) -> Result<(), RegistryError> {
        if task.hours_remaining <= 0.0 {
            return Err(RegistryError::NonPositiveHours {
                name: task.name,
                hours: task.hours_remaining,
            });
        }
        if self.tasks.iter().any(|t| t.name == task.name) {
            return Err(RegistryError::DuplicateName(task.name));
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Removes a task by name. Returns the task if it was present.
    pub fn remove(&mut self, name: &str) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.name == name)?;
        Some(self.tasks.remove(idx))
    }

    /// Earliest due date among current tasks.
    ///
    /// This is the scheduler's default start date, and the only registry
    /// query that must fail loudly on an empty pool.
    pub fn minimum_due_date(&self) -> Result<NaiveDate, RegistryError> {
        self.tasks
            .iter()
            .map(|t| t.due_date)
            .min()
            .ok_or(RegistryError::Empty)
    }

    /// Iterates tasks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Mutable access to a task by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.name == name)
    }

    /// Keeps only tasks whose names appear in `names`, preserving order.
    ///
    /// Used by the triage engine's copy-then-filter pruning: reports are
    /// computed over a snapshot first, then the registry is rebuilt from
    /// the feasible subset in one pass.
    pub fn retain_named(&mut self, names: &[String]) {
        self.tasks.retain(|t| names.iter().any(|n| n == &t.name));
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the registry holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
