//! Line configuration: the validated, immutable problem instance.

use serde::{Deserialize, Serialize};

use super::Task;

/// A production line balancing problem: an ordered task list and the
/// cycle-time capacity shared by every station.
///
/// Task indices are identity — every downstream structure (precedence
/// edges, station assignments) refers to tasks by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineConfig {
    /// Tasks in input order.
    pub tasks: Vec<Task>,
    /// Maximum total worst-case duration a single station may carry.
    pub cycle_limit: f64,
}

impl LineConfig {
    /// Creates a configuration. Invariants are checked by
    /// [`crate::validation::validate_config`], not here.
    pub fn new(tasks: Vec<Task>, cycle_limit: f64) -> Self {
        Self { tasks, cycle_limit }
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Sum of worst-case durations over all tasks.
    pub fn total_max_duration(&self) -> f64 {
        self.tasks.iter().map(|t| t.max_duration).sum()
    }

    /// Sum of expected durations over all tasks.
    pub fn total_avg_duration(&self) -> f64 {
        self.tasks.iter().map(|t| t.avg_duration).sum()
    }

    /// Lower bound on station count implied purely by total worst-case
    /// duration: `ceil(Σ max_duration / cycle_limit)`.
    pub fn theoretical_min_stations(&self) -> usize {
        (self.total_max_duration() / self.cycle_limit).ceil() as usize
    }
}
