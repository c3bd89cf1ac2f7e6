//! Task model.
//!
//! A task is an indivisible unit of work carrying two duration figures:
//! a worst-case (`max`) duration that drives every capacity decision, and
//! an expected (`avg`) duration used only for informational analysis.
//!
//! # Reference
//! Scholl (1999), "Balancing and Sequencing of Assembly Lines", Ch. 2

use serde::{Deserialize, Serialize};

/// An indivisible unit of work to be assigned to a workstation.
///
/// Tasks are identified by their position in the line configuration, not
/// by name — duplicate names are permitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Display name, used in reports.
    pub name: String,
    /// Worst-case duration. Must be positive and never exceed the cycle limit.
    pub max_duration: f64,
    /// Expected duration. Defaults to the worst case; never capacity-checked.
    pub avg_duration: f64,
}

impl Task {
    /// Creates a task whose expected duration equals its worst case.
    pub fn new(name: impl Into<String>, max_duration: f64) -> Self {
        Self {
            name: name.into(),
            max_duration,
            avg_duration: max_duration,
        }
    }

    /// Sets the expected duration.
    pub fn with_avg_duration(mut self, avg_duration: f64) -> Self {
        self.avg_duration = avg_duration;
        self
    }
}
