//! Ordering constraints between tasks.

use serde::{Deserialize, Serialize};

/// A precedence requirement between two tasks, by index.
///
/// Meaning: the predecessor's station index must be less than or equal
/// to the successor's. Both tasks may share a station — precedence
/// orders stations, not tasks within one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecedenceEdge {
    /// Task that must not be placed downstream of the successor.
    pub predecessor: usize,
    /// Task that must not be placed upstream of the predecessor.
    pub successor: usize,
}

impl PrecedenceEdge {
    /// Creates an edge "predecessor's station ≤ successor's station".
    pub fn new(predecessor: usize, successor: usize) -> Self {
        Self {
            predecessor,
            successor,
        }
    }
}

impl From<(usize, usize)> for PrecedenceEdge {
    fn from((predecessor, successor): (usize, usize)) -> Self {
        Self::new(predecessor, successor)
    }
}
