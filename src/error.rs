//! Error taxonomy for the balancing pipeline.
//!
//! Two distinct failure families exist and callers must be able to tell
//! them apart: [`ParseError`] is always a caller-input problem detected
//! before any optimization runs, while [`SolverError`] is a legitimate
//! optimization outcome (the model itself can be unsatisfiable when
//! precedence edges conflict with station capacity). [`BalanceError`]
//! unifies both so pipeline entry points return a single error type.

use thiserror::Error;

/// Input rejection, raised synchronously during parsing or validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The input contains no task lines.
    #[error("no task lines found in input")]
    EmptyInput,

    /// The input contains no `max_cycle` line.
    #[error("max_cycle not specified")]
    MissingCapacity,

    /// The cycle limit is zero or negative.
    #[error("max_cycle must be positive (got {value})")]
    InvalidCapacity { value: f64 },

    /// A task carries a zero or negative duration figure.
    #[error("task '{task}' has a non-positive duration")]
    InvalidDuration { task: String },

    /// A task's worst-case duration exceeds the cycle limit, so no
    /// station could ever hold it.
    #[error("task '{task}' max duration ({duration}) exceeds cycle limit ({cycle_limit})")]
    InfeasibleTaskDuration {
        task: String,
        duration: f64,
        cycle_limit: f64,
    },

    /// A line does not match the task/capacity grammar.
    #[error("malformed line {line_no}: '{line}'")]
    MalformedLine { line_no: usize, line: String },

    /// A precedence edge references a task index that does not exist.
    #[error("precedence edge references task index {index}, but only {task_count} tasks exist")]
    InvalidPrecedence { index: usize, task_count: usize },
}

/// Optimization-level failure, returned as a structured result rather
/// than raised: it is deterministic for a given input and solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The solver proved that no assignment satisfies every constraint.
    ///
    /// Still carries the capacity-implied lower bound on station count
    /// for diagnostics.
    #[error("no feasible assignment exists (theoretical minimum: {theoretical_min_stations} stations)")]
    NoFeasibleSolution { theoretical_min_stations: usize },
}

/// Unified error for the `balance*` entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BalanceError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Solver(#[from] SolverError),
}
