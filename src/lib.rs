//! Assembly line balancing with dual-duration analysis.
//!
//! Assigns a set of indivisible work tasks to the minimum number of
//! sequential workstations such that no station's worst-case workload
//! exceeds a fixed cycle-time capacity and optional precedence
//! constraints are respected, then analyzes the result under two
//! duration regimes: worst-case ("max") and expected ("avg").
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`Task`], [`LineConfig`],
//!   [`PrecedenceEdge`], [`StationAssignment`]
//! - **`parser`**: Textual task/capacity input
//! - **`validation`**: Input integrity checks shared by parser and balancer
//! - **`ip`**: 0/1 integer-programming model and solver abstraction
//! - **`balancer`**: Problem formulation and solution extraction
//! - **`metrics`**: Dual-regime performance figures ([`Solution`])
//! - **`report`**: Deterministic text report
//!
//! # Architecture
//!
//! Each pipeline stage is a pure function over immutable data:
//! parse → balance → compute metrics → render. No stage retains state
//! across calls, so independent requests may run concurrently. The
//! combinatorial search is behind the [`ip::IpSolver`] trait; the
//! built-in [`ip::BranchBoundSolver`] is exact, and any conforming
//! MILP/CP-SAT backend can be substituted.
//!
//! # Example
//!
//! ```
//! use line_balance::{balance_text, render};
//!
//! let input = "task paint max 10 avg 7\n\
//!              task hammer max 30 avg 27\n\
//!              task assemble max 50 avg 40\n\
//!              task inspect max 15 avg 12\n\
//!              max_cycle 60";
//!
//! let solution = balance_text(input).unwrap();
//! assert_eq!(solution.stations_used, 2);
//! assert!(solution.is_optimal);
//!
//! let report = render(&solution);
//! assert!(report.contains("Stations Used: 2"));
//! ```
//!
//! # References
//!
//! - Scholl (1999), "Balancing and Sequencing of Assembly Lines"
//! - Baybars (1986), "A Survey of Exact Algorithms for the Simple
//!   Assembly Line Balancing Problem"

pub mod balancer;
pub mod error;
pub mod ip;
pub mod metrics;
pub mod models;
pub mod parser;
pub mod report;
pub mod validation;

pub use balancer::LineBalancer;
pub use error::{BalanceError, ParseError, SolverError};
pub use metrics::Solution;
pub use models::{LineConfig, PrecedenceEdge, StationAssignment, Task};
pub use parser::parse;
pub use report::render;

use ip::{BranchBoundSolver, SolverConfig};

/// Balances a line with the built-in exact solver and default config.
pub fn balance(
    config: &LineConfig,
    precedence: &[PrecedenceEdge],
) -> Result<Solution, BalanceError> {
    LineBalancer::new(config)
        .with_precedence(precedence.to_vec())
        .solve(&BranchBoundSolver::new(), &SolverConfig::default())
}

/// One-shot pipeline: parse a textual description, then balance it.
pub fn balance_text(text: &str) -> Result<Solution, BalanceError> {
    let config = parse(text)?;
    balance(&config, &[])
}
