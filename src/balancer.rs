//! Line balancing formulation and solution extraction.
//!
//! Poses the minimum-station assignment problem (SALBP-1) as a 0/1
//! integer program and extracts a station partition from the solver's
//! variable assignment. The combinatorial search itself is delegated to
//! any [`IpSolver`] implementation.
//!
//! # Reference
//! Patterson & Albracht (1975), "Assembly-Line Balancing: Zero-One
//! Programming with Fibonacci Search"

use crate::error::{BalanceError, SolverError};
use crate::ip::{IpModel, IpSolution, IpSolver, LinearExpr, Objective, SolverConfig, VarId};
use crate::metrics::Solution;
use crate::models::{LineConfig, PrecedenceEdge, StationAssignment};
use crate::validation::{validate_config, validate_precedence};

/// Builds an IP model from a line configuration and solves it.
///
/// Station slots are indexed `0..n` — a safe upper bound, since in the
/// worst case every task occupies its own station. Decision variables
/// live in a dense arena: an n×n row-major block of `assign[task][slot]`
/// variables followed by n `used[slot]` variables, owned by this builder
/// for the duration of one solve call.
///
/// # Example
/// ```
/// use line_balance::ip::{BranchBoundSolver, SolverConfig};
/// use line_balance::{LineBalancer, LineConfig, Task};
///
/// let config = LineConfig::new(
///     vec![Task::new("cut", 3.0), Task::new("weld", 4.0)],
///     5.0,
/// );
/// let solution = LineBalancer::new(&config)
///     .solve(&BranchBoundSolver::new(), &SolverConfig::default())
///     .unwrap();
/// assert_eq!(solution.stations_used, 2);
/// ```
pub struct LineBalancer<'a> {
    config: &'a LineConfig,
    precedence: Vec<PrecedenceEdge>,
}

impl<'a> LineBalancer<'a> {
    /// Creates a balancer for the given configuration.
    pub fn new(config: &'a LineConfig) -> Self {
        Self {
            config,
            precedence: Vec::new(),
        }
    }

    /// Adds precedence edges (predecessor station ≤ successor station).
    pub fn with_precedence(mut self, edges: Vec<PrecedenceEdge>) -> Self {
        self.precedence = edges;
        self
    }

    /// Arena position of `assign[task][slot]`.
    fn assign_var(&self, task: usize, slot: usize) -> VarId {
        VarId(task * self.config.task_count() + slot)
    }

    /// Arena position of `used[slot]`.
    fn used_var(&self, slot: usize) -> VarId {
        let n = self.config.task_count();
        VarId(n * n + slot)
    }

    /// Builds the 0/1 integer program.
    ///
    /// Constraints:
    /// - unique assignment: every task occupies exactly one slot
    /// - capacity: `Σ max_duration·assign[i][k] ≤ cycle_limit·used[k]`,
    ///   which also forces `assign[·][k] = 0` whenever slot k is unused
    /// - precedence: `Σ k·assign[i][k] ≤ Σ k·assign[j][k]` — sound only
    ///   because unique assignment maps each task to a single slot index
    /// - symmetry breaking: `used[k] ≥ used[k+1]`, so occupied slots are
    ///   contiguous and low-indexed
    ///
    /// Objective: minimize `Σ used[k]`.
    pub fn build_model(&self) -> IpModel {
        let n = self.config.task_count();
        let mut model = IpModel::new("line_balance");

        let vars = model.add_binary_vars(n * n + n);
        debug_assert_eq!(vars.len(), n * n + n);

        for i in 0..n {
            let slots = (0..n).map(|k| self.assign_var(i, k));
            model.add_equal(format!("assign_{i}"), LinearExpr::sum(slots), 1.0);
        }

        for k in 0..n {
            let mut load = LinearExpr::new();
            for (i, task) in self.config.tasks.iter().enumerate() {
                load.add_term(self.assign_var(i, k), task.max_duration);
            }
            load.add_term(self.used_var(k), -self.config.cycle_limit);
            model.add_less_eq(format!("capacity_{k}"), load, 0.0);
        }

        for edge in &self.precedence {
            let mut expr = LinearExpr::new();
            // Slot 0 contributes nothing to either side.
            for k in 1..n {
                expr.add_term(self.assign_var(edge.predecessor, k), k as f64);
                expr.add_term(self.assign_var(edge.successor, k), -(k as f64));
            }
            model.add_less_eq(
                format!("prec_{}_{}", edge.predecessor, edge.successor),
                expr,
                0.0,
            );
        }

        for k in 0..n.saturating_sub(1) {
            let expr = LinearExpr::new()
                .term(self.used_var(k + 1), 1.0)
                .term(self.used_var(k), -1.0);
            model.add_less_eq(format!("order_{k}"), expr, 0.0);
        }

        let used = (0..n).map(|k| self.used_var(k));
        model.set_objective(Objective::Minimize(LinearExpr::sum(used)));

        model
    }

    /// Validates, solves, and computes the full dual-regime solution.
    ///
    /// # Errors
    /// [`BalanceError::Parse`] when the configuration or precedence edges
    /// fail validation; [`BalanceError::Solver`] when the solver reports
    /// that no assignment satisfies every constraint (reachable only
    /// through precedence edges that conflict with capacity).
    pub fn solve<S: IpSolver>(
        &self,
        solver: &S,
        config: &SolverConfig,
    ) -> Result<Solution, BalanceError> {
        validate_config(self.config)?;
        validate_precedence(&self.precedence, self.config.task_count())?;

        let model = self.build_model();
        let result = solver.solve(&model, config);

        if !result.is_solution_found() {
            return Err(SolverError::NoFeasibleSolution {
                theoretical_min_stations: self.config.theoretical_min_stations(),
            }
            .into());
        }

        let assignment = self.extract_assignment(&result);
        debug_assert!(assignment.is_partition_of(self.config.task_count()));

        Ok(Solution::calculate(self.config, assignment))
    }

    /// Collects, in increasing slot order, the task sets of every used
    /// slot. Symmetry breaking already makes occupied slots contiguous,
    /// so renumbering to line order is a direct re-index. Slots marked
    /// used but left empty by the solver are dropped.
    fn extract_assignment(&self, result: &IpSolution) -> StationAssignment {
        let n = self.config.task_count();
        let mut stations = Vec::new();

        for k in 0..n {
            if !result.value(self.used_var(k)) {
                continue;
            }
            let tasks: Vec<usize> = (0..n)
                .filter(|&i| result.value(self.assign_var(i, k)))
                .collect();
            if !tasks.is_empty() {
                stations.push(tasks);
            }
        }

        StationAssignment::new(stations)
    }
}
