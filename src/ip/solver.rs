//! Solver interface and the built-in branch-and-bound backend.

use std::time::{Duration, Instant};

use super::model::{Comparison, IpModel, Objective};
use super::VarId;

/// Feasibility tolerance for floating-point constraint checks.
const EPS: f64 = 1e-6;

/// Status of the solver after execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    /// Proven optimal solution found.
    Optimal,
    /// Feasible (but not necessarily optimal) solution found.
    Feasible,
    /// No feasible solution exists.
    Infeasible,
    /// Model is invalid or malformed.
    ModelInvalid,
    /// Time limit expired before any solution was found.
    Timeout,
    /// No solution found for unknown reasons.
    Unknown,
}

/// Solution from an IP solver.
#[derive(Debug, Clone)]
pub struct IpSolution {
    /// Solver status.
    pub status: SolverStatus,
    /// Objective function value, if the model has an objective and a
    /// solution was found.
    pub objective_value: Option<f64>,
    /// Variable values, indexed by [`VarId`]; empty when no solution.
    pub values: Vec<bool>,
    /// Solve time in milliseconds.
    pub solve_time_ms: i64,
}

impl IpSolution {
    /// Creates an empty solution with the given status.
    pub fn empty(status: SolverStatus) -> Self {
        Self {
            status,
            objective_value: None,
            values: Vec::new(),
            solve_time_ms: 0,
        }
    }

    /// Whether a usable variable assignment is present.
    pub fn is_solution_found(&self) -> bool {
        matches!(self.status, SolverStatus::Optimal | SolverStatus::Feasible)
    }

    /// Value of the given variable; `false` when no solution is present.
    pub fn value(&self, var: VarId) -> bool {
        self.values.get(var.index()).copied().unwrap_or(false)
    }
}

/// Solver configuration.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum solve time in milliseconds.
    pub time_limit_ms: i64,
    /// Stop after finding the first feasible solution.
    pub stop_after_first: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 60_000,
            stop_after_first: false,
        }
    }
}

/// Trait for IP solver implementations.
///
/// Implementors provide the actual combinatorial search. This can wrap
/// external solvers (CBC, CP-SAT, Gurobi) or provide custom search.
pub trait IpSolver {
    /// Solves the model and returns a solution.
    fn solve(&self, model: &IpModel, config: &SolverConfig) -> IpSolution;
}

/// Exact depth-first branch-and-bound over the binary variables.
///
/// Branches in arena order, ones first, pruning on per-constraint
/// achievable bounds and on the objective bound against the incumbent.
/// Exhausting the tree proves optimality; on time-limit expiry the
/// incumbent (if any) is returned as `Feasible`.
///
/// Deterministic: identical models and configs explore identical trees.
pub struct BranchBoundSolver;

impl BranchBoundSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BranchBoundSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl IpSolver for BranchBoundSolver {
    fn solve(&self, model: &IpModel, config: &SolverConfig) -> IpSolution {
        if model.validate().is_err() {
            return IpSolution::empty(SolverStatus::ModelInvalid);
        }

        let started = Instant::now();
        let mut search = Search::new(model, config, started);

        if search.root_feasible() {
            search.explore(0);
        }

        let status = if search.incumbent.is_some() {
            if search.timed_out || search.stopped_early {
                SolverStatus::Feasible
            } else {
                SolverStatus::Optimal
            }
        } else if search.timed_out {
            SolverStatus::Timeout
        } else {
            SolverStatus::Infeasible
        };

        let objective_value = match (&model.objective, &search.incumbent) {
            (Some(_), Some(_)) => {
                let raw = search.incumbent_value;
                Some(if search.maximize { -raw } else { raw })
            }
            _ => None,
        };

        IpSolution {
            status,
            objective_value,
            values: search.incumbent.unwrap_or_default(),
            solve_time_ms: started.elapsed().as_millis() as i64,
        }
    }
}

/// Search state for one branch-and-bound run.
///
/// The variable order is fixed (arena order); at depth `d`, variables
/// `0..d` are fixed to `values[0..d]` and the rest are free. Constraint
/// bounds are recomputed over the touched constraints only, which keeps
/// the arithmetic exact across backtracking.
struct Search<'a> {
    model: &'a IpModel,
    /// Constraint indices containing each variable.
    occurrences: Vec<Vec<usize>>,
    /// Objective coefficient per variable, minimize sense.
    obj: Vec<f64>,
    maximize: bool,
    values: Vec<bool>,
    incumbent: Option<Vec<bool>>,
    /// Incumbent objective in minimize sense; meaningless while `incumbent` is `None`.
    incumbent_value: f64,
    started: Instant,
    time_limit: Duration,
    stop_after_first: bool,
    timed_out: bool,
    stopped_early: bool,
}

impl<'a> Search<'a> {
    fn new(model: &'a IpModel, config: &SolverConfig, started: Instant) -> Self {
        let num_vars = model.num_vars();

        let mut occurrences = vec![Vec::new(); num_vars];
        for (idx, constraint) in model.constraints.iter().enumerate() {
            for &(var, _) in &constraint.expr.terms {
                occurrences[var.index()].push(idx);
            }
        }

        let mut obj = vec![0.0; num_vars];
        let mut maximize = false;
        if let Some(objective) = &model.objective {
            maximize = matches!(objective, Objective::Maximize(_));
            for &(var, coefficient) in &objective.expr().terms {
                obj[var.index()] += if maximize { -coefficient } else { coefficient };
            }
        }

        Self {
            model,
            occurrences,
            obj,
            maximize,
            values: vec![false; num_vars],
            incumbent: None,
            incumbent_value: f64::INFINITY,
            started,
            time_limit: Duration::from_millis(config.time_limit_ms.max(0) as u64),
            stop_after_first: config.stop_after_first,
            timed_out: false,
            stopped_early: false,
        }
    }

    /// Achievable `[lo, hi]` range of a constraint's left-hand side with
    /// variables `0..num_fixed` fixed and the rest free.
    fn bounds(&self, constraint_idx: usize, num_fixed: usize) -> (f64, f64) {
        let mut lo = 0.0;
        let mut hi = 0.0;
        for &(var, coefficient) in &self.model.constraints[constraint_idx].expr.terms {
            if var.index() < num_fixed {
                if self.values[var.index()] {
                    lo += coefficient;
                    hi += coefficient;
                }
            } else {
                lo += coefficient.min(0.0);
                hi += coefficient.max(0.0);
            }
        }
        (lo, hi)
    }

    fn satisfiable(&self, constraint_idx: usize, num_fixed: usize) -> bool {
        let constraint = &self.model.constraints[constraint_idx];
        let (lo, hi) = self.bounds(constraint_idx, num_fixed);
        match constraint.comparison {
            Comparison::LessEq => lo <= constraint.rhs + EPS,
            Comparison::GreaterEq => hi >= constraint.rhs - EPS,
            Comparison::Equal => lo <= constraint.rhs + EPS && hi >= constraint.rhs - EPS,
        }
    }

    /// Every constraint must admit a completion before any branching.
    /// Also covers constraints that reference no variables at all.
    fn root_feasible(&self) -> bool {
        (0..self.model.constraints.len()).all(|idx| self.satisfiable(idx, 0))
    }

    /// Lower bound on the objective over all completions of the prefix.
    fn objective_bound(&self, num_fixed: usize) -> f64 {
        let mut bound = 0.0;
        for (index, &coefficient) in self.obj.iter().enumerate() {
            if index < num_fixed {
                if self.values[index] {
                    bound += coefficient;
                }
            } else {
                bound += coefficient.min(0.0);
            }
        }
        bound
    }

    fn explore(&mut self, depth: usize) {
        if self.started.elapsed() >= self.time_limit {
            self.timed_out = true;
            return;
        }

        if depth == self.model.num_vars() {
            self.record();
            return;
        }

        // Ones first: packing-style models reach dense incumbents sooner.
        for value in [true, false] {
            self.values[depth] = value;

            let feasible = self.occurrences[depth]
                .iter()
                .all(|&idx| self.satisfiable(idx, depth + 1));
            let promising = self.incumbent.is_none()
                || self.objective_bound(depth + 1) < self.incumbent_value - EPS;

            if feasible && promising {
                self.explore(depth + 1);
            }

            if self.timed_out || self.stopped_early {
                return;
            }
        }
    }

    fn record(&mut self) {
        let value: f64 = self
            .obj
            .iter()
            .enumerate()
            .filter(|&(index, _)| self.values[index])
            .map(|(_, &coefficient)| coefficient)
            .sum();

        if self.incumbent.is_none() || value < self.incumbent_value - EPS {
            self.incumbent_value = value;
            self.incumbent = Some(self.values.clone());
            if self.stop_after_first {
                self.stopped_early = true;
            }
        }
    }
}
