//! Integer-program model definition.

/// Handle to a binary decision variable.
///
/// Variables live in a dense arena owned by the model; a `VarId` is the
/// variable's index in that arena. Ids are handed out sequentially by
/// [`IpModel::add_binary_var`], so consumers laying out structured
/// variable blocks (grids, rows) can address them arithmetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarId(pub(crate) usize);

impl VarId {
    /// Position in the model's variable arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A linear combination of binary variables.
#[derive(Debug, Clone, Default)]
pub struct LinearExpr {
    /// (variable, coefficient) pairs.
    pub terms: Vec<(VarId, f64)>,
}

impl LinearExpr {
    /// Creates an empty expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a term, builder-style.
    pub fn term(mut self, var: VarId, coefficient: f64) -> Self {
        self.add_term(var, coefficient);
        self
    }

    /// Adds a term in place.
    pub fn add_term(&mut self, var: VarId, coefficient: f64) {
        self.terms.push((var, coefficient));
    }

    /// Unit-coefficient sum over the given variables.
    pub fn sum(vars: impl IntoIterator<Item = VarId>) -> Self {
        Self {
            terms: vars.into_iter().map(|v| (v, 1.0)).collect(),
        }
    }
}

/// Relation between an expression and its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    LessEq,
    GreaterEq,
    Equal,
}

/// A linear constraint `expr <comparison> rhs`.
#[derive(Debug, Clone)]
pub struct LinearConstraint {
    /// Constraint name, used in diagnostics.
    pub name: String,
    pub expr: LinearExpr,
    pub comparison: Comparison,
    pub rhs: f64,
}

/// Objective function over the model's variables.
#[derive(Debug, Clone)]
pub enum Objective {
    Minimize(LinearExpr),
    Maximize(LinearExpr),
}

impl Objective {
    /// The underlying expression, regardless of sense.
    pub fn expr(&self) -> &LinearExpr {
        match self {
            Objective::Minimize(expr) | Objective::Maximize(expr) => expr,
        }
    }
}

/// A 0/1 integer program.
///
/// # Examples
///
/// ```
/// use line_balance::ip::{IpModel, LinearExpr, Objective};
///
/// let mut model = IpModel::new("cover");
/// let x = model.add_binary_var();
/// let y = model.add_binary_var();
/// model.add_greater_eq("pick_one", LinearExpr::sum([x, y]), 1.0);
/// model.set_objective(Objective::Minimize(
///     LinearExpr::new().term(x, 1.0).term(y, 2.0),
/// ));
/// assert!(model.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct IpModel {
    /// Model name.
    pub name: String,
    num_vars: usize,
    /// Constraints, in insertion order.
    pub constraints: Vec<LinearConstraint>,
    /// Objective function.
    pub objective: Option<Objective>,
}

impl IpModel {
    /// Creates an empty model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            num_vars: 0,
            constraints: Vec::new(),
            objective: None,
        }
    }

    /// Allocates one binary variable.
    pub fn add_binary_var(&mut self) -> VarId {
        let id = VarId(self.num_vars);
        self.num_vars += 1;
        id
    }

    /// Allocates a contiguous block of binary variables.
    pub fn add_binary_vars(&mut self, count: usize) -> Vec<VarId> {
        (0..count).map(|_| self.add_binary_var()).collect()
    }

    /// Number of variables in the arena.
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Adds a constraint.
    pub fn add_constraint(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    /// Convenience: `expr <= rhs`.
    pub fn add_less_eq(&mut self, name: impl Into<String>, expr: LinearExpr, rhs: f64) {
        self.add_constraint(LinearConstraint {
            name: name.into(),
            expr,
            comparison: Comparison::LessEq,
            rhs,
        });
    }

    /// Convenience: `expr >= rhs`.
    pub fn add_greater_eq(&mut self, name: impl Into<String>, expr: LinearExpr, rhs: f64) {
        self.add_constraint(LinearConstraint {
            name: name.into(),
            expr,
            comparison: Comparison::GreaterEq,
            rhs,
        });
    }

    /// Convenience: `expr == rhs`.
    pub fn add_equal(&mut self, name: impl Into<String>, expr: LinearExpr, rhs: f64) {
        self.add_constraint(LinearConstraint {
            name: name.into(),
            expr,
            comparison: Comparison::Equal,
            rhs,
        });
    }

    /// Sets the objective function.
    pub fn set_objective(&mut self, objective: Objective) {
        self.objective = Some(objective);
    }

    /// Validates the model for consistency.
    ///
    /// Checks that every referenced variable lives in the arena.
    pub fn validate(&self) -> Result<(), String> {
        for constraint in &self.constraints {
            for &(var, _) in &constraint.expr.terms {
                if var.index() >= self.num_vars {
                    return Err(format!(
                        "constraint '{}': undefined variable {}",
                        constraint.name,
                        var.index()
                    ));
                }
            }
        }
        if let Some(objective) = &self.objective {
            for &(var, _) in &objective.expr().terms {
                if var.index() >= self.num_vars {
                    return Err(format!("objective: undefined variable {}", var.index()));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_ids_are_sequential() {
        let mut model = IpModel::new("test");
        let a = model.add_binary_var();
        let block = model.add_binary_vars(3);
        assert_eq!(a.index(), 0);
        assert_eq!(block[0].index(), 1);
        assert_eq!(block[2].index(), 3);
        assert_eq!(model.num_vars(), 4);
    }

    #[test]
    fn test_model_building() {
        let mut model = IpModel::new("test");
        let vars = model.add_binary_vars(3);
        model.add_equal("pick_two", LinearExpr::sum(vars.clone()), 2.0);
        model.add_less_eq(
            "weight",
            LinearExpr::new().term(vars[0], 3.0).term(vars[1], 4.0),
            5.0,
        );
        model.set_objective(Objective::Maximize(LinearExpr::sum(vars)));

        assert_eq!(model.constraint_count(), 2);
        assert!(model.objective.is_some());
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_undefined_variable_in_constraint() {
        let mut model = IpModel::new("test");
        model.add_less_eq("bad", LinearExpr::new().term(VarId(7), 1.0), 1.0);
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_undefined_variable_in_objective() {
        let mut model = IpModel::new("test");
        model.set_objective(Objective::Minimize(LinearExpr::new().term(VarId(0), 1.0)));
        assert!(model.validate().is_err());
    }
}
