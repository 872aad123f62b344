//! Mixed-integer linear program representation.
//!
//! A [`Model`] holds the variables, the objective, and an opaque constraint
//! set. The search engine only reads and tightens variable bounds; the
//! constraints are passed through untouched to the relaxation oracle.

use std::collections::BTreeMap;

use crate::error::{MilpError, MilpResult};

/// Objective sense as declared by the caller.
///
/// The engine itself always minimizes: a `Maximize` objective is negated
/// once when it is installed, and the final incumbent objective is negated
/// back once when the solution is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveSense {
    /// Minimize the objective.
    Minimize,

    /// Maximize the objective.
    Maximize,
}

/// Comparison operator of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintOp {
    /// Left-hand side <= right-hand side.
    Le,

    /// Left-hand side >= right-hand side.
    Ge,

    /// Left-hand side = right-hand side.
    Eq,
}

/// A linear constraint, opaque to the search engine.
#[derive(Debug, Clone)]
pub struct Constraint {
    /// Coefficients as (variable name, coefficient) pairs.
    pub coeffs: Vec<(String, f64)>,

    /// Comparison operator.
    pub op: ConstraintOp,

    /// Right-hand side constant.
    pub rhs: f64,
}

/// A decision variable with its current bounds.
#[derive(Debug, Clone, Copy)]
pub struct Variable {
    /// Lower bound (may be negative infinity).
    pub lb: f64,

    /// Upper bound (may be positive infinity).
    pub ub: f64,
}

/// A linear program instance.
///
/// Cloning a `Model` yields a fully independent copy; each search node owns
/// its own clone so that sibling subproblems never alias, and the oracle is
/// free to mutate backend state per solve.
#[derive(Debug, Clone, Default)]
pub struct Model {
    variables: BTreeMap<String, Variable>,
    objective: BTreeMap<String, f64>,
    maximize: bool,
    constraints: Vec<Constraint>,
}

impl Model {
    /// Create an empty model.
    pub fn new() -> Self {
        Default::default()
    }

    /// Add a variable with the given bounds.
    ///
    /// Contradictory bounds (lb > ub) are accepted: they surface as an
    /// infeasible relaxation at solve time, not as a construction error.
    pub fn add_var(&mut self, name: &str, lb: f64, ub: f64) -> MilpResult<()> {
        if lb.is_nan() || ub.is_nan() {
            return Err(MilpError::InvalidModel(format!(
                "variable `{}` has a NaN bound",
                name
            )));
        }

        if self.variables.contains_key(name) {
            return Err(MilpError::InvalidModel(format!(
                "variable names must be unique, `{}` was added twice",
                name
            )));
        }

        let _ = self.variables.insert(name.to_string(), Variable { lb, ub });
        Ok(())
    }

    /// Add a free variable (both bounds infinite).
    pub fn add_free_var(&mut self, name: &str) -> MilpResult<()> {
        self.add_var(name, f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Install the linear objective.
    ///
    /// A `Maximize` objective is stored negated so the engine only ever
    /// minimizes; the original sense is remembered for reporting.
    pub fn set_objective(
        &mut self,
        sense: ObjectiveSense,
        terms: &[(&str, f64)],
    ) -> MilpResult<()> {
        let mut objective = BTreeMap::new();
        let sign = match sense {
            ObjectiveSense::Minimize => 1.0,
            ObjectiveSense::Maximize => -1.0,
        };

        for &(name, coeff) in terms {
            if !self.variables.contains_key(name) {
                return Err(MilpError::InvalidModel(format!(
                    "objective references unknown variable `{}`",
                    name
                )));
            }
            *objective.entry(name.to_string()).or_insert(0.0) += sign * coeff;
        }

        self.objective = objective;
        self.maximize = sense == ObjectiveSense::Maximize;
        Ok(())
    }

    /// Add a linear constraint.
    pub fn add_constraint(
        &mut self,
        coeffs: &[(&str, f64)],
        op: ConstraintOp,
        rhs: f64,
    ) -> MilpResult<()> {
        if let Some(&(name, _)) = coeffs
            .iter()
            .find(|(name, _)| !self.variables.contains_key(*name))
        {
            return Err(MilpError::InvalidModel(format!(
                "constraint references unknown variable `{}`",
                name
            )));
        }

        self.constraints.push(Constraint {
            coeffs: coeffs
                .iter()
                .map(|&(name, coeff)| (name.to_string(), coeff))
                .collect(),
            op,
            rhs,
        });
        Ok(())
    }

    /// Tighten a variable's lower bound.
    pub fn set_lower_bound(&mut self, name: &str, lb: f64) -> MilpResult<()> {
        match self.variables.get_mut(name) {
            Some(var) => {
                var.lb = lb;
                Ok(())
            }
            None => Err(MilpError::UnknownVariable(name.to_string())),
        }
    }

    /// Tighten a variable's upper bound.
    pub fn set_upper_bound(&mut self, name: &str, ub: f64) -> MilpResult<()> {
        match self.variables.get_mut(name) {
            Some(var) => {
                var.ub = ub;
                Ok(())
            }
            None => Err(MilpError::UnknownVariable(name.to_string())),
        }
    }

    /// Check whether a variable exists.
    pub fn contains_var(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Get a variable's current bounds.
    pub fn bounds(&self, name: &str) -> Option<(f64, f64)> {
        self.variables.get(name).map(|v| (v.lb, v.ub))
    }

    /// Iterate over variables in name order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &Variable)> {
        self.variables.iter().map(|(name, var)| (name.as_str(), var))
    }

    /// Number of variables.
    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// The objective in minimize form, keyed by variable name.
    pub fn objective(&self) -> &BTreeMap<String, f64> {
        &self.objective
    }

    /// Whether the objective was originally declared as maximize.
    pub fn is_maximize(&self) -> bool {
        self.maximize
    }

    /// The constraint set, for consumption by the relaxation oracle.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_var_rejected() {
        let mut model = Model::new();
        model.add_var("x", 0.0, 1.0).unwrap();
        assert!(model.add_var("x", 0.0, 2.0).is_err());
    }

    #[test]
    fn test_nan_bound_rejected() {
        let mut model = Model::new();
        assert!(model.add_var("x", f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_contradictory_bounds_accepted() {
        // lb > ub must be representable: the oracle reports it infeasible.
        let mut model = Model::new();
        model.add_var("y", 5.0, 2.0).unwrap();
        assert_eq!(model.bounds("y"), Some((5.0, 2.0)));
    }

    #[test]
    fn test_maximize_negated_once() {
        let mut model = Model::new();
        model.add_var("x1", 0.0, 4.0).unwrap();
        model.add_var("x2", 0.0, 6.0).unwrap();
        model
            .set_objective(ObjectiveSense::Maximize, &[("x1", 3.0), ("x2", 5.0)])
            .unwrap();

        assert!(model.is_maximize());
        assert_eq!(model.objective()["x1"], -3.0);
        assert_eq!(model.objective()["x2"], -5.0);
    }

    #[test]
    fn test_minimize_kept_as_is() {
        let mut model = Model::new();
        model.add_var("x", 0.0, 1.0).unwrap();
        model
            .set_objective(ObjectiveSense::Minimize, &[("x", 2.5)])
            .unwrap();

        assert!(!model.is_maximize());
        assert_eq!(model.objective()["x"], 2.5);
    }

    #[test]
    fn test_objective_unknown_var() {
        let mut model = Model::new();
        model.add_var("x", 0.0, 1.0).unwrap();
        assert!(model
            .set_objective(ObjectiveSense::Minimize, &[("z", 1.0)])
            .is_err());
    }

    #[test]
    fn test_constraint_unknown_var() {
        let mut model = Model::new();
        model.add_var("x", 0.0, 1.0).unwrap();
        assert!(model
            .add_constraint(&[("x", 1.0), ("z", 1.0)], ConstraintOp::Le, 3.0)
            .is_err());
    }

    #[test]
    fn test_bound_tightening() {
        let mut model = Model::new();
        model.add_var("x", 0.0, 10.0).unwrap();

        model.set_upper_bound("x", 4.0).unwrap();
        model.set_lower_bound("x", 2.0).unwrap();
        assert_eq!(model.bounds("x"), Some((2.0, 4.0)));

        assert!(model.set_upper_bound("missing", 1.0).is_err());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut parent = Model::new();
        parent.add_var("x", 0.0, 10.0).unwrap();

        let mut child = parent.clone();
        child.set_upper_bound("x", 3.0).unwrap();

        assert_eq!(parent.bounds("x"), Some((0.0, 10.0)));
        assert_eq!(child.bounds("x"), Some((0.0, 3.0)));
    }
}
