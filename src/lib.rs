//! Branch-and-bound search engine for mixed-integer linear programs.
//!
//! The engine explores a tree of LP relaxations: each node owns a private
//! clone of the model with tighter variable bounds, an injected [`LpOracle`]
//! solves the continuous relaxation, and the node is then pruned by
//! infeasibility, pruned by bound, accepted as a new incumbent, or split on
//! its most fractional integer variable (floor/ceiling branching).
//!
//! Solving the relaxations is out of scope: any LP backend can be plugged in
//! through the [`LpOracle`] trait, and tests run against a scripted stub.
//!
//! ```
//! use milp_bb::{
//!     solve_milp, ConstraintOp, MilpSettings, MilpStatus, Model, ObjectiveSense, ScriptedOracle,
//! };
//!
//! let mut model = Model::new();
//! model.add_var("x1", 0.0, 4.0)?;
//! model.add_var("x2", 0.0, 6.0)?;
//! model.set_objective(ObjectiveSense::Maximize, &[("x1", 3.0), ("x2", 5.0)])?;
//! model.add_constraint(&[("x1", 3.0), ("x2", 2.0)], ConstraintOp::Ge, 18.0)?;
//!
//! // The oracle sees the minimize-normalized objective; with no integer
//! // variables the root relaxation is accepted immediately.
//! let oracle = ScriptedOracle::new().then_optimal(-36.0, &[("x1", 2.0), ("x2", 6.0)]);
//!
//! let solution = solve_milp(&model, &[], oracle, MilpSettings::default())?;
//! assert_eq!(solution.status, MilpStatus::Optimal);
//! assert_eq!(solution.objective, 36.0); // reported back in maximize sense
//! # Ok::<(), milp_bb::MilpError>(())
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod model;
pub mod oracle;
pub mod search;
pub mod settings;

pub use error::{MilpError, MilpResult};
pub use model::{
    Constraint, ConstraintOp, IncumbentTracker, MilpSolution, MilpStatus, Model, ObjectiveSense,
    Variable,
};
pub use oracle::{LpOracle, LpStatus, Relaxation, ScriptedOracle};
pub use search::{BranchAndBound, SearchStats};
pub use settings::{MilpSettings, NodeSelection};

/// Solve a mixed-integer linear program with the given relaxation oracle.
///
/// Convenience wrapper around [`BranchAndBound`] for one-shot solves.
pub fn solve_milp<O: LpOracle>(
    model: &Model,
    integer_vars: &[&str],
    oracle: O,
    settings: MilpSettings,
) -> MilpResult<MilpSolution> {
    BranchAndBound::new(oracle, settings).solve(model, integer_vars)
}
