//! Problem and solution types for the MILP solver.

mod problem;
mod solution;

pub use problem::{Constraint, ConstraintOp, Model, ObjectiveSense, Variable};
pub use solution::{IncumbentTracker, MilpSolution, MilpStatus};
