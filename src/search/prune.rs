//! Node classification (pruning policy).

use super::{select_branching, BranchDecision};
use crate::error::MilpResult;
use crate::oracle::{LpStatus, Relaxation};

/// What to do with a node after its relaxation has been solved.
#[derive(Debug, Clone)]
pub enum NodeFate {
    /// Relaxation infeasible: discard, no children.
    Infeasible,

    /// Relaxation unbounded: discard, no children; the driver records the
    /// sticky unbounded flag.
    Unbounded,

    /// Relaxed objective cannot beat the incumbent (ties included):
    /// discard without checking integrality.
    Dominated,

    /// Feasible, improving, and every integer variable is integral:
    /// the node's solution replaces the incumbent.
    IntegerFeasible,

    /// Feasible and improving but some integer variable is fractional:
    /// split into two children.
    Branch(BranchDecision),
}

/// Classify a solved node against the current incumbent.
///
/// The bound check runs before the integrality check: an equal-or-worse
/// relaxation is pruned immediately, which is safe because a tied integral
/// solution could not replace the incumbent anyway.
pub fn classify(
    relax: &Relaxation,
    incumbent_z: f64,
    integer_vars: &[String],
    tol: f64,
) -> MilpResult<NodeFate> {
    match relax.status {
        LpStatus::Infeasible => return Ok(NodeFate::Infeasible),
        LpStatus::Unbounded => return Ok(NodeFate::Unbounded),
        LpStatus::Optimal => {}
    }

    if relax.objective >= incumbent_z {
        return Ok(NodeFate::Dominated);
    }

    match select_branching(&relax.values, integer_vars, tol)? {
        Some(decision) => Ok(NodeFate::Branch(decision)),
        None => Ok(NodeFate::IntegerFeasible),
    }
}
