//! LP relaxation oracle interface.
//!
//! The engine never solves linear programs itself. Each node's continuous
//! relaxation is delegated to an [`LpOracle`] implementation, injected at
//! construction time so the tree search is testable against a stub.

mod scripted;

pub use scripted::ScriptedOracle;

use std::collections::BTreeMap;

use crate::error::MilpResult;
use crate::model::Model;

/// Status reported by the relaxation oracle for one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LpStatus {
    /// An optimal solution to the relaxation was found.
    Optimal,

    /// The relaxation has no feasible point.
    Infeasible,

    /// The relaxation's objective is unbounded below.
    Unbounded,
}

/// Result of solving one node's LP relaxation.
#[derive(Debug, Clone)]
pub struct Relaxation {
    /// Solve status.
    pub status: LpStatus,

    /// Objective value in the engine's minimize sense
    /// (`+inf` unless the status is optimal).
    pub objective: f64,

    /// Per-variable values (empty unless the status is optimal).
    pub values: BTreeMap<String, f64>,
}

impl Relaxation {
    /// An optimal relaxation result.
    pub fn optimal(objective: f64, values: BTreeMap<String, f64>) -> Self {
        Self {
            status: LpStatus::Optimal,
            objective,
            values,
        }
    }

    /// An infeasible relaxation result.
    pub fn infeasible() -> Self {
        Self {
            status: LpStatus::Infeasible,
            objective: f64::INFINITY,
            values: BTreeMap::new(),
        }
    }

    /// An unbounded relaxation result.
    pub fn unbounded() -> Self {
        Self {
            status: LpStatus::Unbounded,
            objective: f64::INFINITY,
            values: BTreeMap::new(),
        }
    }
}

/// A continuous linear-programming solver used as a black box.
///
/// The engine calls `solve` exactly once per node, on that node's private
/// model clone. Implementations take `&mut self` because real LP backends
/// keep warm-start and factorization state between calls.
///
/// Anything the backend cannot express as one of the three [`LpStatus`]
/// variants (numerical breakdown, iteration limits, ...) must be returned
/// as an error; the engine treats that as a non-retryable fault, never as
/// infeasibility.
pub trait LpOracle {
    /// Solve the continuous relaxation of `model`.
    fn solve(&mut self, model: &Model) -> MilpResult<Relaxation>;
}
