//! Error types for the MILP solver.

use thiserror::Error;

/// Errors that can occur while building a model or running the search.
#[derive(Error, Debug)]
pub enum MilpError {
    /// A variable name was referenced that does not exist in the model.
    ///
    /// During a search this signals a model-construction or cloning bug,
    /// not a recoverable condition.
    #[error("unknown variable `{0}`")]
    UnknownVariable(String),

    /// Model construction precondition failed (duplicate name, NaN bound, ...)
    #[error("invalid model: {0}")]
    InvalidModel(String),

    /// The relaxation oracle failed outside the optimal/infeasible/unbounded
    /// statuses (numerical breakdown, exhausted script, backend error).
    ///
    /// This is deliberately distinct from an infeasible relaxation: an
    /// infeasible node is pruned, a failed oracle aborts the run.
    #[error("relaxation oracle failed: {0}")]
    Oracle(String),
}

/// Result type for MILP operations.
pub type MilpResult<T> = Result<T, MilpError>;
