//! Branching variable selection.

use std::collections::BTreeMap;

use super::BoundChange;
use crate::error::{MilpError, MilpResult};

/// A branching decision: one fractional variable split into two children.
#[derive(Debug, Clone)]
pub struct BranchDecision {
    /// Variable to branch on.
    pub var: String,

    /// Current (fractional) relaxed value.
    pub value: f64,

    /// Bound change for the "down" child (var <= floor(value)).
    pub down: BoundChange,

    /// Bound change for the "up" child (var >= ceil(value)).
    pub up: BoundChange,

    /// Distance of the fractional part to 0.5; lower means more ambiguous
    /// and therefore preferred. For logging only.
    pub score: f64,
}

/// Select the integer variable whose fractional part is closest to 0.5.
///
/// `integer_vars` must be sorted: ties on the score go to the first name
/// encountered, so sorted input makes selection lexicographic and
/// reproducible. Returns `None` when every integer variable is within `tol`
/// of an integer value.
///
/// A declared integer variable missing from the relaxation values is a
/// model/oracle inconsistency and fails the run.
pub fn select_branching(
    values: &BTreeMap<String, f64>,
    integer_vars: &[String],
    tol: f64,
) -> MilpResult<Option<BranchDecision>> {
    let mut best: Option<(&str, f64, f64)> = None;

    for name in integer_vars {
        let x = *values
            .get(name)
            .ok_or_else(|| MilpError::UnknownVariable(name.clone()))?;

        if (x - x.round()).abs() <= tol {
            continue;
        }

        // frac(x) in [0, 1), matching x mod 1 for negative values too
        let frac = x.rem_euclid(1.0);
        let score = (frac - 0.5).abs();

        match best {
            Some((_, _, best_score)) if score >= best_score => {}
            _ => best = Some((name.as_str(), x, score)),
        }
    }

    Ok(best.map(|(var, value, score)| BranchDecision {
        var: var.to_string(),
        value,
        down: BoundChange::down(var, value),
        up: BoundChange::up(var, value),
        score,
    }))
}
