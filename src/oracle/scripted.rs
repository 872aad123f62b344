//! Scripted stub oracle for tests.

use std::collections::{BTreeMap, VecDeque};

use crate::error::{MilpError, MilpResult};
use crate::model::Model;

use super::{LpOracle, Relaxation};

/// An [`LpOracle`] that replays a fixed sequence of relaxation results.
///
/// Responses are consumed in FIFO order, one per `solve` call; since the
/// engine's exploration order is deterministic (FIFO queue, lexicographic
/// branching tie-break), a script lines up one-to-one with the node
/// sequence. The oracle also records a bounds snapshot of every model it is
/// handed, so tests can assert how branching tightened the domains.
#[derive(Debug, Default)]
pub struct ScriptedOracle {
    script: VecDeque<Relaxation>,
    seen_bounds: Vec<BTreeMap<String, (f64, f64)>>,
}

impl ScriptedOracle {
    /// Create an oracle with an empty script.
    pub fn new() -> Self {
        Default::default()
    }

    /// Append an optimal response with the given objective and values.
    pub fn then_optimal(mut self, objective: f64, values: &[(&str, f64)]) -> Self {
        let values = values
            .iter()
            .map(|&(name, val)| (name.to_string(), val))
            .collect();
        self.script.push_back(Relaxation::optimal(objective, values));
        self
    }

    /// Append an infeasible response.
    pub fn then_infeasible(mut self) -> Self {
        self.script.push_back(Relaxation::infeasible());
        self
    }

    /// Append an unbounded response.
    pub fn then_unbounded(mut self) -> Self {
        self.script.push_back(Relaxation::unbounded());
        self
    }

    /// Number of `solve` calls served so far.
    pub fn calls(&self) -> usize {
        self.seen_bounds.len()
    }

    /// Bounds snapshot of the model passed to the `i`-th solve call.
    pub fn bounds_at(&self, call: usize) -> Option<&BTreeMap<String, (f64, f64)>> {
        self.seen_bounds.get(call)
    }
}

impl LpOracle for ScriptedOracle {
    fn solve(&mut self, model: &Model) -> MilpResult<Relaxation> {
        self.seen_bounds.push(
            model
                .variables()
                .map(|(name, var)| (name.to_string(), (var.lb, var.ub)))
                .collect(),
        );

        self.script
            .pop_front()
            .ok_or_else(|| MilpError::Oracle("scripted oracle ran out of responses".to_string()))
    }
}
