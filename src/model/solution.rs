//! MILP solution types.

use std::collections::BTreeMap;

/// Terminal outcome of a branch-and-bound run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilpStatus {
    /// An integer-optimal solution was found and proven optimal.
    Optimal,

    /// No relaxation ever solved to optimality: the problem is infeasible.
    Infeasible,

    /// An unbounded relaxation was observed and no integer-feasible
    /// incumbent was ever found.
    Unbounded,

    /// The node limit was hit; the best incumbent so far (if any) is
    /// returned without an optimality proof.
    NodeLimit,
}

/// Result of a branch-and-bound run, with search telemetry.
#[derive(Debug, Clone)]
pub struct MilpSolution {
    /// Terminal status.
    pub status: MilpStatus,

    /// Variable assignment of the incumbent (empty if none was found).
    pub values: BTreeMap<String, f64>,

    /// Objective value in the *original* sense: if the model was declared
    /// maximize, the internal minimize objective has been negated back
    /// exactly once. `+inf` when no incumbent exists.
    pub objective: f64,

    /// Number of nodes popped and solved.
    pub nodes_explored: u64,

    /// Number of nodes discarded by bound before or after solving.
    pub nodes_pruned: u64,

    /// Number of times the incumbent was replaced.
    pub incumbent_updates: u64,

    /// Wall-clock solve time in milliseconds.
    pub solve_time_ms: u64,
}

impl MilpSolution {
    /// Returns true if an integer-feasible assignment is available.
    pub fn has_solution(&self) -> bool {
        match self.status {
            MilpStatus::Optimal => true,
            MilpStatus::NodeLimit => !self.values.is_empty(),
            MilpStatus::Infeasible | MilpStatus::Unbounded => false,
        }
    }
}

/// Tracks the best known integer-feasible solution (incumbent).
///
/// The engine minimizes internally, so `z` starts at `+inf` and only ever
/// decreases.
#[derive(Debug, Clone)]
pub struct IncumbentTracker {
    /// Variable assignment of the incumbent (empty if none).
    pub values: BTreeMap<String, f64>,

    /// Internal (minimize-sense) objective of the incumbent.
    pub z: f64,

    /// Number of times the incumbent was replaced.
    pub update_count: u64,
}

impl Default for IncumbentTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl IncumbentTracker {
    /// Create an empty tracker with `z = +inf`.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
            z: f64::INFINITY,
            update_count: 0,
        }
    }

    /// Check whether an incumbent has been recorded.
    pub fn has_incumbent(&self) -> bool {
        !self.values.is_empty()
    }

    /// Try to replace the incumbent with a new solution.
    ///
    /// Only a strictly improving objective is accepted; a tie cannot improve
    /// the incumbent and is rejected. Returns true if replaced.
    pub fn update(&mut self, values: &BTreeMap<String, f64>, z: f64) -> bool {
        if z < self.z {
            self.values = values.clone();
            self.z = z;
            self.update_count += 1;
            true
        } else {
            false
        }
    }
}
