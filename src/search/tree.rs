//! Branch-and-bound search driver.

use std::time::Instant;

use super::{classify, NodeFate, NodeQueue, SearchNode};
use crate::error::{MilpError, MilpResult};
use crate::model::{IncumbentTracker, MilpSolution, MilpStatus, Model};
use crate::oracle::LpOracle;
use crate::settings::MilpSettings;

/// Branch-and-bound search driver.
///
/// Owns the open-node queue, the incumbent, and the injected relaxation
/// oracle; pops, solves, classifies and expands nodes until the queue
/// empties (or the optional node limit is hit).
pub struct BranchAndBound<O> {
    oracle: O,
    settings: MilpSettings,
    queue: NodeQueue,
    incumbent: IncumbentTracker,
    next_node_id: u64,
    nodes_explored: u64,
    nodes_pruned: u64,
    unbounded_seen: bool,
    start_time: Option<Instant>,
}

impl<O: LpOracle> BranchAndBound<O> {
    /// Create a driver around an oracle and settings.
    pub fn new(oracle: O, settings: MilpSettings) -> Self {
        let queue = NodeQueue::new(settings.node_selection);
        Self {
            oracle,
            settings,
            queue,
            incumbent: IncumbentTracker::new(),
            next_node_id: 1, // 0 reserved for root
            nodes_explored: 0,
            nodes_pruned: 0,
            unbounded_seen: false,
            start_time: None,
        }
    }

    /// Solve a mixed-integer linear program.
    ///
    /// `integer_vars` names the variables restricted to integer values; each
    /// must exist in `model`. The model's objective must already be
    /// installed (it is normalized to minimize internally); the reported
    /// objective is in the original sense.
    ///
    /// All state is reset at call start, so a driver can be reused.
    pub fn solve(&mut self, model: &Model, integer_vars: &[&str]) -> MilpResult<MilpSolution> {
        for name in integer_vars {
            if !model.contains_var(name) {
                return Err(MilpError::UnknownVariable(name.to_string()));
            }
        }

        // Sorted, deduplicated names make branching tie-breaks lexicographic
        // and node counts reproducible.
        let mut int_vars: Vec<String> = integer_vars.iter().map(|s| s.to_string()).collect();
        int_vars.sort();
        int_vars.dedup();

        self.reset();
        self.queue.push(SearchNode::root(model.clone()));

        let mut limit_hit = false;
        while let Some(node) = self.queue.pop() {
            if let Some(limit) = self.settings.max_nodes {
                if self.nodes_explored >= limit {
                    limit_hit = true;
                    break;
                }
            }
            self.nodes_explored += 1;

            // The incumbent may have improved since this node was queued;
            // its cached parent bound must be checked against the latest z.
            if node.can_prune(self.incumbent.z) {
                self.nodes_pruned += 1;
                log::debug!("node {}: bound prune before solve", node.id);
                continue;
            }

            let relax = self.oracle.solve(&node.model)?;

            match classify(
                &relax,
                self.incumbent.z,
                &int_vars,
                self.settings.int_feas_tol,
            )? {
                NodeFate::Infeasible => {
                    log::debug!("node {}: infeasible prune", node.id);
                }
                NodeFate::Unbounded => {
                    log::debug!("node {}: unbounded relaxation", node.id);
                    self.unbounded_seen = true;
                }
                NodeFate::Dominated => {
                    self.nodes_pruned += 1;
                    log::debug!("node {}: bound prune (z = {:.6e})", node.id, relax.objective);
                }
                NodeFate::IntegerFeasible => {
                    if self.incumbent.update(&relax.values, relax.objective) {
                        let dropped = self.queue.prune_by_bound(self.incumbent.z);
                        self.nodes_pruned += dropped as u64;

                        if self.settings.verbose {
                            log::info!(
                                "node {}: new incumbent z = {:.6e}, dropped {} open nodes",
                                node.id,
                                relax.objective,
                                dropped
                            );
                        }
                    }
                }
                NodeFate::Branch(decision) => {
                    log::debug!(
                        "node {}: branching on `{}` = {} ({} / {})",
                        node.id,
                        decision.var,
                        decision.value,
                        decision.down,
                        decision.up
                    );

                    let down = node.child(self.next_id(), relax.objective, decision.down)?;
                    let up = node.child(self.next_id(), relax.objective, decision.up)?;
                    self.queue.push(down);
                    self.queue.push(up);
                }
            }

            self.log_progress();
        }

        let status = if limit_hit {
            MilpStatus::NodeLimit
        } else if self.incumbent.has_incumbent() {
            MilpStatus::Optimal
        } else if self.unbounded_seen {
            MilpStatus::Unbounded
        } else {
            MilpStatus::Infeasible
        };

        Ok(self.finalize(model, status))
    }

    /// Borrow the injected oracle.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Consume the driver and recover the oracle.
    pub fn into_oracle(self) -> O {
        self.oracle
    }

    /// Telemetry snapshot of the current run.
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            nodes_explored: self.nodes_explored,
            nodes_pruned: self.nodes_pruned,
            nodes_open: self.queue.len() as u64,
            incumbent_updates: self.incumbent.update_count,
            best_bound: self.queue.best_bound(),
            incumbent_z: self.incumbent.z,
            elapsed_ms: self.elapsed_ms(),
        }
    }

    fn reset(&mut self) {
        self.queue = NodeQueue::new(self.settings.node_selection);
        self.incumbent = IncumbentTracker::new();
        self.next_node_id = 1;
        self.nodes_explored = 0;
        self.nodes_pruned = 0;
        self.unbounded_seen = false;
        self.start_time = Some(Instant::now());
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_node_id;
        self.next_node_id += 1;
        id
    }

    fn elapsed_ms(&self) -> u64 {
        self.start_time
            .map(|t| t.elapsed().as_millis() as u64)
            .unwrap_or(0)
    }

    fn finalize(&self, model: &Model, status: MilpStatus) -> MilpSolution {
        // Re-negate the scalar objective exactly once for maximize models;
        // variable values are never negated.
        let objective = if self.incumbent.has_incumbent() {
            if model.is_maximize() {
                -self.incumbent.z
            } else {
                self.incumbent.z
            }
        } else {
            f64::INFINITY
        };

        MilpSolution {
            status,
            values: self.incumbent.values.clone(),
            objective,
            nodes_explored: self.nodes_explored,
            nodes_pruned: self.nodes_pruned,
            incumbent_updates: self.incumbent.update_count,
            solve_time_ms: self.elapsed_ms(),
        }
    }

    fn log_progress(&self) {
        if !self.settings.verbose {
            return;
        }

        if self.nodes_explored % self.settings.log_freq != 0 {
            return;
        }

        log::info!(
            "nodes: {} ({} open) | bound: {:.6e} | incumbent: {:.6e} | time: {:.1}s",
            self.nodes_explored,
            self.queue.len(),
            self.queue.best_bound(),
            self.incumbent.z,
            self.elapsed_ms() as f64 / 1000.0,
        );
    }
}

/// Telemetry from the search driver.
#[derive(Debug, Clone, Copy)]
pub struct SearchStats {
    /// Nodes popped and solved.
    pub nodes_explored: u64,

    /// Nodes discarded by bound.
    pub nodes_pruned: u64,

    /// Nodes currently open.
    pub nodes_open: u64,

    /// Incumbent replacements.
    pub incumbent_updates: u64,

    /// Best (lowest) parent bound across open nodes.
    pub best_bound: f64,

    /// Internal objective of the incumbent (`+inf` if none).
    pub incumbent_z: f64,

    /// Elapsed wall-clock time in milliseconds.
    pub elapsed_ms: u64,
}
