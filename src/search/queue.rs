//! Open-node queue for tree exploration.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::SearchNode;
use crate::settings::NodeSelection;

/// Entry in the node queue with its selection priority.
struct QueuedNode {
    node: SearchNode,
    priority: f64, // Higher = selected first
}

impl PartialEq for QueuedNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedNode {}

impl PartialOrd for QueuedNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher priority first; ties resolved FIFO by node id.
        self.priority
            .partial_cmp(&other.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.id.cmp(&self.node.id))
    }
}

/// Queue of open branch-and-bound nodes.
///
/// Backed by a max-heap; under [`NodeSelection::Fifo`] every priority ties
/// and the id tie-break makes pop order equal insertion order, which is the
/// breadth-first base behavior.
pub struct NodeQueue {
    strategy: NodeSelection,
    heap: BinaryHeap<QueuedNode>,
    nodes_added: u64,
    nodes_popped: u64,
    best_bound: f64,
}

impl NodeQueue {
    /// Create an empty queue with the given selection strategy.
    pub fn new(strategy: NodeSelection) -> Self {
        Self {
            strategy,
            heap: BinaryHeap::new(),
            nodes_added: 0,
            nodes_popped: 0,
            best_bound: f64::INFINITY,
        }
    }

    /// Add a node to the queue.
    pub fn push(&mut self, node: SearchNode) {
        let priority = self.compute_priority(&node);

        if node.parent_bound < self.best_bound {
            self.best_bound = node.parent_bound;
        }

        self.heap.push(QueuedNode { node, priority });
        self.nodes_added += 1;
    }

    /// Get the next node to process.
    pub fn pop(&mut self) -> Option<SearchNode> {
        let queued = self.heap.pop()?;
        self.nodes_popped += 1;
        self.recompute_best_bound();
        Some(queued.node)
    }

    /// Best (lowest) parent bound across open nodes, `+inf` when empty.
    pub fn best_bound(&self) -> f64 {
        self.best_bound
    }

    /// Drop open nodes dominated by the incumbent.
    ///
    /// Returns the number of dropped nodes. The driver re-checks the bound
    /// at pop time as well, so this sweep is an optimization only.
    pub fn prune_by_bound(&mut self, incumbent_z: f64) -> usize {
        let before = self.heap.len();

        let remaining: Vec<QueuedNode> = self
            .heap
            .drain()
            .filter(|q| !q.node.can_prune(incumbent_z))
            .collect();

        self.heap = remaining.into_iter().collect();
        self.recompute_best_bound();

        before - self.heap.len()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of open nodes.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Total number of nodes ever added.
    pub fn total_added(&self) -> u64 {
        self.nodes_added
    }

    /// Total number of nodes ever popped.
    pub fn total_popped(&self) -> u64 {
        self.nodes_popped
    }

    fn compute_priority(&self, node: &SearchNode) -> f64 {
        match self.strategy {
            // Constant priority: the id tie-break yields insertion order.
            NodeSelection::Fifo => 0.0,
            // Lowest parent bound first (negate for the max-heap).
            NodeSelection::BestBound => -node.parent_bound,
        }
    }

    fn recompute_best_bound(&mut self) {
        self.best_bound = self
            .heap
            .iter()
            .map(|q| q.node.parent_bound)
            .fold(f64::INFINITY, f64::min);
    }
}
