//! Branch-and-bound search tree management.

mod branching;
mod node;
mod prune;
mod queue;
mod tree;

pub use branching::{select_branching, BranchDecision};
pub use node::{BoundChange, SearchNode};
pub use prune::{classify, NodeFate};
pub use queue::NodeQueue;
pub use tree::{BranchAndBound, SearchStats};
