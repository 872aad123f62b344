//! Search node representation.

use std::fmt;

use crate::error::MilpResult;
use crate::model::Model;

/// The single bound tightening that distinguishes a child from its parent.
#[derive(Debug, Clone)]
pub struct BoundChange {
    /// Variable the parent branched on.
    pub var: String,

    /// New lower bound (`ceil(x)` on the up branch).
    pub new_lb: Option<f64>,

    /// New upper bound (`floor(x)` on the down branch).
    pub new_ub: Option<f64>,
}

impl BoundChange {
    /// Create a "down" branch: var <= floor(value).
    pub fn down(var: &str, value: f64) -> Self {
        Self {
            var: var.to_string(),
            new_lb: None,
            new_ub: Some(value.floor()),
        }
    }

    /// Create an "up" branch: var >= ceil(value).
    pub fn up(var: &str, value: f64) -> Self {
        Self {
            var: var.to_string(),
            new_lb: Some(value.ceil()),
            new_ub: None,
        }
    }

    /// Apply the tightening to a model.
    ///
    /// Fails if the variable is missing, which signals a cloning bug.
    pub fn apply(&self, model: &mut Model) -> MilpResult<()> {
        if let Some(lb) = self.new_lb {
            model.set_lower_bound(&self.var, lb)?;
        }
        if let Some(ub) = self.new_ub {
            model.set_upper_bound(&self.var, ub)?;
        }
        Ok(())
    }
}

impl fmt::Display for BoundChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.new_lb, self.new_ub) {
            (Some(lb), None) => write!(f, "{} >= {}", self.var, lb),
            (None, Some(ub)) => write!(f, "{} <= {}", self.var, ub),
            _ => write!(f, "{}", self.var),
        }
    }
}

/// A node in the branch-and-bound tree.
///
/// Each node owns a full clone of its parent's model with one bound
/// tightened, so sibling subproblems never share mutable state.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Unique node identifier, assigned in creation order.
    pub id: u64,

    /// Depth in the tree (0 for root).
    pub depth: usize,

    /// Objective of the parent's relaxation (`-inf` for the root).
    ///
    /// A lower bound on every solution in this subtree; used to re-check
    /// bound pruning against the incumbent current at pop time.
    pub parent_bound: f64,

    /// Bound change from the parent (None for the root). Informational.
    pub branched_on: Option<BoundChange>,

    /// This node's private model instance.
    pub model: Model,
}

impl SearchNode {
    /// Create the root node around its own clone of the model.
    pub fn root(model: Model) -> Self {
        Self {
            id: 0,
            depth: 0,
            parent_bound: f64::NEG_INFINITY,
            branched_on: None,
            model,
        }
    }

    /// Create a child node by cloning this node's model and applying one
    /// bound tightening.
    pub fn child(&self, id: u64, parent_bound: f64, change: BoundChange) -> MilpResult<Self> {
        let mut model = self.model.clone();
        change.apply(&mut model)?;

        Ok(Self {
            id,
            depth: self.depth + 1,
            parent_bound,
            branched_on: Some(change),
            model,
        })
    }

    /// Check if this node is dominated by an incumbent.
    ///
    /// Non-strict: a subtree whose bound ties the incumbent cannot contain a
    /// strictly improving solution.
    pub fn can_prune(&self, incumbent_z: f64) -> bool {
        self.parent_bound >= incumbent_z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with_x() -> Model {
        let mut model = Model::new();
        model.add_var("x", 0.0, 5.0).unwrap();
        model
    }

    #[test]
    fn test_root_node() {
        let root = SearchNode::root(model_with_x());
        assert_eq!(root.id, 0);
        assert_eq!(root.depth, 0);
        assert_eq!(root.parent_bound, f64::NEG_INFINITY);
        assert!(root.branched_on.is_none());
    }

    #[test]
    fn test_bound_changes() {
        // Down branch on x with value 2.7: x <= 2
        let down = BoundChange::down("x", 2.7);
        assert_eq!(down.new_ub, Some(2.0));
        assert_eq!(down.new_lb, None);

        // Up branch on x with value 2.7: x >= 3
        let up = BoundChange::up("x", 2.7);
        assert_eq!(up.new_lb, Some(3.0));
        assert_eq!(up.new_ub, None);

        assert_eq!(down.to_string(), "x <= 2");
        assert_eq!(up.to_string(), "x >= 3");
    }

    #[test]
    fn test_negative_fractional_value() {
        let down = BoundChange::down("x", -2.3);
        let up = BoundChange::up("x", -2.3);
        assert_eq!(down.new_ub, Some(-3.0));
        assert_eq!(up.new_lb, Some(-2.0));
    }

    #[test]
    fn test_child_node() {
        let root = SearchNode::root(model_with_x());

        let child = root
            .child(1, -10.0, BoundChange::down("x", 2.7))
            .unwrap();
        assert_eq!(child.id, 1);
        assert_eq!(child.depth, 1);
        assert_eq!(child.parent_bound, -10.0);
        assert_eq!(child.model.bounds("x"), Some((0.0, 2.0)));

        // Parent model untouched
        assert_eq!(root.model.bounds("x"), Some((0.0, 5.0)));
    }

    #[test]
    fn test_child_unknown_var() {
        let root = SearchNode::root(model_with_x());
        assert!(root.child(1, 0.0, BoundChange::up("y", 1.5)).is_err());
    }

    #[test]
    fn test_pruning_non_strict() {
        let mut node = SearchNode::root(model_with_x());
        node.parent_bound = 10.0;

        assert!(!node.can_prune(15.0));
        assert!(node.can_prune(10.0)); // tie prunes
        assert!(node.can_prune(8.0));

        // Root bound never prunes against an empty incumbent
        let root = SearchNode::root(model_with_x());
        assert!(!root.can_prune(f64::INFINITY));
    }
}
