//! Configuration settings for the branch-and-bound search.

/// Node selection strategy for the search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeSelection {
    /// First-in first-out (breadth-first) exploration.
    #[default]
    Fifo,

    /// Always select the open node with the best (lowest) parent bound.
    BestBound,
}

/// Branch-and-bound settings.
#[derive(Debug, Clone)]
pub struct MilpSettings {
    /// Maximum number of nodes to explore (`None` = run to exhaustion).
    pub max_nodes: Option<u64>,

    /// Integer feasibility tolerance.
    /// A variable is considered integer if |x - round(x)| <= int_feas_tol.
    pub int_feas_tol: f64,

    /// Node selection strategy.
    pub node_selection: NodeSelection,

    /// Print progress information.
    pub verbose: bool,

    /// Log frequency (print every N nodes).
    pub log_freq: u64,
}

impl Default for MilpSettings {
    fn default() -> Self {
        Self {
            max_nodes: None,
            int_feas_tol: 1e-9,
            node_selection: NodeSelection::default(),
            verbose: false,
            log_freq: 100,
        }
    }
}

impl MilpSettings {
    /// Create settings with verbose output enabled.
    pub fn verbose() -> Self {
        let mut s = Self::default();
        s.verbose = true;
        s.log_freq = 1;
        s
    }

    /// Set maximum nodes.
    pub fn with_max_nodes(mut self, nodes: u64) -> Self {
        self.max_nodes = Some(nodes);
        self
    }

    /// Set the integer feasibility tolerance.
    pub fn with_int_feas_tol(mut self, tol: f64) -> Self {
        self.int_feas_tol = tol;
        self
    }

    /// Set the node selection strategy.
    pub fn with_node_selection(mut self, strategy: NodeSelection) -> Self {
        self.node_selection = strategy;
        self
    }
}
