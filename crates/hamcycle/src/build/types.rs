//! Search configuration.

/// Knobs for the backtracking builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchCfg {
    /// Upper bound on pushes + pops. `None` searches until success or exhaustion.
    /// Large grids can backtrack for a very long time; callers that need a
    /// bounded answer set this.
    pub max_steps: Option<u64>,
    /// Reject moves that leave the start cell with no unvisited neighbor while
    /// the path is still incomplete. Such branches can never close the loop.
    pub prune_closure: bool,
    /// Reject moves that leave an unvisited neighbor of the old tip with fewer
    /// than two possible tour edges (free neighbors, the new tip, the start).
    pub prune_strands: bool,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            max_steps: None,
            prune_closure: true,
            prune_strands: true,
        }
    }
}
