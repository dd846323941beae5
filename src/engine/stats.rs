//! Decision statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected across engine decisions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionStats {
    /// Moves returned (cached or computed).
    pub decisions: u32,

    /// Decisions answered from the memo cache.
    pub cache_hits: u32,

    /// Decisions taken from the opening book.
    pub openings: u32,

    /// Decisions that fell through to minimax.
    pub searches: u32,

    /// Nodes visited by minimax.
    pub nodes_searched: u64,

    /// Total time spent deciding (microseconds).
    pub time_us: u64,
}

impl DecisionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of decisions served from the cache.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.decisions == 0 {
            0.0
        } else {
            f64::from(self.cache_hits) / f64::from(self.decisions)
        }
    }

    /// Average minimax nodes per search.
    #[must_use]
    pub fn avg_nodes_per_search(&self) -> f64 {
        if self.searches == 0 {
            0.0
        } else {
            self.nodes_searched as f64 / f64::from(self.searches)
        }
    }
}
