//! The decision engine: rule-ordered heuristics with a minimax fallback.
//!
//! ## Policy
//!
//! For a board and the side the engine plays, the first rule that yields a
//! cell decides:
//!
//! 1. memo cache hit
//! 2. opening book (empty board only)
//! 3. immediate win
//! 4. immediate block
//! 5. fork
//! 6. fork block
//! 7. pattern library
//! 8. center
//! 9. corner opposite an opponent corner
//! 10. any corner
//! 11. any edge
//! 12. minimax
//!
//! Computed moves are written to the cache keyed by (board, automated side).
//! Opening-book moves are not cached so openings keep varying.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, EngineConfig, GameRng, Side};

use super::cache::MoveCache;
use super::heuristics;
use super::minimax::Minimax;
use super::patterns;
use super::stats::DecisionStats;

/// The policy step that produced a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    Opening,
    Win,
    Block,
    Fork,
    BlockFork,
    Pattern,
    Center,
    OppositeCorner,
    Corner,
    Edge,
    Minimax,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Rule::Opening => "opening book",
            Rule::Win => "winning move",
            Rule::Block => "block",
            Rule::Fork => "fork",
            Rule::BlockFork => "fork block",
            Rule::Pattern => "pattern",
            Rule::Center => "center",
            Rule::OppositeCorner => "opposite corner",
            Rule::Corner => "corner",
            Rule::Edge => "edge",
            Rule::Minimax => "minimax",
        };
        write!(f, "{text}")
    }
}

/// A chosen move and why it was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub cell: usize,
    pub rule: Rule,
    /// Served from the memo cache.
    pub cached: bool,
}

/// Chooses moves for the automated side.
///
/// Owns its memo cache and opening RNG; there is no shared global state.
#[derive(Clone, Debug)]
pub struct DecisionEngine {
    config: EngineConfig,
    cache: MoveCache,
    rng: GameRng,
    stats: DecisionStats,
}

impl DecisionEngine {
    pub fn new(config: EngineConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            cache: MoveCache::new(),
            rng,
            stats: DecisionStats::default(),
        }
    }

    /// Replace the opening RNG.
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn cache(&self) -> &MoveCache {
        &self.cache
    }

    #[must_use]
    pub fn stats(&self) -> &DecisionStats {
        &self.stats
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Choose a cell for `automated` on `board`.
    ///
    /// Returns `None` only when the board is full.
    pub fn choose_move(&mut self, board: &Board, automated: Side) -> Option<Decision> {
        if board.is_full() {
            return None;
        }

        let start = Instant::now();
        let decision = self.decide(board, automated)?;
        self.stats.decisions += 1;
        self.stats.time_us += start.elapsed().as_micros() as u64;

        debug_assert!(board.is_empty(decision.cell), "engine chose occupied cell");
        debug!(
            cell = decision.cell,
            rule = %decision.rule,
            cached = decision.cached,
            side = %automated,
            "engine decision"
        );
        Some(decision)
    }

    fn decide(&mut self, board: &Board, automated: Side) -> Option<Decision> {
        if self.config.memoize {
            if let Some(hit) = self.cache.get(board, automated) {
                self.stats.cache_hits += 1;
                return Some(Decision {
                    cell: hit.cell,
                    rule: hit.rule,
                    cached: true,
                });
            }
        }

        if self.config.heuristics && board.is_blank() {
            self.stats.openings += 1;
            return Some(Decision {
                cell: patterns::opening_move(&mut self.rng),
                rule: Rule::Opening,
                cached: false,
            });
        }

        let (cell, rule) = match self.heuristic(board, automated) {
            Some(found) => found,
            None => (self.search(board, automated)?, Rule::Minimax),
        };

        if self.config.memoize {
            self.cache.insert(board, automated, cell, rule);
        }
        Some(Decision {
            cell,
            rule,
            cached: false,
        })
    }

    /// Rules 3 through 11, in order.
    fn heuristic(&self, board: &Board, automated: Side) -> Option<(usize, Rule)> {
        if !self.config.heuristics {
            return None;
        }
        let opponent = automated.opponent();

        heuristics::winning_move(board, automated)
            .map(|c| (c, Rule::Win))
            .or_else(|| heuristics::winning_move(board, opponent).map(|c| (c, Rule::Block)))
            .or_else(|| heuristics::fork_move(board, automated).map(|c| (c, Rule::Fork)))
            .or_else(|| heuristics::block_fork_move(board, automated).map(|c| (c, Rule::BlockFork)))
            .or_else(|| patterns::pattern_move(board, automated).map(|c| (c, Rule::Pattern)))
            .or_else(|| heuristics::center_move(board).map(|c| (c, Rule::Center)))
            .or_else(|| {
                heuristics::opposite_corner_move(board, automated).map(|c| (c, Rule::OppositeCorner))
            })
            .or_else(|| heuristics::corner_move(board).map(|c| (c, Rule::Corner)))
            .or_else(|| heuristics::edge_move(board).map(|c| (c, Rule::Edge)))
    }

    fn search(&mut self, board: &Board, automated: Side) -> Option<usize> {
        let mut minimax = Minimax::new(automated).with_pruning(self.config.alpha_beta);
        let best = minimax.best_move(board);
        self.stats.searches += 1;
        self.stats.nodes_searched += minimax.nodes();
        best.map(|(cell, _)| cell)
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
