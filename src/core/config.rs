//! Engine and tournament configuration.
//!
//! Both structs are plain serde data with sensible defaults and `with_*`
//! builder methods, so a front end can ship them as JSON.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Decision engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for opening-book selection.
    /// Same seed produces the same sequence of openings.
    pub seed: u64,

    /// Apply the rule-ordered heuristics before searching.
    /// When false every move comes from minimax.
    pub heuristics: bool,

    /// Use alpha-beta pruning in minimax.
    /// Selects the same move as the plain search, visiting fewer nodes.
    pub alpha_beta: bool,

    /// Memoize decisions per (board, automated side).
    pub memoize: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            heuristics: true,
            alpha_beta: false,
            memoize: true,
        }
    }
}

impl EngineConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable the heuristic rules.
    pub fn with_heuristics(mut self, enabled: bool) -> Self {
        self.heuristics = enabled;
        self
    }

    /// Enable or disable alpha-beta pruning.
    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }

    /// Enable or disable memoization.
    pub fn with_memoize(mut self, enabled: bool) -> Self {
        self.memoize = enabled;
        self
    }
}

/// Tournament configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Games in one tournament (default: 6).
    pub total_games: u32,

    /// Whether the human moves first in the opening game.
    /// The first mover alternates after that.
    pub human_starts: bool,

    /// Configuration for the engine opponent.
    pub engine: EngineConfig,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            total_games: 6,
            human_starts: true,
            engine: EngineConfig::default(),
        }
    }
}

impl TournamentConfig {
    pub fn with_total_games(mut self, total_games: u32) -> Self {
        self.total_games = total_games;
        self
    }

    pub fn with_human_starts(mut self, human_starts: bool) -> Self {
        self.human_starts = human_starts;
        self
    }

    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Reject configurations that cannot run a tournament.
    pub fn validate(&self) -> Result<()> {
        if self.total_games == 0 {
            return Err(Error::InvalidConfiguration {
                message: "total_games must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
