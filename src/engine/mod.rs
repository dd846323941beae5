//! Move selection for the automated side.
//!
//! ## Overview
//!
//! [`DecisionEngine`] applies a fixed priority list of tic-tac-toe rules
//! (win, block, fork, fork block, memorized patterns, positional
//! preferences) and falls back to exhaustive [`Minimax`] search. Decisions
//! are memoized per (board, automated side).
//!
//! ## Usage
//!
//! ```rust
//! use ttt_engine::core::{Board, EngineConfig, Side};
//! use ttt_engine::engine::{DecisionEngine, Rule};
//!
//! let mut engine = DecisionEngine::new(EngineConfig::default());
//! let board: Board = "XX.|OO.|...".parse().unwrap();
//!
//! let decision = engine.choose_move(&board, Side::PlayerB).unwrap();
//! assert_eq!(decision.cell, 5);
//! assert_eq!(decision.rule, Rule::Win);
//! ```

pub mod cache;
pub mod decision;
pub mod heuristics;
pub mod minimax;
pub mod patterns;
pub mod stats;

pub use cache::{CacheKey, CachedMove, MoveCache};
pub use decision::{Decision, DecisionEngine, Rule};
pub use minimax::{minimax, Minimax};
pub use patterns::{Pattern, PATTERNS};
pub use stats::DecisionStats;
