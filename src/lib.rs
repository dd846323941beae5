//! # ttt-engine
//!
//! A tic-tac-toe decision engine with match and tournament state machines,
//! meant to sit behind a thin presentation layer.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: Board, scores and memo cache live in owned
//!    structs. There are no process-wide singletons.
//!
//! 2. **Notifications, not side effects**: The core queues `MatchEvent`s;
//!    rendering, sound and animation belong to the caller.
//!
//! 3. **Deterministic**: Every choice except the opening is a pure function
//!    of the board and the engine's side, and the opening RNG is seeded.
//!
//! ## Modules
//!
//! - `core`: Board, winning lines, participants, RNG, configuration
//! - `engine`: Heuristic rules, pattern library, minimax, memo cache
//! - `game`: Match controller, events, pacing, tournament tracking
//! - `error`: Error types

pub mod core;
pub mod engine;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, EngineConfig, GameOutcome, GameRng, Participant, ParticipantMap, Side,
    TournamentConfig, WinDetector, LINES,
};

pub use crate::engine::{Decision, DecisionEngine, DecisionStats, Minimax, MoveCache, Rule};

pub use crate::error::{Error, MoveRejection, Result};

pub use crate::game::{
    MatchController, MatchEvent, MatchState, Phase, Progress, Scoreboard, TournamentResult,
    TournamentTracker,
};
