//! Core types: board, winning lines, participants, RNG, configuration.
//!
//! Everything here is plain data or pure functions. The decision engine and
//! the match state machine are built on top of these types.

pub mod board;
pub mod config;
pub mod lines;
pub mod participant;
pub mod rng;

pub use board::{Board, Cell, CellList, ParseBoardError, Side, CELL_COUNT, CENTER, CORNERS, EDGES};
pub use config::{EngineConfig, TournamentConfig};
pub use lines::{GameOutcome, WinDetector, LINES};
pub use participant::{Participant, ParticipantMap};
pub use rng::{GameRng, GameRngState};
