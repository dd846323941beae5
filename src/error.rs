//! Error types for the engine crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Side;

/// Why a move was refused.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRejection {
    #[error("cell is out of bounds (must be 0-8)")]
    OutOfBounds,

    #[error("cell is already occupied")]
    Occupied,

    #[error("game is not running")]
    NotRunning,

    #[error("it is {0}'s turn")]
    NotYourTurn(Side),
}

/// Main error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move at cell {cell}: {reason}")]
    InvalidMove { cell: usize, reason: MoveRejection },

    #[error("current game is still in progress")]
    GameInProgress,

    #[error("tournament is over")]
    TournamentOver,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl Error {
    /// The rejection reason, if this is an invalid move.
    #[must_use]
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            Error::InvalidMove { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
