//! Notifications emitted after state transitions.
//!
//! The core never renders, plays audio, or animates. It queues these events
//! and the presentation layer decides what each one looks or sounds like.

use serde::{Deserialize, Serialize};

use crate::core::{Participant, ParticipantMap, Side};

use super::scoreboard::TournamentResult;

/// Something that happened in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A new game began. `game_number` is 1-based.
    GameStarted {
        game_number: u32,
        total_games: u32,
        first: Participant,
    },

    /// A mark was written to the board.
    MarkPlaced {
        cell: usize,
        side: Side,
        by: Participant,
    },

    /// The game continues with `side` to move.
    TurnChanged { side: Side, participant: Participant },

    /// `side` completed `line`.
    GameWon {
        side: Side,
        winner: Participant,
        line: [usize; 3],
    },

    /// The board filled with no winner.
    GameDrawn,

    /// Scores after a decided game. `leader` is the participant strictly
    /// ahead, if any.
    ScoreChanged {
        scores: ParticipantMap<u32>,
        leader: Option<Participant>,
    },

    /// The last game of the tournament has been played.
    TournamentFinished(TournamentResult),
}

impl MatchEvent {
    /// Whether this event ends a game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, MatchEvent::GameWon { .. } | MatchEvent::GameDrawn)
    }
}

impl std::fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchEvent::GameStarted {
                game_number,
                total_games,
                ..
            } => write!(f, "Game {game_number} of {total_games}"),
            MatchEvent::MarkPlaced { cell, side, .. } => write!(f, "{side} at {cell}"),
            MatchEvent::TurnChanged { participant, .. } => write!(f, "{participant}'s turn"),
            MatchEvent::GameWon { winner, .. } => write!(f, "{winner} wins!"),
            MatchEvent::GameDrawn => write!(f, "Draw!"),
            MatchEvent::ScoreChanged { scores, .. } => write!(
                f,
                "Human {} - AI {}",
                scores[Participant::Human],
                scores[Participant::Engine]
            ),
            MatchEvent::TournamentFinished(result) => write!(f, "{result}"),
        }
    }
}
