//! Tournament scores and the final verdict.

use serde::{Deserialize, Serialize};

use crate::core::{Participant, ParticipantMap};

/// Final result of a tournament.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TournamentResult {
    /// `participant` won more games than the other.
    Winner {
        participant: Participant,
        score: u32,
        against: u32,
    },
    /// Both won the same number of games.
    Draw { score: u32 },
}

impl TournamentResult {
    #[must_use]
    pub fn winner(&self) -> Option<Participant> {
        match self {
            TournamentResult::Winner { participant, .. } => Some(*participant),
            TournamentResult::Draw { .. } => None,
        }
    }
}

impl std::fmt::Display for TournamentResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentResult::Winner {
                participant,
                score,
                against,
            } => write!(f, "Tournament over! {participant} wins {score}–{against}!"),
            TournamentResult::Draw { .. } => write!(f, "Tournament over! It's a draw!"),
        }
    }
}

/// Wins per participant and progress through the tournament.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub scores: ParticipantMap<u32>,
    /// Games completed and rolled over by the tracker.
    pub games_played: u32,
    pub total_games: u32,
}

impl Scoreboard {
    #[must_use]
    pub fn new(total_games: u32) -> Self {
        Self {
            scores: ParticipantMap::default(),
            games_played: 0,
            total_games,
        }
    }

    /// Credit a game win.
    pub fn record_win(&mut self, participant: Participant) {
        self.scores[participant] += 1;
    }

    /// Participant strictly ahead on wins.
    #[must_use]
    pub fn leader(&self) -> Option<Participant> {
        let human = self.scores[Participant::Human];
        let engine = self.scores[Participant::Engine];
        match human.cmp(&engine) {
            std::cmp::Ordering::Greater => Some(Participant::Human),
            std::cmp::Ordering::Less => Some(Participant::Engine),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Verdict by comparing cumulative wins.
    #[must_use]
    pub fn verdict(&self) -> TournamentResult {
        match self.leader() {
            Some(participant) => TournamentResult::Winner {
                participant,
                score: self.scores[participant],
                against: self.scores[participant.other()],
            },
            None => TournamentResult::Draw {
                score: self.scores[Participant::Human],
            },
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.games_played >= self.total_games
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.total_games);
    }
}
