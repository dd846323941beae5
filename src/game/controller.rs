//! Match state machine.
//!
//! A game is either `AwaitingMove(side)` or `Finished(outcome)`. Human moves
//! arrive through [`MatchController::submit_move`]; whenever the side to move
//! belongs to the engine, the controller asks the [`DecisionEngine`] and
//! applies its move before returning. Every transition queues
//! [`MatchEvent`]s for the presentation layer.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::core::{Board, GameOutcome, Participant, Side, WinDetector, CELL_COUNT};
use crate::engine::{Decision, DecisionEngine};
use crate::error::{Error, MoveRejection, Result};

use super::event::MatchEvent;
use super::pacing::{NoDelay, ReplyPacer};
use super::scoreboard::Scoreboard;

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingMove(Side),
    Finished(GameOutcome),
}

/// A mark placed during a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub cell: usize,
    pub side: Side,
}

/// Everything the controller owns about the current match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub board: Board,
    pub phase: Phase,
    /// Label the engine plays this game.
    pub engine_side: Side,
    /// Moves of the current game, in order.
    pub history: Vec<MoveRecord>,
    pub scoreboard: Scoreboard,
}

impl MatchState {
    fn new(total_games: u32, engine_side: Side) -> Self {
        Self {
            board: Board::new(),
            phase: Phase::AwaitingMove(Side::PlayerA),
            engine_side,
            history: Vec::new(),
            scoreboard: Scoreboard::new(total_games),
        }
    }

    /// Side to move, if the game is running.
    #[must_use]
    pub fn side_to_move(&self) -> Option<Side> {
        match self.phase {
            Phase::AwaitingMove(side) => Some(side),
            Phase::Finished(_) => None,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::AwaitingMove(_))
    }

    /// Current outcome; `InProgress` while running.
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        match self.phase {
            Phase::AwaitingMove(_) => GameOutcome::InProgress,
            Phase::Finished(outcome) => outcome,
        }
    }

    #[must_use]
    pub fn human_side(&self) -> Side {
        self.engine_side.opponent()
    }

    /// Who plays `side` this game.
    #[must_use]
    pub fn participant(&self, side: Side) -> Participant {
        if side == self.engine_side {
            Participant::Engine
        } else {
            Participant::Human
        }
    }

    /// Participant to move, if the game is running.
    #[must_use]
    pub fn turn(&self) -> Option<Participant> {
        self.side_to_move().map(|side| self.participant(side))
    }
}

/// Drives one game at a time and keeps score across games.
pub struct MatchController {
    state: MatchState,
    engine: DecisionEngine,
    pacer: Box<dyn ReplyPacer>,
    events: Vec<MatchEvent>,
}

impl MatchController {
    /// Create a controller for a tournament of `total_games`.
    ///
    /// The board is ready for a game with the human as `PlayerA`; call
    /// [`start_game`](Self::start_game) to choose sides and announce it.
    pub fn new(engine: DecisionEngine, total_games: u32) -> Self {
        Self {
            state: MatchState::new(total_games, Side::PlayerB),
            engine,
            pacer: Box::new(NoDelay),
            events: Vec::new(),
        }
    }

    /// Set the pacer called before each engine reply.
    pub fn with_pacer<P: ReplyPacer + 'static>(mut self, pacer: P) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    pub(crate) fn scoreboard_mut(&mut self) -> &mut Scoreboard {
        &mut self.state.scoreboard
    }

    pub(crate) fn events_mut(&mut self) -> &mut Vec<MatchEvent> {
        &mut self.events
    }

    /// Drain queued notifications.
    pub fn take_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin a fresh game with the engine playing `engine_side`.
    ///
    /// `PlayerA` always moves first; if that is the engine, its opening
    /// move is played before this returns.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, engine_side: Side) {
        self.state.board = Board::new();
        self.state.phase = Phase::AwaitingMove(Side::PlayerA);
        self.state.engine_side = engine_side;
        self.state.history.clear();

        let first = self.state.participant(Side::PlayerA);
        let game_number = self.state.scoreboard.games_played + 1;
        info!(game_number, %first, "game started");

        self.events.push(MatchEvent::GameStarted {
            game_number,
            total_games: self.state.scoreboard.total_games,
            first,
        });
        self.events.push(MatchEvent::TurnChanged {
            side: Side::PlayerA,
            participant: first,
        });

        if first == Participant::Engine {
            self.play_engine_turn();
        }
    }

    /// Apply a human move at `cell`.
    ///
    /// If the engine is to move afterwards, it replies before this returns.
    /// Rejected moves leave the state untouched.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, cell: usize) -> Result<()> {
        let side = match self.state.phase {
            Phase::AwaitingMove(side) => side,
            Phase::Finished(_) => return Err(reject(cell, MoveRejection::NotRunning)),
        };
        if cell >= CELL_COUNT {
            return Err(reject(cell, MoveRejection::OutOfBounds));
        }
        if self.state.participant(side) != Participant::Human {
            return Err(reject(cell, MoveRejection::NotYourTurn(side)));
        }
        if !self.state.board.is_empty(cell) {
            return Err(reject(cell, MoveRejection::Occupied));
        }

        self.apply(cell, side);

        if self.state.turn() == Some(Participant::Engine) {
            self.play_engine_turn();
        }
        Ok(())
    }

    /// Let the engine move if it is its turn.
    ///
    /// Returns `None` when the game is over or the human is to move.
    pub fn play_engine_turn(&mut self) -> Option<Decision> {
        let side = self.state.side_to_move()?;
        if self.state.participant(side) != Participant::Engine {
            return None;
        }

        self.pacer.before_reply(&self.state.board);
        let decision = self.engine.choose_move(&self.state.board, side)?;
        self.apply(decision.cell, side);
        Some(decision)
    }

    fn apply(&mut self, cell: usize, side: Side) {
        let by = self.state.participant(side);
        self.state.board.place(cell, side);
        self.state.history.push(MoveRecord { cell, side });
        self.events.push(MatchEvent::MarkPlaced { cell, side, by });
        debug!(cell, %side, %by, "mark placed");

        match WinDetector::winning_line(&self.state.board) {
            Some((winner_side, line)) => {
                let winner = self.state.participant(winner_side);
                self.state.phase = Phase::Finished(GameOutcome::Win(winner_side));
                self.state.scoreboard.record_win(winner);
                info!(%winner, ?line, "game won");

                self.events.push(MatchEvent::GameWon {
                    side: winner_side,
                    winner,
                    line,
                });
                self.events.push(MatchEvent::ScoreChanged {
                    scores: self.state.scoreboard.scores,
                    leader: self.state.scoreboard.leader(),
                });
            }
            None if self.state.board.is_full() => {
                self.state.phase = Phase::Finished(GameOutcome::Draw);
                info!("game drawn");
                self.events.push(MatchEvent::GameDrawn);
            }
            None => {
                let next = side.opponent();
                self.state.phase = Phase::AwaitingMove(next);
                self.events.push(MatchEvent::TurnChanged {
                    side: next,
                    participant: self.state.participant(next),
                });
            }
        }
    }
}

fn reject(cell: usize, reason: MoveRejection) -> Error {
    warn!(cell, %reason, "move rejected");
    Error::InvalidMove { cell, reason }
}
