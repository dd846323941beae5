//! Multi-game tournaments with alternating first mover.
//!
//! Each game the participant moving first swaps, and with it the label the
//! engine plays (`PlayerA` always opens). After the configured number of
//! games the tracker compares wins and declares a result.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::core::{Side, TournamentConfig};
use crate::engine::DecisionEngine;
use crate::error::{Error, Result};

use super::controller::MatchController;
use super::event::MatchEvent;
use super::pacing::{NoDelay, ReplyPacer};
use super::scoreboard::{Scoreboard, TournamentResult};

/// What [`TournamentTracker::start_next_game`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progress {
    /// A new game is underway. `game_number` is 1-based.
    Started { game_number: u32 },
    /// That was the last game.
    Finished(TournamentResult),
}

/// Runs a tournament of games between the human and the engine.
pub struct TournamentTracker {
    config: TournamentConfig,
    controller: MatchController,
    result: Option<TournamentResult>,
}

impl TournamentTracker {
    /// Validate `config` and start the first game.
    pub fn new(config: TournamentConfig) -> Result<Self> {
        Self::with_pacer(config, NoDelay)
    }

    /// Like [`new`](Self::new), pacing engine replies with `pacer`.
    pub fn with_pacer<P: ReplyPacer + 'static>(config: TournamentConfig, pacer: P) -> Result<Self> {
        config.validate()?;
        let engine = DecisionEngine::new(config.engine.clone());
        let controller = MatchController::new(engine, config.total_games).with_pacer(pacer);

        let mut tracker = Self {
            config,
            controller,
            result: None,
        };
        tracker.begin_game();
        Ok(tracker)
    }

    #[must_use]
    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    #[must_use]
    pub fn controller(&self) -> &MatchController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut MatchController {
        &mut self.controller
    }

    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.controller.state().scoreboard
    }

    /// Final result, once every game has been played.
    #[must_use]
    pub fn result(&self) -> Option<TournamentResult> {
        self.result
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// "Game 3 of 6" for the game currently on the board.
    #[must_use]
    pub fn game_label(&self) -> String {
        let board = self.scoreboard();
        format!("Game {} of {}", board.games_played + 1, board.total_games)
    }

    /// Label the engine plays in game `games_played + 1`.
    #[must_use]
    pub fn engine_side_for(&self, games_played: u32) -> Side {
        let human_first = (games_played % 2 == 0) == self.config.human_starts;
        if human_first {
            Side::PlayerB
        } else {
            Side::PlayerA
        }
    }

    /// Forward a human move to the controller.
    pub fn submit_move(&mut self, cell: usize) -> Result<()> {
        self.controller.submit_move(cell)
    }

    /// Drain queued notifications.
    pub fn take_events(&mut self) -> Vec<MatchEvent> {
        self.controller.take_events()
    }

    /// Roll over to the next game, or finish the tournament.
    ///
    /// Fails while the current game is still running and after the
    /// tournament is over.
    #[instrument(skip(self))]
    pub fn start_next_game(&mut self) -> Result<Progress> {
        if self.result.is_some() {
            return Err(Error::TournamentOver);
        }
        if self.controller.state().is_running() {
            return Err(Error::GameInProgress);
        }

        let scoreboard = self.controller.scoreboard_mut();
        scoreboard.games_played += 1;

        if scoreboard.is_complete() {
            let result = scoreboard.verdict();
            info!(%result, "tournament finished");
            self.result = Some(result);
            self.controller
                .events_mut()
                .push(MatchEvent::TournamentFinished(result));
            return Ok(Progress::Finished(result));
        }

        let game_number = self.begin_game();
        Ok(Progress::Started { game_number })
    }

    /// Reset scores and counters and start over with game 1.
    ///
    /// The engine and its cache carry over.
    #[instrument(skip(self))]
    pub fn new_tournament(&mut self) {
        self.controller.scoreboard_mut().reset();
        self.result = None;
        self.begin_game();
    }

    fn begin_game(&mut self) -> u32 {
        let games_played = self.scoreboard().games_played;
        let engine_side = self.engine_side_for(games_played);
        self.controller.start_game(engine_side);
        games_played + 1
    }
}
