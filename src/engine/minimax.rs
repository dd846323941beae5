//! Exhaustive minimax search.
//!
//! Scores are from the automated side's point of view: `10 - depth` for a
//! win, `depth - 10` for a loss, `0` for a draw. Children are explored in
//! ascending cell order and the first strictly better score wins, so ties
//! always resolve to the lowest cell.
//!
//! Alpha-beta pruning is optional. At the root each child is searched with
//! the best score so far as alpha; a pruned child can only report a bound
//! that is not strictly better, so the selected move is unchanged.

use crate::core::{Board, GameOutcome, Side, WinDetector};

const WIN_SCORE: i32 = 10;

/// Minimax value of `board` for `automated`.
///
/// `maximizing` is true when `automated` is the side to move.
#[must_use]
pub fn minimax(board: &Board, depth: i32, maximizing: bool, automated: Side) -> i32 {
    Minimax::new(automated).score(board, depth, maximizing)
}

/// Stateful searcher that counts visited nodes.
#[derive(Clone, Debug)]
pub struct Minimax {
    automated: Side,
    pruning: bool,
    nodes: u64,
}

impl Minimax {
    #[must_use]
    pub fn new(automated: Side) -> Self {
        Self {
            automated,
            pruning: false,
            nodes: 0,
        }
    }

    /// Enable alpha-beta pruning.
    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Nodes visited since creation.
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Best cell for the automated side and its score.
    ///
    /// Returns `None` on a full board.
    pub fn best_move(&mut self, board: &Board) -> Option<(usize, i32)> {
        let mut best: Option<(usize, i32)> = None;

        for cell in board.empty_cells() {
            let child = board.with(cell, self.automated);
            let score = if self.pruning {
                let alpha = best.map_or(i32::MIN, |(_, s)| s);
                self.alpha_beta(&child, 0, false, alpha, i32::MAX)
            } else {
                self.score(&child, 0, false)
            };

            if best.map_or(true, |(_, s)| score > s) {
                best = Some((cell, score));
            }
        }

        best
    }

    fn terminal_score(&self, board: &Board, depth: i32) -> Option<i32> {
        match WinDetector::evaluate(board) {
            GameOutcome::Win(side) if side == self.automated => Some(WIN_SCORE - depth),
            GameOutcome::Win(_) => Some(depth - WIN_SCORE),
            GameOutcome::Draw => Some(0),
            GameOutcome::InProgress => None,
        }
    }

    fn mover(&self, maximizing: bool) -> Side {
        if maximizing {
            self.automated
        } else {
            self.automated.opponent()
        }
    }

    /// Plain minimax value of `board`.
    pub fn score(&mut self, board: &Board, depth: i32, maximizing: bool) -> i32 {
        self.nodes += 1;
        if let Some(score) = self.terminal_score(board, depth) {
            return score;
        }

        let mover = self.mover(maximizing);
        let children = board
            .empty_cells()
            .into_iter()
            .map(|cell| board.with(cell, mover));

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for child in children {
            let value = self.score(&child, depth + 1, !maximizing);
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        best
    }

    /// Fail-soft alpha-beta value of `board`.
    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if let Some(score) = self.terminal_score(board, depth) {
            return score;
        }

        let mover = self.mover(maximizing);
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for cell in board.empty_cells() {
            let value = self.alpha_beta(&board.with(cell, mover), depth + 1, !maximizing, alpha, beta);
            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }
            if alpha >= beta {
                break;
            }
        }
        best
    }
}
