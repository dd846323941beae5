//! Rule-based move heuristics.
//!
//! Each function answers one question about a board and returns the first
//! qualifying cell in ascending index order, or `None`. The decision engine
//! chains them in priority order.

use crate::core::{Board, CellList, Side, WinDetector, CENTER, CORNERS, EDGES};

/// Corner pairs `(take, if_opponent_holds)`.
const OPPOSITE_CORNERS: [(usize, usize); 4] = [(0, 8), (2, 6), (6, 2), (8, 0)];

/// First empty cell that completes a line for `side`.
#[must_use]
pub fn winning_move(board: &Board, side: Side) -> Option<usize> {
    board
        .empty_cells()
        .into_iter()
        .find(|&cell| WinDetector::has_won(&board.with(cell, side), side))
}

/// Number of immediate wins `side` has on `board`.
fn threat_count(board: &Board, side: Side) -> usize {
    WinDetector::winning_cells(board, side).len()
}

/// Empty cells where `side` would create two or more immediate wins.
#[must_use]
pub fn fork_cells(board: &Board, side: Side) -> CellList {
    board
        .empty_cells()
        .into_iter()
        .filter(|&cell| threat_count(&board.with(cell, side), side) >= 2)
        .collect()
}

/// First cell that creates a fork for `side`.
#[must_use]
pub fn fork_move(board: &Board, side: Side) -> Option<usize> {
    fork_cells(board, side).first().copied()
}

/// Deny the opponent a fork.
///
/// A single fork cell is simply occupied. With two or more, occupying one
/// leaves the other open, so the engine prefers a move that creates a single
/// threat whose forced reply does not leave the opponent with two immediate
/// wins, and falls back to the first fork cell.
#[must_use]
pub fn block_fork_move(board: &Board, automated: Side) -> Option<usize> {
    let opponent = automated.opponent();
    let forks = fork_cells(board, opponent);
    let first_fork = *forks.first()?;
    if forks.len() == 1 {
        return Some(first_fork);
    }

    let forcing = board.empty_cells().into_iter().find(|&cell| {
        let after = board.with(cell, automated);
        let threats = WinDetector::winning_cells(&after, automated);
        match threats.as_slice() {
            [forced] => threat_count(&after.with(*forced, opponent), opponent) < 2,
            _ => false,
        }
    });

    Some(forcing.unwrap_or(first_fork))
}

#[must_use]
pub fn center_move(board: &Board) -> Option<usize> {
    board.is_empty(CENTER).then_some(CENTER)
}

/// Empty corner diagonally opposite a corner the opponent holds.
#[must_use]
pub fn opposite_corner_move(board: &Board, automated: Side) -> Option<usize> {
    let opponent = automated.opponent();
    OPPOSITE_CORNERS
        .iter()
        .find(|&&(take, held)| board.is_side(held, opponent) && board.is_empty(take))
        .map(|&(take, _)| take)
}

#[must_use]
pub fn corner_move(board: &Board) -> Option<usize> {
    CORNERS.iter().copied().find(|&i| board.is_empty(i))
}

#[must_use]
pub fn edge_move(board: &Board) -> Option<usize> {
    EDGES.iter().copied().find(|&i| board.is_empty(i))
}
