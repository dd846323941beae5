//! Winning lines and outcome evaluation.

use serde::{Deserialize, Serialize};

use super::board::{Board, CellList, Side};

/// The eight winning index triples: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// State of a game as read off the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Win(Side),
    Draw,
}

impl GameOutcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// The winning side, if the game was won.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            GameOutcome::Win(side) => Some(side),
            _ => None,
        }
    }
}

/// Evaluates boards against [`LINES`].
pub struct WinDetector;

impl WinDetector {
    /// Outcome of `board`.
    ///
    /// The first complete line in [`LINES`] order decides the winner; a full
    /// board with no complete line is a draw.
    #[must_use]
    pub fn evaluate(board: &Board) -> GameOutcome {
        match Self::winning_line(board) {
            Some((side, _)) => GameOutcome::Win(side),
            None if board.is_full() => GameOutcome::Draw,
            None => GameOutcome::InProgress,
        }
    }

    /// First complete line and the side that owns it.
    #[must_use]
    pub fn winning_line(board: &Board) -> Option<(Side, [usize; 3])> {
        LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            let side = board.get(a).side()?;
            (board.get(b) == side.cell() && board.get(c) == side.cell()).then_some((side, line))
        })
    }

    /// Whether `side` has three in a row.
    #[must_use]
    pub fn has_won(board: &Board, side: Side) -> bool {
        let target = side.cell();
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| board.get(i) == target))
    }

    /// Empty cells that would complete a line for `side`, ascending.
    #[must_use]
    pub fn winning_cells(board: &Board, side: Side) -> CellList {
        board
            .empty_cells()
            .into_iter()
            .filter(|&cell| Self::has_won(&board.with(cell, side), side))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_line_wins() {
        for side in [Side::PlayerA, Side::PlayerB] {
            for line in LINES {
                let mut board = Board::new();
                for i in line {
                    board = board.with(i, side);
                }
                assert_eq!(WinDetector::evaluate(&board), GameOutcome::Win(side));
                assert_eq!(WinDetector::winning_line(&board), Some((side, line)));
            }
        }
    }

    #[test]
    fn test_line_wins_with_other_marks_elsewhere() {
        // X X X
        // O O .
        // . . .
        let board: Board = "XXX|OO.|...".parse().unwrap();
        assert_eq!(WinDetector::evaluate(&board), GameOutcome::Win(Side::PlayerA));
        assert!(WinDetector::has_won(&board, Side::PlayerA));
        assert!(!WinDetector::has_won(&board, Side::PlayerB));
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(WinDetector::evaluate(&Board::new()), GameOutcome::InProgress);
        assert_eq!(WinDetector::winning_line(&Board::new()), None);
    }

    #[test]
    fn test_full_board_draw() {
        // X O X
        // X O O
        // O X X
        let board: Board = "XOX|XOO|OXX".parse().unwrap();
        assert_eq!(WinDetector::evaluate(&board), GameOutcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        // X X X
        // O O X
        // X O O
        let board: Board = "XXX|OOX|XOO".parse().unwrap();
        assert_eq!(WinDetector::evaluate(&board), GameOutcome::Win(Side::PlayerA));
    }

    #[test]
    fn test_winning_cells() {
        // X X .
        // X . .
        // . . .
        let board: Board = "XX.|X..|...".parse().unwrap();
        let cells = WinDetector::winning_cells(&board, Side::PlayerA);
        assert_eq!(cells.as_slice(), &[2, 6]);
        assert!(WinDetector::winning_cells(&board, Side::PlayerB).is_empty());
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(!GameOutcome::InProgress.is_terminal());
        assert!(GameOutcome::Draw.is_terminal());
        assert_eq!(GameOutcome::Win(Side::PlayerB).winner(), Some(Side::PlayerB));
        assert_eq!(GameOutcome::Draw.winner(), None);
    }
}
