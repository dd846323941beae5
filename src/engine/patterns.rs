//! Fixed pattern library and the opening book derived from it.
//!
//! A pattern names cells that must hold the engine's marks, cells that must
//! hold the opponent's marks, and the replies to try in order. The table is
//! static; nothing here learns.

use crate::core::{Board, GameRng, Side};

/// A memorized position and its preferred replies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Cells the automated side must occupy.
    pub own: &'static [usize],
    /// Cells the opponent must occupy.
    pub opponent: &'static [usize],
    /// Reply cells, first empty one wins.
    pub replies: &'static [usize],
}

impl Pattern {
    /// Whether `board` has every required mark in place.
    #[must_use]
    pub fn matches(&self, board: &Board, automated: Side) -> bool {
        self.own.iter().all(|&i| board.is_side(i, automated))
            && self.opponent.iter().all(|&i| board.is_side(i, automated.opponent()))
    }

    /// First empty reply cell.
    #[must_use]
    pub fn reply(&self, board: &Board) -> Option<usize> {
        self.replies.iter().copied().find(|&i| board.is_empty(i))
    }
}

pub const PATTERNS: [Pattern; 4] = [
    // corner trap around an opposing center
    Pattern {
        own: &[0, 8],
        opponent: &[4],
        replies: &[2, 6],
    },
    Pattern {
        own: &[4],
        opponent: &[0],
        replies: &[8],
    },
    Pattern {
        own: &[0, 2],
        opponent: &[4],
        replies: &[6],
    },
    Pattern {
        own: &[4],
        opponent: &[2],
        replies: &[6],
    },
];

/// Reply from the first matching pattern that still has an empty reply cell.
#[must_use]
pub fn pattern_move(board: &Board, automated: Side) -> Option<usize> {
    PATTERNS
        .iter()
        .filter(|p| p.matches(board, automated))
        .find_map(|p| p.reply(board))
}

/// Pick an opening cell for an empty board.
///
/// Draws a pattern uniformly, then one of its own-side cells, so openings
/// vary between center and corners.
#[must_use]
pub fn opening_move(rng: &mut GameRng) -> usize {
    let pattern = &PATTERNS[rng.gen_range_usize(0..PATTERNS.len())];
    pattern.own[rng.gen_range_usize(0..pattern.own.len())]
}
