//! The 3×3 board and the two sides that play on it.
//!
//! ## Layout
//!
//! Cells are indexed 0-8, row-major:
//!
//! ```text
//! 0 | 1 | 2
//! 3 | 4 | 5
//! 6 | 7 | 8
//! ```
//!
//! `Board` is `Copy`: search code places marks on copies via [`Board::with`]
//! instead of mutating and restoring the caller's board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Index of the center cell.
pub const CENTER: usize = 4;

/// Corner cells in scan order.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Edge (side) cells in scan order.
pub const EDGES: [usize; 4] = [1, 3, 5, 7];

/// One of the two physical labels a mark can carry.
///
/// `PlayerA` always moves first. Which participant owns which label
/// changes from game to game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    PlayerA,
    PlayerB,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::PlayerA => Side::PlayerB,
            Side::PlayerB => Side::PlayerA,
        }
    }

    /// The cell value this side writes.
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Side::PlayerA => Cell::PlayerA,
            Side::PlayerB => Cell::PlayerB,
        }
    }

    /// Single-character symbol used by `Display` and `FromStr`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Side::PlayerA => 'X',
            Side::PlayerB => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    /// The side occupying this cell, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some(Side::PlayerA),
            Cell::PlayerB => Some(Side::PlayerB),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    const fn digit(self) -> u32 {
        match self {
            Cell::Empty => 0,
            Cell::PlayerA => 1,
            Cell::PlayerB => 2,
        }
    }
}

/// Cell indices collected without heap allocation.
pub type CellList = SmallVec<[usize; CELL_COUNT]>;

/// A 3×3 tic-tac-toe board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from raw cells.
    #[must_use]
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Raw cell array.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Contents of a cell.
    ///
    /// Panics if `index >= 9`.
    #[must_use]
    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Whether `index` is on the board and empty.
    #[must_use]
    pub fn is_empty(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index].is_empty()
    }

    /// Whether `index` holds a mark of `side`.
    #[must_use]
    pub fn is_side(&self, index: usize, side: Side) -> bool {
        self.cells[index] == side.cell()
    }

    /// Write `side` into an empty cell.
    ///
    /// Cells only ever go from empty to occupied; writing over a mark is a
    /// caller bug.
    pub fn place(&mut self, index: usize, side: Side) {
        debug_assert!(
            self.cells[index].is_empty(),
            "cell {index} is already occupied"
        );
        self.cells[index] = side.cell();
        debug_assert!(self.has_valid_parity(), "turn parity violated: {self:?}");
    }

    /// Copy of this board with `side` placed at `index`.
    #[must_use]
    pub fn with(&self, index: usize, side: Side) -> Self {
        let mut next = *self;
        next.cells[index] = side.cell();
        next
    }

    /// Empty cells in ascending index order.
    #[must_use]
    pub fn empty_cells(&self) -> CellList {
        (0..CELL_COUNT).filter(|&i| self.cells[i].is_empty()).collect()
    }

    /// Number of marks `side` has on the board.
    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        let target = side.cell();
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Whether the mark counts differ by at most one.
    #[must_use]
    pub fn has_valid_parity(&self) -> bool {
        self.count(Side::PlayerA).abs_diff(self.count(Side::PlayerB)) <= 1
    }

    /// Base-3 packing of the cells, cell 0 least significant.
    ///
    /// Every distinct board maps to a distinct key in `0..3^9`.
    #[must_use]
    pub fn key(&self) -> u32 {
        self.cells
            .iter()
            .rev()
            .fold(0, |acc, cell| acc * 3 + cell.digit())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let c = match self.cells[row * 3 + col].side() {
                    Some(side) => side.symbol(),
                    None => '.',
                };
                write!(f, "{c}")?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("expected 9 cells, got {0}")]
    Length(usize),

    #[error("invalid character '{character}' at cell {index}")]
    Character { character: char, index: usize },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse nine cell characters, ignoring whitespace and `|` separators.
    ///
    /// `X`/`A` is `PlayerA`, `O`/`B` is `PlayerB`, and `.`, `-` or `_` is empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if chars.len() != CELL_COUNT {
            return Err(ParseBoardError::Length(chars.len()));
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (index, &character) in chars.iter().enumerate() {
            cells[index] = match character.to_ascii_uppercase() {
                'X' | 'A' => Cell::PlayerA,
                'O' | 'B' => Cell::PlayerB,
                '.' | '-' | '_' => Cell::Empty,
                _ => return Err(ParseBoardError::Character { character, index }),
            };
        }
        Ok(Self { cells })
    }
}
