//! Memoization of engine decisions.
//!
//! Keys combine the packed board with the side the engine is playing. The
//! same physical board means different things when the engine's label
//! swaps between games, so a board-only key would replay moves computed for
//! the other side.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Side};

use super::decision::Rule;

/// Cache key: packed board plus automated side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub board: u32,
    pub automated: Side,
}

impl CacheKey {
    #[must_use]
    pub fn new(board: &Board, automated: Side) -> Self {
        Self {
            board: board.key(),
            automated,
        }
    }
}

/// A remembered decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedMove {
    pub cell: usize,
    pub rule: Rule,
}

/// Map from (board, automated side) to the move chosen there.
///
/// Entries are never invalidated: the policy is fixed, so a given key
/// always yields the same move. Lookups return `Option`, so a cached cell 0
/// is a hit like any other.
#[derive(Clone, Debug, Default)]
pub struct MoveCache {
    entries: FxHashMap<CacheKey, CachedMove>,
}

impl MoveCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, board: &Board, automated: Side) -> Option<CachedMove> {
        self.entries.get(&CacheKey::new(board, automated)).copied()
    }

    pub fn insert(&mut self, board: &Board, automated: Side, cell: usize, rule: Rule) {
        self.entries
            .insert(CacheKey::new(board, automated), CachedMove { cell, rule });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
