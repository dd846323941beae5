//! Who is playing: the human at the page and the engine.
//!
//! ## Participant
//!
//! The two participants keep their identity across a tournament while the
//! board labels (`Side`) they play under swap from game to game.
//!
//! ## ParticipantMap
//!
//! Per-participant storage with O(1) indexing by `Participant`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two participants in a tournament.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Participant {
    Human,
    Engine,
}

impl Participant {
    /// Both participants, human first.
    pub const ALL: [Participant; 2] = [Participant::Human, Participant::Engine];

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Participant::Human => Participant::Engine,
            Participant::Engine => Participant::Human,
        }
    }

    const fn index(self) -> usize {
        match self {
            Participant::Human => 0,
            Participant::Engine => 1,
        }
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Participant::Human => write!(f, "Human"),
            Participant::Engine => write!(f, "AI"),
        }
    }
}

/// Per-participant data.
///
/// ## Example
///
/// ```
/// use ttt_engine::core::{Participant, ParticipantMap};
///
/// let mut wins: ParticipantMap<u32> = ParticipantMap::default();
/// wins[Participant::Engine] += 1;
///
/// assert_eq!(wins[Participant::Engine], 1);
/// assert_eq!(wins[Participant::Human], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantMap<T> {
    data: [T; 2],
}

impl<T> ParticipantMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Participant) -> T) -> Self {
        Self {
            data: [factory(Participant::Human), factory(Participant::Engine)],
        }
    }

    /// Iterate over `(participant, value)` pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Participant, &T)> {
        Participant::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Participant> for ParticipantMap<T> {
    type Output = T;

    fn index(&self, participant: Participant) -> &T {
        &self.data[participant.index()]
    }
}

impl<T> IndexMut<Participant> for ParticipantMap<T> {
    fn index_mut(&mut self, participant: Participant) -> &mut T {
        &mut self.data[participant.index()]
    }
}
