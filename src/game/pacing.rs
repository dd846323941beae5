//! Presentation delay before engine replies.
//!
//! Pacing is cosmetic. The engine computes the same move whether or not a
//! pacer waits first.

use std::time::Duration;

use crate::core::Board;

/// Called by the controller right before the engine replies.
pub trait ReplyPacer {
    fn before_reply(&mut self, board: &Board);
}

/// Reply immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl ReplyPacer for NoDelay {
    fn before_reply(&mut self, _board: &Board) {}
}

/// Sleep for a fixed duration before each reply.
#[derive(Clone, Copy, Debug)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }
}

impl ReplyPacer for FixedDelay {
    fn before_reply(&mut self, _board: &Board) {
        std::thread::sleep(self.0);
    }
}
