//! Match and tournament state machines.
//!
//! ## Usage
//!
//! ```rust
//! use ttt_engine::core::TournamentConfig;
//! use ttt_engine::game::{MatchEvent, TournamentTracker};
//!
//! let mut tracker = TournamentTracker::new(TournamentConfig::default()).unwrap();
//!
//! // The human opens game 1; the engine answers before submit_move returns.
//! tracker.submit_move(0).unwrap();
//! for event in tracker.take_events() {
//!     if let MatchEvent::MarkPlaced { cell, by, .. } = event {
//!         println!("{by} played {cell}");
//!     }
//! }
//! ```

pub mod controller;
pub mod event;
pub mod pacing;
pub mod scoreboard;
pub mod tournament;

pub use controller::{MatchController, MatchState, MoveRecord, Phase};
pub use event::MatchEvent;
pub use pacing::{FixedDelay, NoDelay, ReplyPacer};
pub use scoreboard::{Scoreboard, TournamentResult};
pub use tournament::{Progress, TournamentTracker};
