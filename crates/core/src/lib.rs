//! Core scoring module - pure, deterministic, and testable
//!
//! This crate contains the tennis scoring rules as three nested state machines.
//! It has **zero dependencies** on UI, storage, or I/O, making it:
//!
//! - **Deterministic**: Replaying the same point sequence always yields the same match
//! - **Total**: Every call is valid; points after completion are silently ignored
//! - **Portable**: Can drive any scoreboard (terminal, GUI, headless)
//! - **Allocation-free**: Sets live in a fixed five-slot arena
//!
//! # Module Structure
//!
//! - [`game`]: One advantage game (0/15/30/40/A, deuce)
//! - [`tiebreak`]: The tiebreak point counter
//! - [`notation`]: Tennis-notation and plain-count display policies
//! - [`set`]: Games into a set, tiebreak entry at 6-6 (12-12 in the final set)
//! - [`tennis_match`]: Sets into a best-of-five match, service rotation
//! - [`snapshot`]: All display queries captured in one value
//! - [`balls`]: "New balls please" cadence
//!
//! # Ownership
//!
//! The match owns its sets in an append-only arena; each set owns exactly one
//! game (or tiebreak) and replaces it when a game ends. Nothing is shared and
//! there are no back-references.
//!
//! # Example
//!
//! ```
//! use tennis_scorer_core::TennisMatch;
//! use tennis_scorer_types::Player;
//!
//! let mut tennis = TennisMatch::new();
//!
//! // Three points: 40-0, no change of server yet
//! for _ in 0..3 {
//!     assert!(!tennis.add_point_to_player1());
//! }
//! assert_eq!(tennis.player1_game_score().to_string(), "40");
//! assert!(tennis.has_player1_game_point());
//!
//! // The game-winning point hands serve to player 2
//! let outcome = tennis.add_point(Player::One);
//! assert!(outcome.server_changed);
//! assert_eq!(outcome.game_won, Some(Player::One));
//! assert_eq!(tennis.player1_current_games(), 1);
//! assert!(!tennis.is_player1_serving());
//! ```

pub mod balls;
pub mod game;
pub mod notation;
pub mod set;
pub mod snapshot;
pub mod tennis_match;
pub mod tiebreak;

pub use tennis_scorer_types as types;

// Re-export commonly used types for convenience
pub use balls::{is_ball_change_due, NewBallsTracker};
pub use game::Game;
pub use set::{SetPhase, TennisSet};
pub use snapshot::MatchSnapshot;
pub use tennis_match::{PointOutcome, TennisMatch};
pub use tiebreak::Tiebreak;
