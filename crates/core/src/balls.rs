//! Ball change cadence ("new balls please")
//!
//! New balls come in after the first 7 games of a match, then after every 9
//! games. A set that goes to a tiebreak also gets fresh balls for it.

use crate::tennis_match::TennisMatch;
use crate::types::{BALL_CHANGE_INTERVAL, FIRST_BALL_CHANGE_AFTER};

/// True when `total_games` completed games is a ball-change point.
pub fn is_ball_change_due(total_games: u32) -> bool {
    total_games == FIRST_BALL_CHANGE_AFTER
        || (total_games > FIRST_BALL_CHANGE_AFTER
            && (total_games - FIRST_BALL_CHANGE_AFTER) % BALL_CHANGE_INTERVAL == 0)
}

/// Watches a match and calls new balls once per qualifying game count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NewBallsTracker {
    games_seen: u32,
}

impl NewBallsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call after every point; true when new balls are due now.
    ///
    /// Only a rise in the total games played can trigger a call.
    pub fn observe(&mut self, tennis_match: &TennisMatch) -> bool {
        let total = tennis_match.total_games_played();
        if total <= self.games_seen {
            self.games_seen = total;
            return false;
        }
        self.games_seen = total;

        let due = !tennis_match.complete()
            && (is_ball_change_due(total) || tennis_match.is_current_game_tie_break());
        if due {
            tracing::debug!(total_games = total, "new balls please");
        }
        due
    }

    pub fn games_seen(&self) -> u32 {
        self.games_seen
    }

    pub fn reset(&mut self) {
        self.games_seen = 0;
    }
}
