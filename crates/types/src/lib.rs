//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the scorer.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (scoring core, history records, display collaborators).
//!
//! # Match Format
//!
//! Best-of-five sets with advantage games and tiebreaks:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POINTS_TO_WIN_GAME` | 4 | Minimum points to take a game or tiebreak |
//! | `WIN_MARGIN` | 2 | Required lead for games, tiebreaks and sets |
//! | `GAMES_TO_WIN_SET` | 6 | Minimum games to take a set |
//! | `TIEBREAK_AT` | 6 | Games each before a tiebreak (sets 1-4) |
//! | `FINAL_SET_TIEBREAK_AT` | 12 | Games each before a tiebreak (set 5) |
//! | `SETS_TO_WIN_MATCH` | 3 | Sets needed to take the match |
//! | `MAX_SETS` | 5 | Most sets a match can reach |
//!
//! # Ball Changes
//!
//! - `FIRST_BALL_CHANGE_AFTER`: 7 games - first "new balls please"
//! - `BALL_CHANGE_INTERVAL`: 9 games - every change after that
//!
//! # Examples
//!
//! ```
//! use tennis_scorer_types::{Player, PointLabel, SETS_TO_WIN_MATCH};
//!
//! // Parse a player token (case-insensitive)
//! let player = Player::from_str("p2").unwrap();
//! assert_eq!(player, Player::Two);
//! assert_eq!(player.opponent(), Player::One);
//!
//! // Point labels render the way a scoreboard shows them
//! assert_eq!(PointLabel::Thirty.to_string(), "30");
//! assert_eq!(PointLabel::Count(5).to_string(), "5");
//!
//! assert_eq!(SETS_TO_WIN_MATCH, 3);
//! ```

use std::fmt;

/// Minimum points to win a game (or a tiebreak)
pub const POINTS_TO_WIN_GAME: u32 = 4;

/// Lead required to close out a game, tiebreak or set
pub const WIN_MARGIN: u32 = 2;

/// Minimum games to win a set
pub const GAMES_TO_WIN_SET: u32 = 6;

/// Games each at which a regular set goes to a tiebreak
pub const TIEBREAK_AT: u32 = 6;

/// Games each at which the final set goes to a tiebreak
pub const FINAL_SET_TIEBREAK_AT: u32 = 12;

/// Sets needed to win a best-of-five match
pub const SETS_TO_WIN_MATCH: u32 = 3;

/// Upper bound on the number of sets in a match
pub const MAX_SETS: usize = 5;

/// Zero-based index of the deciding set
pub const FINAL_SET_INDEX: usize = 4;

/// Total games after which the first ball change is called
pub const FIRST_BALL_CHANGE_AFTER: u32 = 7;

/// Games between subsequent ball changes
pub const BALL_CHANGE_INTERVAL: u32 = 9;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_of_five_defaults() {
        assert_eq!(POINTS_TO_WIN_GAME, 4);
        assert_eq!(WIN_MARGIN, 2);
        assert_eq!(GAMES_TO_WIN_SET, 6);
        assert_eq!(TIEBREAK_AT, 6);
        assert_eq!(FINAL_SET_TIEBREAK_AT, 12);
        assert_eq!(SETS_TO_WIN_MATCH, 3);
        assert_eq!(MAX_SETS as u32, SETS_TO_WIN_MATCH * 2 - 1);
        assert_eq!(FINAL_SET_INDEX, MAX_SETS - 1);
    }

    #[test]
    fn player_parse_and_opponent() {
        assert_eq!(Player::from_str("1"), Some(Player::One));
        assert_eq!(Player::from_str("P1"), Some(Player::One));
        assert_eq!(Player::from_str(" player2 "), Some(Player::Two));
        assert_eq!(Player::from_str("3"), None);
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent().opponent(), Player::Two);
    }

    #[test]
    fn point_label_display() {
        assert_eq!(PointLabel::Blank.to_string(), "");
        assert_eq!(PointLabel::Love.to_string(), "0");
        assert_eq!(PointLabel::Fifteen.to_string(), "15");
        assert_eq!(PointLabel::Forty.to_string(), "40");
        assert_eq!(PointLabel::Advantage.to_string(), "A");
        assert_eq!(PointLabel::Count(12).to_string(), "12");
    }

    #[test]
    fn set_score_accessors() {
        let score = SetScore::new(7, 6);
        assert_eq!(score.games(Player::One), 7);
        assert_eq!(score.games(Player::Two), 6);
        assert_eq!(score.total(), 13);
        assert_eq!(score.to_string(), "7-6");
    }
}

/// One of the two players in a singles match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players, player 1 first
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    /// Parse a player token (case-insensitive)
    ///
    /// Accepts `1`/`2`, `p1`/`p2` and `player1`/`player2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tennis_scorer_types::Player;
    ///
    /// assert_eq!(Player::from_str("1"), Some(Player::One));
    /// assert_eq!(Player::from_str("P2"), Some(Player::Two));
    /// assert_eq!(Player::from_str("ball"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "p1" | "player1" => Some(Player::One),
            "2" | "p2" | "player2" => Some(Player::Two),
            _ => None,
        }
    }

    /// The other player
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Zero-based slot, for per-player arrays
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Scoreboard name ("Player 1" / "Player 2")
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display token for one player's score in the current game
///
/// Regular games use tennis notation (`0`, `15`, `30`, `40`, `A`); tiebreaks
/// count plainly via [`PointLabel::Count`]. A finished game shows
/// [`PointLabel::Blank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointLabel {
    Blank,
    Love,
    Fifteen,
    Thirty,
    Forty,
    Advantage,
    Count(u32),
}

impl fmt::Display for PointLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointLabel::Blank => Ok(()),
            PointLabel::Love => f.write_str("0"),
            PointLabel::Fifteen => f.write_str("15"),
            PointLabel::Thirty => f.write_str("30"),
            PointLabel::Forty => f.write_str("40"),
            PointLabel::Advantage => f.write_str("A"),
            PointLabel::Count(n) => write!(f, "{}", n),
        }
    }
}

/// Games won by each player in one set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SetScore {
    pub player1: u32,
    pub player2: u32,
}

impl SetScore {
    pub fn new(player1: u32, player2: u32) -> Self {
        Self { player1, player2 }
    }

    pub fn games(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    /// Games played in the set
    pub fn total(&self) -> u32 {
        self.player1 + self.player2
    }
}

impl fmt::Display for SetScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.player1, self.player2)
    }
}
