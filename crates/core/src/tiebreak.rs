//! Tiebreak module - the deciding game of a set tied at its threshold
//!
//! A tiebreak is a plain point counter: there is no advantage cancellation,
//! so a 4-4 tiebreak really is 4-4. It is won with the same test as a regular
//! game (at least 4 points and a 2 point lead) and is always shown as plain
//! integers.

use crate::notation::{has_won, points_to_save, tiebreak_label};
use crate::types::{Player, PointLabel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tiebreak {
    player1_points: u32,
    player2_points: u32,
}

impl Tiebreak {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a point; ignored once the tiebreak is decided
    pub fn add_point(&mut self, player: Player) {
        if self.complete() {
            return;
        }
        match player {
            Player::One => self.player1_points += 1,
            Player::Two => self.player2_points += 1,
        }
    }

    pub fn points(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1_points,
            Player::Two => self.player2_points,
        }
    }

    /// Points played so far in this tiebreak
    pub fn points_played(&self) -> u32 {
        self.player1_points + self.player2_points
    }

    pub fn has_won(&self, player: Player) -> bool {
        has_won(self.points(player), self.points(player.opponent()))
    }

    pub fn winner(&self) -> Option<Player> {
        Player::BOTH.into_iter().find(|&p| self.has_won(p))
    }

    pub fn complete(&self) -> bool {
        self.winner().is_some()
    }

    /// Plain-count label for `player`; blank once the tiebreak is decided
    pub fn score(&self, player: Player) -> PointLabel {
        if self.complete() {
            return PointLabel::Blank;
        }
        tiebreak_label(self.points(player))
    }

    pub fn points_to_save(&self, player: Player) -> u32 {
        points_to_save(self.points(player), self.points(player.opponent()))
    }
}
