//! Game module - point-level scoring for a single advantage game
//!
//! Points run 0/15/30/40; from 40-40 (deuce) a player needs a two point lead.
//! Losing the point while the opponent holds advantage returns the game to
//! deuce instead of adding to the tally, so counts never drift far past 4.

use crate::notation::{has_won, holds_advantage, points_to_save, tennis_label};
use crate::types::{Player, PointLabel, POINTS_TO_WIN_GAME};

/// Score of one game in progress
///
/// Once either player has won, the game is terminal and further points are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Game {
    player1_points: u32,
    player2_points: u32,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Award a point, applying the deuce/advantage reversal
    pub fn add_point(&mut self, player: Player) {
        if self.complete() {
            return;
        }

        let opponent = player.opponent();
        if holds_advantage(self.points(opponent), self.points(player)) {
            // Advantage lost: back to deuce.
            self.player1_points = POINTS_TO_WIN_GAME - 1;
            self.player2_points = POINTS_TO_WIN_GAME - 1;
        } else {
            *self.points_mut(player) += 1;
        }
    }

    pub fn add_point_to_player1(&mut self) {
        self.add_point(Player::One);
    }

    pub fn add_point_to_player2(&mut self) {
        self.add_point(Player::Two);
    }

    /// Raw points won by `player` in this game
    pub fn points(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1_points,
            Player::Two => self.player2_points,
        }
    }

    fn points_mut(&mut self, player: Player) -> &mut u32 {
        match player {
            Player::One => &mut self.player1_points,
            Player::Two => &mut self.player2_points,
        }
    }

    pub fn has_won(&self, player: Player) -> bool {
        has_won(self.points(player), self.points(player.opponent()))
    }

    pub fn player1_won(&self) -> bool {
        self.has_won(Player::One)
    }

    pub fn player2_won(&self) -> bool {
        self.has_won(Player::Two)
    }

    pub fn winner(&self) -> Option<Player> {
        Player::BOTH.into_iter().find(|&p| self.has_won(p))
    }

    pub fn complete(&self) -> bool {
        self.player1_won() || self.player2_won()
    }

    /// Tennis-notation label for `player`; blank once the game is over
    pub fn score(&self, player: Player) -> PointLabel {
        if self.complete() {
            return PointLabel::Blank;
        }
        tennis_label(self.points(player), self.points(player.opponent()))
    }

    pub fn player1_score(&self) -> PointLabel {
        self.score(Player::One)
    }

    pub fn player2_score(&self) -> PointLabel {
        self.score(Player::Two)
    }

    /// Consecutive points the opponent needs to avoid losing on the next point.
    ///
    /// At 40-15 to `player` this is 2; 0 means `player` has no game point.
    pub fn game_points_for(&self, player: Player) -> u32 {
        points_to_save(self.points(player), self.points(player.opponent()))
    }

    pub fn game_points_for_player1(&self) -> u32 {
        self.game_points_for(Player::One)
    }

    pub fn game_points_for_player2(&self) -> u32 {
        self.game_points_for(Player::Two)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player::{One as P1, Two as P2};

    fn play(game: &mut Game, seq: &[Player]) {
        for &p in seq {
            game.add_point(p);
        }
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.points(P1), 0);
        assert_eq!(game.points(P2), 0);
        assert_eq!(game.player1_score(), PointLabel::Love);
        assert_eq!(game.player2_score(), PointLabel::Love);
        assert!(!game.complete());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_score_progression() {
        let mut game = Game::new();
        game.add_point_to_player1();
        assert_eq!(game.player1_score().to_string(), "15");
        game.add_point_to_player1();
        assert_eq!(game.player1_score().to_string(), "30");
        game.add_point_to_player1();
        assert_eq!(game.player1_score().to_string(), "40");
        assert_eq!(game.player2_score().to_string(), "0");
    }

    #[test]
    fn test_four_straight_points_win() {
        let mut game = Game::new();
        play(&mut game, &[P1, P1, P1, P1]);
        assert!(game.player1_won());
        assert!(!game.player2_won());
        assert!(game.complete());
        assert_eq!(game.winner(), Some(P1));
        assert_eq!(game.player1_score(), PointLabel::Blank);
        assert_eq!(game.player2_score(), PointLabel::Blank);
    }

    #[test]
    fn test_deuce_and_advantage() {
        let mut game = Game::new();
        play(&mut game, &[P1, P1, P1, P2, P2, P2]);
        assert_eq!(game.player1_score(), PointLabel::Forty);
        assert_eq!(game.player2_score(), PointLabel::Forty);

        game.add_point_to_player2();
        assert_eq!(game.player2_score(), PointLabel::Advantage);
        assert_eq!(game.player1_score(), PointLabel::Forty);
        assert!(!game.complete());

        // Advantage cancelled: counters reset to deuce.
        game.add_point_to_player1();
        assert_eq!(game.points(P1), 3);
        assert_eq!(game.points(P2), 3);

        game.add_point_to_player1();
        game.add_point_to_player1();
        assert!(game.player1_won());
    }

    #[test]
    fn test_points_ignored_after_completion() {
        let mut game = Game::new();
        play(&mut game, &[P2, P2, P2, P2]);
        let before = game;
        play(&mut game, &[P1, P1, P1, P1, P1]);
        assert_eq!(game, before);
        assert!(game.player2_won());
    }

    #[test]
    fn test_game_points() {
        let mut game = Game::new();
        assert_eq!(game.game_points_for_player1(), 0);

        play(&mut game, &[P1, P1, P1]);
        assert_eq!(game.game_points_for_player1(), 3);
        assert_eq!(game.game_points_for_player2(), 0);

        game.add_point_to_player2();
        assert_eq!(game.game_points_for_player1(), 2);

        game.add_point_to_player2();
        assert_eq!(game.game_points_for_player1(), 1);

        // Deuce
        game.add_point_to_player2();
        assert_eq!(game.game_points_for_player1(), 0);
        assert_eq!(game.game_points_for_player2(), 0);

        game.add_point_to_player2();
        assert_eq!(game.game_points_for_player2(), 1);
        assert_eq!(game.game_points_for_player1(), 0);
    }
}
