//! Set module - aggregates games into a set
//!
//! A set owns exactly one game at a time. When a regular game is won and the
//! set is still open, the finished game is replaced by a fresh one; when the
//! game counts meet the tiebreak threshold (6-6, or 12-12 in the final set)
//! the replacement is a [`Tiebreak`] instead, and the set never leaves
//! tiebreak mode again. Winning the tiebreak wins the set.

use crate::game::Game;
use crate::tiebreak::Tiebreak;
use crate::types::{
    Player, PointLabel, SetScore, FINAL_SET_TIEBREAK_AT, GAMES_TO_WIN_SET, TIEBREAK_AT,
    WIN_MARGIN,
};

/// The game currently being played in a set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetPhase {
    Regular(Game),
    Tiebreak(Tiebreak),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TennisSet {
    player1_games: u32,
    player2_games: u32,
    phase: SetPhase,
    is_last_set: bool,
    /// Set by the point that finished a game; cleared by the next point.
    game_just_completed: bool,
}

impl Default for TennisSet {
    fn default() -> Self {
        Self::new(false)
    }
}

impl TennisSet {
    /// Create a set; `is_last_set` moves the tiebreak threshold to 12-12
    pub fn new(is_last_set: bool) -> Self {
        Self {
            player1_games: 0,
            player2_games: 0,
            phase: SetPhase::Regular(Game::new()),
            is_last_set,
            game_just_completed: false,
        }
    }

    pub fn add_point(&mut self, player: Player) {
        if self.complete() {
            return;
        }

        self.game_just_completed = false;

        match &mut self.phase {
            SetPhase::Regular(game) => {
                game.add_point(player);
                if !game.has_won(player) {
                    return;
                }

                *self.games_mut(player) += 1;
                self.game_just_completed = true;
                tracing::debug!(
                    player = %player,
                    games = %self.score(),
                    "game won"
                );

                if !self.complete() {
                    self.phase = if self.should_start_tie_break() {
                        tracing::debug!(games = %self.score(), "tiebreak started");
                        SetPhase::Tiebreak(Tiebreak::new())
                    } else {
                        SetPhase::Regular(Game::new())
                    };
                }
            }
            SetPhase::Tiebreak(tiebreak) => {
                tiebreak.add_point(player);
                if tiebreak.has_won(player) {
                    *self.games_mut(player) += 1;
                    self.game_just_completed = true;
                    tracing::debug!(
                        player = %player,
                        games = %self.score(),
                        "tiebreak won"
                    );
                }
            }
        }
    }

    pub fn add_point_to_player1(&mut self) {
        self.add_point(Player::One);
    }

    pub fn add_point_to_player2(&mut self) {
        self.add_point(Player::Two);
    }

    fn games_mut(&mut self, player: Player) -> &mut u32 {
        match player {
            Player::One => &mut self.player1_games,
            Player::Two => &mut self.player2_games,
        }
    }

    /// Only consulted right after a regular game completes in an open set.
    fn should_start_tie_break(&self) -> bool {
        let threshold = if self.is_last_set {
            FINAL_SET_TIEBREAK_AT
        } else {
            TIEBREAK_AT
        };
        self.player1_games == threshold && self.player2_games == threshold
    }

    pub fn games(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1_games,
            Player::Two => self.player2_games,
        }
    }

    pub fn player1_games(&self) -> u32 {
        self.player1_games
    }

    pub fn player2_games(&self) -> u32 {
        self.player2_games
    }

    pub fn score(&self) -> SetScore {
        SetScore::new(self.player1_games, self.player2_games)
    }

    pub fn phase(&self) -> &SetPhase {
        &self.phase
    }

    pub fn is_last_set(&self) -> bool {
        self.is_last_set
    }

    pub fn is_in_tie_break(&self) -> bool {
        matches!(self.phase, SetPhase::Tiebreak(_))
    }

    /// True only directly after the point that finished a game (or the tiebreak)
    pub fn game_just_completed(&self) -> bool {
        self.game_just_completed
    }

    pub fn has_won(&self, player: Player) -> bool {
        match &self.phase {
            SetPhase::Tiebreak(tiebreak) => tiebreak.has_won(player),
            SetPhase::Regular(_) => {
                let games = self.games(player);
                games >= GAMES_TO_WIN_SET && games >= self.games(player.opponent()) + WIN_MARGIN
            }
        }
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

    /// Current-game label: tennis notation normally, plain count in a tiebreak
    pub fn game_score(&self, player: Player) -> PointLabel {
        match &self.phase {
            SetPhase::Regular(game) => game.score(player),
            SetPhase::Tiebreak(tiebreak) => tiebreak.score(player),
        }
    }

    pub fn player1_game_score(&self) -> PointLabel {
        self.game_score(Player::One)
    }

    pub fn player2_game_score(&self) -> PointLabel {
        self.game_score(Player::Two)
    }

    pub fn has_game_point(&self, player: Player) -> bool {
        let to_save = match &self.phase {
            SetPhase::Regular(game) => game.game_points_for(player),
            SetPhase::Tiebreak(tiebreak) => tiebreak.points_to_save(player),
        };
        to_save > 0
    }

    pub fn has_player1_game_point(&self) -> bool {
        self.has_game_point(Player::One)
    }

    pub fn has_player2_game_point(&self) -> bool {
        self.has_game_point(Player::Two)
    }

    /// Winning the next point would win the set for `player`
    pub fn has_set_point(&self, player: Player) -> bool {
        if self.complete() {
            return false;
        }

        if self.is_in_tie_break() {
            return self.has_game_point(player);
        }

        // From 5 games up, any lead turns the current game into the set.
        let games = self.games(player);
        games >= GAMES_TO_WIN_SET - 1
            && games > self.games(player.opponent())
            && self.has_game_point(player)
    }

    pub fn has_player1_set_point(&self) -> bool {
        self.has_set_point(Player::One)
    }

    pub fn has_player2_set_point(&self) -> bool {
        self.has_set_point(Player::Two)
    }
}
