use arrayvec::ArrayVec;

use crate::types::{Player, PointLabel, SetScore, MAX_SETS};

/// Every display query of a match, captured at once
///
/// Per-player arrays are indexed by [`Player::index`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchSnapshot {
    pub game_scores: [PointLabel; 2],
    pub current_games: [u32; 2],
    pub sets_won: [u32; 2],
    pub server: Player,
    pub in_tie_break: bool,
    pub game_point: [bool; 2],
    pub set_point: [bool; 2],
    pub match_point: [bool; 2],
    pub current_set_index: usize,
    pub previous_sets: ArrayVec<SetScore, MAX_SETS>,
    pub complete: bool,
    pub winner: Option<Player>,
}

impl MatchSnapshot {
    pub fn clear(&mut self) {
        self.game_scores = [PointLabel::Love; 2];
        self.current_games = [0; 2];
        self.sets_won = [0; 2];
        self.server = Player::One;
        self.in_tie_break = false;
        self.game_point = [false; 2];
        self.set_point = [false; 2];
        self.match_point = [false; 2];
        self.current_set_index = 0;
        self.previous_sets.clear();
        self.complete = false;
        self.winner = None;
    }

    pub fn playable(&self) -> bool {
        !self.complete
    }

    pub fn game_score(&self, player: Player) -> PointLabel {
        self.game_scores[player.index()]
    }

    /// Completed sets followed by the current set's games
    pub fn all_sets(&self) -> ArrayVec<SetScore, MAX_SETS> {
        let mut sets = self.previous_sets.clone();
        // At most four sets precede the current one.
        let _ = sets.try_push(SetScore::new(self.current_games[0], self.current_games[1]));
        sets
    }
}

impl Default for MatchSnapshot {
    fn default() -> Self {
        Self {
            game_scores: [PointLabel::Love; 2],
            current_games: [0; 2],
            sets_won: [0; 2],
            server: Player::One,
            in_tie_break: false,
            game_point: [false; 2],
            set_point: [false; 2],
            match_point: [false; 2],
            current_set_index: 0,
            previous_sets: ArrayVec::new(),
            complete: false,
            winner: None,
        }
    }
}
