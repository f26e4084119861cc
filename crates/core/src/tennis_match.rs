//! Match module - sequences sets into a best-of-five match
//!
//! The match keeps every set it has played in an append-only arena indexed
//! by `current_set_index`; completed sets stay behind it as read-only
//! history. It also owns service rotation:
//!
//! - **Regular games**: the server changes after every completed game
//! - **Tiebreak**: the server changes after the 1st point, then after every
//!   2 points (after points 1, 3, 5, ...)
//! - **After a tiebreak**: the player who received the first tiebreak point
//!   serves the first game of the next set
//! - **After a set won in a regular game**: service simply alternates

use arrayvec::ArrayVec;

use crate::set::TennisSet;
use crate::snapshot::MatchSnapshot;
use crate::types::{Player, PointLabel, SetScore, FINAL_SET_INDEX, MAX_SETS, SETS_TO_WIN_MATCH};

/// What a single point changed
///
/// `server_changed` is the signal display collaborators use for audio cues;
/// the remaining fields name the player who won a game, set or the match on
/// this exact point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointOutcome {
    pub server_changed: bool,
    pub game_won: Option<Player>,
    pub set_won: Option<Player>,
    pub match_won: Option<Player>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TennisMatch {
    sets: ArrayVec<TennisSet, MAX_SETS>,
    current_set_index: usize,
    player1_sets_won: u32,
    player2_sets_won: u32,
    server: Player,
    /// Points scored since the current set entered its tiebreak.
    tiebreak_points_played: u32,
    /// Who served the first point of the current set's tiebreak.
    tiebreak_first_server: Option<Player>,
}

impl Default for TennisMatch {
    fn default() -> Self {
        Self::new()
    }
}

impl TennisMatch {
    /// Create a match: one regular first set, player 1 serving
    pub fn new() -> Self {
        let mut sets = ArrayVec::new();
        sets.push(TennisSet::new(false));

        Self {
            sets,
            current_set_index: 0,
            player1_sets_won: 0,
            player2_sets_won: 0,
            server: Player::One,
            tiebreak_points_played: 0,
            tiebreak_first_server: None,
        }
    }

    /// Return to the freshly constructed state
    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::info!("match reset");
    }

    /// Score a point for `player` and apply set, match and service bookkeeping.
    ///
    /// Ignored (default outcome) once the match is complete.
    pub fn add_point(&mut self, player: Player) -> PointOutcome {
        let mut outcome = PointOutcome::default();
        if self.complete() {
            return outcome;
        }

        let index = self.current_set_index;
        let Some(set) = self.sets.get_mut(index) else {
            return outcome;
        };

        let was_tie_break = set.is_in_tie_break();
        let was_game_complete = set.game_just_completed();
        let was_set_complete = set.complete();

        set.add_point(player);

        let set_complete = set.complete();
        let set_winner = set.winner();
        let game_completed = set.game_just_completed() && !was_game_complete;
        let now_tie_break = set.is_in_tie_break();

        if game_completed {
            outcome.game_won = Some(player);
        }

        if was_tie_break {
            self.tiebreak_points_played += 1;
        }

        if set_complete && !was_set_complete {
            if let Some(winner) = set_winner {
                *self.sets_won_mut(winner) += 1;
                outcome.set_won = Some(winner);
                tracing::debug!(
                    player = %winner,
                    set_index = index,
                    sets = %SetScore::new(self.player1_sets_won, self.player2_sets_won),
                    "set won"
                );
            }

            self.server = match (was_tie_break, self.tiebreak_first_server) {
                (true, Some(first)) => first.opponent(),
                _ => self.server.opponent(),
            };
            outcome.server_changed = true;

            if let Some(winner) = self.winner() {
                outcome.match_won = Some(winner);
                tracing::info!(player = %winner, "match won");
            } else {
                self.start_next_set();
            }
        } else if game_completed && !was_tie_break {
            self.server = self.server.opponent();
            outcome.server_changed = true;

            if now_tie_break {
                self.tiebreak_first_server = Some(self.server);
            }
        } else if was_tie_break && self.tiebreak_points_played % 2 == 1 {
            // Change ends of service after point 1, then every second point.
            self.server = self.server.opponent();
            outcome.server_changed = true;
        }

        if outcome.server_changed {
            tracing::debug!(server = %self.server, "server changed");
        }

        outcome
    }

    /// Score a point for player 1; returns whether the server changed
    pub fn add_point_to_player1(&mut self) -> bool {
        self.add_point(Player::One).server_changed
    }

    /// Score a point for player 2; returns whether the server changed
    pub fn add_point_to_player2(&mut self) -> bool {
        self.add_point(Player::Two).server_changed
    }

    fn start_next_set(&mut self) {
        self.current_set_index += 1;
        let is_last_set = self.current_set_index == FINAL_SET_INDEX;
        // A new set only starts at 2-2 sets or earlier, so the arena never overflows.
        self.sets.push(TennisSet::new(is_last_set));
        self.tiebreak_points_played = 0;
        self.tiebreak_first_server = None;
    }

    fn sets_won_mut(&mut self, player: Player) -> &mut u32 {
        match player {
            Player::One => &mut self.player1_sets_won,
            Player::Two => &mut self.player2_sets_won,
        }
    }

    pub fn sets_won(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1_sets_won,
            Player::Two => self.player2_sets_won,
        }
    }

    pub fn player1_sets(&self) -> u32 {
        self.player1_sets_won
    }

    pub fn player2_sets(&self) -> u32 {
        self.player2_sets_won
    }

    pub fn has_won(&self, player: Player) -> bool {
        self.sets_won(player) >= SETS_TO_WIN_MATCH
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

    pub fn server(&self) -> Player {
        self.server
    }

    pub fn is_player1_serving(&self) -> bool {
        self.server == Player::One
    }

    pub fn current_set_index(&self) -> usize {
        self.current_set_index
    }

    pub fn current_set(&self) -> Option<&TennisSet> {
        self.sets.get(self.current_set_index)
    }

    /// Every set started so far, the current one last
    pub fn sets(&self) -> &[TennisSet] {
        &self.sets
    }

    pub fn tiebreak_points_played(&self) -> u32 {
        self.tiebreak_points_played
    }

    pub fn game_score(&self, player: Player) -> PointLabel {
        self.current_set()
            .map_or(PointLabel::Blank, |set| set.game_score(player))
    }

    pub fn player1_game_score(&self) -> PointLabel {
        self.game_score(Player::One)
    }

    pub fn player2_game_score(&self) -> PointLabel {
        self.game_score(Player::Two)
    }

    pub fn current_games(&self, player: Player) -> u32 {
        self.current_set().map_or(0, |set| set.games(player))
    }

    pub fn player1_current_games(&self) -> u32 {
        self.current_games(Player::One)
    }

    pub fn player2_current_games(&self) -> u32 {
        self.current_games(Player::Two)
    }

    pub fn is_current_game_tie_break(&self) -> bool {
        self.current_set().is_some_and(TennisSet::is_in_tie_break)
    }

    pub fn has_game_point(&self, player: Player) -> bool {
        self.current_set()
            .is_some_and(|set| set.has_game_point(player))
    }

    pub fn has_player1_game_point(&self) -> bool {
        self.has_game_point(Player::One)
    }

    pub fn has_player2_game_point(&self) -> bool {
        self.has_game_point(Player::Two)
    }

    pub fn has_set_point(&self, player: Player) -> bool {
        self.current_set()
            .is_some_and(|set| set.has_set_point(player))
    }

    pub fn has_player1_set_point(&self) -> bool {
        self.has_set_point(Player::One)
    }

    pub fn has_player2_set_point(&self) -> bool {
        self.has_set_point(Player::Two)
    }

    /// Set point for a player who is one set away from the match
    pub fn has_match_point(&self, player: Player) -> bool {
        self.has_set_point(player) && self.sets_won(player) == SETS_TO_WIN_MATCH - 1
    }

    pub fn has_player1_match_point(&self) -> bool {
        self.has_match_point(Player::One)
    }

    pub fn has_player2_match_point(&self) -> bool {
        self.has_match_point(Player::Two)
    }

    /// Game scores of the sets before the current one, oldest first
    pub fn previous_sets_scores(&self) -> ArrayVec<SetScore, MAX_SETS> {
        self.sets
            .iter()
            .take(self.current_set_index)
            .map(TennisSet::score)
            .collect()
    }

    /// Games completed across the whole match, current set included
    pub fn total_games_played(&self) -> u32 {
        self.sets.iter().map(|set| set.score().total()).sum()
    }

    pub fn snapshot_into(&self, out: &mut MatchSnapshot) {
        out.clear();

        for player in Player::BOTH {
            let i = player.index();
            out.game_scores[i] = self.game_score(player);
            out.current_games[i] = self.current_games(player);
            out.sets_won[i] = self.sets_won(player);
            out.game_point[i] = self.has_game_point(player);
            out.set_point[i] = self.has_set_point(player);
            out.match_point[i] = self.has_match_point(player);
        }

        out.server = self.server;
        out.in_tie_break = self.is_current_game_tie_break();
        out.current_set_index = self.current_set_index;
        out.previous_sets = self.previous_sets_scores();
        out.complete = self.complete();
        out.winner = self.winner();
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        let mut s = MatchSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player::{One as P1, Two as P2};

    fn win_game(m: &mut TennisMatch, player: Player) {
        for _ in 0..4 {
            m.add_point(player);
        }
    }

    fn win_set(m: &mut TennisMatch, player: Player) {
        for _ in 0..6 {
            win_game(m, player);
        }
    }

    #[test]
    fn test_new_match() {
        let m = TennisMatch::new();
        assert_eq!(m.sets().len(), 1);
        assert_eq!(m.current_set_index(), 0);
        assert_eq!(m.player1_sets(), 0);
        assert_eq!(m.player2_sets(), 0);
        assert!(m.is_player1_serving());
        assert_eq!(m.tiebreak_points_played(), 0);
        assert!(!m.complete());
        assert_eq!(m.player1_game_score().to_string(), "0");
    }

    #[test]
    fn test_outcome_reports_game_and_set() {
        let mut m = TennisMatch::new();
        for _ in 0..3 {
            assert_eq!(m.add_point(P2), PointOutcome::default());
        }
        let outcome = m.add_point(P2);
        assert_eq!(outcome.game_won, Some(P2));
        assert!(outcome.server_changed);
        assert_eq!(outcome.set_won, None);

        for _ in 0..4 {
            win_game(&mut m, P2);
        }
        for _ in 0..3 {
            m.add_point(P2);
        }
        let outcome = m.add_point(P2);
        assert_eq!(outcome.set_won, Some(P2));
        assert_eq!(outcome.match_won, None);
        assert_eq!(m.current_set_index(), 1);
    }

    #[test]
    fn test_fifth_set_is_final_set() {
        let mut m = TennisMatch::new();
        win_set(&mut m, P1);
        win_set(&mut m, P2);
        win_set(&mut m, P1);
        win_set(&mut m, P2);
        assert_eq!(m.current_set_index(), FINAL_SET_INDEX);
        assert!(m.current_set().unwrap().is_last_set());
        assert!(m.sets()[..FINAL_SET_INDEX].iter().all(|s| !s.is_last_set()));
    }

    #[test]
    fn test_match_won_outcome_and_no_new_set() {
        let mut m = TennisMatch::new();
        win_set(&mut m, P1);
        win_set(&mut m, P1);
        for _ in 0..5 {
            win_game(&mut m, P1);
        }
        for _ in 0..3 {
            m.add_point(P1);
        }
        let outcome = m.add_point(P1);
        assert_eq!(outcome.match_won, Some(P1));
        assert_eq!(outcome.set_won, Some(P1));
        assert_eq!(m.sets().len(), 3);
        assert_eq!(m.current_set_index(), 2);

        // Further points are no-ops.
        assert!(!m.add_point_to_player2());
        assert_eq!(m.add_point(P2), PointOutcome::default());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut m = TennisMatch::new();
        win_set(&mut m, P2);
        m.add_point(P1);
        m.reset();
        assert_eq!(m, TennisMatch::new());
    }

    #[test]
    fn test_total_games_played() {
        let mut m = TennisMatch::new();
        win_set(&mut m, P1);
        win_game(&mut m, P2);
        win_game(&mut m, P1);
        assert_eq!(m.total_games_played(), 8);
    }
}
