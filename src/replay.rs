//! Replay driver - feeds a point sequence through a match
//!
//! This is the display/persistence collaborator side of the scorer: it only
//! pushes point events into [`TennisMatch`] and reads results back out.

use std::fmt::Write as _;

use serde::Serialize;

use crate::core::{MatchSnapshot, NewBallsTracker, TennisMatch};
use crate::types::Player;

/// Result of replaying a point sequence
#[derive(Debug, Clone)]
pub struct ReplayReport {
    pub tennis_match: TennisMatch,
    /// Points that reached an unfinished match
    pub points_played: usize,
    /// Points sent after the match was already over
    pub points_ignored: usize,
    pub server_changes: u32,
    /// Total games played at each "new balls please" call
    pub ball_changes: Vec<u32>,
}

pub fn replay(points: &[Player]) -> ReplayReport {
    let mut tennis_match = TennisMatch::new();
    let mut balls = NewBallsTracker::new();
    let mut points_played = 0;
    let mut points_ignored = 0;
    let mut server_changes = 0;
    let mut ball_changes = Vec::new();

    for (i, &player) in points.iter().enumerate() {
        if tennis_match.complete() {
            points_ignored += 1;
            continue;
        }

        let outcome = tennis_match.add_point(player);
        points_played += 1;

        if outcome.server_changed {
            server_changes += 1;
            tracing::info!(point = i + 1, server = %tennis_match.server(), "change of service");
        }
        if balls.observe(&tennis_match) {
            ball_changes.push(tennis_match.total_games_played());
            tracing::info!(point = i + 1, "new balls please");
        }
        if let Some(winner) = outcome.match_won {
            tracing::info!(point = i + 1, %winner, "game, set and match");
        }
    }

    if points_ignored > 0 {
        tracing::warn!(
            ignored = points_ignored,
            "points after the end of the match were ignored"
        );
    }

    ReplayReport {
        tennis_match,
        points_played,
        points_ignored,
        server_changes,
        ball_changes,
    }
}

/// JSON view of a [`MatchSnapshot`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub points: [String; 2],
    pub games: [u32; 2],
    pub sets: [u32; 2],
    /// 1 or 2
    pub server: u8,
    pub tie_break: bool,
    pub game_point: [bool; 2],
    pub set_point: [bool; 2],
    pub match_point: [bool; 2],
    pub previous_sets: Vec<[u32; 2]>,
    pub complete: bool,
    pub winner: Option<u8>,
}

fn player_number(player: Player) -> u8 {
    match player {
        Player::One => 1,
        Player::Two => 2,
    }
}

impl From<&MatchSnapshot> for Scoreboard {
    fn from(s: &MatchSnapshot) -> Self {
        Self {
            points: s.game_scores.map(|label| label.to_string()),
            games: s.current_games,
            sets: s.sets_won,
            server: player_number(s.server),
            tie_break: s.in_tie_break,
            game_point: s.game_point,
            set_point: s.set_point,
            match_point: s.match_point,
            previous_sets: s
                .previous_sets
                .iter()
                .map(|set| [set.player1, set.player2])
                .collect(),
            complete: s.complete,
            winner: s.winner.map(player_number),
        }
    }
}

/// Plain-text scoreboard, one row per player; `*` marks the server.
pub fn render_text(s: &MatchSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "            Sets  Games  Points  Previous");

    for player in Player::BOTH {
        let i = player.index();
        let marker = if s.server == player && !s.complete { '*' } else { ' ' };
        let previous: Vec<String> = s
            .previous_sets
            .iter()
            .map(|set| set.games(player).to_string())
            .collect();
        let flag = if s.match_point[i] {
            " match point"
        } else if s.set_point[i] {
            " set point"
        } else if s.game_point[i] {
            " game point"
        } else {
            ""
        };

        let _ = writeln!(
            out,
            "{} {}  {:>4}  {:>5}  {:>6}  {}{}",
            marker,
            player,
            s.sets_won[i],
            s.current_games[i],
            s.game_scores[i].to_string(),
            previous.join(" "),
            flag
        );
    }

    if s.in_tie_break {
        let _ = writeln!(out, "Tiebreak");
    }
    if let Some(winner) = s.winner {
        let _ = writeln!(out, "{} wins! Game, set and match.", winner);
    }
    out
}
