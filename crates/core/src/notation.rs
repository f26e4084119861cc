//! Notation module - how raw point counts become scoreboard labels
//!
//! A regular game and a tiebreak both track plain point counts. They differ
//! only in how those counts are shown, so the two display policies live here
//! side by side together with the "points to save" rule both share.

use crate::types::{PointLabel, POINTS_TO_WIN_GAME, WIN_MARGIN};

/// True once `points` is enough to close out a game or tiebreak against `other`.
pub fn has_won(points: u32, other: u32) -> bool {
    points >= POINTS_TO_WIN_GAME && points >= other + WIN_MARGIN
}

/// True when `points` leads `other` by exactly one from 4 or more.
pub fn holds_advantage(points: u32, other: u32) -> bool {
    points >= POINTS_TO_WIN_GAME && points == other + 1
}

/// Tennis notation: 0/15/30/40, then "A" for a one-point lead past deuce.
///
/// Past three points without a lead the label stays at 40 (deuce).
pub fn tennis_label(points: u32, other: u32) -> PointLabel {
    match points {
        0 => PointLabel::Love,
        1 => PointLabel::Fifteen,
        2 => PointLabel::Thirty,
        3 => PointLabel::Forty,
        _ if holds_advantage(points, other) => PointLabel::Advantage,
        _ => PointLabel::Forty,
    }
}

/// Plain integer count, as shown during a tiebreak.
pub fn tiebreak_label(points: u32) -> PointLabel {
    PointLabel::Count(points)
}

/// Points the opponent must win in a row to stop `points` winning on the next point.
///
/// Returns 0 when the player has no game point:
/// - 40-0 / 40-15 / 40-30 give 3 / 2 / 1
/// - advantage gives 1
/// - deuce, trailing, or fewer than three points give 0
pub fn points_to_save(points: u32, other: u32) -> u32 {
    if points < POINTS_TO_WIN_GAME - 1 {
        return 0;
    }

    if points == POINTS_TO_WIN_GAME - 1 && other < POINTS_TO_WIN_GAME - 1 {
        return POINTS_TO_WIN_GAME - 1 - other;
    }

    if holds_advantage(points, other) {
        return 1;
    }

    0
}
