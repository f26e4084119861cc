//! History module - match records for completed matches
//!
//! The scoring core never stores anything itself. This crate is the
//! collaborator that reads a finished [`TennisMatch`] through its public
//! queries and turns it into a [`MatchRecord`], plus a small storage seam:
//!
//! - [`MatchRecord`]: serde-serializable summary of one completed match
//! - [`MatchHistoryStore`]: capability trait for whatever keeps the records
//! - [`InMemoryHistoryStore`]: insertion-ordered store for tests and the CLI
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use tennis_scorer_core::TennisMatch;
//! use tennis_scorer_history::{InMemoryHistoryStore, MatchHistoryStore, MatchRecord};
//!
//! let mut tennis = TennisMatch::new();
//! for _ in 0..72 {
//!     tennis.add_point_to_player2();
//! }
//!
//! let record = MatchRecord::from_match(&tennis, "Centre Court", Utc::now()).unwrap();
//! assert_eq!(record.player2_games, vec![6, 6, 6]);
//!
//! let mut store = InMemoryHistoryStore::new();
//! let id = store.save(record);
//! assert!(store.get(id).is_some());
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub use tennis_scorer_core as core;
pub use tennis_scorer_types as types;

use crate::core::TennisMatch;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("match is still in progress")]
    MatchInProgress,
    #[error("no match record with id {0}")]
    NotFound(Uuid),
}

/// Stored summary of one completed match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: Uuid,
    pub played_at: DateTime<Utc>,
    pub player1_sets: u32,
    pub player2_sets: u32,
    /// Games won by player 1 in each set, in order.
    pub player1_games: Vec<u32>,
    /// Games won by player 2 in each set, in order.
    pub player2_games: Vec<u32>,
    pub location: String,
}

impl MatchRecord {
    /// Build a record from a finished match.
    ///
    /// The final set is still the match's current set, so its games are
    /// appended after `previous_sets_scores()`.
    pub fn from_match(
        tennis_match: &TennisMatch,
        location: impl Into<String>,
        played_at: DateTime<Utc>,
    ) -> Result<Self, HistoryError> {
        if !tennis_match.complete() {
            return Err(HistoryError::MatchInProgress);
        }

        let previous = tennis_match.previous_sets_scores();
        let player1_games = previous
            .iter()
            .map(|s| s.player1)
            .chain(std::iter::once(tennis_match.player1_current_games()))
            .collect();
        let player2_games = previous
            .iter()
            .map(|s| s.player2)
            .chain(std::iter::once(tennis_match.player2_current_games()))
            .collect();

        Ok(Self {
            id: Uuid::new_v4(),
            played_at,
            player1_sets: tennis_match.player1_sets(),
            player2_sets: tennis_match.player2_sets(),
            player1_games,
            player2_games,
            location: location.into(),
        })
    }

    /// `[6-4] [3-6] ...`, one bracket per set
    pub fn games_summary(&self) -> String {
        self.player1_games
            .iter()
            .zip(&self.player2_games)
            .map(|(p1, p2)| format!("[{}-{}] ", p1, p2))
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}\nPlayer 1: {} sets, Player 2: {} sets\nGames: {}",
            self.played_at.format("%d %b %Y, %H:%M"),
            self.location,
            self.player1_sets,
            self.player2_sets,
            self.games_summary()
        )
    }
}

/// Somewhere completed matches can be kept and looked up again
pub trait MatchHistoryStore {
    /// Append a record and return its id
    fn save(&mut self, record: MatchRecord) -> Uuid;

    /// All records, oldest first
    fn all(&self) -> Vec<MatchRecord>;

    fn get(&self, id: Uuid) -> Option<MatchRecord>;

    fn delete(&mut self, id: Uuid) -> Result<(), HistoryError>;

    fn clear(&mut self);
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryStore {
    records: Vec<MatchRecord>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl MatchHistoryStore for InMemoryHistoryStore {
    fn save(&mut self, record: MatchRecord) -> Uuid {
        let id = record.id;
        tracing::debug!(%id, location = %record.location, "match record saved");
        self.records.push(record);
        id
    }

    fn all(&self) -> Vec<MatchRecord> {
        self.records.clone()
    }

    fn get(&self, id: Uuid) -> Option<MatchRecord> {
        self.records.iter().find(|r| r.id == id).cloned()
    }

    fn delete(&mut self, id: Uuid) -> Result<(), HistoryError> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return Err(HistoryError::NotFound(id));
        }
        Ok(())
    }

    fn clear(&mut self) {
        self.records.clear();
    }
}
