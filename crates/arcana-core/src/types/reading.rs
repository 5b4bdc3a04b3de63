//! Readings and the daily card

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use super::card::DrawnCard;
use super::spread::SpreadId;

/// Unique identifier for a reading
///
/// Uses ULID so readings sort by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReadingId(pub Ulid);

impl ReadingId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    pub fn to_string_repr(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl Default for ReadingId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReadingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "reading_{}", self.0)
    }
}

/// A recorded spread with the cards that came out for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub id: ReadingId,
    /// Unix timestamp of creation
    pub created_at: i64,
    pub spread_id: Option<SpreadId>,
    pub spread_name: String,
    pub question: String,
    pub cards: Vec<DrawnCard>,
    pub notes: String,
}

/// The card drawn for a calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyCard {
    pub date: NaiveDate,
    pub card: DrawnCard,
}
