//! Journal entries

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use super::card::CardId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JournalEntryId(pub Ulid);

impl JournalEntryId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    pub fn to_string_repr(&self) -> String {
        self.0.to_string()
    }
}

impl Default for JournalEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for JournalEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "journal_{}", self.0)
    }
}

/// Fields supplied by the user when writing an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewJournalEntry {
    pub title: String,
    pub content: String,
    pub card_ids: Vec<CardId>,
    pub mood: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: JournalEntryId,
    /// Unix timestamp of creation
    pub created_at: i64,
    pub title: String,
    pub content: String,
    pub card_ids: Vec<CardId>,
    pub mood: Option<String>,
}

impl JournalEntry {
    pub fn from_new(entry: NewJournalEntry, created_at: i64) -> Self {
        Self {
            id: JournalEntryId::new(),
            created_at,
            title: entry.title,
            content: entry.content,
            card_ids: entry.card_ids,
            mood: entry.mood,
        }
    }
}
