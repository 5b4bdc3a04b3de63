//! Persistent storage using redb.
//!
//! This module provides ACID-compliant storage for:
//! - The daily card (one record, replaced each day)
//! - Readings
//! - Journal entries
//! - The local user profile and the remembered session

use crate::error::TarotError;
use crate::types::DailyCard;
use parking_lot::RwLock;
use redb::{Database, TableDefinition};
use std::path::Path;
use std::sync::Arc;

// Submodules
mod journal;
mod profile;
mod readings;

use journal::JOURNAL_TABLE;
use profile::{PROFILES_TABLE, SESSION_TABLE};
use readings::READINGS_TABLE;

pub use profile::StoredProfile;

// Table definitions
const DAILY_CARD_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("daily_card");

const DAILY_CARD_KEY: &str = "daily";

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create all required tables
    pub fn new(path: impl AsRef<Path>) -> Result<Self, TarotError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(DAILY_CARD_TABLE)?;
            let _ = write_txn.open_table(READINGS_TABLE)?;
            let _ = write_txn.open_table(JOURNAL_TABLE)?;
            let _ = write_txn.open_table(PROFILES_TABLE)?;
            let _ = write_txn.open_table(SESSION_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Daily Card
    // ═══════════════════════════════════════════════════════════════════════

    /// Replace the stored daily card.
    pub fn save_daily_card(&self, daily: &DailyCard) -> Result<(), TarotError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(DAILY_CARD_TABLE)?;
            let data = serde_json::to_vec(daily)?;
            table.insert(DAILY_CARD_KEY, data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load the stored daily card, whatever day it was drawn on.
    pub fn load_daily_card(&self) -> Result<Option<DailyCard>, TarotError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(DAILY_CARD_TABLE)?;

        match table.get(DAILY_CARD_KEY)? {
            Some(v) => Ok(Some(serde_json::from_slice(v.value())?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;
    use crate::types::{CardId, DrawnCard, Orientation};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");
        let storage = Storage::new(&db_path).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_storage_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested/path/to/test.redb");
        let storage = Storage::new(&db_path);
        assert!(storage.is_ok());
        assert!(db_path.exists());
    }

    #[test]
    fn test_daily_card_missing_initially() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.load_daily_card().unwrap().is_none());
    }

    #[test]
    fn test_daily_card_is_replaced() {
        let (storage, _temp) = create_test_storage();
        let deck = Deck::standard();

        let first = DailyCard {
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            card: DrawnCard::new(deck.get(CardId(0)).unwrap().clone(), Orientation::Upright),
        };
        let second = DailyCard {
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            card: DrawnCard::new(deck.get(CardId(19)).unwrap().clone(), Orientation::Reversed),
        };

        storage.save_daily_card(&first).unwrap();
        storage.save_daily_card(&second).unwrap();

        assert_eq!(storage.load_daily_card().unwrap(), Some(second));
    }

    #[test]
    fn test_data_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("reopen.redb");
        let deck = Deck::standard();
        let daily = DailyCard {
            date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            card: DrawnCard::new(deck.get(CardId(17)).unwrap().clone(), Orientation::Upright),
        };

        {
            let storage = Storage::new(&db_path).unwrap();
            storage.save_daily_card(&daily).unwrap();
        }

        let storage = Storage::new(&db_path).unwrap();
        assert_eq!(storage.load_daily_card().unwrap(), Some(daily));
    }
}
