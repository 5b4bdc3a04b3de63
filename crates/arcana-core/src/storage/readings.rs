//! Reading storage

use crate::error::TarotError;
use crate::types::{Reading, ReadingId};
use redb::{ReadableTable, TableDefinition};

use super::Storage;

/// Table for readings (key: ULID string, value: JSON Reading)
pub(crate) const READINGS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("readings");

impl Storage {
    /// Save a reading, overwriting any reading with the same id.
    pub fn save_reading(&self, reading: &Reading) -> Result<(), TarotError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(READINGS_TABLE)?;
            let data = serde_json::to_vec(reading)?;
            let key = reading.id.to_string_repr();
            table.insert(key.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load a reading by id.
    ///
    /// Returns `None` if no reading with the given id exists.
    pub fn load_reading(&self, id: &ReadingId) -> Result<Option<Reading>, TarotError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(READINGS_TABLE)?;
        let key = id.to_string_repr();

        match table.get(key.as_str())? {
            Some(v) => Ok(Some(serde_json::from_slice(v.value())?)),
            None => Ok(None),
        }
    }

    /// All readings, newest first.
    pub fn list_readings(&self) -> Result<Vec<Reading>, TarotError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(READINGS_TABLE)?;

        let mut readings = Vec::new();
        // ULID keys iterate in creation order
        for entry in table.iter()?.rev() {
            let (_, value) = entry?;
            let reading: Reading = serde_json::from_slice(value.value())?;
            readings.push(reading);
        }
        Ok(readings)
    }

    /// Delete a reading. Returns whether it existed.
    pub fn delete_reading(&self, id: &ReadingId) -> Result<bool, TarotError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        let existed = {
            let mut table = write_txn.open_table(READINGS_TABLE)?;
            let key = id.to_string_repr();
            let removed = table.remove(key.as_str())?;
            removed.is_some()
        };
        write_txn.commit()?;
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use ulid::Ulid;

    fn reading(ulid: Ulid, question: &str) -> Reading {
        Reading {
            id: ReadingId(ulid),
            created_at: 0,
            spread_id: None,
            spread_name: "Custom Spread".into(),
            question: question.into(),
            cards: vec![],
            notes: String::new(),
        }
    }

    #[test]
    fn test_list_readings_newest_first() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().join("r.redb")).unwrap();

        let older = reading(Ulid::from_parts(1_000, 1), "first");
        let newer = reading(Ulid::from_parts(2_000, 1), "second");
        storage.save_reading(&older).unwrap();
        storage.save_reading(&newer).unwrap();

        let listed = storage.list_readings().unwrap();
        let questions: Vec<_> = listed.iter().map(|r| r.question.as_str()).collect();
        assert_eq!(questions, vec!["second", "first"]);
    }

    #[test]
    fn test_delete_reading() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().join("r.redb")).unwrap();
        let r = reading(Ulid::from_parts(5, 5), "q");
        storage.save_reading(&r).unwrap();

        assert!(storage.delete_reading(&r.id).unwrap());
        assert!(!storage.delete_reading(&r.id).unwrap());
        assert!(storage.load_reading(&r.id).unwrap().is_none());
    }
}
