//! Journal storage

use crate::error::TarotError;
use crate::types::JournalEntry;
use redb::{ReadableTable, TableDefinition};

use super::Storage;

/// Table for journal entries (key: ULID string, value: JSON JournalEntry)
pub(crate) const JOURNAL_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("journal");

impl Storage {
    pub fn save_journal_entry(&self, entry: &JournalEntry) -> Result<(), TarotError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(JOURNAL_TABLE)?;
            let data = serde_json::to_vec(entry)?;
            let key = entry.id.to_string_repr();
            table.insert(key.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// All journal entries, newest first.
    pub fn list_journal_entries(&self) -> Result<Vec<JournalEntry>, TarotError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(JOURNAL_TABLE)?;

        let mut entries = Vec::new();
        for entry in table.iter()?.rev() {
            let (_, value) = entry?;
            entries.push(serde_json::from_slice(value.value())?);
        }
        Ok(entries)
    }
}
