//! Local profile storage
//!
//! Manages persistent storage for:
//! - Registered profiles (keyed by lowercase email)
//! - The remembered session (email of the signed-in profile)

use serde::{Deserialize, Serialize};

use crate::auth::User;
use crate::error::TarotError;
use redb::TableDefinition;

use super::Storage;

/// Table for profiles (key: lowercase email, value: JSON StoredProfile)
pub(crate) const PROFILES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("profiles");

/// Table holding the current session (key: "current", value: email bytes)
pub(crate) const SESSION_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("session");

const SESSION_KEY: &str = "current";

fn profile_key(email: &str) -> String {
    email.trim().to_lowercase()
}

/// A user together with their password digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredProfile {
    pub user: User,
    pub salt: String,
    pub password_hash: String,
}

impl Storage {
    pub fn save_profile(&self, profile: &StoredProfile) -> Result<(), TarotError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PROFILES_TABLE)?;
            let data = serde_json::to_vec(profile)?;
            let key = profile_key(&profile.user.email);
            table.insert(key.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn load_profile(&self, email: &str) -> Result<Option<StoredProfile>, TarotError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PROFILES_TABLE)?;
        let key = profile_key(email);

        match table.get(key.as_str())? {
            Some(v) => Ok(Some(serde_json::from_slice(v.value())?)),
            None => Ok(None),
        }
    }

    /// Remember (or forget, with `None`) which profile is signed in.
    pub fn set_session(&self, email: Option<&str>) -> Result<(), TarotError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            match email {
                Some(email) => {
                    let key = profile_key(email);
                    table.insert(SESSION_KEY, key.as_bytes())?;
                }
                None => {
                    table.remove(SESSION_KEY)?;
                }
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn session(&self) -> Result<Option<String>, TarotError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;

        match table.get(SESSION_KEY)? {
            Some(v) => {
                let email = String::from_utf8(v.value().to_vec())
                    .map_err(|e| TarotError::Serialization(e.to_string()))?;
                Ok(Some(email))
            }
            None => Ok(None),
        }
    }
}
