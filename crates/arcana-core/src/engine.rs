//! Main TarotEngine - the primary entry point for Arcana content
//!
//! TarotEngine coordinates the deck, the spread catalog and Storage for:
//! - The daily card (drawn once per calendar day and remembered)
//! - Readings (draw, record, annotate)
//! - Journal entries
//! - The local profile and session
//!
//! # Example
//!
//! ```ignore
//! use arcana_core::{SpreadId, TarotEngine};
//!
//! let engine = TarotEngine::new("~/.arcana/data")?;
//! let reading = engine.draw_reading(Some(SpreadId(1)), "Where am I headed?")?;
//! engine.update_reading_notes(&reading.id, "Revisit in a month")?;
//! ```

use std::path::{Path, PathBuf};

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::{Local, NaiveDate, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info};
use ulid::{Generator, Ulid};

use crate::affirmations::AffirmationCatalog;
use crate::auth::{User, UserUpdate};
use crate::deck::{CardFilter, Deck};
use crate::error::{TarotError, TarotResult};
use crate::spreads::{SpreadCatalog, CUSTOM_SPREAD_NAME};
use crate::storage::{Storage, StoredProfile};
use crate::types::{
    Affirmation, AffirmationFilter, CardId, DailyCard, DrawnCard, JournalEntry, JournalEntryId,
    NewJournalEntry, Reading, ReadingId, SpreadId, TarotCard, TarotSpread,
};

/// Minimum accepted password length for local profiles.
pub const MIN_PASSWORD_LEN: usize = 6;

pub struct TarotEngine {
    /// Persistent storage for readings, journal and profile
    storage: Storage,
    deck: Deck,
    spreads: SpreadCatalog,
    affirmations: AffirmationCatalog,
    data_dir: PathBuf,
    /// Monotonic ids so listings sort by creation even within a millisecond
    ids: Mutex<Generator>,
    rng: Mutex<StdRng>,
}

impl TarotEngine {
    /// Create a new TarotEngine with the given data directory
    ///
    /// # Errors
    ///
    /// Returns `TarotError::Io` if the directory cannot be created.
    /// Returns `TarotError::Database` if storage initialization fails.
    pub fn new(data_dir: impl AsRef<Path>) -> TarotResult<Self> {
        Self::with_rng(data_dir, StdRng::from_os_rng())
    }

    /// Like [`TarotEngine::new`] with a fixed seed, for reproducible draws.
    pub fn with_seed(data_dir: impl AsRef<Path>, seed: u64) -> TarotResult<Self> {
        Self::with_rng(data_dir, StdRng::seed_from_u64(seed))
    }

    fn with_rng(data_dir: impl AsRef<Path>, rng: StdRng) -> TarotResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        info!(?data_dir, "Initializing TarotEngine");

        std::fs::create_dir_all(&data_dir)?;
        let storage = Storage::new(data_dir.join("arcana.redb"))?;

        let deck = Deck::standard();
        Ok(Self {
            storage,
            affirmations: AffirmationCatalog::for_deck(&deck),
            deck,
            spreads: SpreadCatalog::builtin(),
            data_dir,
            ids: Mutex::new(Generator::new()),
            rng: Mutex::new(rng),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    fn next_ulid(&self) -> Ulid {
        self.ids.lock().generate().unwrap_or_else(|_| Ulid::new())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Cards
    // ═══════════════════════════════════════════════════════════════════════

    pub fn card(&self, id: CardId) -> TarotResult<&TarotCard> {
        self.deck.card(id)
    }

    pub fn search_cards(&self, filter: &CardFilter) -> Vec<&TarotCard> {
        self.deck.filter(filter)
    }

    /// A random card in a random orientation.
    pub fn random_card(&self) -> DrawnCard {
        let mut rng = self.rng.lock();
        self.deck.draw(&mut *rng)
    }

    /// Today's card in the local calendar.
    pub fn daily_card(&self) -> TarotResult<DailyCard> {
        self.daily_card_on(Local::now().date_naive())
    }

    /// The card for `date`: the stored one if it was drawn that day,
    /// otherwise a fresh draw that replaces it.
    pub fn daily_card_on(&self, date: NaiveDate) -> TarotResult<DailyCard> {
        if let Some(stored) = self.storage.load_daily_card()? {
            if stored.date == date {
                return Ok(stored);
            }
        }

        let daily = DailyCard {
            date,
            card: self.random_card(),
        };
        self.storage.save_daily_card(&daily)?;
        info!(%date, card = %daily.card.card.name, "Drew daily card");
        Ok(daily)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Affirmations
    // ═══════════════════════════════════════════════════════════════════════

    pub fn affirmations(&self, filter: AffirmationFilter) -> Vec<&Affirmation> {
        self.affirmations.filter(filter)
    }

    pub fn affirmation(&self, id: u32) -> Option<&Affirmation> {
        self.affirmations.get(id)
    }

    pub fn card_affirmation(&self, card: CardId) -> TarotResult<&Affirmation> {
        self.affirmations.for_card(card)
    }

    /// Today's affirmation in the local calendar.
    pub fn daily_affirmation(&self) -> &Affirmation {
        self.affirmations.daily_on(Local::now().date_naive())
    }

    pub fn daily_affirmation_on(&self, date: NaiveDate) -> &Affirmation {
        self.affirmations.daily_on(date)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Spreads & Readings
    // ═══════════════════════════════════════════════════════════════════════

    pub fn spreads(&self) -> &[TarotSpread] {
        self.spreads.all()
    }

    pub fn spread(&self, id: SpreadId) -> TarotResult<&TarotSpread> {
        self.spreads.spread(id)
    }

    /// Record a reading with cards chosen elsewhere.
    ///
    /// An unknown or absent spread id is recorded as a custom spread.
    pub fn create_reading(
        &self,
        spread_id: Option<SpreadId>,
        question: &str,
        cards: Vec<DrawnCard>,
    ) -> TarotResult<Reading> {
        let spread_name = spread_id
            .and_then(|id| self.spreads.get(id))
            .map(|s| s.name.clone())
            .unwrap_or_else(|| CUSTOM_SPREAD_NAME.to_string());

        let reading = Reading {
            id: ReadingId(self.next_ulid()),
            created_at: Utc::now().timestamp(),
            spread_id,
            spread_name,
            question: question.trim().to_string(),
            cards,
            notes: String::new(),
        };
        self.storage.save_reading(&reading)?;
        info!(id = %reading.id, spread = %reading.spread_name, "Created reading");
        Ok(reading)
    }

    /// Draw one card per position of the spread and record the reading.
    pub fn draw_reading(&self, spread_id: SpreadId, question: &str) -> TarotResult<Reading> {
        let count = self.spreads.spread(spread_id)?.card_count();
        let cards = {
            let mut rng = self.rng.lock();
            self.deck.draw_many(count, &mut *rng)?
        };
        self.create_reading(Some(spread_id), question, cards)
    }

    /// All readings, newest first.
    pub fn readings(&self) -> TarotResult<Vec<Reading>> {
        self.storage.list_readings()
    }

    pub fn reading(&self, id: &ReadingId) -> TarotResult<Reading> {
        self.storage
            .load_reading(id)?
            .ok_or_else(|| TarotError::ReadingNotFound(id.to_string_repr()))
    }

    /// Replace the notes of a reading. Returns `false` if it does not exist.
    pub fn update_reading_notes(&self, id: &ReadingId, notes: &str) -> TarotResult<bool> {
        match self.storage.load_reading(id)? {
            Some(mut reading) => {
                reading.notes = notes.to_string();
                self.storage.save_reading(&reading)?;
                debug!(%id, "Updated reading notes");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn delete_reading(&self, id: &ReadingId) -> TarotResult<bool> {
        self.storage.delete_reading(id)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Journal
    // ═══════════════════════════════════════════════════════════════════════

    pub fn add_journal_entry(&self, entry: NewJournalEntry) -> TarotResult<JournalEntry> {
        if entry.content.trim().is_empty() {
            return Err(TarotError::InvalidInput("journal entry is empty".into()));
        }
        for id in &entry.card_ids {
            self.deck.card(*id)?;
        }
        let mut journal = JournalEntry::from_new(entry, Utc::now().timestamp());
        journal.id = JournalEntryId(self.next_ulid());
        self.storage.save_journal_entry(&journal)?;
        Ok(journal)
    }

    /// All journal entries, newest first.
    pub fn journal_entries(&self) -> TarotResult<Vec<JournalEntry>> {
        self.storage.list_journal_entries()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Profile & Session
    // ═══════════════════════════════════════════════════════════════════════

    /// Create a local profile and sign it in.
    pub fn register(&self, display_name: &str, email: &str, password: &str) -> TarotResult<User> {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err(TarotError::InvalidInput("name is required".into()));
        }
        let email = email.trim();
        validate_credentials(email, password)?;
        if self.storage.load_profile(email)?.is_some() {
            return Err(TarotError::InvalidInput(format!(
                "an account for {} already exists",
                email
            )));
        }

        let salt = {
            let mut bytes = [0u8; 16];
            self.rng.lock().fill_bytes(&mut bytes);
            hex::encode(bytes)
        };
        let user = User {
            id: self.next_ulid().to_string(),
            display_name: display_name.to_string(),
            email: email.to_string(),
            avatar_url: None,
            joined_at: Utc::now().timestamp(),
        };
        let profile = StoredProfile {
            password_hash: hash_password(&salt, password)?,
            salt,
            user: user.clone(),
        };
        self.storage.save_profile(&profile)?;
        self.storage.set_session(Some(&user.email))?;
        info!(email = %user.email, "Registered profile");
        Ok(user)
    }

    pub fn sign_in(&self, email: &str, password: &str) -> TarotResult<User> {
        let email = email.trim();
        validate_credentials(email, password)?;
        let profile = self
            .storage
            .load_profile(email)?
            .ok_or(TarotError::InvalidCredentials)?;
        if !verify_password(&profile.password_hash, password) {
            return Err(TarotError::InvalidCredentials);
        }
        self.storage.set_session(Some(&profile.user.email))?;
        info!(email = %profile.user.email, "Signed in");
        Ok(profile.user)
    }

    pub fn sign_out(&self) -> TarotResult<()> {
        self.storage.set_session(None)
    }

    /// The user remembered from the previous run, if any.
    pub fn restore_session(&self) -> TarotResult<Option<User>> {
        match self.storage.session()? {
            Some(email) => Ok(self.storage.load_profile(&email)?.map(|p| p.user)),
            None => Ok(None),
        }
    }

    /// Apply a profile update to the signed-in user.
    pub fn update_profile(&self, email: &str, update: UserUpdate) -> TarotResult<User> {
        let mut profile = self
            .storage
            .load_profile(email)?
            .ok_or(TarotError::InvalidCredentials)?;
        if let Some(name) = update.display_name {
            let name = name.trim();
            if name.is_empty() {
                return Err(TarotError::InvalidInput("name is required".into()));
            }
            profile.user.display_name = name.to_string();
        }
        if let Some(avatar) = update.avatar_url {
            profile.user.avatar_url = avatar;
        }
        // Email is the storage key; changing it is not supported locally
        self.storage.save_profile(&profile)?;
        Ok(profile.user)
    }
}

fn validate_credentials(email: &str, password: &str) -> TarotResult<()> {
    let email = email.trim();
    let valid_email = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid_email {
        return Err(TarotError::InvalidInput(format!("invalid email: {}", email)));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(TarotError::InvalidInput(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Argon2id PHC string for `password`, salted with the profile's hex salt.
fn hash_password(salt: &str, password: &str) -> TarotResult<String> {
    let salt = SaltString::from_b64(salt).map_err(|e| TarotError::PasswordHash(e.to_string()))?;
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| TarotError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

fn verify_password(stored: &str, password: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            debug!(error = %e, "Stored password hash is unreadable");
            false
        }
    }
}
