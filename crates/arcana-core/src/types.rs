//! Core types for Arcana

pub mod affirmation;
pub mod card;
pub mod journal;
pub mod reading;
pub mod spread;

pub use affirmation::{Affirmation, AffirmationCategory, AffirmationFilter};
pub use card::{Arcana, CardId, DrawnCard, Element, Orientation, Suit, TarotCard};
pub use journal::{JournalEntry, JournalEntryId, NewJournalEntry};
pub use reading::{DailyCard, Reading, ReadingId};
pub use spread::{Difficulty, SpreadId, SpreadPosition, SpreadVariation, TarotSpread};
