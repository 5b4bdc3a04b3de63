//! Arcana Core Library
//!
//! Tarot deck, spreads, readings and journal, plus the animated scene
//! machinery behind the decorative 3D effects.
//!
//! ## Overview
//!
//! Arcana is a local-first tarot companion. The core is split in two halves:
//!
//! - **Content**: the 78-card deck, built-in spreads, daily card,
//!   affirmations, readings and journal entries, persisted with redb.
//! - **Scene**: a renderer-agnostic scene lifecycle (mount → per-frame
//!   update → unmount) used by the app for particle fields, card
//!   transitions and the deck shuffle.
//!
//! ## Quick Start
//!
//! ```ignore
//! use arcana_core::TarotEngine;
//!
//! let engine = TarotEngine::new("~/.arcana/data")?;
//!
//! // Today's card is drawn once and remembered until midnight
//! let daily = engine.daily_card()?;
//! println!("{} ({})", daily.card.card.name, daily.card.orientation);
//!
//! // Lay out a spread
//! let reading = engine.draw_reading(SpreadId(1), "What should I focus on?")?;
//! for card in &reading.cards {
//!     println!("{}", card.card.name);
//! }
//! ```

pub mod affirmations;
pub mod auth;
pub mod deck;
pub mod engine;
pub mod error;
pub mod scene;
pub mod spreads;
pub mod storage;
pub mod types;
pub mod ui_state;

// Re-exports
pub use affirmations::AffirmationCatalog;
pub use auth::{guard, AuthState, AuthStatus, GuardDecision, RedirectTarget, User, UserUpdate};
pub use deck::{CardFilter, Deck};
pub use engine::TarotEngine;
pub use error::{TarotError, TarotResult};
pub use scene::{ComposedScenes, EffectComposer, EffectKind, EventSink, Page, SceneEvent, SceneHost, Viewport};
pub use spreads::SpreadCatalog;
pub use storage::Storage;
pub use types::*;
pub use ui_state::{ModalKind, Notification, NotificationLevel, Theme, UiState};
