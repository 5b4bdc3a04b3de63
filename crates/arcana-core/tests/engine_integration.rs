//! TarotEngine integration tests
//!
//! Exercise the engine end to end against a real database in a temp dir.

use arcana_core::{
    CardFilter, CardId, NewJournalEntry, Suit, TarotEngine, TarotError, UserUpdate,
};
use arcana_core::types::SpreadId;
use chrono::NaiveDate;
use tempfile::TempDir;

fn engine(dir: &TempDir) -> TarotEngine {
    TarotEngine::with_seed(dir.path(), 42).expect("engine opens")
}

// ============================================================================
// Daily Card
// ============================================================================

#[test]
fn test_daily_card_is_stable_within_a_day_and_survives_restart() {
    let dir = TempDir::new().unwrap();
    let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

    let first = engine(&dir).daily_card_on(day).unwrap();
    let again = engine(&dir).daily_card_on(day).unwrap();
    assert_eq!(first, again);
    assert_eq!(first.date, day);

    let next = engine(&dir).daily_card_on(day.succ_opt().unwrap()).unwrap();
    assert_eq!(next.date, day.succ_opt().unwrap());
}

// ============================================================================
// Readings
// ============================================================================

#[test]
fn test_reading_lifecycle() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir);

    let celtic = engine.draw_reading(SpreadId(2), "  Where is this going?  ").unwrap();
    assert_eq!(celtic.cards.len(), 10);
    assert_eq!(celtic.question, "Where is this going?");
    assert_eq!(celtic.spread_name, "Celtic Cross");

    let three = engine.draw_reading(SpreadId(1), "Today").unwrap();
    let listed = engine.readings().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, three.id);

    assert!(engine.update_reading_notes(&celtic.id, "Tower in the outcome").unwrap());
    assert_eq!(engine.reading(&celtic.id).unwrap().notes, "Tower in the outcome");

    assert!(engine.delete_reading(&celtic.id).unwrap());
    assert!(matches!(
        engine.reading(&celtic.id),
        Err(TarotError::ReadingNotFound(_))
    ));
}

#[test]
fn test_unknown_spread_is_rejected_for_draws() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir);
    assert!(engine.draw_reading(SpreadId(99), "?").is_err());
}

#[test]
fn test_custom_reading_keeps_cards() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir);
    let card = engine.random_card();
    let reading = engine
        .create_reading(None, "Free draw", vec![card.clone()])
        .unwrap();
    assert_eq!(reading.spread_name, "Custom Spread");
    assert_eq!(reading.cards, vec![card]);
}

// ============================================================================
// Search & Journal
// ============================================================================

#[test]
fn test_search_combines_suit_and_query() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir);
    let filter = CardFilter {
        suit: Some(Suit::Cups),
        query: Some("ace".into()),
        ..Default::default()
    };
    let found = engine.search_cards(&filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Ace of Cups");
}

#[test]
fn test_journal_validates_and_orders() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir);

    let empty = NewJournalEntry {
        title: "Nothing".into(),
        content: "   ".into(),
        ..Default::default()
    };
    assert!(matches!(
        engine.add_journal_entry(empty),
        Err(TarotError::InvalidInput(_))
    ));

    let unknown_card = NewJournalEntry {
        content: "Dreamt of a card".into(),
        card_ids: vec![CardId(200)],
        ..Default::default()
    };
    assert!(engine.add_journal_entry(unknown_card).is_err());

    let first = engine
        .add_journal_entry(NewJournalEntry {
            content: "Morning pull".into(),
            card_ids: vec![CardId(0)],
            ..Default::default()
        })
        .unwrap();
    let second = engine
        .add_journal_entry(NewJournalEntry {
            content: "Evening pull".into(),
            ..Default::default()
        })
        .unwrap();
    let entries = engine.journal_entries().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, second.id);
    assert_eq!(entries[1].id, first.id);
}

// ============================================================================
// Profiles
// ============================================================================

#[test]
fn test_register_sign_in_and_restore() {
    let dir = TempDir::new().unwrap();
    {
        let engine = engine(&dir);
        let user = engine
            .register("Seeker", "seeker@example.com", "secret1")
            .unwrap();
        assert_eq!(user.display_name, "Seeker");
        assert!(engine
            .register("Again", "seeker@example.com", "secret1")
            .is_err());
    }

    let engine = engine(&dir);
    let restored = engine.restore_session().unwrap().expect("session kept");
    assert_eq!(restored.email, "seeker@example.com");

    engine.sign_out().unwrap();
    assert!(engine.restore_session().unwrap().is_none());

    assert!(matches!(
        engine.sign_in("seeker@example.com", "wrong-pass"),
        Err(TarotError::InvalidCredentials)
    ));
    let user = engine.sign_in("seeker@example.com", "secret1").unwrap();

    let updated = engine
        .update_profile(
            &user.email,
            UserUpdate {
                display_name: Some("Oracle".into()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.display_name, "Oracle");
}

#[test]
fn test_credential_validation() {
    let dir = TempDir::new().unwrap();
    let engine = engine(&dir);
    assert!(matches!(
        engine.register("", "a@b.c", "secret1"),
        Err(TarotError::InvalidInput(_))
    ));
    assert!(engine.register("Name", "not-an-email", "secret1").is_err());
    assert!(engine.register("Name", "a@b.c", "short").is_err());
    assert!(engine.register("Name", "a@b.c", "longenough").is_ok());
}
