//! Affirmation catalog.
//!
//! Every card carries one affirmation, written from its first keyword
//! unless it has its own text. A short list of daily affirmations rotates
//! by calendar day.

use chrono::{Datelike, NaiveDate};

use crate::deck::Deck;
use crate::error::{TarotError, TarotResult};
use crate::types::{Affirmation, AffirmationCategory, AffirmationFilter, CardId, TarotCard};

const CARD_TEXT: [(u8, &str); 5] = [
    (0, "I embrace freedom and welcome its energy into my life."),
    (1, "I have the power to create my reality."),
    (2, "I trust my intuition and inner knowing."),
    (3, "I nurture my creative potential and embrace abundance."),
    (4, "I create structure and stability in my life."),
];

const DAILY_TEXT: [&str; 5] = [
    "Today, I open myself to new possibilities and trust the journey.",
    "I am worthy of love, success, and all good things.",
    "I release what no longer serves me and welcome positive change.",
    "My intuition guides me to make wise decisions.",
    "I am connected to the universal wisdom that flows through all things.",
];

fn card_text(card: &TarotCard) -> String {
    if let Some((_, text)) = CARD_TEXT.iter().find(|(id, _)| *id == card.id.0) {
        return text.to_string();
    }
    let keyword = card.keywords.first().map(String::as_str).unwrap_or("change");
    match card.suit {
        Some(suit) => format!(
            "I embrace the {} of {} and welcome its energy into my life.",
            keyword,
            suit.name().to_lowercase()
        ),
        None => format!("I embrace {} and welcome its energy into my life.", keyword),
    }
}

#[derive(Debug, Clone)]
pub struct AffirmationCatalog {
    affirmations: Vec<Affirmation>,
}

impl Default for AffirmationCatalog {
    fn default() -> Self {
        Self::for_deck(&Deck::standard())
    }
}

impl AffirmationCatalog {
    /// One affirmation per card in deck order, then the daily list.
    pub fn for_deck(deck: &Deck) -> Self {
        let mut affirmations: Vec<Affirmation> = deck
            .cards()
            .iter()
            .map(|card| Affirmation {
                id: 0,
                text: card_text(card),
                category: AffirmationCategory::Card,
                card_id: Some(card.id),
                card_name: Some(card.name.clone()),
            })
            .collect();
        affirmations.extend(DAILY_TEXT.iter().map(|text| Affirmation {
            id: 0,
            text: text.to_string(),
            category: AffirmationCategory::Daily,
            card_id: None,
            card_name: None,
        }));
        for (i, affirmation) in affirmations.iter_mut().enumerate() {
            affirmation.id = i as u32 + 1;
        }
        Self { affirmations }
    }

    pub fn all(&self) -> &[Affirmation] {
        &self.affirmations
    }

    pub fn filter(&self, filter: AffirmationFilter) -> Vec<&Affirmation> {
        self.affirmations.iter().filter(|a| filter.matches(a)).collect()
    }

    pub fn get(&self, id: u32) -> Option<&Affirmation> {
        self.affirmations.iter().find(|a| a.id == id)
    }

    pub fn for_card(&self, card: CardId) -> TarotResult<&Affirmation> {
        self.affirmations
            .iter()
            .find(|a| a.card_id == Some(card))
            .ok_or_else(|| TarotError::CardNotFound(card.to_string()))
    }

    /// The daily affirmation for `date`; consecutive days never repeat.
    pub fn daily_on(&self, date: NaiveDate) -> &Affirmation {
        let daily = self.filter(AffirmationFilter::Daily);
        let index = date.num_days_from_ce().rem_euclid(daily.len() as i32) as usize;
        daily[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DECK_SIZE;

    #[test]
    fn every_card_has_one_affirmation() {
        let catalog = AffirmationCatalog::default();
        assert_eq!(catalog.filter(AffirmationFilter::Cards).len(), DECK_SIZE);
        assert_eq!(catalog.filter(AffirmationFilter::Daily).len(), DAILY_TEXT.len());
        assert_eq!(catalog.all().len(), DECK_SIZE + DAILY_TEXT.len());
    }

    #[test]
    fn ids_are_unique_and_start_at_one() {
        let catalog = AffirmationCatalog::default();
        for (i, affirmation) in catalog.all().iter().enumerate() {
            assert_eq!(affirmation.id, i as u32 + 1);
        }
        assert_eq!(catalog.get(1).unwrap().card_id, Some(CardId(0)));
        assert!(catalog.get(0).is_none());
    }

    #[test]
    fn card_text_prefers_written_affirmation() {
        let catalog = AffirmationCatalog::default();
        let fool = catalog.for_card(CardId(0)).unwrap();
        assert_eq!(fool.text, "I embrace freedom and welcome its energy into my life.");
        assert_eq!(fool.card_name.as_deref(), Some("The Fool"));

        let tower = catalog.for_card(CardId(16)).unwrap();
        assert_eq!(tower.text, "I embrace upheaval and welcome its energy into my life.");
    }

    #[test]
    fn minor_card_text_names_the_suit() {
        let catalog = AffirmationCatalog::default();
        // Ace of Wands follows the 22 major arcana
        let ace = catalog.for_card(CardId(22)).unwrap();
        assert_eq!(ace.text, "I embrace the seed of wands and welcome its energy into my life.");
    }

    #[test]
    fn unknown_card_is_an_error() {
        let catalog = AffirmationCatalog::default();
        assert!(matches!(
            catalog.for_card(CardId(78)),
            Err(TarotError::CardNotFound(_))
        ));
    }

    #[test]
    fn daily_rotates_by_day() {
        let catalog = AffirmationCatalog::default();
        let day = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let today = catalog.daily_on(day);
        assert_eq!(today.category, AffirmationCategory::Daily);
        assert_eq!(catalog.daily_on(day), today);
        assert_ne!(catalog.daily_on(day.succ_opt().unwrap()), today);
    }
}
