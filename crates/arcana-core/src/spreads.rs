//! Built-in spread catalog.

use crate::error::{TarotError, TarotResult};
use crate::types::{Difficulty, SpreadId, SpreadPosition, SpreadVariation, TarotSpread};

/// Name recorded on readings whose spread is not in the catalog.
pub const CUSTOM_SPREAD_NAME: &str = "Custom Spread";

fn positions(items: &[(&str, &str)]) -> Vec<SpreadPosition> {
    items
        .iter()
        .enumerate()
        .map(|(i, (name, description))| SpreadPosition {
            id: i as u32 + 1,
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect()
}

fn variations(items: &[(&str, &str)]) -> Vec<SpreadVariation> {
    items
        .iter()
        .map(|(name, description)| SpreadVariation {
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect()
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|t| t.to_string()).collect()
}

#[derive(Debug, Clone)]
pub struct SpreadCatalog {
    spreads: Vec<TarotSpread>,
}

impl Default for SpreadCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SpreadCatalog {
    pub fn builtin() -> Self {
        let spreads = vec![
            TarotSpread {
                id: SpreadId(1),
                name: "Three Card Spread".into(),
                description: "A simple, versatile spread for a quick look at a situation, relationship or question.".into(),
                long_description: "The three card spread is one of the most popular layouts. Each card stands for one aspect or period of time, giving a clear overview of past, present and future or of other facets of the question.".into(),
                positions: positions(&[
                    ("Past", "What led to the current situation"),
                    ("Present", "The current state of affairs"),
                    ("Future", "A possible outcome"),
                ]),
                difficulty: Difficulty::Beginner,
                tags: tags(&["versatile", "quick", "overview"]),
                image_url: "/images/spreads/three-card.jpg".into(),
                time_required: "5-10 minutes".into(),
                variations: variations(&[
                    ("Mind-Body-Spirit", "Read the cards as the mental, physical and spiritual aspects."),
                    ("Situation-Action-Outcome", "The situation, the action it calls for and its likely result."),
                ]),
            },
            TarotSpread {
                id: SpreadId(2),
                name: "Celtic Cross".into(),
                description: "The classic ten card spread for deep analysis of complex situations.".into(),
                long_description: "The Celtic Cross is one of the best known and most informative spreads. Its ten cards cover inner and outer influences on a question and show how it may develop.".into(),
                positions: positions(&[
                    ("Present", "The current situation, the heart of the matter"),
                    ("Challenge", "The obstacle or opposing force"),
                    ("Past", "The roots of the situation"),
                    ("Future", "What is about to unfold"),
                    ("Conscious", "Your thoughts, goals and aims"),
                    ("Unconscious", "Hidden influences and motives"),
                    ("Your Influence", "Your attitude towards the situation"),
                    ("External Influence", "Your surroundings and other people"),
                    ("Hopes and Fears", "What you expect and what you dread"),
                    ("Outcome", "The likely result"),
                ]),
                difficulty: Difficulty::Advanced,
                tags: tags(&["classic", "in-depth", "comprehensive"]),
                image_url: "/images/spreads/celtic-cross.jpg".into(),
                time_required: "20-30 minutes".into(),
                variations: variations(&[
                    ("Small Celtic Cross", "A six card variation for a faster reading."),
                    ("Celtic Cross with Significator", "Adds a significator card representing the querent."),
                ]),
            },
            TarotSpread {
                id: SpreadId(3),
                name: "Horseshoe Spread".into(),
                description: "A seven card horseshoe for examining a problem and the ways through it.".into(),
                long_description: "Named for its shape, the horseshoe is well suited to a concrete problem. It covers past, present and future as well as hidden influences, obstacles and advice.".into(),
                positions: positions(&[
                    ("Past", "Influences from the past"),
                    ("Present", "The current situation"),
                    ("Hidden Influences", "Factors that are not obvious"),
                    ("Obstacles", "What stands in the way"),
                    ("Environment", "External circumstances"),
                    ("Advice", "Recommended action"),
                    ("Outcome", "The likely result"),
                ]),
                difficulty: Difficulty::Intermediate,
                tags: tags(&["problem solving", "strategic", "overview"]),
                image_url: "/images/spreads/horseshoe.jpg".into(),
                time_required: "15-20 minutes".into(),
                variations: variations(&[(
                    "Extended Horseshoe",
                    "A nine card variation with extra positions for detail.",
                )]),
            },
            TarotSpread {
                id: SpreadId(4),
                name: "Tree of Life Spread".into(),
                description: "A spread built on the Kabbalistic Tree of Life for spiritual insight and growth.".into(),
                long_description: "Each of the ten cards corresponds to one of the sephirot of the Tree of Life, exploring the spiritual and the material sides of existence.".into(),
                positions: positions(&[
                    ("Keter (Crown)", "Higher consciousness, spiritual aims"),
                    ("Chokmah (Wisdom)", "Intuition, inspiration, creative energy"),
                    ("Binah (Understanding)", "Intellect, analysis, structure"),
                    ("Chesed (Mercy)", "Love, kindness, generosity"),
                    ("Gevurah (Strength)", "Willpower, discipline, limits"),
                    ("Tiferet (Beauty)", "Harmony, balance, the heart"),
                    ("Netzach (Victory)", "Emotion, passion, feeling"),
                    ("Hod (Glory)", "Communication, intellect, logic"),
                    ("Yesod (Foundation)", "The subconscious, instinct, dreams"),
                    ("Malkuth (Kingdom)", "The material world, the body, practical matters"),
                ]),
                difficulty: Difficulty::Expert,
                tags: tags(&["spiritual", "kabbalistic", "personal growth"]),
                image_url: "/images/spreads/tree-of-life.jpg".into(),
                time_required: "30-45 minutes".into(),
                variations: variations(&[(
                    "Simplified Tree",
                    "A five card variation focused on the main energy centres.",
                )]),
            },
        ];
        Self { spreads }
    }

    pub fn all(&self) -> &[TarotSpread] {
        &self.spreads
    }

    pub fn get(&self, id: SpreadId) -> Option<&TarotSpread> {
        self.spreads.iter().find(|s| s.id == id)
    }

    pub fn spread(&self, id: SpreadId) -> TarotResult<&TarotSpread> {
        self.get(id)
            .ok_or_else(|| TarotError::SpreadNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_spreads_have_expected_card_counts() {
        let catalog = SpreadCatalog::builtin();
        let counts: Vec<_> = catalog.all().iter().map(|s| s.card_count()).collect();
        assert_eq!(counts, vec![3, 10, 7, 10]);
    }

    #[test]
    fn positions_are_numbered_from_one() {
        let catalog = SpreadCatalog::builtin();
        let cross = catalog.spread(SpreadId(2)).unwrap();
        assert_eq!(cross.positions.first().unwrap().id, 1);
        assert_eq!(cross.positions.last().unwrap().id, 10);
    }

    #[test]
    fn unknown_spread_is_an_error() {
        let catalog = SpreadCatalog::builtin();
        assert!(catalog.get(SpreadId(99)).is_none());
        assert!(matches!(
            catalog.spread(SpreadId(99)),
            Err(TarotError::SpreadNotFound(_))
        ));
    }
}
