//! The standard 78-card deck.
//!
//! Major arcana carry individual interpretations; minor arcana meanings are
//! composed from the rank and the suit's domain.

use rand::seq::index;
use rand::Rng;
use tracing::debug;

use crate::error::{TarotError, TarotResult};
use crate::types::{Arcana, CardId, DrawnCard, Element, Orientation, Suit, TarotCard};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 78;

struct MajorCard {
    name: &'static str,
    element: Element,
    description: &'static str,
    upright: &'static str,
    reversed: &'static str,
    keywords: &'static [&'static str],
}

const MAJOR_ARCANA: [MajorCard; 22] = [
    MajorCard {
        name: "The Fool",
        element: Element::Air,
        description: "The Fool represents new beginnings, optimism, and taking a leap of faith. It's about embarking on a journey without knowing the destination.",
        upright: "New beginnings, innocence, spontaneity, free spirit",
        reversed: "Recklessness, risk-taking, second-guessing yourself",
        keywords: &["adventure", "potential", "opportunity", "beginnings"],
    },
    MajorCard {
        name: "The Magician",
        element: Element::Air,
        description: "The Magician channels will into form, turning intention into action with every tool at hand.",
        upright: "Manifestation, resourcefulness, power, inspired action",
        reversed: "Manipulation, poor planning, untapped talents",
        keywords: &["willpower", "skill", "creation", "focus"],
    },
    MajorCard {
        name: "The High Priestess",
        element: Element::Water,
        description: "The High Priestess guards the threshold of the unconscious and asks you to listen inward.",
        upright: "Intuition, sacred knowledge, the subconscious mind",
        reversed: "Secrets, disconnection from intuition, withdrawal",
        keywords: &["intuition", "mystery", "inner voice", "stillness"],
    },
    MajorCard {
        name: "The Empress",
        element: Element::Earth,
        description: "The Empress is abundance and nurture, the fertile ground where ideas grow.",
        upright: "Femininity, beauty, nature, nurturing, abundance",
        reversed: "Creative block, dependence on others, smothering",
        keywords: &["abundance", "nurture", "fertility", "comfort"],
    },
    MajorCard {
        name: "The Emperor",
        element: Element::Fire,
        description: "The Emperor builds structure and order, ruling through discipline and responsibility.",
        upright: "Authority, structure, control, fatherhood",
        reversed: "Domination, excessive control, rigidity",
        keywords: &["structure", "authority", "stability", "leadership"],
    },
    MajorCard {
        name: "The Hierophant",
        element: Element::Earth,
        description: "The Hierophant keeps tradition and passes on knowledge through shared belief.",
        upright: "Spiritual wisdom, tradition, conformity, institutions",
        reversed: "Personal beliefs, freedom, challenging the status quo",
        keywords: &["tradition", "teaching", "belief", "community"],
    },
    MajorCard {
        name: "The Lovers",
        element: Element::Air,
        description: "The Lovers speak of union and of the choices that define what we value.",
        upright: "Love, harmony, relationships, values alignment",
        reversed: "Self-love, disharmony, imbalance, misaligned values",
        keywords: &["union", "choice", "harmony", "values"],
    },
    MajorCard {
        name: "The Chariot",
        element: Element::Water,
        description: "The Chariot is willpower in motion, overcoming obstacles through focus and self-discipline.",
        upright: "Control, willpower, success, determination",
        reversed: "Self-discipline lost, opposition, lack of direction",
        keywords: &["momentum", "victory", "resolve", "direction"],
    },
    MajorCard {
        name: "Strength",
        element: Element::Fire,
        description: "Strength tames the lion with patience rather than force.",
        upright: "Courage, persuasion, influence, compassion",
        reversed: "Inner doubt, low energy, raw emotion",
        keywords: &["courage", "patience", "compassion", "resilience"],
    },
    MajorCard {
        name: "The Hermit",
        element: Element::Earth,
        description: "The Hermit withdraws to seek the light of inner truth.",
        upright: "Soul-searching, introspection, inner guidance",
        reversed: "Isolation, loneliness, withdrawal",
        keywords: &["solitude", "reflection", "guidance", "wisdom"],
    },
    MajorCard {
        name: "Wheel of Fortune",
        element: Element::Fire,
        description: "The Wheel turns for everyone; cycles rise and fall beyond our control.",
        upright: "Good luck, karma, life cycles, destiny, a turning point",
        reversed: "Bad luck, resistance to change, breaking cycles",
        keywords: &["cycles", "fate", "change", "turning point"],
    },
    MajorCard {
        name: "Justice",
        element: Element::Air,
        description: "Justice weighs cause and effect with clear eyes.",
        upright: "Justice, fairness, truth, cause and effect, law",
        reversed: "Unfairness, lack of accountability, dishonesty",
        keywords: &["balance", "truth", "fairness", "accountability"],
    },
    MajorCard {
        name: "The Hanged Man",
        element: Element::Water,
        description: "The Hanged Man pauses and sees the world from a new angle.",
        upright: "Pause, surrender, letting go, new perspectives",
        reversed: "Delays, resistance, stalling, indecision",
        keywords: &["surrender", "perspective", "pause", "release"],
    },
    MajorCard {
        name: "Death",
        element: Element::Water,
        description: "Death closes one chapter so that another can begin.",
        upright: "Endings, change, transformation, transition",
        reversed: "Resistance to change, personal transformation, inner purging",
        keywords: &["ending", "transformation", "renewal", "transition"],
    },
    MajorCard {
        name: "Temperance",
        element: Element::Fire,
        description: "Temperance blends opposites into a patient middle way.",
        upright: "Balance, moderation, patience, purpose",
        reversed: "Imbalance, excess, self-healing, re-alignment",
        keywords: &["balance", "moderation", "patience", "healing"],
    },
    MajorCard {
        name: "The Devil",
        element: Element::Earth,
        description: "The Devil shows the chains we accept and could remove.",
        upright: "Shadow self, attachment, addiction, restriction",
        reversed: "Releasing limiting beliefs, exploring dark thoughts, detachment",
        keywords: &["attachment", "shadow", "temptation", "bondage"],
    },
    MajorCard {
        name: "The Tower",
        element: Element::Fire,
        description: "The Tower falls so that false structures cannot stand.",
        upright: "Sudden change, upheaval, chaos, revelation, awakening",
        reversed: "Personal transformation, fear of change, averting disaster",
        keywords: &["upheaval", "revelation", "awakening", "collapse"],
    },
    MajorCard {
        name: "The Star",
        element: Element::Air,
        description: "The Star pours hope back into the world after the storm.",
        upright: "Hope, faith, purpose, renewal, spirituality",
        reversed: "Lack of faith, despair, self-trust, disconnection",
        keywords: &["hope", "renewal", "inspiration", "serenity"],
    },
    MajorCard {
        name: "The Moon",
        element: Element::Water,
        description: "The Moon lights a path of dreams, illusions and hidden fears.",
        upright: "Illusion, fear, anxiety, subconscious, intuition",
        reversed: "Release of fear, repressed emotion, inner confusion",
        keywords: &["illusion", "dreams", "intuition", "uncertainty"],
    },
    MajorCard {
        name: "The Sun",
        element: Element::Fire,
        description: "The Sun radiates joy, clarity and vitality.",
        upright: "Positivity, fun, warmth, success, vitality",
        reversed: "Inner child, feeling down, overly optimistic",
        keywords: &["joy", "success", "vitality", "clarity"],
    },
    MajorCard {
        name: "Judgement",
        element: Element::Fire,
        description: "Judgement calls you to rise and answer your purpose.",
        upright: "Judgement, rebirth, inner calling, absolution",
        reversed: "Self-doubt, inner critic, ignoring the call",
        keywords: &["rebirth", "calling", "reckoning", "awakening"],
    },
    MajorCard {
        name: "The World",
        element: Element::Earth,
        description: "The World completes the journey and opens the next one.",
        upright: "Completion, integration, accomplishment, travel",
        reversed: "Seeking personal closure, short-cuts, delays",
        keywords: &["completion", "wholeness", "achievement", "integration"],
    },
];

struct Rank {
    name: &'static str,
    upright: &'static str,
    reversed: &'static str,
    keyword: &'static str,
}

const RANKS: [Rank; 14] = [
    Rank { name: "Ace", upright: "A new opening", reversed: "A missed opening", keyword: "seed" },
    Rank { name: "Two", upright: "Balance and partnership", reversed: "Indecision and imbalance", keyword: "duality" },
    Rank { name: "Three", upright: "Growth and collaboration", reversed: "Scattered effort", keyword: "growth" },
    Rank { name: "Four", upright: "Stability and rest", reversed: "Stagnation", keyword: "foundation" },
    Rank { name: "Five", upright: "Conflict and challenge", reversed: "Recovery after strife", keyword: "struggle" },
    Rank { name: "Six", upright: "Harmony restored", reversed: "Clinging to the past", keyword: "harmony" },
    Rank { name: "Seven", upright: "Assessment and perseverance", reversed: "Doubt and avoidance", keyword: "reflection" },
    Rank { name: "Eight", upright: "Movement and mastery", reversed: "Restriction", keyword: "movement" },
    Rank { name: "Nine", upright: "Near fulfilment", reversed: "Anxiety before the end", keyword: "fruition" },
    Rank { name: "Ten", upright: "Completion of a cycle", reversed: "Burden of an ending", keyword: "completion" },
    Rank { name: "Page", upright: "Curiosity and a message", reversed: "Immaturity", keyword: "message" },
    Rank { name: "Knight", upright: "Action and pursuit", reversed: "Haste", keyword: "pursuit" },
    Rank { name: "Queen", upright: "Mature nurture", reversed: "Insecurity", keyword: "nurture" },
    Rank { name: "King", upright: "Mastery and authority", reversed: "Misused control", keyword: "mastery" },
];

fn suit_domain(suit: Suit) -> &'static str {
    match suit {
        Suit::Wands => "passion and creative energy",
        Suit::Cups => "emotion and relationships",
        Suit::Swords => "thought and conflict",
        Suit::Pentacles => "work and the material world",
    }
}

fn major_card(number: usize, spec: &MajorCard) -> TarotCard {
    TarotCard {
        id: CardId(number as u8),
        name: spec.name.to_string(),
        number: number.to_string(),
        arcana: Arcana::Major,
        suit: None,
        element: spec.element,
        image_url: format!("/images/cards/m{:02}.jpg", number),
        description: spec.description.to_string(),
        upright_meaning: spec.upright.to_string(),
        reversed_meaning: spec.reversed.to_string(),
        keywords: spec.keywords.iter().map(|k| k.to_string()).collect(),
    }
}

fn minor_card(id: u8, suit: Suit, rank_index: usize) -> TarotCard {
    let rank = &RANKS[rank_index];
    let number = rank_index + 1;
    let domain = suit_domain(suit);
    let name = format!("{} of {}", rank.name, suit.name());
    TarotCard {
        id: CardId(id),
        description: format!("The {} speaks of {} in the realm of {}.", name, rank.keyword, domain),
        name,
        number: number.to_string(),
        arcana: Arcana::Minor,
        suit: Some(suit),
        element: suit.element(),
        image_url: format!("/images/cards/{}{:02}.jpg", suit.image_prefix(), number),
        upright_meaning: format!("{} in {}", rank.upright, domain),
        reversed_meaning: format!("{} in {}", rank.reversed, domain),
        keywords: vec![rank.keyword.to_string(), suit.name().to_ascii_lowercase()],
    }
}

/// Filter applied by the card library.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardFilter {
    pub arcana: Option<Arcana>,
    pub suit: Option<Suit>,
    /// Case-insensitive match against name and keywords
    pub query: Option<String>,
}

impl CardFilter {
    pub fn matches(&self, card: &TarotCard) -> bool {
        if let Some(arcana) = self.arcana {
            if card.arcana != arcana {
                return false;
            }
        }
        if let Some(suit) = self.suit {
            if card.suit != Some(suit) {
                return false;
            }
        }
        match self.query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(q) => {
                let q = q.to_lowercase();
                card.name.to_lowercase().contains(&q)
                    || card.keywords.iter().any(|k| k.to_lowercase().contains(&q))
            }
        }
    }
}

/// The full deck in canonical order.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<TarotCard>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl Deck {
    /// Build the standard Rider–Waite ordered deck.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for (number, spec) in MAJOR_ARCANA.iter().enumerate() {
            cards.push(major_card(number, spec));
        }
        for suit in Suit::ALL {
            for rank_index in 0..RANKS.len() {
                let id = cards.len() as u8;
                cards.push(minor_card(id, suit, rank_index));
            }
        }
        debug!(count = cards.len(), "Built standard deck");
        Self { cards }
    }

    pub fn cards(&self) -> &[TarotCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: CardId) -> Option<&TarotCard> {
        self.cards.get(id.0 as usize)
    }

    /// Like [`Deck::get`] but reports a missing card as an error.
    pub fn card(&self, id: CardId) -> TarotResult<&TarotCard> {
        self.get(id)
            .ok_or_else(|| TarotError::CardNotFound(id.to_string()))
    }

    pub fn filter(&self, filter: &CardFilter) -> Vec<&TarotCard> {
        self.cards.iter().filter(|c| filter.matches(c)).collect()
    }

    /// One random card with a random orientation.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> DrawnCard {
        let card = self.cards[rng.random_range(0..self.cards.len())].clone();
        DrawnCard::new(card, random_orientation(rng))
    }

    /// `count` distinct cards, each with its own orientation.
    pub fn draw_many<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> TarotResult<Vec<DrawnCard>> {
        if count > self.cards.len() {
            return Err(TarotError::InvalidInput(format!(
                "cannot draw {} cards from a deck of {}",
                count,
                self.cards.len()
            )));
        }
        let picks = index::sample(rng, self.cards.len(), count);
        Ok(picks
            .into_iter()
            .map(|i| DrawnCard::new(self.cards[i].clone(), random_orientation(rng)))
            .collect())
    }
}

fn random_orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    if rng.random_bool(0.5) {
        Orientation::Reversed
    } else {
        Orientation::Upright
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_78_cards_in_order() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), DECK_SIZE);
        for (i, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.id.0 as usize, i);
        }
        assert_eq!(deck.cards().iter().filter(|c| c.is_major()).count(), 22);
    }

    #[test]
    fn minor_cards_follow_image_naming() {
        let deck = Deck::standard();
        let knight = deck
            .cards()
            .iter()
            .find(|c| c.name == "Knight of Pentacles")
            .unwrap();
        assert_eq!(knight.image_url, "/images/cards/p12.jpg");
        assert_eq!(knight.number, "12");
        assert_eq!(knight.element, Element::Earth);
    }

    #[test]
    fn filter_by_suit_and_query() {
        let deck = Deck::standard();
        let cups = deck.filter(&CardFilter {
            suit: Some(Suit::Cups),
            ..Default::default()
        });
        assert_eq!(cups.len(), 14);

        let found = deck.filter(&CardFilter {
            query: Some("  moon ".into()),
            ..Default::default()
        });
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "The Moon");
    }

    #[test]
    fn empty_query_matches_everything() {
        let deck = Deck::standard();
        let all = deck.filter(&CardFilter {
            query: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(all.len(), DECK_SIZE);
    }

    #[test]
    fn draw_many_returns_distinct_cards() {
        let deck = Deck::standard();
        let mut rng = StdRng::seed_from_u64(7);
        let drawn = deck.draw_many(10, &mut rng).unwrap();
        let ids: HashSet<_> = drawn.iter().map(|d| d.card.id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn draw_many_rejects_more_than_deck() {
        let deck = Deck::standard();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            deck.draw_many(DECK_SIZE + 1, &mut rng),
            Err(TarotError::InvalidInput(_))
        ));
    }

    #[test]
    fn unknown_card_is_an_error() {
        let deck = Deck::standard();
        assert!(matches!(deck.card(CardId(200)), Err(TarotError::CardNotFound(_))));
    }
}
