//! Tarot card types

use serde::{Deserialize, Serialize};

/// Position of a card in the standard 78-card deck.
///
/// 0–21 are the major arcana in order, followed by the four minor suits
/// (wands, cups, swords, pentacles), fourteen cards each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CardId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>().map(CardId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arcana {
    Major,
    Minor,
}

impl Arcana {
    pub fn label(&self) -> &'static str {
        match self {
            Arcana::Major => "Major Arcana",
            Arcana::Minor => "Minor Arcana",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Wands => "Wands",
            Suit::Cups => "Cups",
            Suit::Swords => "Swords",
            Suit::Pentacles => "Pentacles",
        }
    }

    /// Single-letter prefix used by the card image files.
    pub fn image_prefix(&self) -> char {
        match self {
            Suit::Wands => 'w',
            Suit::Cups => 'c',
            Suit::Swords => 's',
            Suit::Pentacles => 'p',
        }
    }

    pub fn element(&self) -> Element {
        match self {
            Suit::Wands => Element::Fire,
            Suit::Cups => Element::Water,
            Suit::Swords => Element::Air,
            Suit::Pentacles => Element::Earth,
        }
    }

    pub fn parse(s: &str) -> Option<Suit> {
        match s.to_ascii_lowercase().as_str() {
            "wands" => Some(Suit::Wands),
            "cups" => Some(Suit::Cups),
            "swords" => Some(Suit::Swords),
            "pentacles" => Some(Suit::Pentacles),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Air,
    Earth,
}

impl Element {
    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Air => "Air",
            Element::Earth => "Earth",
        }
    }
}

/// A single card of the deck with its interpretations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TarotCard {
    pub id: CardId,
    pub name: String,
    /// Number label as printed on the card ("0", "XIV" style is not used)
    pub number: String,
    pub arcana: Arcana,
    pub suit: Option<Suit>,
    pub element: Element,
    pub image_url: String,
    pub description: String,
    pub upright_meaning: String,
    pub reversed_meaning: String,
    pub keywords: Vec<String>,
}

impl TarotCard {
    pub fn is_major(&self) -> bool {
        self.arcana == Arcana::Major
    }

    /// Meaning for the given orientation.
    pub fn meaning(&self, orientation: Orientation) -> &str {
        match orientation {
            Orientation::Upright => &self.upright_meaning,
            Orientation::Reversed => &self.reversed_meaning,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Upright,
    Reversed,
}

impl Orientation {
    pub fn is_reversed(&self) -> bool {
        matches!(self, Orientation::Reversed)
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Upright => write!(f, "upright"),
            Orientation::Reversed => write!(f, "reversed"),
        }
    }
}

/// A card as it came out of the deck, with its orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawnCard {
    pub card: TarotCard,
    pub orientation: Orientation,
}

impl DrawnCard {
    pub fn new(card: TarotCard, orientation: Orientation) -> Self {
        Self { card, orientation }
    }

    pub fn meaning(&self) -> &str {
        self.card.meaning(self.orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fool() -> TarotCard {
        TarotCard {
            id: CardId(0),
            name: "The Fool".into(),
            number: "0".into(),
            arcana: Arcana::Major,
            suit: None,
            element: Element::Air,
            image_url: "/images/cards/m00.jpg".into(),
            description: String::new(),
            upright_meaning: "New beginnings".into(),
            reversed_meaning: "Recklessness".into(),
            keywords: vec![],
        }
    }

    #[test]
    fn drawn_card_meaning_follows_orientation() {
        let upright = DrawnCard::new(fool(), Orientation::Upright);
        let reversed = DrawnCard::new(fool(), Orientation::Reversed);
        assert_eq!(upright.meaning(), "New beginnings");
        assert_eq!(reversed.meaning(), "Recklessness");
    }

    #[test]
    fn card_id_parses_from_route_segment() {
        assert_eq!("12".parse::<CardId>().unwrap(), CardId(12));
        assert!("twelve".parse::<CardId>().is_err());
    }

    #[test]
    fn suit_parse_is_case_insensitive() {
        assert_eq!(Suit::parse("Cups"), Some(Suit::Cups));
        assert_eq!(Suit::parse("PENTACLES"), Some(Suit::Pentacles));
        assert_eq!(Suit::parse("coins"), None);
    }
}
