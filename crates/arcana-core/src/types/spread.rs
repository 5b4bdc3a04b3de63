//! Spread layouts

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpreadId(pub u32);

impl std::fmt::Display for SpreadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SpreadId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(SpreadId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Expert => "expert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadPosition {
    pub id: u32,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadVariation {
    pub name: String,
    pub description: String,
}

/// A named layout of card positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TarotSpread {
    pub id: SpreadId,
    pub name: String,
    pub description: String,
    pub long_description: String,
    pub positions: Vec<SpreadPosition>,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub image_url: String,
    pub time_required: String,
    pub variations: Vec<SpreadVariation>,
}

impl TarotSpread {
    /// Number of cards laid out, one per position.
    pub fn card_count(&self) -> usize {
        self.positions.len()
    }
}
