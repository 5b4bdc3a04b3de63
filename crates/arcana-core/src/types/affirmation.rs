//! Affirmations

use serde::{Deserialize, Serialize};

use super::card::CardId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffirmationCategory {
    /// General affirmation, one is offered each day
    Daily,
    /// Tied to a single card
    Card,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Affirmation {
    pub id: u32,
    pub text: String,
    pub category: AffirmationCategory,
    /// Set for card affirmations only
    pub card_id: Option<CardId>,
    pub card_name: Option<String>,
}

/// Which affirmations a listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AffirmationFilter {
    #[default]
    All,
    Daily,
    Cards,
}

impl AffirmationFilter {
    pub const ALL: [AffirmationFilter; 3] = [
        AffirmationFilter::All,
        AffirmationFilter::Daily,
        AffirmationFilter::Cards,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AffirmationFilter::All => "All",
            AffirmationFilter::Daily => "Daily",
            AffirmationFilter::Cards => "Card-Based",
        }
    }

    pub fn matches(&self, affirmation: &Affirmation) -> bool {
        match self {
            AffirmationFilter::All => true,
            AffirmationFilter::Daily => affirmation.category == AffirmationCategory::Daily,
            AffirmationFilter::Cards => affirmation.category == AffirmationCategory::Card,
        }
    }
}
