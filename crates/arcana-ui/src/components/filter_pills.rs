//! Library Filter Pills
//!
//! Horizontal row of filters for the card library: all cards, the major
//! arcana, or one minor suit.

use arcana_core::{Arcana, CardFilter, Suit};
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LibraryFilter {
    #[default]
    All,
    Major,
    Suit(Suit),
}

impl LibraryFilter {
    pub const ALL: [LibraryFilter; 6] = [
        LibraryFilter::All,
        LibraryFilter::Major,
        LibraryFilter::Suit(Suit::Wands),
        LibraryFilter::Suit(Suit::Cups),
        LibraryFilter::Suit(Suit::Swords),
        LibraryFilter::Suit(Suit::Pentacles),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LibraryFilter::All => "All",
            LibraryFilter::Major => "Major Arcana",
            LibraryFilter::Suit(suit) => suit.name(),
        }
    }

    /// Combine with the search box text into a deck filter.
    pub fn to_card_filter(&self, query: &str) -> CardFilter {
        let query = Some(query.to_string()).filter(|q| !q.trim().is_empty());
        match self {
            LibraryFilter::All => CardFilter {
                query,
                ..Default::default()
            },
            LibraryFilter::Major => CardFilter {
                arcana: Some(Arcana::Major),
                query,
                ..Default::default()
            },
            LibraryFilter::Suit(suit) => CardFilter {
                suit: Some(*suit),
                query,
                ..Default::default()
            },
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    pub selected: LibraryFilter,
    pub on_select: EventHandler<LibraryFilter>,
}

/// # Example
///
/// ```rust,ignore
/// let mut filter = use_signal(LibraryFilter::default);
///
/// rsx! {
///     FilterPills { selected: filter(), on_select: move |f| filter.set(f) }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    rsx! {
        div {
            class: "filter-pills",
            role: "radiogroup",
            "aria-label": "Card filter",
            for option in LibraryFilter::ALL {
                {
                    let is_selected = props.selected == option;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            class: if is_selected { "pill selected" } else { "pill" },
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(option),
                            "{option.label()}"
                        }
                    }
                }
            }
        }
    }
}
