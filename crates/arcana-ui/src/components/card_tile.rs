//! Card Tile Component
//!
//! A card face with name and, when drawn, its orientation. Reversed cards
//! are rendered upside down.

use arcana_core::{Orientation, TarotCard};
use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct CardTileProps {
    pub card: TarotCard,
    /// `None` for library browsing, `Some` for drawn cards
    #[props(default)]
    pub orientation: Option<Orientation>,
    /// Spread position shown above the card
    #[props(default)]
    pub position: Option<String>,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CardTile {
///         card: drawn.card.clone(),
///         orientation: Some(drawn.orientation),
///         position: "Past".to_string(),
///     }
/// }
/// ```
#[component]
pub fn CardTile(props: CardTileProps) -> Element {
    let reversed = props.orientation.is_some_and(|o| o.is_reversed());
    let image_class = if reversed {
        "card-image reversed"
    } else {
        "card-image"
    };
    let clickable = props.onclick.is_some();
    let card = &props.card;

    rsx! {
        div {
            class: if clickable { "card-tile clickable" } else { "card-tile" },
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            if let Some(position) = &props.position {
                div { class: "card-position", "{position}" }
            }
            img {
                class: "{image_class}",
                src: "{card.image_url}",
                alt: "{card.name}",
            }
            div { class: "card-name", "{card.name}" }
            if let Some(orientation) = props.orientation {
                div { class: "card-orientation", "{orientation}" }
            }
        }
    }
}
