//! Card library: the whole deck, filterable by arcana or suit and
//! searchable by name or keyword.

use arcana_core::{Page, TarotCard};
use arcana_ui::{CardTile, FilterPills, LibraryFilter, LoadingSpinner, SearchInput};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::SceneCanvas;
use crate::context::{use_engine, use_engine_ready, with_engine};

#[component]
pub fn CardLibrary() -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();
    let navigator = use_navigator();
    let mut filter = use_signal(LibraryFilter::default);
    let mut query = use_signal(String::new);

    let cards = use_resource(move || async move {
        if !engine_ready() {
            return None;
        }
        let card_filter = filter().to_card_filter(&query());
        with_engine(engine, |eng| {
            eng.search_cards(&card_filter)
                .into_iter()
                .cloned()
                .collect::<Vec<TarotCard>>()
        })
        .await
    });

    rsx! {
        SceneCanvas { page: Page::CardLibrary }

        section { class: "card-library",
            h1 { class: "page-title", "The Deck" }

            div { class: "library-controls",
                SearchInput { value: query(), oninput: move |q| query.set(q) }
                FilterPills { selected: filter(), on_select: move |f| filter.set(f) }
            }

            {match &*cards.read() {
                Some(Some(list)) if list.is_empty() => rsx! {
                    p { class: "empty-state", "No card answers to \"{query}\"." }
                },
                Some(Some(list)) => rsx! {
                    p { class: "result-count", "{list.len()} cards" }
                    div { class: "card-grid",
                        for card in list.iter().cloned() {
                            {
                                let id = card.id.0;
                                rsx! {
                                    CardTile {
                                        key: "{id}",
                                        card: card,
                                        onclick: move |_| {
                                            navigator.push(Route::CardDetail { id });
                                        },
                                    }
                                }
                            }
                        }
                    }
                },
                _ => rsx! {
                    LoadingSpinner {}
                },
            }}
        }
    }
}
