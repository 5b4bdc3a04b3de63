//! Spread detail: positions and variations, the question, and the deck
//! shuffle that lays out the reading.
//!
//! Picking a card from the shuffled deck draws the reading and opens it.

use arcana_core::{NotificationLevel, Page, SceneEvent, SpreadId, TarotSpread};
use arcana_ui::{Button, ButtonVariant, Input, LoadingSpinner};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::SceneCanvas;
use crate::context::{use_engine, use_engine_ready, use_ui_state, with_engine};

#[component]
pub fn SpreadDetail(id: u32) -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();
    let navigator = use_navigator();
    let mut ui = use_ui_state();

    let mut question = use_signal(String::new);
    let mut shuffling = use_signal(|| false);

    let spread = use_resource(use_reactive!(|(id)| async move {
        if !engine_ready() {
            return None;
        }
        with_engine(engine, |eng| eng.spread(SpreadId(id)).cloned().map_err(|e| e.to_string())).await
    }));

    let on_scene_event = move |event: SceneEvent| {
        let SceneEvent::CardSelected(picked) = event else {
            return;
        };
        tracing::info!(spread = id, picked, "Card picked from the deck");
        shuffling.set(false);
        let asked = question();
        spawn(async move {
            match with_engine(engine, |eng| eng.draw_reading(SpreadId(id), &asked)).await {
                Some(Ok(reading)) => {
                    navigator.push(Route::ReadingDetail {
                        id: reading.id.to_string_repr(),
                    });
                }
                Some(Err(e)) => {
                    ui.write().notify(NotificationLevel::Error, e.to_string());
                }
                None => {}
            }
        });
    };

    let loaded: Option<Result<TarotSpread, String>> = spread.cloned().flatten();
    let is_shuffling = shuffling();

    rsx! {
        if !is_shuffling {
            SceneCanvas { key: "still", page: Page::SpreadDetail { shuffling: false } }
        }

        section { class: "spread-detail",
            {match loaded {
                None => rsx! {
                    LoadingSpinner {}
                },
                Some(Err(message)) => rsx! {
                    p { class: "error-message", "{message}" }
                    Link { class: "btn btn-outline", to: Route::Spreads {}, "All spreads" }
                },
                Some(Ok(spread)) if is_shuffling => rsx! {
                    h1 { class: "page-title", "{spread.name}" }
                    p { class: "tagline", "Breathe, hold your question, and pick a card" }
                    div { class: "shuffle-stage",
                        SceneCanvas {
                            key: "shuffling",
                            page: Page::SpreadDetail { shuffling: true },
                            stage: true,
                            on_event: on_scene_event,
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| shuffling.set(false),
                        "Cancel"
                    }
                },
                Some(Ok(spread)) => rsx! {
                    h1 { class: "page-title", "{spread.name}" }
                    div { class: "spread-meta",
                        span { class: "badge", "{spread.card_count()} cards" }
                        span { class: "badge", "{spread.difficulty.label()}" }
                        span { class: "badge", "{spread.time_required}" }
                    }
                    p { class: "body-text", "{spread.long_description}" }

                    div { class: "glass-card",
                        h2 { class: "section-header", "Positions" }
                        ol { class: "positions",
                            for position in spread.positions.iter() {
                                li { key: "{position.id}",
                                    strong { "{position.name}" }
                                    " \u{00B7} {position.description}"
                                }
                            }
                        }
                    }

                    if !spread.variations.is_empty() {
                        div { class: "glass-card",
                            h2 { class: "section-header", "Variations" }
                            for variation in spread.variations.iter() {
                                div { key: "{variation.name}", class: "variation",
                                    h3 { "{variation.name}" }
                                    p { class: "body-text", "{variation.description}" }
                                }
                            }
                        }
                    }

                    div { class: "glass-card reading-start",
                        Input {
                            value: question(),
                            oninput: move |s| question.set(s),
                            label: "Your question".to_string(),
                            placeholder: "What do I need to know about...".to_string(),
                        }
                        Button {
                            variant: ButtonVariant::Mystic,
                            onclick: move |_| shuffling.set(true),
                            "Shuffle the deck"
                        }
                    }
                },
            }}
        }
    }
}
