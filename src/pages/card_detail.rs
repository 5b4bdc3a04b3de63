//! A single card: showcase scene, meanings and a journal note.

use arcana_core::{CardId, NewJournalEntry, NotificationLevel, Page, TarotCard};
use arcana_ui::{Button, ButtonVariant, LoadingSpinner, TextArea};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::SceneCanvas;
use crate::context::{use_auth, use_engine, use_engine_ready, use_ui_state, with_engine};

const DECK_SIZE: u8 = 78;

#[component]
pub fn CardDetail(id: u8) -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();
    let auth = use_auth();
    let mut ui = use_ui_state();
    let mut note = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let card = use_resource(use_reactive!(|(id)| async move {
        if !engine_ready() {
            return None;
        }
        with_engine(engine, |eng| {
            let card = eng.card(CardId(id))?.clone();
            let affirmation = eng.card_affirmation(card.id)?.text.clone();
            Ok::<_, arcana_core::TarotError>((card, affirmation))
        })
        .await
    }));

    let save_note = move |_| {
        let content = note();
        if content.trim().is_empty() || saving() {
            return;
        }
        saving.set(true);
        spawn(async move {
            let entry = NewJournalEntry {
                title: String::new(),
                content,
                card_ids: vec![CardId(id)],
                mood: None,
            };
            match with_engine(engine, |eng| eng.add_journal_entry(entry)).await {
                Some(Ok(_)) => {
                    note.set(String::new());
                    ui.write().notify(NotificationLevel::Success, "Saved to your journal");
                }
                Some(Err(e)) => {
                    ui.write().notify(NotificationLevel::Error, e.to_string());
                }
                None => {}
            }
            saving.set(false);
        });
    };

    let prev = (id + DECK_SIZE - 1) % DECK_SIZE;
    let next = (id + 1) % DECK_SIZE;

    let loaded: Option<Result<(TarotCard, String), String>> = match &*card.read() {
        Some(Some(Ok(loaded))) => Some(Ok(loaded.clone())),
        Some(Some(Err(e))) => Some(Err(e.to_string())),
        _ => None,
    };

    match loaded {
        None => rsx! {
            LoadingSpinner { message: "Drawing the card".to_string() }
        },
        Some(Err(message)) => rsx! {
            section { class: "card-detail",
                p { class: "error-message", "{message}" }
                Link { class: "btn btn-outline", to: Route::CardLibrary {}, "Back to the deck" }
            }
        },
        Some(Ok((card, affirmation))) => rsx! {
            section { class: "card-detail",
                div { class: "card-detail-stage",
                    SceneCanvas {
                        key: "{card.image_url}",
                        page: Page::CardDetail { image_url: card.image_url.clone() },
                        stage: true,
                    }
                }

                div { class: "card-detail-info glass-card",
                    h1 { class: "page-title", "{card.name}" }
                    p { class: "card-meta",
                        "{card.arcana.label()} \u{00B7} {card.number} \u{00B7} {card.element.name()}"
                    }
                    div { class: "keywords",
                        for keyword in card.keywords.iter() {
                            span { key: "{keyword}", class: "keyword", "{keyword}" }
                        }
                    }
                    p { class: "body-text", "{card.description}" }
                    h2 { class: "section-header", "Upright" }
                    p { class: "body-text", "{card.upright_meaning}" }
                    h2 { class: "section-header", "Reversed" }
                    p { class: "body-text", "{card.reversed_meaning}" }
                    h2 { class: "section-header", "Affirmation" }
                    p { class: "affirmation-text", "{affirmation}" }

                    if auth.read().is_authenticated {
                        div { class: "card-note",
                            TextArea {
                                value: note(),
                                oninput: move |s| note.set(s),
                                label: "What does this card stir in you?".to_string(),
                            }
                            Button {
                                variant: ButtonVariant::Mystic,
                                loading: saving(),
                                onclick: save_note,
                                "Save to journal"
                            }
                        }
                    }

                    nav { class: "card-pager",
                        Link { class: "btn btn-ghost", to: Route::CardDetail { id: prev }, "\u{2190} Previous" }
                        Link { class: "btn btn-ghost", to: Route::CardLibrary {}, "All cards" }
                        Link { class: "btn btn-ghost", to: Route::CardDetail { id: next }, "Next \u{2192}" }
                    }
                }
            }
        },
    }
}
