//! Daily card: one card per calendar day, revealed through the card
//! transition, with a reflection saved to the journal.

use arcana_core::{DailyCard as Daily, NewJournalEntry, NotificationLevel, Page, SceneEvent};
use arcana_ui::{Button, ButtonVariant, CardTile, LoadingSpinner, TextArea};
use dioxus::prelude::*;

use crate::components::SceneCanvas;
use crate::context::{use_auth, use_engine, use_engine_ready, use_ui_state, with_engine};

#[component]
pub fn DailyCard() -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();
    let auth = use_auth();
    let mut ui = use_ui_state();

    let mut revealing: Signal<Option<String>> = use_signal(|| None);
    let mut revealed = use_signal(|| false);
    let mut reflection = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let daily = use_resource(move || async move {
        if !engine_ready() {
            return None;
        }
        with_engine(engine, |eng| eng.daily_card().map_err(|e| e.to_string())).await
    });

    let today: Option<Result<Daily, String>> = daily.cloned().flatten();

    let on_scene_event = move |event: SceneEvent| {
        if event == SceneEvent::TransitionComplete {
            revealing.set(None);
            revealed.set(true);
        }
    };

    let save_reflection = move |_| {
        let content = reflection();
        let Some(Ok(today)) = daily.cloned().flatten() else {
            return;
        };
        if content.trim().is_empty() || saving() {
            return;
        }
        saving.set(true);
        spawn(async move {
            let entry = NewJournalEntry {
                title: format!("Daily card, {}", today.date),
                content,
                card_ids: vec![today.card.card.id],
                mood: None,
            };
            match with_engine(engine, |eng| eng.add_journal_entry(entry)).await {
                Some(Ok(_)) => {
                    reflection.set(String::new());
                    ui.write().notify(NotificationLevel::Success, "Reflection saved");
                }
                Some(Err(e)) => {
                    ui.write().notify(NotificationLevel::Error, e.to_string());
                }
                None => {}
            }
            saving.set(false);
        });
    };

    let revealing_now = revealing();

    rsx! {
        SceneCanvas {
            key: "{revealing_now:?}",
            page: Page::DailyCard { revealing: revealing_now.clone() },
            on_event: on_scene_event,
        }

        section { class: "daily-card",
            h1 { class: "page-title", "Card of the Day" }
            p { class: "tagline", "Your daily guidance for reflection" }

            {match today {
                None => rsx! {
                    LoadingSpinner { message: "Shuffling the deck and choosing your card".to_string() }
                },
                Some(Err(message)) => rsx! {
                    p { class: "error-message", "{message}" }
                },
                Some(Ok(today)) if !revealed() => rsx! {
                    div { class: "daily-hidden",
                        if revealing_now.is_none() {
                            p { class: "body-text", "A card waits for you, face down." }
                            Button {
                                variant: ButtonVariant::Mystic,
                                onclick: move |_| revealing.set(Some(today.card.card.image_url.clone())),
                                "Reveal"
                            }
                        } else {
                            p { class: "body-text reveal-hint", "The card turns\u{2026}" }
                        }
                    }
                },
                Some(Ok(today)) => rsx! {
                    div { class: "daily-revealed",
                        CardTile {
                            card: today.card.card.clone(),
                            orientation: Some(today.card.orientation),
                        }
                        div { class: "glass-card daily-meaning",
                            h2 { class: "section-header", "{today.card.card.name}" }
                            p { class: "card-meta", "{today.date} \u{00B7} {today.card.orientation}" }
                            p { class: "body-text", "{today.card.meaning()}" }
                            p { class: "body-text", "{today.card.card.description}" }

                            if auth.read().is_authenticated {
                                TextArea {
                                    value: reflection(),
                                    oninput: move |s| reflection.set(s),
                                    label: "Your reflection".to_string(),
                                    placeholder: "Write your thoughts here...".to_string(),
                                    rows: 5,
                                }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    loading: saving(),
                                    disabled: reflection().trim().is_empty(),
                                    onclick: save_reflection,
                                    "Save"
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}
