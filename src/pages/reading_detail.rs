//! A recorded reading: each card in its position, and the notes.

use arcana_core::{NotificationLevel, Page, Reading, ReadingId};
use arcana_ui::{Button, ButtonVariant, CardTile, LoadingSpinner, TextArea};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::SceneCanvas;
use crate::context::{use_engine, use_engine_ready, use_ui_state, with_engine};

/// Reading plus the position names of its spread.
#[derive(Clone, PartialEq)]
struct LaidOut {
    reading: Reading,
    positions: Vec<String>,
}

fn lay_out(eng: &arcana_core::TarotEngine, id: &str) -> Result<LaidOut, String> {
    let id = ReadingId::from_string(id).map_err(|e| format!("Invalid reading ID: {}", e))?;
    let reading = eng.reading(&id).map_err(|e| e.to_string())?;
    let positions = reading
        .spread_id
        .and_then(|s| eng.spread(s).ok())
        .map(|s| s.positions.iter().map(|p| p.name.clone()).collect())
        .unwrap_or_default();
    Ok(LaidOut { reading, positions })
}

#[component]
pub fn ReadingDetail(id: String) -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();
    let navigator = use_navigator();
    let mut ui = use_ui_state();
    let mut notes: Signal<Option<String>> = use_signal(|| None);

    let laid_out = use_resource(use_reactive!(|(id)| async move {
        if !engine_ready() {
            return None;
        }
        with_engine(engine, |eng| lay_out(eng, &id)).await
    }));

    let loaded: Option<Result<LaidOut, String>> = laid_out.cloned().flatten();

    let reading_id = id.clone();
    let save_notes = move |_| {
        let Some(text) = notes() else {
            return;
        };
        let id = reading_id.clone();
        spawn(async move {
            let result = with_engine(engine, |eng| {
                let id = ReadingId::from_string(&id).map_err(|e| e.to_string())?;
                eng.update_reading_notes(&id, &text).map_err(|e| e.to_string())
            })
            .await;
            let (level, message) = match result {
                Some(Ok(true)) => (NotificationLevel::Success, "Notes saved".to_string()),
                Some(Ok(false)) => (NotificationLevel::Error, "Reading no longer exists".to_string()),
                Some(Err(e)) => (NotificationLevel::Error, e),
                None => return,
            };
            ui.write().notify(level, message);
        });
    };

    let delete_id = id.clone();
    let delete = move |_| {
        let id = delete_id.clone();
        spawn(async move {
            let deleted = with_engine(engine, |eng| {
                ReadingId::from_string(&id)
                    .ok()
                    .map(|id| eng.delete_reading(&id))
            })
            .await;
            if let Some(Some(Ok(true))) = deleted {
                ui.write().notify(NotificationLevel::Info, "Reading deleted");
                navigator.replace(Route::Spreads {});
            }
        });
    };

    rsx! {
        SceneCanvas { page: Page::ReadingDetail }

        section { class: "reading-detail",
            {match loaded {
                None => rsx! {
                    LoadingSpinner {}
                },
                Some(Err(message)) => rsx! {
                    p { class: "error-message", "{message}" }
                    Link { class: "btn btn-outline", to: Route::Spreads {}, "All spreads" }
                },
                Some(Ok(LaidOut { reading, positions })) => {
                    let current_notes = notes().unwrap_or_else(|| reading.notes.clone());
                    let created = chrono::DateTime::from_timestamp(reading.created_at, 0)
                        .map(|dt| dt.format("%B %-d, %Y").to_string())
                        .unwrap_or_default();
                    rsx! {
                        h1 { class: "page-title", "{reading.spread_name}" }
                        p { class: "card-meta", "{created}" }
                        if !reading.question.is_empty() {
                            blockquote { class: "question", "{reading.question}" }
                        }

                        div { class: "reading-cards",
                            for (i, drawn) in reading.cards.iter().enumerate() {
                                div { key: "{i}", class: "reading-card",
                                    CardTile {
                                        card: drawn.card.clone(),
                                        orientation: Some(drawn.orientation),
                                        position: positions.get(i).cloned(),
                                    }
                                    p { class: "body-text", "{drawn.meaning()}" }
                                }
                            }
                        }

                        div { class: "glass-card",
                            TextArea {
                                value: current_notes,
                                oninput: move |s| notes.set(Some(s)),
                                label: "Notes".to_string(),
                                rows: 6,
                            }
                            div { class: "button-row",
                                Button { variant: ButtonVariant::Primary, onclick: save_notes, "Save notes" }
                                Button { variant: ButtonVariant::Outline, onclick: delete, "Delete reading" }
                            }
                        }
                    }
                }
            }}
        }
    }
}
