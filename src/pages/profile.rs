//! Profile: account details, saved readings and the journal.
//!
//! Only reachable when signed in.

use arcana_core::{JournalEntry, NotificationLevel, Page, Reading, UserUpdate};
use arcana_ui::{Button, ButtonVariant, Input, LoadingSpinner};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{PrivateRoute, SceneCanvas};
use crate::context::{use_auth, use_engine, use_engine_ready, use_ui_state, with_engine};

#[derive(Clone, PartialEq)]
struct History {
    readings: Vec<Reading>,
    journal: Vec<JournalEntry>,
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        SceneCanvas { page: Page::Profile }
        PrivateRoute {
            ProfileContent {}
        }
    }
}

#[component]
fn ProfileContent() -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();
    let mut auth = use_auth();
    let mut ui = use_ui_state();
    let mut editing: Signal<Option<String>> = use_signal(|| None);

    let history = use_resource(move || async move {
        if !engine_ready() {
            return None;
        }
        with_engine(engine, |eng| -> Result<History, String> {
            Ok(History {
                readings: eng.readings().map_err(|e| e.to_string())?,
                journal: eng.journal_entries().map_err(|e| e.to_string())?,
            })
        })
        .await
    });

    let Some(user) = auth.read().user.clone() else {
        return rsx! {};
    };

    let email = user.email.clone();
    let save_name = move |_| {
        let Some(name) = editing() else {
            return;
        };
        let email = email.clone();
        spawn(async move {
            let update = UserUpdate {
                display_name: Some(name),
                ..Default::default()
            };
            match with_engine(engine, |eng| eng.update_profile(&email, update)).await {
                Some(Ok(updated)) => {
                    auth.write().update_user(UserUpdate {
                        display_name: Some(updated.display_name),
                        ..Default::default()
                    });
                    editing.set(None);
                    ui.write().notify(NotificationLevel::Success, "Profile updated");
                }
                Some(Err(e)) => {
                    ui.write().notify(NotificationLevel::Error, e.to_string());
                }
                None => {}
            }
        });
    };

    let joined = chrono::DateTime::from_timestamp(user.joined_at, 0)
        .map(|dt| dt.format("%B %Y").to_string())
        .unwrap_or_default();
    let initial = user
        .display_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let loaded: Option<Result<History, String>> = history.cloned().flatten();

    rsx! {
        section { class: "profile",
            div { class: "glass-card profile-header",
                if let Some(avatar) = &user.avatar_url {
                    img { class: "avatar", src: "{avatar}", alt: "{user.display_name}" }
                } else {
                    div { class: "avatar avatar-initial", "{initial}" }
                }
                div {
                    if let Some(name) = editing() {
                        Input {
                            value: name,
                            oninput: move |s| editing.set(Some(s)),
                            label: "Display name".to_string(),
                        }
                        div { class: "button-row",
                            Button { onclick: save_name, "Save" }
                            Button { variant: ButtonVariant::Ghost, onclick: move |_| editing.set(None), "Cancel" }
                        }
                    } else {
                        h1 { class: "page-title", "{user.display_name}" }
                        p { class: "card-meta", "{user.email} \u{00B7} joined {joined}" }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: {
                                let name = user.display_name.clone();
                                move |_| editing.set(Some(name.clone()))
                            },
                            "Edit name"
                        }
                    }
                }
            }

            {match loaded {
                None => rsx! {
                    LoadingSpinner {}
                },
                Some(Err(message)) => rsx! {
                    p { class: "error-message", "{message}" }
                },
                Some(Ok(History { readings, journal })) => rsx! {
                    div { class: "glass-card",
                        h2 { class: "section-header", "Readings ({readings.len()})" }
                        if readings.is_empty() {
                            p { class: "empty-state",
                                "No readings yet. "
                                Link { to: Route::Spreads {}, "Choose a spread" }
                            }
                        }
                        ul { class: "reading-list",
                            for reading in readings {
                                li { key: "{reading.id}",
                                    Link {
                                        to: Route::ReadingDetail { id: reading.id.to_string_repr() },
                                        "{reading.spread_name}"
                                    }
                                    span { class: "card-meta", " \u{00B7} {reading.question}" }
                                }
                            }
                        }
                    }

                    div { class: "glass-card",
                        h2 { class: "section-header", "Journal ({journal.len()})" }
                        if journal.is_empty() {
                            p { class: "empty-state", "Reflections saved from cards appear here." }
                        }
                        for entry in journal {
                            article { key: "{entry.id.to_string_repr()}", class: "journal-entry",
                                if !entry.title.is_empty() {
                                    h3 { "{entry.title}" }
                                }
                                p { class: "body-text", "{entry.content}" }
                                div { class: "tags",
                                    for card_id in entry.card_ids.iter() {
                                        Link {
                                            key: "{card_id}",
                                            class: "tag",
                                            to: Route::CardDetail { id: card_id.0 },
                                            "card {card_id}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}
