//! Affirmations: today's affirmation, then the full list filtered by
//! daily or card-based. A selected affirmation can go to the journal.

use arcana_core::{Affirmation, AffirmationFilter, NewJournalEntry, NotificationLevel, Page};
use arcana_ui::{Button, ButtonVariant, LoadingSpinner};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::SceneCanvas;
use crate::context::{use_auth, use_engine, use_engine_ready, use_ui_state, with_engine};

/// Journal entry recording an affirmation, linked to its card if any.
fn journal_entry(affirmation: &Affirmation) -> NewJournalEntry {
    NewJournalEntry {
        title: match &affirmation.card_name {
            Some(card) => format!("Affirmation, {}", card),
            None => "Affirmation".to_string(),
        },
        content: affirmation.text.clone(),
        card_ids: affirmation.card_id.into_iter().collect(),
        mood: None,
    }
}

#[component]
pub fn Affirmations() -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();
    let auth = use_auth();
    let mut ui = use_ui_state();
    let mut filter = use_signal(AffirmationFilter::default);
    let mut selected = use_signal(|| None::<Affirmation>);
    let mut saving = use_signal(|| false);

    let listing = use_resource(move || async move {
        if !engine_ready() {
            return None;
        }
        let filter = filter();
        with_engine(engine, move |eng| {
            let today = eng.daily_affirmation().clone();
            let list: Vec<Affirmation> = eng.affirmations(filter).into_iter().cloned().collect();
            (today, list)
        })
        .await
    });

    let save = move |_| {
        let Some(affirmation) = selected() else {
            return;
        };
        if saving() {
            return;
        }
        saving.set(true);
        spawn(async move {
            let entry = journal_entry(&affirmation);
            match with_engine(engine, |eng| eng.add_journal_entry(entry)).await {
                Some(Ok(_)) => {
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

    rsx! {
        SceneCanvas { page: Page::Affirmations }

        section { class: "affirmations",
            h1 { class: "page-title", "Affirmations" }

            div { class: "filter-pills", role: "radiogroup", "aria-label": "Affirmation filter",
                for option in AffirmationFilter::ALL {
                    button {
                        key: "{option.label()}",
                        class: if filter() == option { "pill selected" } else { "pill" },
                        role: "radio",
                        "aria-checked": if filter() == option { "true" } else { "false" },
                        onclick: move |_| filter.set(option),
                        "{option.label()}"
                    }
                }
            }

            if let Some(affirmation) = selected() {
                div { class: "affirmation-focus glass-card",
                    p { class: "affirmation-large", "{affirmation.text}" }
                    if let Some(card_id) = affirmation.card_id {
                        Link {
                            class: "btn btn-ghost",
                            to: Route::CardDetail { id: card_id.0 },
                            "{affirmation.card_name.clone().unwrap_or_default()}"
                        }
                    }
                    if auth.read().is_authenticated {
                        Button {
                            variant: ButtonVariant::Mystic,
                            loading: saving(),
                            onclick: save,
                            "Add to journal"
                        }
                    }
                }
            }

            {match &*listing.read() {
                Some(Some((today, list))) => rsx! {
                    div { class: "affirmation-today glass-card",
                        h2 { class: "section-header", "Today" }
                        p { class: "affirmation-large", "{today.text}" }
                    }
                    if list.is_empty() {
                        p { class: "empty-state", "No affirmations found" }
                    }
                    ul { class: "affirmation-list",
                        for affirmation in list.iter().cloned() {
                            {
                                let is_selected = selected.read().as_ref().map(|a| a.id) == Some(affirmation.id);
                                rsx! {
                                    li {
                                        key: "{affirmation.id}",
                                        class: if is_selected { "affirmation-item selected" } else { "affirmation-item" },
                                        onclick: {
                                            let affirmation = affirmation.clone();
                                            move |_| selected.set(Some(affirmation.clone()))
                                        },
                                        p { class: "affirmation-text", "{affirmation.text}" }
                                        if let Some(card) = &affirmation.card_name {
                                            span { class: "affirmation-card", "{card}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                _ => rsx! {
                    LoadingSpinner { message: "Gathering affirmations".to_string() }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcana_core::{AffirmationCatalog, CardId};

    #[test]
    fn card_affirmation_entry_links_the_card() {
        let catalog = AffirmationCatalog::default();
        let magician = catalog.for_card(CardId(1)).unwrap();
        let entry = journal_entry(magician);
        assert_eq!(entry.title, "Affirmation, The Magician");
        assert_eq!(entry.content, magician.text);
        assert_eq!(entry.card_ids, vec![CardId(1)]);
    }

    #[test]
    fn daily_affirmation_entry_has_no_card() {
        let catalog = AffirmationCatalog::default();
        let daily = catalog.filter(AffirmationFilter::Daily)[0];
        let entry = journal_entry(daily);
        assert_eq!(entry.title, "Affirmation");
        assert!(entry.card_ids.is_empty());
    }
}
