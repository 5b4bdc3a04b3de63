use arcana_core::{Page, TarotSpread};
use arcana_ui::LoadingSpinner;
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::SceneCanvas;
use crate::context::{use_engine, use_engine_ready, with_engine};

#[component]
pub fn Spreads() -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();

    let spreads = use_resource(move || async move {
        if !engine_ready() {
            return None;
        }
        with_engine(engine, |eng| eng.spreads().to_vec()).await
    });

    let loaded: Option<Vec<TarotSpread>> = spreads.cloned().flatten();

    rsx! {
        SceneCanvas { page: Page::Spreads }

        section { class: "spreads",
            h1 { class: "page-title", "Spreads" }
            p { class: "tagline", "Choose a layout for your question" }

            if let Some(list) = loaded {
                div { class: "spread-grid",
                    for spread in list {
                        Link {
                            key: "{spread.id}",
                            class: "spread-card glass-card",
                            to: Route::SpreadDetail { id: spread.id.0 },
                            h2 { class: "section-header", "{spread.name}" }
                            p { class: "body-text", "{spread.description}" }
                            div { class: "spread-meta",
                                span { class: "badge", "{spread.card_count()} cards" }
                                span { class: "badge", "{spread.difficulty.label()}" }
                                span { class: "badge", "{spread.time_required}" }
                            }
                            div { class: "tags",
                                for tag in spread.tags.iter() {
                                    span { key: "{tag}", class: "tag", "#{tag}" }
                                }
                            }
                        }
                    }
                }
            } else {
                LoadingSpinner {}
            }
        }
    }
}
