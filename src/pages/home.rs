//! Home page: floating cards over the particle field and the four doors
//! into the app.

use arcana_core::Page;
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::SceneCanvas;

#[component]
pub fn Home() -> Element {
    let doors = [
        ("\u{2600}", "Daily Card", Route::DailyCard {}),
        ("\u{25A6}", "Spreads", Route::Spreads {}),
        ("\u{2766}", "The Deck", Route::CardLibrary {}),
        ("\u{2139}", "About Tarot", Route::About {}),
    ];

    rsx! {
        SceneCanvas { page: Page::Home }

        section { class: "home",
            header { class: "home-header",
                h1 { class: "page-title logo", "Arcana" }
                p { class: "tagline", "Seventy-eight mirrors for the questions you carry" }
            }

            nav { class: "home-doors",
                for (icon, label, route) in doors {
                    Link { key: "{label}", class: "home-door", to: route,
                        span { class: "door-icon", "{icon}" }
                        span { class: "door-label", "{label}" }
                    }
                }
            }
        }
    }
}
