use arcana_core::Page;
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::SceneCanvas;

const SECTIONS: [(&str, &str); 3] = [
    (
        "The Major Arcana",
        "Twenty-two cards from the Fool to the World. They trace the great turns of a life: beginnings, trials, endings and return.",
    ),
    (
        "The Minor Arcana",
        "Fifty-six cards in four suits. Wands carry will, Cups feeling, Swords thought and Pentacles the material world.",
    ),
    (
        "Reading the cards",
        "A spread gives each card a place and a question. Reversed cards are not bad omens; they point inward or show energy held back.",
    ),
];

#[component]
pub fn About() -> Element {
    rsx! {
        SceneCanvas { page: Page::About }

        section { class: "about",
            h1 { class: "page-title", "About Tarot" }
            for (title, body) in SECTIONS {
                article { key: "{title}", class: "glass-card",
                    h2 { class: "section-header", "{title}" }
                    p { class: "body-text", "{body}" }
                }
            }
            Link { class: "btn btn-mystic", to: Route::CardLibrary {}, "Explore the deck" }
        }
    }
}
