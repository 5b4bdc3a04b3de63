use arcana_core::Page;
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::SceneCanvas;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        SceneCanvas { page: Page::NotFound }

        section { class: "not-found",
            h1 { class: "page-title", "404" }
            p { class: "body-text", "Nothing was drawn at {path}. The cards point elsewhere." }
            Link { class: "btn btn-primary", to: Route::Home {}, "Return home" }
        }
    }
}
