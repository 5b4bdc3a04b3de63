//! Main layout: header, routed page, notifications, footer.

use arcana_core::NotificationLevel;
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::NavHeader;
use crate::context::{use_pointer, use_scene_host, use_ui_state};

#[component]
pub fn MainLayout() -> Element {
    let mut pointer = use_pointer();
    let host = use_scene_host();
    let mut ui = use_ui_state();
    let route = use_route::<Route>();

    use_effect(use_reactive!(|(route)| {
        ui.write().set_current_page(route.to_string());
    }));

    let track_pointer = move |e: MouseEvent| {
        let viewport = host.viewport();
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }
        let p = e.client_coordinates();
        let x = (p.x as f32 / viewport.width as f32) * 2.0 - 1.0;
        let y = 1.0 - (p.y as f32 / viewport.height as f32) * 2.0;
        pointer.set((x, y));
    };

    let notifications = ui.read().notifications.clone();

    rsx! {
        div { class: "main-layout", onmousemove: track_pointer,
            div { class: "cosmic-backdrop" }
            NavHeader {}
            main { class: "page-content",
                Outlet::<Route> {}
            }
            if !notifications.is_empty() {
                div { class: "toasts", role: "status",
                    for note in notifications {
                        div {
                            key: "{note.id}",
                            class: match note.level {
                                NotificationLevel::Info => "toast",
                                NotificationLevel::Success => "toast toast-success",
                                NotificationLevel::Error => "toast toast-error",
                            },
                            onclick: move |_| ui.write().remove_notification(note.id),
                            "{note.message}"
                        }
                    }
                }
            }
            footer { class: "footer",
                p { "Arcana \u{00B7} the cards reflect, they do not decide" }
            }
        }
    }
}
