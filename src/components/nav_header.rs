//! Navigation Header Component
//!
//! App title, the main sections, and the session control on the right.

use arcana_core::Theme;
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{use_auth, use_engine, use_ui_state, with_engine};

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Cards,
    DailyCard,
    Affirmations,
    Spreads,
    About,
}

impl NavLocation {
    pub const ALL: [NavLocation; 6] = [
        NavLocation::Home,
        NavLocation::Cards,
        NavLocation::DailyCard,
        NavLocation::Affirmations,
        NavLocation::Spreads,
        NavLocation::About,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::Cards => "Cards",
            NavLocation::DailyCard => "Daily Card",
            NavLocation::Affirmations => "Affirmations",
            NavLocation::Spreads => "Spreads",
            NavLocation::About => "About",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Home {},
            NavLocation::Cards => Route::CardLibrary {},
            NavLocation::DailyCard => Route::DailyCard {},
            NavLocation::Affirmations => Route::Affirmations {},
            NavLocation::Spreads => Route::Spreads {},
            NavLocation::About => Route::About {},
        }
    }

    /// Section a route belongs to, for highlighting.
    pub fn for_route(route: &Route) -> Option<NavLocation> {
        match route {
            Route::Home {} => Some(NavLocation::Home),
            Route::CardLibrary {} | Route::CardDetail { .. } => Some(NavLocation::Cards),
            Route::DailyCard {} => Some(NavLocation::DailyCard),
            Route::Affirmations {} => Some(NavLocation::Affirmations),
            Route::Spreads {} | Route::SpreadDetail { .. } | Route::ReadingDetail { .. } => {
                Some(NavLocation::Spreads)
            }
            Route::About {} => Some(NavLocation::About),
            _ => None,
        }
    }
}

#[component]
pub fn NavHeader() -> Element {
    let route = use_route::<Route>();
    let current = NavLocation::for_route(&route);
    let engine = use_engine();
    let mut auth = use_auth();
    let mut ui = use_ui_state();
    let navigator = use_navigator();

    let sign_out = move |_| {
        spawn(async move {
            if let Some(Err(e)) = with_engine(engine, |eng| eng.sign_out()).await {
                tracing::warn!("Sign out failed: {}", e);
            }
            auth.write().logout();
            navigator.push(Route::Home {});
        });
    };

    let user = auth.read().user.clone();
    let theme_label = match ui.read().theme {
        Theme::Dark => "\u{2600}",
        Theme::Light => "\u{263E}",
    };

    rsx! {
        header { class: "nav-header",
            Link { class: "nav-title", to: Route::Home {}, "Arcana" }

            nav { class: "nav-links",
                for location in NavLocation::ALL {
                    Link {
                        key: "{location.display_name()}",
                        class: if current == Some(location) { "nav-link active" } else { "nav-link" },
                        to: location.route(),
                        "{location.display_name()}"
                    }
                }
            }

            div { class: "nav-session",
                button {
                    class: "icon-btn theme-toggle",
                    "aria-label": "Toggle theme",
                    onclick: move |_| ui.write().toggle_theme(),
                    "{theme_label}"
                }
                if let Some(user) = user {
                    Link { class: "nav-link", to: Route::Profile {}, "{user.display_name}" }
                    button { class: "btn btn-ghost", onclick: sign_out, "Sign out" }
                } else {
                    Link { class: "btn btn-outline", to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
