//! Guard for pages that need a signed-in user.

use arcana_core::{guard, GuardDecision, RedirectTarget};
use arcana_ui::{LoadingSpinner, SpinnerSize};
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_auth;

/// Renders `children` only for a signed-in user.
///
/// While the session is being restored a spinner is shown; signed-out
/// visitors are sent to the login page.
#[component]
pub fn PrivateRoute(children: Element) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let decision = guard(&auth.read());

    use_effect(move || {
        if let GuardDecision::Redirect(target) = guard(&auth.read()) {
            let route = match target {
                RedirectTarget::Login => Route::Login {},
            };
            navigator.replace(route);
        }
    });

    match decision {
        GuardDecision::ShowLoading => rsx! {
            LoadingSpinner { size: SpinnerSize::FullPage }
        },
        GuardDecision::Redirect(_) => rsx! {},
        GuardDecision::Render => children,
    }
}
