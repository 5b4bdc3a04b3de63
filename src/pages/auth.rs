//! Sign-in and registration against the local profile store.

use arcana_core::{AuthState, AuthStatus, Page, TarotError, User};
use arcana_ui::{Button, ButtonVariant, Input};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::SceneCanvas;
use crate::context::{use_auth, use_engine, with_engine};

/// Apply a sign-in or registration result to the session.
fn finish(
    mut auth: Signal<AuthState>,
    result: Option<Result<User, TarotError>>,
    navigator: Navigator,
) {
    match result {
        Some(Ok(user)) => {
            tracing::info!(email = %user.email, "Session started");
            auth.write().login(user);
            navigator.replace(Route::Profile {});
        }
        Some(Err(e)) => auth.write().set_error(e.to_string()),
        None => auth.write().set_error("The deck is still being prepared, try again"),
    }
}

#[component]
pub fn Login() -> Element {
    let engine = use_engine();
    let mut auth = use_auth();
    let navigator = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let submit = move |_| {
        auth.write().set_loading();
        spawn(async move {
            let (email, password) = (email(), password());
            let result = with_engine(engine, |eng| eng.sign_in(&email, &password)).await;
            finish(auth, result, navigator);
        });
    };

    let state = auth.read().clone();
    let loading = state.status == AuthStatus::Loading;

    rsx! {
        SceneCanvas { page: Page::Login }

        section { class: "auth-page",
            div { class: "glass-card auth-card",
                h1 { class: "page-title", "Welcome back" }
                Input {
                    value: email(),
                    oninput: move |s| email.set(s),
                    label: "Email".to_string(),
                    input_type: "email".to_string(),
                    required: true,
                }
                Input {
                    value: password(),
                    oninput: move |s| password.set(s),
                    label: "Password".to_string(),
                    input_type: "password".to_string(),
                    required: true,
                    error: state.error.clone(),
                }
                Button {
                    variant: ButtonVariant::Mystic,
                    loading: loading,
                    onclick: submit,
                    "Sign in"
                }
                p { class: "auth-switch",
                    "New here? "
                    Link { to: Route::Register {}, "Create an account" }
                }
            }
        }
    }
}

#[component]
pub fn Register() -> Element {
    let engine = use_engine();
    let mut auth = use_auth();
    let navigator = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);

    let mismatch = !confirm().is_empty() && confirm() != password();

    let submit = move |_| {
        if confirm() != password() {
            auth.write().set_error("Passwords do not match");
            return;
        }
        auth.write().set_loading();
        spawn(async move {
            let (name, email, password) = (name(), email(), password());
            let result = with_engine(engine, |eng| eng.register(&name, &email, &password)).await;
            finish(auth, result, navigator);
        });
    };

    let state = auth.read().clone();
    let loading = state.status == AuthStatus::Loading;

    rsx! {
        SceneCanvas { page: Page::Register }

        section { class: "auth-page",
            div { class: "glass-card auth-card",
                h1 { class: "page-title", "Create an account" }
                Input {
                    value: name(),
                    oninput: move |s| name.set(s),
                    label: "Name".to_string(),
                    required: true,
                }
                Input {
                    value: email(),
                    oninput: move |s| email.set(s),
                    label: "Email".to_string(),
                    input_type: "email".to_string(),
                    required: true,
                }
                Input {
                    value: password(),
                    oninput: move |s| password.set(s),
                    label: "Password".to_string(),
                    placeholder: "At least 6 characters".to_string(),
                    input_type: "password".to_string(),
                    required: true,
                }
                Input {
                    value: confirm(),
                    oninput: move |s| confirm.set(s),
                    label: "Confirm password".to_string(),
                    input_type: "password".to_string(),
                    required: true,
                    error: if mismatch { Some("Passwords do not match".to_string()) } else { state.error.clone() },
                }
                Button {
                    variant: ButtonVariant::Mystic,
                    loading: loading,
                    onclick: submit,
                    "Create account"
                }
                p { class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
