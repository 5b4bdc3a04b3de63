//! Loading Spinner
//!
//! Shown while a guarded route waits for the session, and while pages load
//! data from the engine.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    /// Fills the content area
    FullPage,
}

impl SpinnerSize {
    pub fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner spinner-sm",
            SpinnerSize::Medium => "spinner",
            SpinnerSize::FullPage => "spinner spinner-page",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct LoadingSpinnerProps {
    #[props(default)]
    pub size: SpinnerSize,
    #[props(default)]
    pub message: Option<String>,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LoadingSpinner { size: SpinnerSize::FullPage, message: "Consulting the cards".to_string() }
/// }
/// ```
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            class: "loading-container",
            role: "status",
            "aria-live": "polite",
            div { class: "{props.size.class()}", "aria-hidden": "true" }
            if let Some(message) = &props.message {
                p { class: "loading-message", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_classes() {
        assert_eq!(SpinnerSize::Small.class(), "spinner spinner-sm");
        assert_eq!(SpinnerSize::default().class(), "spinner");
        assert_eq!(SpinnerSize::FullPage.class(), "spinner spinner-page");
    }
}
