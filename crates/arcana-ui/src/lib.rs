//! Arcana UI Components
//!
//! Dioxus widgets shared by the desktop app, styled for the night-sky
//! tarot theme.
//!
//! ## Palette
//!
//! - **Amethyst (#9c88ff)**: interactive elements, focus glow
//! - **Gold (#e6c67a)**: titles, card names, sacred accents
//! - **Night (#0f0c29)**: background
//!
//! The widgets only emit class names; the stylesheet lives in the app.

pub mod components;

pub use components::*;
