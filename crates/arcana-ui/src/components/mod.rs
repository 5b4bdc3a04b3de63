//! Reusable UI components
//!
//! Every component renders plain elements with class names from the app
//! stylesheet.

mod button;
mod card_tile;
mod filter_pills;
mod input;
mod loading;

pub use button::*;
pub use card_tile::*;
pub use filter_pills::*;
pub use input::*;
pub use loading::*;
