//! Page components, one per route.

mod about;
mod affirmations;
mod auth;
mod card_detail;
mod card_library;
mod daily_card;
mod home;
mod not_found;
mod profile;
mod reading_detail;
mod spread_detail;
mod spreads;

pub use about::About;
pub use affirmations::Affirmations;
pub use auth::{Login, Register};
pub use card_detail::CardDetail;
pub use card_library::CardLibrary;
pub use daily_card::DailyCard;
pub use home::Home;
pub use not_found::NotFound;
pub use profile::Profile;
pub use reading_detail::ReadingDetail;
pub use spread_detail::SpreadDetail;
pub use spreads::Spreads;
