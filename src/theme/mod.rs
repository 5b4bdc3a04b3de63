//! Theme for Arcana: night-sky palette, gold titles, amethyst accents.

mod styles;

pub use styles::GLOBAL_STYLES;
