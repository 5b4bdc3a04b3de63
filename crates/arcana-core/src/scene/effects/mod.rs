//! The decorative effects mounted by pages.

mod card_showcase;
mod card_transition;
mod deck_shuffle;
mod floating_cards;
mod particle_field;

pub use card_showcase::CardShowcase;
pub use card_transition::{card_pose, CardPose, CardTransition, TRANSITION_COMPLETES_AFTER, TRANSITION_THRESHOLDS};
pub use deck_shuffle::{CardRef, DeckShuffle, DECK_CARD_COUNT};
pub use floating_cards::FloatingCards;
pub use particle_field::{ParticleField, PARTICLE_COUNT};

/// Image shown on the back of every card.
pub const CARD_BACK_URL: &str = "/images/cards/back.jpg";

/// Fraction to move towards a target this frame, for a smoothing factor
/// tuned at 60 frames per second.
pub(crate) fn approach(factor: f32, delta: f32) -> f32 {
    1.0 - (1.0 - factor).powf(delta * 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_matches_factor_at_sixty_fps() {
        assert!((approach(0.1, 1.0 / 60.0) - 0.1).abs() < 1e-5);
        assert_eq!(approach(0.1, 0.0), 0.0);
    }

    #[test]
    fn two_half_frames_equal_one_frame() {
        let half = approach(0.05, 1.0 / 120.0);
        let whole = approach(0.05, 1.0 / 60.0);
        let combined = 1.0 - (1.0 - half) * (1.0 - half);
        assert!((combined - whole).abs() < 1e-5);
    }
}
