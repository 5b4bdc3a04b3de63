//! Property-based tests
//!
//! Phase sequencing, card reveal poses and deck draws.

use std::collections::HashSet;

use arcana_core::deck::{Deck, DECK_SIZE};
use arcana_core::scene::animator::{PhaseClock, PhaseTimeline};
use arcana_core::scene::effects::{card_pose, TRANSITION_COMPLETES_AFTER, TRANSITION_THRESHOLDS};
use arcana_core::{guard, AuthState, AuthStatus, GuardDecision, RedirectTarget};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Strictly increasing frame times, as a real clock would produce
fn frame_times() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(0.001f32..0.5, 1..200).prop_map(|deltas| {
        let mut t = 0.0;
        deltas
            .into_iter()
            .map(|d| {
                t += d;
                t
            })
            .collect()
    })
}

fn auth_state() -> impl Strategy<Value = AuthState> {
    (
        any::<bool>(),
        prop_oneof![
            Just(AuthStatus::Idle),
            Just(AuthStatus::Loading),
            Just(AuthStatus::Succeeded),
            Just(AuthStatus::Failed),
        ],
    )
        .prop_map(|(is_authenticated, status)| AuthState {
            is_authenticated,
            status,
            ..Default::default()
        })
}

fn transition_timeline() -> PhaseTimeline {
    PhaseTimeline::new(TRANSITION_THRESHOLDS).completing_after(TRANSITION_COMPLETES_AFTER)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Phase equals the number of thresholds strictly below t
    #[test]
    fn phase_matches_thresholds(t in 0.0f32..20.0) {
        let expected = TRANSITION_THRESHOLDS.iter().filter(|th| t > **th).count();
        prop_assert_eq!(transition_timeline().phase_at(t), expected);
    }

    /// Phase is a non-decreasing step function of time
    #[test]
    fn phase_is_monotonic(a in 0.0f32..20.0, b in 0.0f32..20.0) {
        let timeline = transition_timeline();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(timeline.phase_at(lo) <= timeline.phase_at(hi));
    }

    /// The clock never revisits a phase, even if time is observed out of order
    #[test]
    fn clock_never_regresses(times in prop::collection::vec(0.0f32..10.0, 1..100)) {
        let mut clock = PhaseClock::new(transition_timeline());
        let mut last = 0;
        for t in times {
            let step = clock.advance(t);
            prop_assert!(step.phase >= last);
            last = step.phase;
        }
    }

    /// Completion fires exactly once if and only if time passes the end
    #[test]
    fn completion_fires_once(times in frame_times()) {
        let mut clock = PhaseClock::new(transition_timeline());
        let mut fired = Vec::new();
        for t in &times {
            if clock.advance(*t).completed {
                fired.push(*t);
            }
        }
        let reaches_end = times.iter().any(|t| *t > TRANSITION_COMPLETES_AFTER);
        prop_assert_eq!(fired.len(), usize::from(reaches_end));
        if let Some(t) = fired.first() {
            prop_assert!(*t > TRANSITION_COMPLETES_AFTER);
        }
    }

    /// Card pose depends only on phase and time
    #[test]
    fn card_pose_is_deterministic(t in 0.0f32..10.0) {
        let phase = transition_timeline().phase_at(t);
        prop_assert_eq!(card_pose(phase, t), card_pose(phase, t));
    }

    /// Card grows while flying and never shrinks below its resting size
    #[test]
    fn card_scale_at_least_one(t in 0.0f32..10.0) {
        let phase = transition_timeline().phase_at(t);
        prop_assert!(card_pose(phase, t).scale >= 1.0);
    }

    /// Drawing without replacement never repeats a card
    #[test]
    fn draws_are_distinct(seed in any::<u64>(), count in 0usize..=DECK_SIZE) {
        let deck = Deck::standard();
        let mut rng = StdRng::seed_from_u64(seed);
        let cards = deck.draw_many(count, &mut rng).unwrap();
        prop_assert_eq!(cards.len(), count);
        let ids: HashSet<_> = cards.iter().map(|c| c.card.id).collect();
        prop_assert_eq!(ids.len(), count);
    }

    /// The guard decision is fully determined by status and authentication
    #[test]
    fn guard_decision_table(auth in auth_state()) {
        let decision = guard(&auth);
        let expected = if auth.status == AuthStatus::Loading {
            GuardDecision::ShowLoading
        } else if !auth.is_authenticated {
            GuardDecision::Redirect(RedirectTarget::Login)
        } else {
            GuardDecision::Render
        };
        prop_assert_eq!(decision, expected);
    }
}
