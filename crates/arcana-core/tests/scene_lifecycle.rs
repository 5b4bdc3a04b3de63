//! Scene lifecycle integration tests
//!
//! Mount/unmount bookkeeping, resize propagation and event delivery across
//! every effect the app uses.

use std::sync::Arc;

use arcana_core::scene::{
    ComposedScenes, EffectComposer, EffectKind, EventSink, MountedScene, Page, SceneEvent,
    SceneHost, Shape, Viewport,
};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;

fn all_effects() -> Vec<EffectKind> {
    vec![
        EffectKind::ParticleField,
        EffectKind::FloatingCards,
        EffectKind::CardShowcase {
            image_url: "/images/cards/m00.jpg".into(),
        },
        EffectKind::CardTransition {
            image_url: "/images/cards/m01.jpg".into(),
        },
        EffectKind::DeckShuffle,
    ]
}

// ============================================================================
// Resource Release
// ============================================================================

#[test]
fn test_unmount_releases_every_resource() {
    let _ = tracing_subscriber::fmt::try_init();
    let host = SceneHost::new(Viewport::new(1280, 720));
    let mut rng = StdRng::seed_from_u64(1);

    for kind in all_effects() {
        let scene = MountedScene::mount(&host, kind.build(), EventSink::none(), &mut rng);
        let stats = host.stats();
        assert_eq!(stats.frame_callbacks, 1, "{:?}", kind);
        assert_eq!(stats.resize_listeners, 1, "{:?}", kind);
        assert_eq!(stats.surfaces, 1, "{:?}", kind);

        host.tick(0.0);
        host.tick(0.016);
        scene.unmount();
        assert!(host.stats().is_idle(), "{:?} leaked: {:?}", kind, host.stats());
    }
}

#[test]
fn test_repeated_navigation_does_not_accumulate() {
    let host = SceneHost::default();
    let mut rng = StdRng::seed_from_u64(2);
    let pages = [
        Page::Home,
        Page::SpreadDetail { shuffling: true },
        Page::CardDetail {
            image_url: "/images/cards/c03.jpg".into(),
        },
        Page::DailyCard {
            revealing: Some("/images/cards/m10.jpg".into()),
        },
    ];

    let mut elapsed = 0.0;
    for _ in 0..5 {
        for page in &pages {
            let scenes = ComposedScenes::mount(
                &host,
                &EffectComposer::for_page(page),
                EventSink::none(),
                &mut rng,
            );
            for _ in 0..3 {
                host.tick(elapsed);
                elapsed += 1.0 / 60.0;
            }
            drop(scenes);
            assert!(host.stats().is_idle());
        }
    }
}

#[test]
fn test_late_texture_after_unmount_is_discarded() {
    let host = SceneHost::default();
    let mut rng = StdRng::seed_from_u64(3);
    let scene = MountedScene::mount(
        &host,
        EffectKind::CardShowcase {
            image_url: "/images/cards/s05.jpg".into(),
        }
        .build(),
        EventSink::none(),
        &mut rng,
    );
    let pending = host.take_texture_requests();
    assert_eq!(pending, vec!["/images/cards/s05.jpg".to_string()]);

    scene.unmount();
    assert!(!host.complete_texture("/images/cards/s05.jpg", Ok((350, 600))));
    assert!(host.stats().is_idle());
}

// ============================================================================
// Resize
// ============================================================================

#[test]
fn test_resize_updates_aspect_before_next_frame() {
    let host = SceneHost::new(Viewport::new(800, 600));
    let mut rng = StdRng::seed_from_u64(4);
    let scene = MountedScene::mount(
        &host,
        EffectKind::ParticleField.build(),
        EventSink::none(),
        &mut rng,
    );
    assert!((scene.camera().aspect - 800.0 / 600.0).abs() < 1e-6);

    host.resize(Viewport::new(1600, 400));
    // No tick in between
    assert!((scene.camera().aspect - 4.0).abs() < 1e-6);
    assert_eq!(scene.viewport(), Viewport::new(1600, 400));

    host.tick(0.0);
    let frame = scene.frame().expect("frame rendered");
    assert_eq!(frame.viewport, Viewport::new(1600, 400));
}

#[test]
fn test_resize_after_unmount_touches_nothing() {
    let host = SceneHost::default();
    let mut rng = StdRng::seed_from_u64(5);
    let scene = MountedScene::mount(
        &host,
        EffectKind::DeckShuffle.build(),
        EventSink::none(),
        &mut rng,
    );
    scene.unmount();
    host.resize(Viewport::new(300, 300));
    assert!(host.stats().is_idle());
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn test_transition_completes_once_and_page_unmounts_it() {
    let host = SceneHost::default();
    let mut rng = StdRng::seed_from_u64(6);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let scenes = Arc::new(Mutex::new(Some(ComposedScenes::mount(
        &host,
        &EffectComposer::for_page(&Page::DailyCard {
            revealing: Some("/images/cards/m21.jpg".into()),
        }),
        EventSink::new(tx),
        &mut rng,
    ))));

    // A later frame callback reacts to the event by unmounting the page
    let watcher_scenes = Arc::clone(&scenes);
    let completions = Arc::new(Mutex::new(0));
    let watcher_count = Arc::clone(&completions);
    let watcher = host.request_frame(move |_| {
        while let Ok(event) = rx.try_recv() {
            assert_eq!(event, SceneEvent::TransitionComplete);
            *watcher_count.lock() += 1;
            if let Some(scenes) = watcher_scenes.lock().take() {
                scenes.unmount();
            }
        }
    });

    let mut t = 0.0;
    while t < 10.0 {
        host.tick(t);
        t += 1.0 / 30.0;
    }

    assert_eq!(*completions.lock(), 1);
    assert!(scenes.lock().is_none());
    host.cancel_frame(watcher);
    assert!(host.stats().is_idle());
}

#[test]
fn test_selection_carries_reference_id() {
    let host = SceneHost::default();
    let mut rng = StdRng::seed_from_u64(7);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let scenes = ComposedScenes::mount(
        &host,
        &EffectComposer::for_page(&Page::SpreadDetail { shuffling: true }),
        EventSink::new(tx),
        &mut rng,
    );
    host.tick(0.0);

    let deck = scenes.get("deck-shuffle").expect("deck mounted");
    let frame = deck.frame().expect("deck drew");
    // Pick whatever is drawn in front
    let front = frame.items.last().expect("cards drawn").id;
    let expected = deck.with_scene(|scene| {
        scene
            .primitives()
            .iter()
            .filter(|p| matches!(p.kind, arcana_core::scene::PrimitiveKind::Card { .. }))
            .position(|p| p.id == front)
            .expect("front item is a card") as u32
    });

    assert!(deck.activate(front));
    assert_eq!(rx.try_recv(), Ok(SceneEvent::CardSelected(expected)));
    assert!(!deck.activate(front));
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_deck_stays_selectable_without_card_images() {
    let host = SceneHost::default();
    let mut rng = StdRng::seed_from_u64(9);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let scenes = ComposedScenes::mount(
        &host,
        &EffectComposer::for_page(&Page::SpreadDetail { shuffling: true }),
        EventSink::new(tx),
        &mut rng,
    );
    let requests = host.take_texture_requests();
    assert!(!requests.is_empty());
    for url in requests {
        host.complete_texture(&url, Err("No such file or directory".into()));
    }
    host.tick(0.0);

    let deck = scenes.get("deck-shuffle").expect("deck mounted");
    let frame = deck.frame().expect("deck drew");
    let cards: Vec<_> = frame
        .items
        .iter()
        .filter(|item| matches!(item.shape, Shape::Quad { .. }))
        .collect();
    assert_eq!(cards.len(), 21);
    assert!(cards.iter().all(|item| item.texture_url.is_none()));

    assert!(deck.activate(cards[0].id));
    assert!(matches!(rx.try_recv(), Ok(SceneEvent::CardSelected(_))));
}

#[test]
fn test_disabled_host_mounts_silently() {
    let host = SceneHost::disabled(Viewport::new(640, 480));
    let mut rng = StdRng::seed_from_u64(8);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let scenes = ComposedScenes::mount(
        &host,
        &EffectComposer::for_page(&Page::DailyCard {
            revealing: Some("/images/cards/m02.jpg".into()),
        }),
        EventSink::new(tx),
        &mut rng,
    );
    let mut t = 0.0;
    while t < 7.0 {
        host.tick(t);
        t += 0.5;
    }
    assert!(scenes.frames().is_empty());
    // Animation still runs, so the page is not stuck waiting
    assert_eq!(rx.try_recv(), Ok(SceneEvent::TransitionComplete));
    scenes.unmount();
    assert!(host.stats().is_idle());
}
