//! Benchmarks for scene ticking and projection
//!
//! Run with: cargo bench -p arcana-core
//!
//! These benchmarks establish baselines for:
//! - Mounting each effect
//! - One frame of the full particle field
//! - One frame of a composed page

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use arcana_core::scene::{
    ComposedScenes, EffectComposer, EffectKind, EventSink, MountedScene, Page, SceneHost, Viewport,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Mount Benchmarks
// ============================================================================

fn bench_mount(c: &mut Criterion) {
    let mut group = c.benchmark_group("mount");
    let kinds = [
        ("particle_field", EffectKind::ParticleField),
        ("floating_cards", EffectKind::FloatingCards),
        ("deck_shuffle", EffectKind::DeckShuffle),
        (
            "card_transition",
            EffectKind::CardTransition {
                image_url: "/images/cards/m00.jpg".into(),
            },
        ),
    ];

    for (name, kind) in kinds {
        group.bench_function(name, |b| {
            let host = SceneHost::new(Viewport::new(1280, 720));
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| {
                let scene = MountedScene::mount(&host, kind.build(), EventSink::none(), &mut rng);
                black_box(&scene);
                scene.unmount();
            })
        });
    }
    group.finish();
}

// ============================================================================
// Frame Benchmarks
// ============================================================================

fn bench_particle_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_frame");
    for count in [150usize, 1500] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let host = SceneHost::new(Viewport::new(1280, 720));
            let mut rng = StdRng::seed_from_u64(2);
            let _scene = MountedScene::mount(
                &host,
                Box::new(arcana_core::scene::effects::ParticleField::with_count(count)),
                EventSink::none(),
                &mut rng,
            );
            let mut t = 0.0f32;
            b.iter(|| {
                t += 1.0 / 60.0;
                black_box(host.tick(t))
            })
        });
    }
    group.finish();
}

fn bench_page_frame(c: &mut Criterion) {
    c.bench_function("home_page_frame", |b| {
        let host = SceneHost::new(Viewport::new(1280, 720));
        let mut rng = StdRng::seed_from_u64(3);
        let scenes = ComposedScenes::mount(
            &host,
            &EffectComposer::for_page(&Page::Home),
            EventSink::none(),
            &mut rng,
        );
        let mut t = 0.0f32;
        b.iter(|| {
            t += 1.0 / 60.0;
            host.tick(t);
            black_box(scenes.frames())
        })
    });
}

criterion_group!(benches, bench_mount, bench_particle_frame, bench_page_frame);
criterion_main!(benches);
