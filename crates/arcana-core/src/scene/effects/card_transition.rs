//! The card reveal: a card spins up, pulses, flies at the camera, then
//! signals completion.

use glam::Vec3;
use rand::Rng;

use crate::scene::animator::{PhaseClock, PhaseTimeline};
use crate::scene::camera::PerspectiveCamera;
use crate::scene::frame::FrameTime;
use crate::scene::lifecycle::{Effect, EventSink, MountContext, SceneEvent};
use crate::scene::primitive::{Color, Material, PrimitiveId, PrimitiveKind, Scene, Transform};

pub const TRANSITION_THRESHOLDS: [f32; 3] = [1.5, 3.0, 5.0];
pub const TRANSITION_COMPLETES_AFTER: f32 = 6.0;

const SPARKLE_COUNT: usize = 150;
/// Sparkles further out than this are reflected back inwards
const SPARKLE_BOUND: f32 = 10.0;
const CARD_WIDTH: f32 = 2.0;
const CARD_HEIGHT: f32 = 3.0;

/// Card transform and glow for a given phase and time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    pub position: Vec3,
    pub rotation_y: f32,
    pub scale: f32,
    pub emissive: f32,
}

pub fn card_pose(phase: usize, t: f32) -> CardPose {
    match phase {
        0 => CardPose {
            position: Vec3::new(0.0, (t * 2.0).sin() * 0.1, 0.0),
            rotation_y: t * 0.05,
            scale: 1.0,
            emissive: 0.2,
        },
        1 => CardPose {
            position: Vec3::new(0.0, (t * 3.0).sin() * 0.2, 0.0),
            rotation_y: t * 0.2,
            scale: 1.0,
            emissive: 0.2 + (t * 5.0).sin() * 0.2,
        },
        2 => CardPose {
            position: Vec3::new(0.0, 0.0, -3.0 + t * 1.5),
            rotation_y: t * 0.8,
            scale: 1.0 + t * 0.3,
            emissive: 0.4,
        },
        _ => CardPose {
            position: Vec3::new(0.0, 0.0, 5.0),
            rotation_y: t * 0.1,
            scale: 1.0 + TRANSITION_THRESHOLDS[2] * 0.3,
            emissive: 0.4,
        },
    }
}

#[derive(Debug, Clone, Copy)]
struct Sparkle {
    id: PrimitiveId,
    origin: Vec3,
    /// Phase of the x/y drift
    offset: f32,
    /// Phase of the slower z drift
    z_offset: f32,
}

impl Sparkle {
    /// Closed form of a drift of `sin`/`cos` hundredths per frame at 60 fps.
    fn position_at(&self, t: f32) -> Vec3 {
        let (phi, psi) = (self.offset, self.z_offset);
        let drift = Vec3::new(
            0.6 * (phi.cos() - (t + phi).cos()),
            0.6 * ((t + phi).sin() - phi.sin()),
            1.2 * (psi.cos() - (t * 0.5 + psi).cos()),
        );
        let p = self.origin + drift;
        Vec3::new(reflect(p.x), reflect(p.y), reflect(p.z))
    }
}

fn reflect(v: f32) -> f32 {
    if v.abs() > SPARKLE_BOUND {
        v * -0.9
    } else {
        v
    }
}

#[derive(Debug, Clone)]
pub struct CardTransition {
    image_url: String,
    clock: PhaseClock,
    card: Option<PrimitiveId>,
    sparkles: Vec<Sparkle>,
}

impl CardTransition {
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            clock: PhaseClock::new(
                PhaseTimeline::new(TRANSITION_THRESHOLDS).completing_after(TRANSITION_COMPLETES_AFTER),
            ),
            card: None,
            sparkles: Vec::new(),
        }
    }

    pub fn phase(&self) -> usize {
        self.clock.phase()
    }
}

impl Effect for CardTransition {
    fn name(&self) -> &'static str {
        "card-transition"
    }

    fn camera(&self) -> PerspectiveCamera {
        PerspectiveCamera::new(75.0, 1.0, 0.1, 1000.0).with_position(Vec3::new(0.0, 0.0, 5.0))
    }

    fn mount(&mut self, scene: &mut Scene, ctx: &mut MountContext<'_>) {
        scene.add_light(Vec3::new(10.0, 10.0, 10.0), 1.0, Color::WHITE);
        scene.add_light(Vec3::new(-10.0, -10.0, -10.0), 0.5, Color::from_hex(0x9370db));

        let texture = ctx.texture(&self.image_url);
        self.card = Some(scene.add(
            PrimitiveKind::Card {
                width: CARD_WIDTH,
                height: CARD_HEIGHT,
            },
            Transform::default(),
            Material::default()
                .with_emissive(Color::WHITE, 0.2)
                .with_texture(texture),
        ));

        for i in 0..SPARKLE_COUNT {
            let origin = Vec3::new(
                ctx.rng.random_range(-5.0..5.0),
                ctx.rng.random_range(-5.0..5.0),
                ctx.rng.random_range(-5.0..5.0),
            );
            let id = scene.add(
                PrimitiveKind::Particle,
                Transform::at(origin),
                Material::colored(Color::WHITE).with_opacity(0.6).with_size(0.05),
            );
            self.sparkles.push(Sparkle {
                id,
                origin,
                offset: i as f32 * 0.1,
                z_offset: i as f32,
            });
        }
    }

    fn update(&mut self, scene: &mut Scene, time: &FrameTime, events: &EventSink) {
        let t = time.elapsed;
        let step = self.clock.advance(t);
        if step.entered {
            tracing::debug!(phase = step.phase, elapsed = t, "Card transition entered phase");
        }

        if let Some(card) = self.card {
            if let Some(card) = scene.get_mut(card) {
                let pose = card_pose(step.phase, t);
                card.transform.position = pose.position;
                card.transform.rotation.y = pose.rotation_y;
                card.transform.scale = Vec3::splat(pose.scale);
                card.material.emissive_intensity = pose.emissive;
            }
        }

        for sparkle in &self.sparkles {
            if let Some(p) = scene.get_mut(sparkle.id) {
                p.transform.position = sparkle.position_at(t);
            }
        }

        if step.completed {
            events.send(SceneEvent::TransitionComplete);
        }
    }
}
