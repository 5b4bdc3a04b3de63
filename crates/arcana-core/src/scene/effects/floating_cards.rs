use glam::{Vec2, Vec3};
use rand::Rng;

use super::{approach, CARD_BACK_URL};
use crate::scene::camera::PerspectiveCamera;
use crate::scene::frame::FrameTime;
use crate::scene::lifecycle::{Effect, EventSink, MountContext};
use crate::scene::primitive::{Color, Material, PrimitiveId, PrimitiveKind, Scene, Transform};

const DEFAULT_COUNT: usize = 7;
/// Maximum tilt towards the pointer, radians
const TILT_Y: f32 = 0.4;
const TILT_X: f32 = 0.3;
const FOLLOW: f32 = 0.05;

#[derive(Debug, Clone)]
struct Floater {
    id: PrimitiveId,
    base: Vec3,
    phase: f32,
    speed: f32,
    roll: f32,
    tilt: Vec2,
}

/// Card backs drifting in the background, tilting towards the pointer.
#[derive(Debug, Clone)]
pub struct FloatingCards {
    count: usize,
    image_url: String,
    pointer: Vec2,
    floaters: Vec<Floater>,
}

impl FloatingCards {
    pub fn new() -> Self {
        Self::with_count(DEFAULT_COUNT)
    }

    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            image_url: CARD_BACK_URL.to_string(),
            pointer: Vec2::ZERO,
            floaters: Vec::new(),
        }
    }
}

impl Default for FloatingCards {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for FloatingCards {
    fn name(&self) -> &'static str {
        "floating-cards"
    }

    fn camera(&self) -> PerspectiveCamera {
        PerspectiveCamera::new(60.0, 1.0, 0.1, 100.0).with_position(Vec3::new(0.0, 0.0, 8.0))
    }

    fn mount(&mut self, scene: &mut Scene, ctx: &mut MountContext<'_>) {
        scene.add_light(Vec3::new(0.0, 5.0, 5.0), 0.8, Color::from_hex(0xb19cd9));
        for _ in 0..self.count {
            let base = Vec3::new(
                ctx.rng.random_range(-8.0..8.0),
                ctx.rng.random_range(-5.0..5.0),
                ctx.rng.random_range(-10.0..-2.0),
            );
            let roll = ctx.rng.random_range(-0.3..0.3);
            let texture = ctx.texture(&self.image_url);
            let id = scene.add(
                PrimitiveKind::Card {
                    width: 1.4,
                    height: 2.4,
                },
                Transform::at(base).with_rotation(Vec3::new(0.0, 0.0, roll)),
                Material::default()
                    .with_opacity(0.35)
                    .with_emissive(Color::from_hex(0x6a00ff), 0.1)
                    .with_texture(texture),
            );
            self.floaters.push(Floater {
                id,
                base,
                phase: ctx.rng.random_range(0.0..std::f32::consts::TAU),
                speed: ctx.rng.random_range(0.3..0.7),
                roll,
                tilt: Vec2::ZERO,
            });
        }
    }

    fn update(&mut self, scene: &mut Scene, time: &FrameTime, _events: &EventSink) {
        let t = time.elapsed;
        let k = approach(FOLLOW, time.delta);
        let target = Vec2::new(self.pointer.x * TILT_Y, -self.pointer.y * TILT_X);

        for floater in &mut self.floaters {
            floater.tilt = floater.tilt.lerp(target, k);
            let Some(primitive) = scene.get_mut(floater.id) else {
                continue;
            };
            primitive.transform.position = Vec3::new(
                floater.base.x,
                floater.base.y + (t * floater.speed + floater.phase).sin() * 0.3,
                floater.base.z,
            );
            primitive.transform.rotation = Vec3::new(floater.tilt.y, floater.tilt.x, floater.roll);
        }
    }

    fn pointer_moved(&mut self, ndc: Vec2) {
        self.pointer = ndc.clamp(Vec2::splat(-1.0), Vec2::ONE);
    }
}
