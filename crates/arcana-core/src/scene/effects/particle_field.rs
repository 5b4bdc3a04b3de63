use glam::Vec3;
use rand::Rng;

use crate::scene::camera::PerspectiveCamera;
use crate::scene::frame::FrameTime;
use crate::scene::lifecycle::{Effect, EventSink, MountContext};
use crate::scene::primitive::{Color, Material, PrimitiveKind, Scene, Transform};

pub const PARTICLE_COUNT: usize = 1500;

/// Half-width of the cube particles are scattered in.
const SPREAD: f32 = 50.0;
const COLOR_FROM: Color = Color::from_hex(0x9c88ff);
const COLOR_TO: Color = Color::from_hex(0x8c7ae6);
/// Radians per second around both x and y
const DRIFT_SPEED: f32 = 0.03;

/// Slowly rotating cloud of violet points behind every page.
#[derive(Debug, Clone)]
pub struct ParticleField {
    count: usize,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::with_count(PARTICLE_COUNT)
    }

    pub fn with_count(count: usize) -> Self {
        Self { count }
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for ParticleField {
    fn name(&self) -> &'static str {
        "particle-field"
    }

    fn camera(&self) -> PerspectiveCamera {
        PerspectiveCamera::new(75.0, 1.0, 0.1, 1000.0).with_position(Vec3::new(0.0, 0.0, 30.0))
    }

    fn mount(&mut self, scene: &mut Scene, ctx: &mut MountContext<'_>) {
        for _ in 0..self.count {
            let position = Vec3::new(
                ctx.rng.random_range(-SPREAD..SPREAD),
                ctx.rng.random_range(-SPREAD..SPREAD),
                ctx.rng.random_range(-SPREAD..SPREAD),
            );
            let color = COLOR_FROM.lerp(COLOR_TO, ctx.rng.random::<f32>());
            scene.add(
                PrimitiveKind::Particle,
                Transform::at(position),
                Material::colored(color).with_opacity(0.8).with_size(0.5),
            );
        }
    }

    fn update(&mut self, scene: &mut Scene, time: &FrameTime, _events: &EventSink) {
        let angle = time.elapsed * DRIFT_SPEED;
        scene.root.rotation.x = angle;
        scene.root.rotation.y = angle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{MountedScene, SceneHost, Viewport};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn particles_fill_the_cube() {
        let host = SceneHost::new(Viewport::new(800, 600));
        let mut rng = StdRng::seed_from_u64(7);
        let scene = MountedScene::mount(
            &host,
            Box::new(ParticleField::with_count(200)),
            EventSink::none(),
            &mut rng,
        );
        scene.with_scene(|s| {
            assert_eq!(s.len(), 200);
            for p in s.primitives() {
                let pos = p.transform.position;
                assert!(pos.abs().max_element() <= SPREAD);
                assert_eq!(p.material.opacity, 0.8);
            }
        });
    }

    #[test]
    fn rotation_depends_only_on_elapsed() {
        let mut field = ParticleField::with_count(0);
        let mut scene = Scene::new();
        field.update(&mut scene, &FrameTime::at(10.0), &EventSink::none());
        assert!((scene.root.rotation.y - 0.3).abs() < 1e-6);
        assert_eq!(scene.root.rotation.x, scene.root.rotation.y);
    }
}
