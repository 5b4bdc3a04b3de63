use glam::Vec3;

use super::approach;
use crate::scene::animator::lerp;
use crate::scene::camera::PerspectiveCamera;
use crate::scene::frame::FrameTime;
use crate::scene::lifecycle::{Effect, EventSink, MountContext};
use crate::scene::primitive::{Color, Material, PrimitiveId, PrimitiveKind, Scene, Transform};

const GLOW: Color = Color::from_hex(0x6a00ff);

/// A single card that sways gently and livens up under the pointer.
#[derive(Debug, Clone)]
pub struct CardShowcase {
    image_url: String,
    card: Option<PrimitiveId>,
    hovered: bool,
}

impl CardShowcase {
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            card: None,
            hovered: false,
        }
    }
}

impl Effect for CardShowcase {
    fn name(&self) -> &'static str {
        "card-showcase"
    }

    fn camera(&self) -> PerspectiveCamera {
        PerspectiveCamera::new(45.0, 1.0, 0.1, 100.0).with_position(Vec3::new(0.0, 0.0, 2.0))
    }

    fn mount(&mut self, scene: &mut Scene, ctx: &mut MountContext<'_>) {
        scene.add_light(Vec3::new(1.0, 1.0, 2.0), 1.0, Color::WHITE);
        let texture = ctx.texture(&self.image_url);
        let card = scene.add(
            PrimitiveKind::Card {
                width: 0.7,
                height: 1.05,
            },
            Transform::default(),
            Material::default().with_emissive(GLOW, 0.1).with_texture(texture),
        );
        scene.set_interactive(card);
        self.card = Some(card);
    }

    fn update(&mut self, scene: &mut Scene, time: &FrameTime, _events: &EventSink) {
        let t = time.elapsed;
        let Some(card) = self.card else {
            return;
        };
        let Some(card) = scene.get_mut(card) else {
            return;
        };
        let (sway, bob, factor, glow) = if self.hovered {
            ((t * 0.5).sin() * 0.2, t.sin() * 0.1, 0.1, 0.3)
        } else {
            ((t * 0.3).sin() * 0.1, (t * 0.5).sin() * 0.05, 0.05, 0.1)
        };
        let k = approach(factor, time.delta);
        card.transform.rotation.y = lerp(card.transform.rotation.y, sway, k);
        card.transform.position.y = lerp(card.transform.position.y, bob, k);
        card.material.emissive_intensity = glow;
    }

    fn hover(&mut self, target: Option<PrimitiveId>) {
        self.hovered = target.is_some() && target == self.card;
    }
}
