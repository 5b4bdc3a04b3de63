//! A fanned deck of card backs. Hovering lifts a card out of the stack;
//! activating one emits [`SceneEvent::CardSelected`] with its reference id.

use glam::Vec3;
use rand::Rng;

use super::{approach, CARD_BACK_URL};
use crate::scene::camera::PerspectiveCamera;
use crate::scene::frame::FrameTime;
use crate::scene::lifecycle::{Effect, EventSink, MountContext, SceneEvent};
use crate::scene::primitive::{Color, Material, PrimitiveId, PrimitiveKind, Scene, Transform};
use crate::scene::spring::{Spring, Spring3, SpringConfig};

pub const DECK_CARD_COUNT: usize = 21;

const HOVER_LIFT: Vec3 = Vec3::new(0.0, 0.5, 2.0);
const HOVER_SCALE: f32 = 1.2;
/// Spin added while hovered, radians per second
const HOVER_SPIN: f32 = 0.6;
const HOVER_COLOR: Color = Color::WHITE;
const HOVER_GLOW: Color = Color::from_hex(0x9060ff);
const REST_COLOR: Color = Color::from_hex(0xddd5ff);

/// Identity and starting pose of one card in the deck.
///
/// Drawn once at mount; never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRef {
    pub id: u32,
    pub position: Vec3,
    pub rotation: Vec3,
}

impl CardRef {
    fn random(id: u32, rng: &mut (impl Rng + ?Sized)) -> Self {
        Self {
            id,
            position: Vec3::new(rng.random_range(-0.05..0.05), 0.0, 0.0),
            rotation: Vec3::new(0.0, rng.random_range(-0.05..0.05), rng.random_range(-0.05..0.05)),
        }
    }

    /// Stacked pose: cards nearer the top sit slightly higher and closer.
    pub fn rest_position(&self, index: usize, total: usize) -> Vec3 {
        let depth = 1.0 - index as f32 / total.max(1) as f32;
        self.position + Vec3::new(0.0, depth * 0.1, depth * 0.05)
    }

    pub fn hover_position(&self) -> Vec3 {
        self.position + HOVER_LIFT
    }

    pub fn hover_rotation(&self) -> Vec3 {
        self.rotation - Vec3::new(std::f32::consts::PI * 0.05, 0.0, 0.0)
    }
}

#[derive(Debug, Clone)]
struct DeckCard {
    reference: CardRef,
    primitive: PrimitiveId,
    position: Spring3,
    rotation: Spring3,
    scale: Spring,
    spin: f32,
}

#[derive(Debug, Clone)]
pub struct DeckShuffle {
    count: usize,
    image_url: String,
    cards: Vec<DeckCard>,
    hovered: Option<usize>,
    selected: Option<u32>,
}

impl DeckShuffle {
    pub fn new() -> Self {
        Self::with_count(DECK_CARD_COUNT)
    }

    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            image_url: CARD_BACK_URL.to_string(),
            cards: Vec::new(),
            hovered: None,
            selected: None,
        }
    }

    pub fn cards(&self) -> impl Iterator<Item = &CardRef> {
        self.cards.iter().map(|c| &c.reference)
    }

    pub fn hovered(&self) -> Option<&CardRef> {
        self.hovered.map(|i| &self.cards[i].reference)
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    fn index_of(&self, primitive: PrimitiveId) -> Option<usize> {
        self.cards.iter().position(|c| c.primitive == primitive)
    }
}

impl Default for DeckShuffle {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for DeckShuffle {
    fn name(&self) -> &'static str {
        "deck-shuffle"
    }

    fn camera(&self) -> PerspectiveCamera {
        PerspectiveCamera::new(50.0, 1.0, 0.1, 100.0).with_position(Vec3::new(0.0, 1.0, 8.0))
    }

    fn mount(&mut self, scene: &mut Scene, ctx: &mut MountContext<'_>) {
        scene.add_light(Vec3::new(10.0, 10.0, 10.0), 1.0, Color::WHITE);
        scene.add_light(Vec3::new(-10.0, -10.0, -10.0), 0.5, HOVER_GLOW);

        let total = self.count;
        for index in 0..total {
            let reference = CardRef::random(index as u32, &mut *ctx.rng);
            let rest = reference.rest_position(index, total);
            let texture = ctx.texture(&self.image_url);
            let primitive = scene.add(
                PrimitiveKind::Card {
                    width: 2.5,
                    height: 4.0,
                },
                Transform::at(rest).with_rotation(reference.rotation),
                Material::colored(REST_COLOR).with_texture(texture),
            );
            scene.set_interactive(primitive);
            self.cards.push(DeckCard {
                reference,
                primitive,
                position: Spring3::new(SpringConfig::deck(), rest),
                rotation: Spring3::new(SpringConfig::deck(), reference.rotation),
                scale: Spring::new(SpringConfig::deck(), 1.0),
                spin: 0.0,
            });
        }
    }

    fn update(&mut self, scene: &mut Scene, time: &FrameTime, _events: &EventSink) {
        let t = time.elapsed;
        scene.root.rotation.y = (t / 3.0).sin() * 0.3;
        scene.root.position.y = (t / 2.0).sin() * 0.2;

        let total = self.cards.len();
        for (index, card) in self.cards.iter_mut().enumerate() {
            let hovered = self.hovered == Some(index);
            if hovered {
                card.position.set_target(card.reference.hover_position());
                card.rotation.set_target(card.reference.hover_rotation());
                card.scale.set_target(HOVER_SCALE);
                card.spin += HOVER_SPIN * time.delta;
            } else {
                card.position.set_target(card.reference.rest_position(index, total));
                card.rotation.set_target(card.reference.rotation);
                card.scale.set_target(1.0);
                card.spin *= 1.0 - approach(0.1, time.delta);
            }
            card.position.step(time.delta);
            card.rotation.step(time.delta);
            card.scale.step(time.delta);

            let Some(primitive) = scene.get_mut(card.primitive) else {
                continue;
            };
            primitive.transform.position = card.position.value();
            primitive.transform.rotation = card.rotation.value() + Vec3::new(0.0, card.spin, 0.0);
            primitive.transform.scale = Vec3::splat(card.scale.value());
            if hovered {
                primitive.material.color = HOVER_COLOR;
                primitive.material.emissive = HOVER_GLOW;
                primitive.material.emissive_intensity = 0.3;
            } else {
                primitive.material.color = REST_COLOR;
                primitive.material.emissive = Color::BLACK;
                primitive.material.emissive_intensity = 0.0;
            }
        }
    }

    fn hover(&mut self, target: Option<PrimitiveId>) {
        self.hovered = target.and_then(|id| self.index_of(id));
    }

    fn activate(&mut self, target: PrimitiveId, events: &EventSink) -> bool {
        if self.selected.is_some() {
            return false;
        }
        let Some(index) = self.index_of(target) else {
            return false;
        };
        let id = self.cards[index].reference.id;
        self.selected = Some(id);
        tracing::debug!(card = id, "Deck card selected");
        events.send(SceneEvent::CardSelected(id));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{MountedScene, SceneHost};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mounted(host: &SceneHost, events: EventSink) -> MountedScene {
        let mut rng = StdRng::seed_from_u64(21);
        MountedScene::mount(host, Box::new(DeckShuffle::new()), events, &mut rng)
    }

    fn card_ids(scene: &MountedScene) -> Vec<PrimitiveId> {
        scene.with_scene(|s| {
            s.primitives()
                .iter()
                .filter(|p| matches!(p.kind, PrimitiveKind::Card { .. }))
                .map(|p| p.id)
                .collect()
        })
    }

    #[test]
    fn deck_has_twenty_one_cards() {
        let host = SceneHost::default();
        let scene = mounted(&host, EventSink::none());
        assert_eq!(card_ids(&scene).len(), DECK_CARD_COUNT);
    }

    #[test]
    fn rest_stack_rises_towards_the_top() {
        let card = CardRef {
            id: 0,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        };
        let top = card.rest_position(0, 21);
        let bottom = card.rest_position(20, 21);
        assert!((top.y - 0.1).abs() < 1e-6);
        assert!(bottom.y < top.y);
        assert!((top.z - 0.05).abs() < 1e-6);
    }

    #[test]
    fn hovered_card_lifts_and_glows() {
        let host = SceneHost::default();
        let scene = mounted(&host, EventSink::none());
        let target = card_ids(&scene)[4];
        scene.hover(Some(target));
        for i in 0..180 {
            host.tick(i as f32 / 60.0);
        }
        scene.with_scene(|s| {
            let card = s.get(target).unwrap();
            assert!(card.transform.position.z > 1.9);
            assert!((card.transform.scale.x - HOVER_SCALE).abs() < 1e-2);
            assert_eq!(card.material.color, HOVER_COLOR);
            assert_eq!(card.material.emissive_intensity, 0.3);
        });

        scene.hover(None);
        for i in 180..480 {
            host.tick(i as f32 / 60.0);
        }
        scene.with_scene(|s| {
            let card = s.get(target).unwrap();
            assert!(card.transform.position.z < 0.1);
            assert_eq!(card.material.color, REST_COLOR);
        });
    }

    #[test]
    fn activation_emits_reference_id_once() {
        let host = SceneHost::default();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let scene = mounted(&host, EventSink::new(tx));
        let ids = card_ids(&scene);

        assert!(scene.activate(ids[7]));
        assert!(!scene.activate(ids[3]));
        assert_eq!(rx.try_recv(), Ok(SceneEvent::CardSelected(7)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn activating_a_non_card_is_ignored() {
        let host = SceneHost::default();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let scene = mounted(&host, EventSink::new(tx));
        // Primitive 0 is a light
        assert!(!scene.activate(PrimitiveId(0)));
        assert!(rx.try_recv().is_err());
    }
}
