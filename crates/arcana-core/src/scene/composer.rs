//! Which effects each page shows, and mounting them as one unit.

use rand::RngCore;

use super::effects::{CardShowcase, CardTransition, DeckShuffle, FloatingCards, ParticleField};
use super::lifecycle::{Effect, EventSink, MountedScene, RenderedFrame};
use super::host::SceneHost;

/// Pages that carry decorative scenes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    CardLibrary,
    CardDetail { image_url: String },
    Affirmations,
    /// `revealing` is the image of the card being revealed, if any
    DailyCard { revealing: Option<String> },
    Spreads,
    /// `shuffling` while the user still has to pick a card
    SpreadDetail { shuffling: bool },
    Profile,
    ReadingDetail,
    Login,
    Register,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectKind {
    ParticleField,
    FloatingCards,
    CardShowcase { image_url: String },
    CardTransition { image_url: String },
    DeckShuffle,
}

impl EffectKind {
    pub fn build(&self) -> Box<dyn Effect> {
        match self {
            EffectKind::ParticleField => Box::new(ParticleField::new()),
            EffectKind::FloatingCards => Box::new(FloatingCards::new()),
            EffectKind::CardShowcase { image_url } => Box::new(CardShowcase::new(image_url.clone())),
            EffectKind::CardTransition { image_url } => Box::new(CardTransition::new(image_url.clone())),
            EffectKind::DeckShuffle => Box::new(DeckShuffle::new()),
        }
    }
}

pub struct EffectComposer;

impl EffectComposer {
    /// Effects for a page, back to front. Every page gets the particle
    /// field behind everything else.
    pub fn for_page(page: &Page) -> Vec<EffectKind> {
        let mut effects = vec![EffectKind::ParticleField];
        match page {
            Page::Home => effects.push(EffectKind::FloatingCards),
            Page::CardDetail { image_url } => effects.push(EffectKind::CardShowcase {
                image_url: image_url.clone(),
            }),
            Page::DailyCard {
                revealing: Some(image_url),
            } => effects.push(EffectKind::CardTransition {
                image_url: image_url.clone(),
            }),
            Page::SpreadDetail { shuffling: true } => effects.push(EffectKind::DeckShuffle),
            _ => {}
        }
        effects
    }
}

/// Every scene of one page, mounted and torn down together.
#[derive(Debug, Default)]
pub struct ComposedScenes {
    scenes: Vec<MountedScene>,
}

impl ComposedScenes {
    pub fn mount(
        host: &SceneHost,
        effects: &[EffectKind],
        events: EventSink,
        rng: &mut dyn RngCore,
    ) -> Self {
        let scenes = effects
            .iter()
            .map(|kind| MountedScene::mount(host, kind.build(), events.clone(), &mut *rng))
            .collect();
        Self { scenes }
    }

    pub fn scenes(&self) -> &[MountedScene] {
        &self.scenes
    }

    pub fn get(&self, name: &str) -> Option<&MountedScene> {
        self.scenes.iter().find(|s| s.name() == name)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Latest frame of every drawing scene, back to front.
    pub fn frames(&self) -> Vec<RenderedFrame> {
        self.scenes.iter().filter_map(MountedScene::frame).collect()
    }

    /// Tear down in reverse mount order.
    pub fn unmount(mut self) {
        while let Some(scene) = self.scenes.pop() {
            scene.unmount();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_page_has_a_background() {
        let pages = [
            Page::Home,
            Page::About,
            Page::CardLibrary,
            Page::Affirmations,
            Page::Spreads,
            Page::Profile,
            Page::ReadingDetail,
            Page::Login,
            Page::Register,
            Page::NotFound,
            Page::DailyCard { revealing: None },
            Page::SpreadDetail { shuffling: false },
        ];
        for page in &pages {
            assert_eq!(EffectComposer::for_page(page)[0], EffectKind::ParticleField);
        }
    }

    #[test]
    fn page_specific_effects() {
        assert_eq!(
            EffectComposer::for_page(&Page::Home),
            vec![EffectKind::ParticleField, EffectKind::FloatingCards]
        );
        assert_eq!(
            EffectComposer::for_page(&Page::SpreadDetail { shuffling: true }).last(),
            Some(&EffectKind::DeckShuffle)
        );
        assert_eq!(
            EffectComposer::for_page(&Page::DailyCard {
                revealing: Some("/images/cards/m19.jpg".into())
            })
            .last(),
            Some(&EffectKind::CardTransition {
                image_url: "/images/cards/m19.jpg".into()
            })
        );
    }

    #[test]
    fn composed_scenes_release_everything() {
        let host = SceneHost::default();
        let mut rng = StdRng::seed_from_u64(5);
        let effects = EffectComposer::for_page(&Page::CardDetail {
            image_url: "/images/cards/m01.jpg".into(),
        });
        let composed = ComposedScenes::mount(&host, &effects, EventSink::none(), &mut rng);
        assert_eq!(composed.len(), 2);
        assert!(composed.get("card-showcase").is_some());
        assert_eq!(host.stats().frame_callbacks, 2);

        host.tick(0.0);
        assert_eq!(composed.frames().len(), 2);

        composed.unmount();
        assert!(host.stats().is_idle());
    }
}
