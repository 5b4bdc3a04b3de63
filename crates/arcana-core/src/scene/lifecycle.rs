//! Mount → per-frame update → unmount.
//!
//! [`MountedScene::mount`] builds an effect's primitives, allocates a surface,
//! registers a frame callback and a resize listener, and acquires textures.
//! Everything is released by [`MountedScene::unmount`] or on drop, exactly
//! once, and no update runs after teardown starts.

use std::sync::Arc;

use glam::{Vec2, Vec3};
use parking_lot::Mutex;
use rand::RngCore;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use super::camera::{PerspectiveCamera, Viewport};
use super::frame::{FrameHandle, FrameTime};
use super::host::{ResizeHandle, SceneHost, SurfaceId};
use super::primitive::{Color, PrimitiveId, PrimitiveKind, Scene};
use super::texture::{TextureHandle, TextureState};

/// Notifications a scene sends back to the page that mounted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneEvent {
    /// The card transition reached its end
    TransitionComplete,
    /// A deck card was activated; carries the card's own reference id
    CardSelected(u32),
}

/// Where a scene's events go. Sending never blocks and never fails loudly.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    tx: Option<UnboundedSender<SceneEvent>>,
}

impl EventSink {
    pub fn new(tx: UnboundedSender<SceneEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    /// A sink that drops everything.
    pub fn none() -> Self {
        Self { tx: None }
    }

    pub fn send(&self, event: SceneEvent) -> bool {
        match &self.tx {
            Some(tx) => match tx.send(event) {
                Ok(()) => true,
                Err(err) => {
                    debug!(event = ?err.0, "Scene event receiver is gone");
                    false
                }
            },
            None => false,
        }
    }
}

/// Handed to [`Effect::mount`] to acquire resources and randomness.
pub struct MountContext<'a> {
    host: &'a SceneHost,
    textures: Vec<TextureHandle>,
    pub rng: &'a mut dyn RngCore,
}

impl MountContext<'_> {
    pub fn texture(&mut self, url: &str) -> TextureHandle {
        let handle = self.host.acquire_texture(url);
        self.textures.push(handle);
        handle
    }

    pub fn viewport(&self) -> Viewport {
        self.host.viewport()
    }
}

/// A decorative animated scene.
///
/// `update` receives time relative to the scene's first frame and must be
/// a function of that time (plus any interaction state), not of how often
/// it is called.
pub trait Effect: Send {
    fn name(&self) -> &'static str;

    /// Camera with its aspect still to be set by the lifecycle.
    fn camera(&self) -> PerspectiveCamera;

    fn mount(&mut self, scene: &mut Scene, ctx: &mut MountContext<'_>);

    fn update(&mut self, scene: &mut Scene, time: &FrameTime, events: &EventSink);

    /// Pointer position in normalized device coordinates (-1..1, y up).
    fn pointer_moved(&mut self, _ndc: Vec2) {}

    fn hover(&mut self, _target: Option<PrimitiveId>) {}

    /// Returns true when the activation was accepted.
    fn activate(&mut self, _target: PrimitiveId, _events: &EventSink) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Dot { radius: f32 },
    Quad {
        width: f32,
        height: f32,
        /// In-plane rotation, degrees clockwise
        rotation: f32,
        facing_away: bool,
    },
}

/// One primitive as it appears on the surface this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedPrimitive {
    pub id: PrimitiveId,
    pub shape: Shape,
    pub x: f32,
    pub y: f32,
    pub depth: f32,
    pub color: Color,
    pub opacity: f32,
    pub emissive: Color,
    pub glow: f32,
    pub texture_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFrame {
    pub viewport: Viewport,
    pub time: FrameTime,
    /// Back to front
    pub items: Vec<ProjectedPrimitive>,
}

struct SceneState {
    effect: Box<dyn Effect>,
    scene: Scene,
    camera: PerspectiveCamera,
    viewport: Viewport,
    surface: Option<SurfaceId>,
    events: EventSink,
    started_at: Option<f32>,
    frame: Option<RenderedFrame>,
    alive: bool,
}

impl SceneState {
    fn step(&mut self, host: &SceneHost, time: &FrameTime) {
        let start = *self.started_at.get_or_insert(time.elapsed);
        let local = FrameTime {
            elapsed: (time.elapsed - start).max(0.0),
            delta: time.delta,
            frame: time.frame,
        };
        self.effect.update(&mut self.scene, &local, &self.events);
        if self.surface.is_some() {
            self.frame = Some(render(&self.scene, &self.camera, self.viewport, local, host));
        }
    }
}

pub struct MountedScene {
    name: &'static str,
    host: SceneHost,
    state: Arc<Mutex<SceneState>>,
    frame_handle: Option<FrameHandle>,
    resize_handle: Option<ResizeHandle>,
    surface: Option<SurfaceId>,
    textures: Vec<TextureHandle>,
}

impl MountedScene {
    pub fn mount(
        host: &SceneHost,
        mut effect: Box<dyn Effect>,
        events: EventSink,
        rng: &mut dyn RngCore,
    ) -> Self {
        let name = effect.name();
        let viewport = host.viewport();
        let surface = host.allocate_surface();

        let mut scene = Scene::new();
        let mut ctx = MountContext {
            host,
            textures: Vec::new(),
            rng,
        };
        effect.mount(&mut scene, &mut ctx);
        let textures = ctx.textures;

        let mut camera = effect.camera();
        camera.set_aspect(viewport.aspect());

        let state = Arc::new(Mutex::new(SceneState {
            effect,
            scene,
            camera,
            viewport,
            surface,
            events,
            started_at: None,
            frame: None,
            alive: true,
        }));

        let frame_state = Arc::clone(&state);
        let frame_host = host.clone();
        let frame_handle = host.request_frame(move |time| {
            let mut state = frame_state.lock();
            if state.alive {
                state.step(&frame_host, time);
            }
        });

        let resize_state = Arc::clone(&state);
        let resize_host = host.clone();
        let resize_handle = host.on_resize(move |viewport| {
            let mut state = resize_state.lock();
            if !state.alive {
                return;
            }
            state.viewport = viewport;
            state.camera.set_aspect(viewport.aspect());
            if let Some(surface) = state.surface {
                resize_host.resize_surface(surface, viewport);
            }
        });

        debug!(
            scene = name,
            drawing = surface.is_some(),
            textures = textures.len(),
            "Mounted scene"
        );

        Self {
            name,
            host: host.clone(),
            state,
            frame_handle: Some(frame_handle),
            resize_handle: Some(resize_handle),
            surface,
            textures,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether a surface was allocated.
    pub fn is_drawing(&self) -> bool {
        self.surface.is_some()
    }

    pub fn is_mounted(&self) -> bool {
        self.frame_handle.is_some()
    }

    /// The most recent rendered frame, if any.
    pub fn frame(&self) -> Option<RenderedFrame> {
        self.state.lock().frame.clone()
    }

    pub fn camera(&self) -> PerspectiveCamera {
        self.state.lock().camera
    }

    pub fn viewport(&self) -> Viewport {
        self.state.lock().viewport
    }

    /// Read the scene graph.
    pub fn with_scene<R>(&self, f: impl FnOnce(&Scene) -> R) -> R {
        f(&self.state.lock().scene)
    }

    pub fn with_scene_mut<R>(&self, f: impl FnOnce(&mut Scene) -> R) -> R {
        f(&mut self.state.lock().scene)
    }

    pub fn pointer_moved(&self, ndc: Vec2) {
        let mut state = self.state.lock();
        if state.alive {
            state.effect.pointer_moved(ndc);
        }
    }

    pub fn hover(&self, target: Option<PrimitiveId>) {
        let mut state = self.state.lock();
        if state.alive {
            state.effect.hover(target);
        }
    }

    pub fn activate(&self, target: PrimitiveId) -> bool {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        state.alive && state.effect.activate(target, &state.events)
    }

    /// Release every resource. Equivalent to dropping the handle.
    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        let Some(frame_handle) = self.frame_handle.take() else {
            return;
        };
        {
            let mut state = self.state.lock();
            state.alive = false;
            state.frame = None;
            state.surface = None;
        }
        self.host.cancel_frame(frame_handle);
        if let Some(handle) = self.resize_handle.take() {
            self.host.remove_resize(handle);
        }
        for handle in self.textures.drain(..) {
            self.host.release_texture(handle);
        }
        if let Some(surface) = self.surface.take() {
            self.host.release_surface(surface);
        }
        debug!(scene = self.name, "Unmounted scene");
    }
}

impl Drop for MountedScene {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for MountedScene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedScene")
            .field("name", &self.name)
            .field("mounted", &self.is_mounted())
            .field("drawing", &self.is_drawing())
            .finish()
    }
}

/// Project every drawable primitive onto the surface.
///
/// Lights are skipped. So is a decorative primitive whose texture failed
/// to load. Interactive primitives with a failed texture, and anything still
/// loading, draw untextured.
pub fn render(
    scene: &Scene,
    camera: &PerspectiveCamera,
    viewport: Viewport,
    time: FrameTime,
    host: &SceneHost,
) -> RenderedFrame {
    let group = scene.root.matrix();
    let mut items = Vec::new();

    for primitive in scene.primitives() {
        if !primitive.visible || primitive.material.opacity <= 0.0 {
            continue;
        }
        let texture_url = match primitive.material.texture {
            None => None,
            Some(handle) => match host.texture(handle) {
                Some((url, TextureState::Ready { .. })) => Some(url),
                Some((_, TextureState::Loading)) => None,
                Some((_, TextureState::Failed(_))) | None if primitive.interactive => None,
                Some((_, TextureState::Failed(_))) | None => continue,
            },
        };

        let world = group.transform_point3(primitive.transform.position);
        let Some(point) = camera.project(world, viewport) else {
            continue;
        };

        let scale = scene.root.scale * primitive.transform.scale;
        let rotation: Vec3 = scene.root.rotation + primitive.transform.rotation;
        let shape = match primitive.kind {
            PrimitiveKind::Light { .. } => continue,
            PrimitiveKind::Particle => Shape::Dot {
                radius: (primitive.material.size * scale.x * point.pixels_per_unit * 0.5).max(0.5),
            },
            PrimitiveKind::Card { width, height } => {
                let (cos_y, cos_x) = (rotation.y.cos(), rotation.x.cos());
                Shape::Quad {
                    width: width * scale.x * point.pixels_per_unit * cos_y.abs(),
                    height: height * scale.y * point.pixels_per_unit * cos_x.abs(),
                    rotation: -rotation.z.to_degrees(),
                    facing_away: cos_y < 0.0,
                }
            }
        };

        items.push(ProjectedPrimitive {
            id: primitive.id,
            shape,
            x: point.x,
            y: point.y,
            depth: point.depth,
            color: primitive.material.color,
            opacity: primitive.material.opacity.clamp(0.0, 1.0),
            emissive: primitive.material.emissive,
            glow: primitive.material.emissive_intensity,
            texture_url,
        });
    }

    items.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    RenderedFrame {
        viewport,
        time,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::primitive::{Material, Transform};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Recorder {
        updates: Arc<AtomicUsize>,
        texture: Option<&'static str>,
    }

    impl Effect for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        fn camera(&self) -> PerspectiveCamera {
            PerspectiveCamera::default()
        }

        fn mount(&mut self, scene: &mut Scene, ctx: &mut MountContext<'_>) {
            let mut material = Material::default();
            if let Some(url) = self.texture {
                material = material.with_texture(ctx.texture(url));
            }
            scene.add(
                PrimitiveKind::Card {
                    width: 1.0,
                    height: 1.5,
                },
                Transform::default(),
                material,
            );
            scene.add_light(Vec3::ONE, 1.0, Color::WHITE);
        }

        fn update(&mut self, _scene: &mut Scene, _time: &FrameTime, _events: &EventSink) {
            self.updates.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn recorder(texture: Option<&'static str>) -> (Box<dyn Effect>, Arc<AtomicUsize>) {
        let updates = Arc::new(AtomicUsize::new(0));
        (
            Box::new(Recorder {
                updates: Arc::clone(&updates),
                texture,
            }),
            updates,
        )
    }

    #[test]
    fn mount_tick_unmount() {
        let host = SceneHost::default();
        let mut rng = StdRng::seed_from_u64(1);
        let (effect, updates) = recorder(Some("/images/cards/back.jpg"));
        let scene = MountedScene::mount(&host, effect, EventSink::none(), &mut rng);
        assert!(scene.is_drawing());
        assert_eq!(host.stats().frame_callbacks, 1);

        host.tick(0.0);
        host.tick(0.016);
        assert_eq!(updates.load(Ordering::SeqCst), 2);
        // Card drawn untextured while loading, light never drawn
        let frame = scene.frame().unwrap();
        assert_eq!(frame.items.len(), 1);
        assert!(frame.items[0].texture_url.is_none());

        scene.unmount();
        host.tick(0.032);
        assert_eq!(updates.load(Ordering::SeqCst), 2);
        assert!(host.stats().is_idle());
    }

    #[test]
    fn failed_texture_hides_primitive() {
        let host = SceneHost::default();
        let mut rng = StdRng::seed_from_u64(1);
        let (effect, _) = recorder(Some("/missing.jpg"));
        let scene = MountedScene::mount(&host, effect, EventSink::none(), &mut rng);
        host.complete_texture("/missing.jpg", Err("404".into()));
        host.tick(0.0);
        assert!(scene.frame().unwrap().items.is_empty());
    }

    #[test]
    fn failed_texture_keeps_interactive_primitive() {
        let host = SceneHost::default();
        let mut rng = StdRng::seed_from_u64(1);
        let (effect, _) = recorder(Some("/missing.jpg"));
        let scene = MountedScene::mount(&host, effect, EventSink::none(), &mut rng);
        let card = scene.with_scene(|s| s.primitives()[0].id);
        scene.with_scene_mut(|s| s.set_interactive(card));
        host.complete_texture("/missing.jpg", Err("404".into()));
        host.tick(0.0);
        let frame = scene.frame().unwrap();
        assert_eq!(frame.items.len(), 1);
        assert_eq!(frame.items[0].id, card);
        assert!(frame.items[0].texture_url.is_none());
    }

    #[test]
    fn ready_texture_is_attached() {
        let host = SceneHost::default();
        let mut rng = StdRng::seed_from_u64(1);
        let (effect, _) = recorder(Some("/m00.jpg"));
        let scene = MountedScene::mount(&host, effect, EventSink::none(), &mut rng);
        assert_eq!(host.take_texture_requests(), vec!["/m00.jpg".to_string()]);
        host.complete_texture("/m00.jpg", Ok((300, 500)));
        host.tick(0.0);
        let frame = scene.frame().unwrap();
        assert_eq!(frame.items[0].texture_url.as_deref(), Some("/m00.jpg"));
    }

    #[test]
    fn disabled_host_animates_without_drawing() {
        let host = SceneHost::disabled(Viewport::default());
        let mut rng = StdRng::seed_from_u64(1);
        let (effect, updates) = recorder(None);
        let scene = MountedScene::mount(&host, effect, EventSink::none(), &mut rng);
        host.tick(0.0);
        assert!(!scene.is_drawing());
        assert!(scene.frame().is_none());
        assert_eq!(updates.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_tears_down() {
        let host = SceneHost::default();
        let mut rng = StdRng::seed_from_u64(1);
        {
            let (effect, _) = recorder(Some("/a.jpg"));
            let _scene = MountedScene::mount(&host, effect, EventSink::none(), &mut rng);
            assert!(!host.stats().is_idle());
        }
        assert!(host.stats().is_idle());
    }

    #[test]
    fn time_is_relative_to_first_frame() {
        struct Clock(Arc<Mutex<Vec<f32>>>);
        impl Effect for Clock {
            fn name(&self) -> &'static str {
                "clock"
            }
            fn camera(&self) -> PerspectiveCamera {
                PerspectiveCamera::default()
            }
            fn mount(&mut self, _scene: &mut Scene, _ctx: &mut MountContext<'_>) {}
            fn update(&mut self, _scene: &mut Scene, time: &FrameTime, _events: &EventSink) {
                self.0.lock().push(time.elapsed);
            }
        }

        let host = SceneHost::default();
        host.tick(10.0);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut rng = StdRng::seed_from_u64(1);
        let _scene = MountedScene::mount(
            &host,
            Box::new(Clock(Arc::clone(&seen))),
            EventSink::none(),
            &mut rng,
        );
        host.tick(12.0);
        host.tick(12.05);
        let seen = seen.lock();
        assert_eq!(seen[0], 0.0);
        assert!((seen[1] - 0.05).abs() < 1e-4);
    }
}
