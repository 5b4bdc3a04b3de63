//! Renderer-agnostic animated scenes.
//!
//! The app owns one [`SceneHost`] per window and ticks it once per frame.
//! Pages ask the [`EffectComposer`] which effects they carry and mount them
//! as [`ComposedScenes`]; each mounted effect updates from elapsed time and
//! publishes a [`RenderedFrame`] of projected primitives that the UI draws.
//!
//! ```ignore
//! let host = SceneHost::new(Viewport::new(1280, 720));
//! let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
//! let scenes = ComposedScenes::mount(
//!     &host,
//!     &EffectComposer::for_page(&Page::DailyCard { revealing: Some(url) }),
//!     EventSink::new(tx),
//!     &mut rand::rng(),
//! );
//! host.tick(elapsed);
//! if let Ok(SceneEvent::TransitionComplete) = rx.try_recv() {
//!     scenes.unmount();
//! }
//! ```

pub mod animator;
pub mod camera;
pub mod composer;
pub mod effects;
pub mod frame;
pub mod host;
pub mod lifecycle;
pub mod primitive;
pub mod spring;
pub mod texture;

pub use animator::{PhaseClock, PhaseStep, PhaseTimeline};
pub use camera::{PerspectiveCamera, ScreenPoint, Viewport};
pub use composer::{ComposedScenes, EffectComposer, EffectKind, Page};
pub use frame::{FrameHandle, FrameScheduler, FrameTime};
pub use host::{HostStats, ResizeHandle, SceneHost, SurfaceId};
pub use lifecycle::{
    Effect, EventSink, MountContext, MountedScene, ProjectedPrimitive, RenderedFrame, SceneEvent,
    Shape,
};
pub use primitive::{Color, Material, Primitive, PrimitiveId, PrimitiveKind, Scene, Transform};
pub use spring::{Spring, Spring3, SpringConfig};
pub use texture::{TextureHandle, TextureState};
