//! Shared application state provided through Dioxus context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let engine = use_engine();
//! let auth = use_auth();
//!
//! let readings = with_engine(engine, |eng| eng.readings()).await;
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use arcana_core::{AuthState, SceneHost, TarotEngine, UiState};
use dioxus::prelude::*;
use tokio::sync::RwLock;

/// Shared engine type for context.
///
/// `None` until the database has been opened.
pub type SharedEngine = Arc<RwLock<Option<TarotEngine>>>;

pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

pub fn get_assets_dir() -> PathBuf {
    crate::get_assets_dir()
}

pub fn use_engine() -> Signal<SharedEngine> {
    use_context::<Signal<SharedEngine>>()
}

/// Reactive flag set once the engine has opened its database.
pub fn use_engine_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Run `f` against the engine, or return `None` if it is not open yet.
pub async fn with_engine<R>(
    engine: Signal<SharedEngine>,
    f: impl FnOnce(&TarotEngine) -> R,
) -> Option<R> {
    let shared = engine.peek().clone();
    let guard = shared.read().await;
    guard.as_ref().map(f)
}

pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_ui_state() -> Signal<UiState> {
    use_context::<Signal<UiState>>()
}

/// Frame counter bumped after every scene tick.
///
/// Components that draw scenes read it to re-render once per frame.
#[derive(Clone, Copy)]
pub struct FrameTick(pub Signal<u64>);

pub fn use_frame_tick() -> Signal<u64> {
    use_context::<FrameTick>().0
}

/// The window's scene host; cheap to clone.
pub fn use_scene_host() -> SceneHost {
    use_context::<SceneHost>()
}

/// Last pointer position in normalized device coordinates
/// (x right, y up, both in -1..1).
#[derive(Clone, Copy)]
pub struct PointerNdc(pub Signal<(f32, f32)>);

pub fn use_pointer() -> Signal<(f32, f32)> {
    use_context::<PointerNdc>().0
}
