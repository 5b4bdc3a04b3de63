use std::sync::Arc;
use std::time::{Duration, Instant};

use arcana_core::{AuthState, SceneHost, TarotEngine, UiState, Viewport};
use dioxus::prelude::*;
use tokio::sync::RwLock;

use crate::components::{load_texture, MainLayout};
use crate::context::{get_assets_dir, get_data_dir, FrameTick, PointerNdc, SharedEngine};
use crate::pages::{
    About, Affirmations, CardDetail, CardLibrary, DailyCard, Home, Login, NotFound, Profile,
    ReadingDetail, Register, SpreadDetail, Spreads,
};
use crate::theme::GLOBAL_STYLES;

/// Interval between scene ticks (~60 fps)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Application routes.
///
/// Only `/profile` requires a signed-in user.
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/cards")]
        CardLibrary {},
        #[route("/cards/:id")]
        CardDetail { id: u8 },
        #[route("/daily-card")]
        DailyCard {},
        #[route("/affirmations")]
        Affirmations {},
        #[route("/spreads")]
        Spreads {},
        #[route("/spreads/:id")]
        SpreadDetail { id: u32 },
        #[route("/profile")]
        Profile {},
        #[route("/readings/:id")]
        ReadingDetail { id: String },
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, engine and session context, the scene host and
/// its frame loop, and routing.
#[component]
pub fn App() -> Element {
    let engine: Signal<SharedEngine> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut engine_ready: Signal<bool> = use_signal(|| false);
    let mut auth: Signal<AuthState> = use_signal(|| {
        let mut state = AuthState::default();
        state.set_loading();
        state
    });
    let ui: Signal<UiState> = use_signal(UiState::default);
    let mut frame_tick = use_signal(|| 0u64);
    let pointer = use_signal(|| (0.0f32, 0.0f32));
    let host = use_hook(|| SceneHost::new(window_viewport()));

    use_context_provider(|| engine);
    use_context_provider(|| engine_ready);
    use_context_provider(|| auth);
    use_context_provider(|| ui);
    use_context_provider(|| FrameTick(frame_tick));
    use_context_provider(|| PointerNdc(pointer));
    use_context_provider(|| host.clone());

    // Open the database and restore the previous session
    use_effect(move || {
        spawn(async move {
            let data_dir = get_data_dir();
            let opened = tokio::task::spawn_blocking(move || TarotEngine::new(&data_dir)).await;
            match opened {
                Ok(Ok(eng)) => {
                    let restored = eng.restore_session();
                    let shared = engine.peek().clone();
                    *shared.write().await = Some(eng);
                    engine_ready.set(true);
                    match restored {
                        Ok(Some(user)) => {
                            tracing::info!(email = %user.email, "Restored session");
                            auth.write().login(user);
                        }
                        Ok(None) => auth.write().logout(),
                        Err(e) => {
                            tracing::warn!("Failed to restore session: {}", e);
                            auth.write().logout();
                        }
                    }
                }
                Ok(Err(e)) => {
                    tracing::error!("Failed to open tarot engine: {}", e);
                    auth.write().set_error(e.to_string());
                }
                Err(e) => {
                    tracing::error!("Engine task failed: {}", e);
                    auth.write().set_error(e.to_string());
                }
            }
        });
    });

    // Frame loop: tick the host, then load any textures scenes asked for
    let loop_host = host.clone();
    use_future(move || {
        let host = loop_host.clone();
        async move {
            let started = Instant::now();
            let mut interval = tokio::time::interval(FRAME_INTERVAL);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                host.tick(started.elapsed().as_secs_f32());
                for url in host.take_texture_requests() {
                    spawn(load_texture(host.clone(), get_assets_dir(), url));
                }
                *frame_tick.write() += 1;
            }
        }
    });

    // Window resizes reach every mounted scene before the next tick
    let resize_host = host.clone();
    dioxus::desktop::use_wry_event_handler(move |event, _| {
        use dioxus::desktop::tao::event::{Event, WindowEvent};
        if let Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } = event
        {
            let scale = dioxus::desktop::window().scale_factor();
            let logical = size.to_logical::<u32>(scale);
            resize_host.resize(Viewport::new(logical.width, logical.height).with_pixel_ratio(scale as f32));
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-root {ui.read().theme.class()}",
            Router::<Route> {}
        }
    }
}

/// Current inner size of the desktop window, in logical pixels.
fn window_viewport() -> Viewport {
    let window = dioxus::desktop::window();
    let scale = window.scale_factor();
    let size = window.inner_size().to_logical::<u32>(scale);
    Viewport::new(size.width, size.height).with_pixel_ratio(scale as f32)
}
