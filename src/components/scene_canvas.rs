//! Scene Canvas
//!
//! Mounts the page's composed scenes on first render, draws their latest
//! frames as SVG every tick and unmounts them when the component goes away.
//! Card quads forward hover and click to the scene that owns them.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use arcana_core::scene::{MountedScene, ProjectedPrimitive, Shape};
use arcana_core::{ComposedScenes, EffectComposer, EventSink, Page, SceneEvent, SceneHost, TarotError};
use dioxus::prelude::*;
use glam::Vec2;
use tokio::sync::mpsc;

use crate::context::{use_frame_tick, use_pointer, use_scene_host};

type SharedScenes = Rc<RefCell<Option<ComposedScenes>>>;

#[derive(Clone, PartialEq, Props)]
pub struct SceneCanvasProps {
    pub page: Page,
    /// Inline, interactive stage instead of the full-window backdrop
    #[props(default = false)]
    pub stage: bool,
    #[props(default)]
    pub on_event: Option<EventHandler<SceneEvent>>,
}

/// Give the canvas a `key` derived from the page so a different page
/// state remounts its scenes.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SceneCanvas {
///         key: "{revealing:?}",
///         page: Page::DailyCard { revealing },
///         on_event: move |event| if event == SceneEvent::TransitionComplete { revealed.set(true) },
///     }
/// }
/// ```
#[component]
pub fn SceneCanvas(props: SceneCanvasProps) -> Element {
    let host = use_scene_host();
    let frame_tick = use_frame_tick();
    let pointer = use_pointer();

    let mount_host = host.clone();
    let page = props.page.clone();
    let (scenes, events) = use_hook(move || {
        let (tx, rx) = mpsc::unbounded_channel();
        let kinds = EffectComposer::for_page(&page);
        let composed = ComposedScenes::mount(&mount_host, &kinds, EventSink::new(tx), &mut rand::rng());
        tracing::debug!(?page, scenes = composed.len(), "Mounted page scenes");
        let scenes: SharedScenes = Rc::new(RefCell::new(Some(composed)));
        (scenes, Rc::new(RefCell::new(Some(rx))))
    });

    let drop_scenes = scenes.clone();
    use_drop(move || {
        if let Some(composed) = drop_scenes.borrow_mut().take() {
            composed.unmount();
        }
    });

    let on_event = props.on_event;
    use_future(move || {
        let rx = events.borrow_mut().take();
        async move {
            let Some(mut rx) = rx else {
                return;
            };
            while let Some(event) = rx.recv().await {
                tracing::debug!(?event, "Scene event");
                if let Some(handler) = on_event {
                    handler.call(event);
                }
            }
        }
    });

    // Subscribe to the frame loop
    let _ = frame_tick();
    let (px, py) = pointer();
    let frames = match scenes.borrow().as_ref() {
        Some(composed) => {
            for scene in composed.scenes() {
                scene.pointer_moved(Vec2::new(px, py));
            }
            composed.frames()
        }
        None => Vec::new(),
    };

    let viewport = host.viewport();
    let class = if props.stage {
        "scene-canvas scene-stage"
    } else {
        "scene-canvas scene-backdrop"
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 {viewport.width} {viewport.height}",
            preserve_aspect_ratio: "xMidYMid slice",
            "aria-hidden": "true",
            for (layer, frame) in frames.iter().enumerate() {
                g { key: "{layer}",
                    for item in frame.items.iter() {
                        {item_view(item, layer, &scenes)}
                    }
                }
            }
        }
    }
}

fn item_view(item: &ProjectedPrimitive, layer: usize, scenes: &SharedScenes) -> Element {
    match item.shape {
        Shape::Dot { radius } => rsx! {
            circle {
                cx: "{item.x:.1}",
                cy: "{item.y:.1}",
                r: "{radius:.2}",
                fill: "{item.color.to_css()}",
                opacity: "{item.opacity:.2}",
            }
        },
        Shape::Quad {
            width,
            height,
            rotation,
            facing_away,
        } => {
            let id = item.id;
            let left = item.x - width / 2.0;
            let corner = width * 0.06;
            let top = item.y - height / 2.0;
            let glow = if item.glow > 0.0 {
                format!(
                    "filter: drop-shadow(0 0 {:.1}px {})",
                    item.glow * 40.0,
                    item.emissive.to_css()
                )
            } else {
                String::new()
            };
            let (enter, leave, click) = (scenes.clone(), scenes.clone(), scenes.clone());

            rsx! {
                g {
                    key: "{layer}-{id.0}",
                    class: "scene-card",
                    transform: "rotate({rotation:.2} {item.x:.1} {item.y:.1})",
                    opacity: "{item.opacity:.2}",
                    style: "{glow}",
                    onmouseenter: move |_| with_scene(&enter, layer, |s| s.hover(Some(id))),
                    onmouseleave: move |_| with_scene(&leave, layer, |s| s.hover(None)),
                    onclick: move |_| {
                        with_scene(&click, layer, |s| {
                            s.activate(id);
                        })
                    },
                    if let (Some(url), false) = (&item.texture_url, facing_away) {
                        image {
                            href: "{url}",
                            x: "{left:.1}",
                            y: "{top:.1}",
                            width: "{width:.1}",
                            height: "{height:.1}",
                            preserve_aspect_ratio: "none",
                        }
                    } else {
                        rect {
                            x: "{left:.1}",
                            y: "{top:.1}",
                            width: "{width:.1}",
                            height: "{height:.1}",
                            rx: "{corner:.1}",
                            fill: "{item.color.to_css()}",
                        }
                    }
                }
            }
        }
    }
}

fn with_scene(scenes: &SharedScenes, layer: usize, f: impl FnOnce(&MountedScene)) {
    if let Some(composed) = scenes.borrow().as_ref() {
        if let Some(scene) = composed.scenes().get(layer) {
            f(scene);
        }
    }
}

/// Read an image from the assets directory and report its size to the
/// host. Results for textures nobody holds any more are dropped there.
pub async fn load_texture(host: SceneHost, assets_dir: PathBuf, url: String) {
    let path = assets_dir.join(url.trim_start_matches('/'));
    let result = match tokio::fs::read(&path).await {
        Ok(bytes) => image_dimensions(&bytes).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };
    if let Err(reason) = &result {
        let err = TarotError::TextureLoad {
            url: url.clone(),
            reason: reason.clone(),
        };
        tracing::warn!("{}", err);
    }
    if !host.complete_texture(&url, result) {
        tracing::debug!(%url, "Discarded texture with no holders");
    }
}

fn image_dimensions(bytes: &[u8]) -> image::ImageResult<(u32, u32)> {
    image::ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()
}
