//! The host environment scenes mount into.
//!
//! `SceneHost` owns every resource a scene can hold: drawing surfaces,
//! per-frame callbacks, resize listeners and textures. A host built with
//! [`SceneHost::disabled`] has no drawing capability; scenes still mount and
//! animate but never allocate a surface, so nothing is drawn and nothing is
//! reported as an error.

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};
use tracing::{debug, info};

use super::camera::Viewport;
use super::frame::{FrameHandle, FrameScheduler, FrameTime};
use super::texture::{TextureCache, TextureHandle, TextureState};

new_key_type! {
    pub struct ResizeHandle;
    pub struct SurfaceId;
}

type ResizeCallback = Arc<Mutex<Box<dyn FnMut(Viewport) + Send>>>;

/// Live resource counts, used to check that unmount released everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostStats {
    pub frame_callbacks: usize,
    pub resize_listeners: usize,
    pub surfaces: usize,
    pub textures: usize,
    pub texture_handles: usize,
}

impl HostStats {
    pub fn is_idle(&self) -> bool {
        *self == HostStats::default()
    }
}

struct HostInner {
    viewport: Viewport,
    capable: bool,
    frames: FrameScheduler,
    resize: SlotMap<ResizeHandle, ResizeCallback>,
    resize_order: Vec<ResizeHandle>,
    surfaces: SlotMap<SurfaceId, Viewport>,
    textures: TextureCache,
}

#[derive(Clone)]
pub struct SceneHost {
    inner: Arc<Mutex<HostInner>>,
}

impl SceneHost {
    pub fn new(viewport: Viewport) -> Self {
        Self::build(viewport, true)
    }

    /// A host without drawing capability.
    pub fn disabled(viewport: Viewport) -> Self {
        info!("Scene host has no drawing capability; effects will not render");
        Self::build(viewport, false)
    }

    fn build(viewport: Viewport, capable: bool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HostInner {
                viewport,
                capable,
                frames: FrameScheduler::new(),
                resize: SlotMap::with_key(),
                resize_order: Vec::new(),
                surfaces: SlotMap::with_key(),
                textures: TextureCache::new(),
            })),
        }
    }

    pub fn is_capable(&self) -> bool {
        self.inner.lock().capable
    }

    pub fn viewport(&self) -> Viewport {
        self.inner.lock().viewport
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Frames
    // ═══════════════════════════════════════════════════════════════════════

    pub fn request_frame<F>(&self, callback: F) -> FrameHandle
    where
        F: FnMut(&FrameTime) + Send + 'static,
    {
        self.inner.lock().frames.register(callback)
    }

    pub fn cancel_frame(&self, handle: FrameHandle) -> bool {
        self.inner.lock().frames.cancel(handle)
    }

    /// Run one frame at `elapsed` seconds.
    ///
    /// The host lock is not held while callbacks run. A callback cancelled
    /// by an earlier callback in the same tick is skipped.
    pub fn tick(&self, elapsed: f32) -> FrameTime {
        let (time, batch) = self.inner.lock().frames.begin_tick(elapsed);
        for (handle, callback) in batch {
            if !self.inner.lock().frames.contains(handle) {
                continue;
            }
            let mut callback = callback.lock();
            (*callback)(&time);
        }
        time
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Resize
    // ═══════════════════════════════════════════════════════════════════════

    pub fn on_resize<F>(&self, callback: F) -> ResizeHandle
    where
        F: FnMut(Viewport) + Send + 'static,
    {
        let mut inner = self.inner.lock();
        let handle = inner.resize.insert(Arc::new(Mutex::new(Box::new(callback))));
        inner.resize_order.push(handle);
        handle
    }

    pub fn remove_resize(&self, handle: ResizeHandle) -> bool {
        let mut inner = self.inner.lock();
        if inner.resize.remove(handle).is_some() {
            inner.resize_order.retain(|h| *h != handle);
            true
        } else {
            false
        }
    }

    /// Update the viewport and notify listeners synchronously, so every
    /// camera sees the new aspect before the next tick.
    pub fn resize(&self, viewport: Viewport) {
        let listeners: Vec<(ResizeHandle, ResizeCallback)> = {
            let mut inner = self.inner.lock();
            if inner.viewport == viewport {
                return;
            }
            inner.viewport = viewport;
            inner
                .resize_order
                .iter()
                .filter_map(|h| inner.resize.get(*h).map(|cb| (*h, Arc::clone(cb))))
                .collect()
        };
        debug!(width = viewport.width, height = viewport.height, "Viewport resized");
        for (handle, callback) in listeners {
            if !self.inner.lock().resize.contains_key(handle) {
                continue;
            }
            let mut callback = callback.lock();
            (*callback)(viewport);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Surfaces
    // ═══════════════════════════════════════════════════════════════════════

    /// Allocate a drawing surface; `None` when the host cannot draw.
    pub fn allocate_surface(&self) -> Option<SurfaceId> {
        let mut inner = self.inner.lock();
        if !inner.capable {
            return None;
        }
        let viewport = inner.viewport;
        Some(inner.surfaces.insert(viewport))
    }

    pub fn resize_surface(&self, surface: SurfaceId, viewport: Viewport) {
        if let Some(size) = self.inner.lock().surfaces.get_mut(surface) {
            *size = viewport;
        }
    }

    pub fn surface_size(&self, surface: SurfaceId) -> Option<Viewport> {
        self.inner.lock().surfaces.get(surface).copied()
    }

    pub fn release_surface(&self, surface: SurfaceId) -> bool {
        self.inner.lock().surfaces.remove(surface).is_some()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Textures
    // ═══════════════════════════════════════════════════════════════════════

    pub fn acquire_texture(&self, url: &str) -> TextureHandle {
        self.inner.lock().textures.acquire(url)
    }

    pub fn release_texture(&self, handle: TextureHandle) -> bool {
        self.inner.lock().textures.release(handle)
    }

    pub fn complete_texture(&self, url: &str, result: Result<(u32, u32), String>) -> bool {
        self.inner.lock().textures.complete(url, result)
    }

    pub fn texture(&self, handle: TextureHandle) -> Option<(String, TextureState)> {
        let inner = self.inner.lock();
        let url = inner.textures.url(handle)?.to_string();
        let state = inner.textures.state(handle)?.clone();
        Some((url, state))
    }

    /// Urls the app should start loading.
    pub fn take_texture_requests(&self) -> Vec<String> {
        self.inner.lock().textures.take_requests()
    }

    pub fn stats(&self) -> HostStats {
        let inner = self.inner.lock();
        HostStats {
            frame_callbacks: inner.frames.len(),
            resize_listeners: inner.resize.len(),
            surfaces: inner.surfaces.len(),
            textures: inner.textures.live_textures(),
            texture_handles: inner.textures.live_handles(),
        }
    }
}

impl std::fmt::Debug for SceneHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneHost").field("stats", &self.stats()).finish()
    }
}

impl Default for SceneHost {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn tick_runs_callbacks_in_order() {
        let host = SceneHost::default();
        let log = Arc::new(Mutex::new(Vec::new()));
        for i in 0..3 {
            let log = Arc::clone(&log);
            host.request_frame(move |_| log.lock().push(i));
        }
        host.tick(0.0);
        assert_eq!(*log.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn callback_can_cancel_a_later_one() {
        let host = SceneHost::default();
        let hits = Arc::new(AtomicUsize::new(0));
        let victim: Arc<Mutex<Option<FrameHandle>>> = Arc::new(Mutex::new(None));

        let killer_host = host.clone();
        let killer_victim = Arc::clone(&victim);
        host.request_frame(move |_| {
            if let Some(h) = killer_victim.lock().take() {
                killer_host.cancel_frame(h);
            }
        });
        let counter = Arc::clone(&hits);
        let h = host.request_frame(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        *victim.lock() = Some(h);

        host.tick(0.0);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert_eq!(host.stats().frame_callbacks, 1);
    }

    #[test]
    fn resize_notifies_listeners() {
        let host = SceneHost::new(Viewport::new(800, 600));
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        host.on_resize(move |vp| *sink.lock() = Some(vp));
        host.resize(Viewport::new(1024, 512));
        assert_eq!(*seen.lock(), Some(Viewport::new(1024, 512)));
        assert_eq!(host.viewport().aspect(), 2.0);
    }

    #[test]
    fn disabled_host_allocates_no_surface() {
        let host = SceneHost::disabled(Viewport::default());
        assert!(!host.is_capable());
        assert!(host.allocate_surface().is_none());
        assert!(host.stats().is_idle());
    }

    #[test]
    fn surface_release_is_tracked() {
        let host = SceneHost::default();
        let s = host.allocate_surface().unwrap();
        assert_eq!(host.stats().surfaces, 1);
        assert!(host.release_surface(s));
        assert!(!host.release_surface(s));
        assert!(host.stats().is_idle());
    }
}
