//! Reference-counted texture registry.
//!
//! Scenes acquire textures by url at mount and release them at teardown.
//! Loading happens outside the core: the app drains [`TextureCache::take_requests`],
//! fetches the image and reports back with [`TextureCache::complete`]. A
//! completion for a url nobody holds any more is dropped.

use std::collections::HashMap;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// One acquisition of a texture. Released exactly once.
    pub struct TextureHandle;
}

#[derive(Debug, Clone, PartialEq)]
pub enum TextureState {
    Loading,
    Ready { width: u32, height: u32 },
    /// Primitives using a failed texture are not drawn
    Failed(String),
}

#[derive(Debug)]
struct Entry {
    state: TextureState,
    refs: usize,
}

#[derive(Debug, Default)]
pub struct TextureCache {
    entries: HashMap<String, Entry>,
    handles: SlotMap<TextureHandle, String>,
    requests: Vec<String>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&mut self, url: &str) -> TextureHandle {
        match self.entries.get_mut(url) {
            Some(entry) => entry.refs += 1,
            None => {
                self.entries.insert(
                    url.to_string(),
                    Entry {
                        state: TextureState::Loading,
                        refs: 1,
                    },
                );
                self.requests.push(url.to_string());
            }
        }
        self.handles.insert(url.to_string())
    }

    /// Returns false if the handle was already released.
    pub fn release(&mut self, handle: TextureHandle) -> bool {
        let Some(url) = self.handles.remove(handle) else {
            return false;
        };
        if let Some(entry) = self.entries.get_mut(&url) {
            entry.refs = entry.refs.saturating_sub(1);
            if entry.refs == 0 {
                self.entries.remove(&url);
                self.requests.retain(|r| r != &url);
            }
        }
        true
    }

    /// Record the outcome of a load. Returns false when no holder remains.
    pub fn complete(&mut self, url: &str, result: Result<(u32, u32), String>) -> bool {
        let Some(entry) = self.entries.get_mut(url) else {
            tracing::debug!(url, "Dropping texture result with no holder");
            return false;
        };
        entry.state = match result {
            Ok((width, height)) => TextureState::Ready { width, height },
            Err(reason) => {
                tracing::warn!(url, %reason, "Texture failed to load");
                TextureState::Failed(reason)
            }
        };
        true
    }

    pub fn url(&self, handle: TextureHandle) -> Option<&str> {
        self.handles.get(handle).map(String::as_str)
    }

    pub fn state(&self, handle: TextureHandle) -> Option<&TextureState> {
        let url = self.handles.get(handle)?;
        self.entries.get(url).map(|e| &e.state)
    }

    /// Urls acquired since the last call that still need loading.
    pub fn take_requests(&mut self) -> Vec<String> {
        std::mem::take(&mut self.requests)
    }

    /// Distinct urls currently held.
    pub fn live_textures(&self) -> usize {
        self.entries.len()
    }

    pub fn live_handles(&self) -> usize {
        self.handles.len()
    }
}
