//! Per-frame callback registry.
//!
//! Callbacks run in registration order. The host snapshots the list before
//! invoking anything so a callback may cancel itself (or another scene) while
//! a tick is in progress.

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct FrameHandle;
}

/// Clock values handed to every callback in one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the host started ticking
    pub elapsed: f32,
    /// Seconds since the previous tick, clamped to [`MAX_DELTA`]
    pub delta: f32,
    pub frame: u64,
}

impl FrameTime {
    pub fn at(elapsed: f32) -> Self {
        Self {
            elapsed,
            delta: 0.0,
            frame: 0,
        }
    }
}

/// Long stalls (window hidden, debugger) are not replayed as one huge step.
pub const MAX_DELTA: f32 = 0.1;

pub(crate) type FrameCallback = Arc<Mutex<Box<dyn FnMut(&FrameTime) + Send>>>;

#[derive(Default)]
pub struct FrameScheduler {
    callbacks: SlotMap<FrameHandle, FrameCallback>,
    order: Vec<FrameHandle>,
    last_elapsed: Option<f32>,
    frame: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, callback: F) -> FrameHandle
    where
        F: FnMut(&FrameTime) + Send + 'static,
    {
        let handle = self.callbacks.insert(Arc::new(Mutex::new(Box::new(callback))));
        self.order.push(handle);
        handle
    }

    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        if self.callbacks.remove(handle).is_some() {
            self.order.retain(|h| *h != handle);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, handle: FrameHandle) -> bool {
        self.callbacks.contains_key(handle)
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Advance the clock and snapshot the callbacks to run.
    pub(crate) fn begin_tick(&mut self, elapsed: f32) -> (FrameTime, Vec<(FrameHandle, FrameCallback)>) {
        let delta = match self.last_elapsed {
            Some(last) => (elapsed - last).clamp(0.0, MAX_DELTA),
            None => 0.0,
        };
        self.last_elapsed = Some(elapsed);
        self.frame += 1;

        let time = FrameTime {
            elapsed,
            delta,
            frame: self.frame,
        };
        let batch = self
            .order
            .iter()
            .filter_map(|h| self.callbacks.get(*h).map(|cb| (*h, Arc::clone(cb))))
            .collect();
        (time, batch)
    }
}

impl std::fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("callbacks", &self.callbacks.len())
            .field("frame", &self.frame)
            .finish()
    }
}
