// Fields shared between the host thread and the engine's event thread.
// Each field is atomic on its own; readers may observe combinations from
// different moments (not playing while the cache percentage is still set).

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

pub(crate) struct SharedState {
    /// Cache percentage, f32 bits
    cache: AtomicU32,
    playing: AtomicBool,
    is_360: AtomicBool,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            cache: AtomicU32::new(0.0f32.to_bits()),
            playing: AtomicBool::new(false),
            is_360: AtomicBool::new(false),
        }
    }

    pub fn cache_percentage(&self) -> f32 {
        f32::from_bits(self.cache.load(Ordering::SeqCst))
    }

    pub fn set_cache_percentage(&self, percent: f32) {
        self.cache.store(percent.to_bits(), Ordering::SeqCst);
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    pub fn set_playing(&self, playing: bool) {
        self.playing.store(playing, Ordering::SeqCst);
    }

    pub fn is_360(&self) -> bool {
        self.is_360.load(Ordering::SeqCst)
    }

    pub fn set_360(&self, is_360: bool) {
        self.is_360.store(is_360, Ordering::SeqCst);
    }
}
