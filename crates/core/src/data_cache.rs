// Process-wide playback data cache shared between the player backend and the GUI

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

static GLOBAL: Lazy<Arc<DataCache>> = Lazy::new(|| Arc::new(DataCache::new()));

/// Play times published by the active backend, in milliseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayTimes {
    pub start: i64,
    pub time: i64,
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Clone, Default)]
struct RenderInfo {
    video_render: bool,
    gui_render: bool,
    video_decoder_name: String,
    video_decoder_is_hw: bool,
}

/// Thread-safe cache of what the current player is doing.
/// Written by player backends (often from their event threads), read by the GUI.
pub struct DataCache {
    times: RwLock<PlayTimes>,
    render: RwLock<RenderInfo>,
}

impl DataCache {
    pub fn new() -> Self {
        Self {
            times: RwLock::new(PlayTimes::default()),
            render: RwLock::new(RenderInfo::default()),
        }
    }

    /// The process-wide instance
    pub fn global() -> Arc<DataCache> {
        GLOBAL.clone()
    }

    pub fn reset(&self) {
        *self.times.write() = PlayTimes::default();
        *self.render.write() = RenderInfo::default();
        log::debug!("Data cache reset");
    }

    pub fn set_play_times(&self, start: i64, time: i64, min: i64, max: i64) {
        *self.times.write() = PlayTimes {
            start,
            time,
            min,
            max,
        };
    }

    pub fn play_times(&self) -> PlayTimes {
        *self.times.read()
    }

    /// The backend renders through the native video renderer
    pub fn set_video_render(&self, video_render: bool) {
        self.render.write().video_render = video_render;
    }

    pub fn is_video_render(&self) -> bool {
        self.render.read().video_render
    }

    /// The backend presents frames through the GUI render pass
    pub fn set_gui_render(&self, gui_render: bool) {
        self.render.write().gui_render = gui_render;
    }

    pub fn is_gui_render(&self) -> bool {
        self.render.read().gui_render
    }

    pub fn set_video_decoder_name(&self, name: &str, is_hw: bool) {
        let mut render = self.render.write();
        render.video_decoder_name = name.to_string();
        render.video_decoder_is_hw = is_hw;
    }

    /// Decoder name and whether it is hardware accelerated
    pub fn video_decoder_name(&self) -> (String, bool) {
        let render = self.render.read();
        (render.video_decoder_name.clone(), render.video_decoder_is_hw)
    }
}

impl Default for DataCache {
    fn default() -> Self {
        Self::new()
    }
}
