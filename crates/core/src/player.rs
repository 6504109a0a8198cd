// Core player trait implemented by every playback backend

use crate::action::Action;
use crate::config::PlayerCoreConfig;
use crate::item::FileItem;

/// Options the host passes along with an item to open
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerOptions {
    /// Start offset in milliseconds
    pub start_time_ms: i64,
    /// Start offset as a percentage of the item length
    pub start_percent: f64,
    /// Serialized state from a previous `player_state()`
    pub state: String,
    pub fullscreen: bool,
    pub video_only: bool,
}

/// Description of one subtitle stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtitleStreamInfo {
    pub name: String,
    pub language: String,
}

/// Description of one audio stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioStreamInfo {
    pub name: String,
    pub language: String,
    pub channels: u32,
}

/// Host-facing player interface
///
/// Calls arrive on the host thread. Backends report asynchronous state
/// changes through the `PlayerCallback` they were created with.
pub trait Player: Send {
    /// Prepare the backend for playback; must run on the UI thread
    fn initialize(&mut self, config: &PlayerCoreConfig) -> bool;

    fn open_file(&mut self, item: &FileItem, options: &PlayerOptions) -> bool;

    fn close_file(&mut self, reopen: bool) -> bool;

    fn is_playing(&self) -> bool;

    fn can_pause(&self) -> bool;

    fn pause(&mut self);

    fn has_video(&self) -> bool;

    fn has_audio(&self) -> bool;

    fn is_passthrough(&self) -> bool {
        false
    }

    fn can_seek(&self) -> bool;

    /// Step seek, forward or backward
    fn seek(&mut self, forward: bool, large_step: bool, chapter_override: bool);

    fn seek_percentage(&mut self, percent: f32);

    /// Absolute seek, in milliseconds
    fn seek_time(&mut self, time_ms: i64);

    /// Relative seek, in milliseconds
    fn seek_time_relative(&mut self, delta_ms: i64) -> bool;

    fn set_speed(&mut self, speed: f32);

    fn cache_percentage(&self) -> f32;

    fn is_caching(&self) -> bool;

    fn set_mute(&mut self, mute: bool);

    /// Volume from 0.0 to 1.0
    fn set_volume(&mut self, volume: f32);

    fn subtitle_count(&self) -> i32;

    /// Active subtitle stream, -1 when none
    fn subtitle(&self) -> i32;

    fn subtitle_stream_info(&self, index: i32, info: &mut SubtitleStreamInfo);

    fn set_subtitle(&mut self, stream: i32);

    fn subtitle_visible(&self) -> bool;

    fn set_subtitle_visible(&mut self, visible: bool);

    fn is_in_menu(&self) -> bool;

    fn has_menu(&self) -> bool;

    /// Returns true when the action was consumed
    fn on_action(&mut self, action: &Action) -> bool;

    fn player_state(&self) -> String;

    fn set_player_state(&mut self, state: &str) -> bool;

    fn frame_move(&mut self);

    /// Present the current video frame into the GUI render pass
    fn render(&mut self, clear: bool, alpha: u32, gui: bool);

    fn flush_renderer(&mut self);

    fn trigger_update_resolution(&mut self);

    fn is_rendering_video(&self) -> bool;

    // Optional capabilities

    fn queue_next_file(&mut self, _item: &FileItem) -> bool {
        false
    }

    fn audio_stream_count(&self) -> i32 {
        0
    }

    fn audio_stream(&self) -> i32 {
        -1
    }

    fn set_audio_stream(&mut self, _stream: i32) {}

    fn audio_stream_info(&self, _index: i32, _info: &mut AudioStreamInfo) {}

    fn chapter_count(&self) -> i32 {
        0
    }

    fn chapter(&self) -> i32 {
        -1
    }

    fn seek_chapter(&mut self, _chapter: i32) -> i32 {
        -1
    }

    fn set_av_delay(&mut self, _delay: f32) {}

    fn av_delay(&self) -> f32 {
        0.0
    }

    fn set_subtitle_delay(&mut self, _delay: f32) {}

    fn subtitle_delay(&self) -> f32 {
        0.0
    }

    fn can_record(&self) -> bool {
        false
    }

    /// Downcast to concrete type (for accessing backend-specific features)
    fn as_any(&self) -> &dyn std::any::Any;
}
