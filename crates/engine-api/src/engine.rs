// Playback engine and media player traits
// Implemented by bindings to the native playback library

use crate::event::EventManager;
use crate::media::{Media, MediaTrack, NavigateMode, TrackDescription};
use hearth_core::{DisplayHandle, GlContextHandle, Result};

/// One instance of the playback library
pub trait Engine: Send + Sync + Sized {
    type Player: MediaPlayer + 'static;

    /// Create an instance from command-line style arguments
    fn new(args: &[&str]) -> Result<Self>;

    /// Create a media player parented by this instance.
    /// The instance must outlive every player it creates.
    fn create_player(&self) -> Result<Self::Player>;
}

/// A playback session.
///
/// Methods are non-blocking setters and getters against the library's
/// internal state and may be called from any thread, including from inside
/// event handlers.
pub trait MediaPlayer: Send + Sync {
    fn set_media(&self, media: &Media);

    fn media(&self) -> Option<Media>;

    /// Elementary streams of the current media
    fn tracks(&self) -> Vec<MediaTrack>;

    /// Start playback; false if the media cannot be played
    fn play(&self) -> bool;

    fn stop(&self);

    /// Toggle pause
    fn pause(&self);

    fn can_pause(&self) -> bool;

    fn is_seekable(&self) -> bool;

    fn video_track_count(&self) -> i32;

    fn audio_track_count(&self) -> i32;

    /// Current time in milliseconds
    fn time(&self) -> i64;

    fn set_time(&self, time_ms: i64);

    /// Length in milliseconds, -1 when unknown (live streams)
    fn length(&self) -> i64;

    /// Normalized position, 0.0 to 1.0
    fn position(&self) -> f32;

    fn set_position(&self, position: f32);

    fn rate(&self) -> f32;

    fn set_rate(&self, rate: f32);

    fn set_mute(&self, mute: bool);

    /// Volume in percent, 0 to 100
    fn set_volume(&self, volume: i32);

    fn spu_count(&self) -> i32;

    /// Active subtitle track, -1 when disabled
    fn spu(&self) -> i32;

    fn set_spu(&self, id: i32);

    fn spu_description(&self) -> Vec<TrackDescription>;

    fn navigate(&self, mode: NavigateMode);

    /// True while a video output surface exists
    fn has_vout(&self) -> bool;

    /// Render video into `texture` of the host's GL context
    fn set_gl_context(&self, display: DisplayHandle, context: GlContextHandle, texture: u32)
        -> bool;

    fn event_manager(&self) -> &EventManager;
}
