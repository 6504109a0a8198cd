// Contract of the wrapped media playback library (instance, media player, events)

pub mod engine;
pub mod event;
pub mod media;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use engine::{Engine, MediaPlayer};
pub use event::{EventKind, EventManager, MediaPlayerEvent, Subscription};
pub use media::{
    Media, MediaSource, MediaTrack, NavigateMode, Projection, TrackDescription, TrackType,
};
