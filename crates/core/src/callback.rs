// Host notification interface for player backends
// Backends call these from the host thread and from their own event threads

use crate::item::FileItem;

/// Playback notifications, as a value
#[derive(Debug, Clone, PartialEq)]
pub enum CallbackEvent {
    /// A new item started playing
    Started { path: String },

    /// Playback resumed after a pause or buffering
    Resumed,

    /// Playback paused
    Paused,

    /// Playback stopped by the backend
    Stopped,

    /// Playback ended (end of item, or the item was closed)
    Ended,

    /// Playback failed
    Error,

    /// A seek was issued
    Seek { time_ms: i64, offset_ms: i64 },

    /// A chapter seek was issued
    SeekChapter { chapter: i32 },

    /// Playback speed changed
    SpeedChanged { speed: f32 },

    /// The backend wants the next queued item
    QueueNextItem,
}

/// Host callback trait
/// Implementations should be lightweight and non-blocking: most of these
/// are invoked on the playback engine's event thread.
pub trait PlayerCallback: Send + Sync {
    fn on_playback_started(&self, item: &FileItem);
    fn on_playback_resumed(&self);
    fn on_playback_paused(&self);
    fn on_playback_stopped(&self);
    fn on_playback_ended(&self);
    fn on_playback_error(&self);
    fn on_playback_seek(&self, time_ms: i64, offset_ms: i64);
    fn on_playback_speed_changed(&self, speed: f32);

    fn on_queue_next_item(&self) {}

    fn on_playback_seek_chapter(&self, _chapter: i32) {}
}

/// Callback that does nothing, for hosts that only poll
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCallback;

impl PlayerCallback for NullCallback {
    fn on_playback_started(&self, _item: &FileItem) {}
    fn on_playback_resumed(&self) {}
    fn on_playback_paused(&self) {}
    fn on_playback_stopped(&self) {}
    fn on_playback_ended(&self) {}
    fn on_playback_error(&self) {}
    fn on_playback_seek(&self, _time_ms: i64, _offset_ms: i64) {}
    fn on_playback_speed_changed(&self, _speed: f32) {}
}

/// Callback that records every notification, for tests
#[cfg(any(test, feature = "test-util"))]
#[derive(Default)]
pub struct RecordingCallback {
    events: parking_lot::Mutex<Vec<CallbackEvent>>,
}

#[cfg(any(test, feature = "test-util"))]
impl RecordingCallback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_events(&self) -> Vec<CallbackEvent> {
        self.events.lock().clone()
    }

    pub fn last_event(&self) -> Option<CallbackEvent> {
        self.events.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    fn push(&self, event: CallbackEvent) {
        self.events.lock().push(event);
    }
}

#[cfg(any(test, feature = "test-util"))]
impl PlayerCallback for RecordingCallback {
    fn on_playback_started(&self, item: &FileItem) {
        self.push(CallbackEvent::Started {
            path: item.path().to_string(),
        });
    }

    fn on_playback_resumed(&self) {
        self.push(CallbackEvent::Resumed);
    }

    fn on_playback_paused(&self) {
        self.push(CallbackEvent::Paused);
    }

    fn on_playback_stopped(&self) {
        self.push(CallbackEvent::Stopped);
    }

    fn on_playback_ended(&self) {
        self.push(CallbackEvent::Ended);
    }

    fn on_playback_error(&self) {
        self.push(CallbackEvent::Error);
    }

    fn on_playback_seek(&self, time_ms: i64, offset_ms: i64) {
        self.push(CallbackEvent::Seek { time_ms, offset_ms });
    }

    fn on_playback_speed_changed(&self, speed: f32) {
        self.push(CallbackEvent::SpeedChanged { speed });
    }

    fn on_queue_next_item(&self) {
        self.push(CallbackEvent::QueueNextItem);
    }

    fn on_playback_seek_chapter(&self, chapter: i32) {
        self.push(CallbackEvent::SeekChapter { chapter });
    }
}
