// Media player event registration and dispatch
// Handlers run on the engine's event thread, in registration order

use crate::media::TrackType;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Events raised by a media player
#[derive(Debug, Clone, PartialEq)]
pub enum MediaPlayerEvent {
    /// Buffer fill, 0 to 100
    Buffering(f32),
    Playing,
    Paused,
    Stopped,
    EndReached,
    EncounteredError,
    /// Absolute playback time in milliseconds
    TimeChanged(i64),
    /// Normalized position, 0.0 to 1.0
    PositionChanged(f32),
    /// Number of video outputs
    Vout(i32),
    EsAdded(TrackType, i32),
    EsDeleted(TrackType, i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Buffering,
    Playing,
    Paused,
    Stopped,
    EndReached,
    EncounteredError,
    TimeChanged,
    PositionChanged,
    Vout,
    EsAdded,
    EsDeleted,
}

impl MediaPlayerEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Buffering(_) => EventKind::Buffering,
            Self::Playing => EventKind::Playing,
            Self::Paused => EventKind::Paused,
            Self::Stopped => EventKind::Stopped,
            Self::EndReached => EventKind::EndReached,
            Self::EncounteredError => EventKind::EncounteredError,
            Self::TimeChanged(_) => EventKind::TimeChanged,
            Self::PositionChanged(_) => EventKind::PositionChanged,
            Self::Vout(_) => EventKind::Vout,
            Self::EsAdded(..) => EventKind::EsAdded,
            Self::EsDeleted(..) => EventKind::EsDeleted,
        }
    }
}

/// Handle identifying one registered handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Handler = Arc<dyn Fn(&MediaPlayerEvent) + Send + Sync>;

struct Registration {
    subscription: Subscription,
    kind: EventKind,
    handler: Handler,
}

/// Per-player event manager
pub struct EventManager {
    next_id: AtomicU64,
    handlers: RwLock<Vec<Registration>>,
}

impl EventManager {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// Register `handler` for every event of `kind`
    pub fn subscribe<F>(&self, kind: EventKind, handler: F) -> Subscription
    where
        F: Fn(&MediaPlayerEvent) + Send + Sync + 'static,
    {
        let subscription = Subscription(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers.write().push(Registration {
            subscription,
            kind,
            handler: Arc::new(handler),
        });
        subscription
    }

    /// Returns false if the handler was already gone
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut handlers = self.handlers.write();
        let before = handlers.len();
        handlers.retain(|r| r.subscription != subscription);
        handlers.len() != before
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Invoke the handlers registered for this event's kind.
    /// Handlers are called outside the lock, so they may (un)subscribe.
    pub fn dispatch(&self, event: &MediaPlayerEvent) {
        let kind = event.kind();
        let matching: Vec<Handler> = self
            .handlers
            .read()
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.handler.clone())
            .collect();

        log::trace!("Dispatching {:?} to {} handler(s)", event, matching.len());
        for handler in matching {
            handler(event);
        }
    }

    pub fn on_buffering<F: Fn(f32) + Send + Sync + 'static>(&self, f: F) -> Subscription {
        self.subscribe(EventKind::Buffering, move |event| {
            if let MediaPlayerEvent::Buffering(percent) = event {
                f(*percent);
            }
        })
    }

    pub fn on_playing<F: Fn() + Send + Sync + 'static>(&self, f: F) -> Subscription {
        self.subscribe(EventKind::Playing, move |_| f())
    }

    pub fn on_paused<F: Fn() + Send + Sync + 'static>(&self, f: F) -> Subscription {
        self.subscribe(EventKind::Paused, move |_| f())
    }

    pub fn on_stopped<F: Fn() + Send + Sync + 'static>(&self, f: F) -> Subscription {
        self.subscribe(EventKind::Stopped, move |_| f())
    }

    pub fn on_end_reached<F: Fn() + Send + Sync + 'static>(&self, f: F) -> Subscription {
        self.subscribe(EventKind::EndReached, move |_| f())
    }

    pub fn on_encountered_error<F: Fn() + Send + Sync + 'static>(&self, f: F) -> Subscription {
        self.subscribe(EventKind::EncounteredError, move |_| f())
    }

    pub fn on_time_changed<F: Fn(i64) + Send + Sync + 'static>(&self, f: F) -> Subscription {
        self.subscribe(EventKind::TimeChanged, move |event| {
            if let MediaPlayerEvent::TimeChanged(time) = event {
                f(*time);
            }
        })
    }

    pub fn on_position_changed<F: Fn(f32) + Send + Sync + 'static>(&self, f: F) -> Subscription {
        self.subscribe(EventKind::PositionChanged, move |event| {
            if let MediaPlayerEvent::PositionChanged(position) = event {
                f(*position);
            }
        })
    }

    pub fn on_vout<F: Fn(i32) + Send + Sync + 'static>(&self, f: F) -> Subscription {
        self.subscribe(EventKind::Vout, move |event| {
            if let MediaPlayerEvent::Vout(count) = event {
                f(*count);
            }
        })
    }

    pub fn on_es_added<F: Fn(TrackType, i32) + Send + Sync + 'static>(&self, f: F) -> Subscription {
        self.subscribe(EventKind::EsAdded, move |event| {
            if let MediaPlayerEvent::EsAdded(track_type, id) = event {
                f(*track_type, *id);
            }
        })
    }

    pub fn on_es_deleted<F: Fn(TrackType, i32) + Send + Sync + 'static>(
        &self,
        f: F,
    ) -> Subscription {
        self.subscribe(EventKind::EsDeleted, move |event| {
            if let MediaPlayerEvent::EsDeleted(track_type, id) = event {
                f(*track_type, *id);
            }
        })
    }
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new()
    }
}
