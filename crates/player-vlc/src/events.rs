// Engine event handlers: update shared state and relay to the host

use crate::state::SharedState;
use hearth_core::{DataCache, PlayerCallback, WindowManager};
use hearth_engine_api::{MediaPlayer, MediaTrack, Subscription};
use std::sync::{Arc, Weak};

/// Any video track with a non-rectangular projection
pub(crate) fn has_spherical_video(tracks: &[MediaTrack]) -> bool {
    tracks.iter().any(MediaTrack::is_spherical_video)
}

/// What the handlers close over. The player is held weakly: it owns the
/// event manager that owns these handlers.
pub(crate) struct EventContext<P> {
    pub player: Weak<P>,
    pub state: Arc<SharedState>,
    pub callback: Arc<dyn PlayerCallback>,
    pub data_cache: Arc<DataCache>,
    pub window_manager: Arc<dyn WindowManager>,
}

/// Register every handler on `player`'s event manager
pub(crate) fn install<P: MediaPlayer + 'static>(
    player: &P,
    ctx: EventContext<P>,
) -> Vec<Subscription> {
    let em = player.event_manager();
    let mut subscriptions = Vec::with_capacity(11);

    let state = ctx.state.clone();
    subscriptions.push(em.on_buffering(move |percent| {
        state.set_cache_percentage(percent);
    }));

    let callback = ctx.callback.clone();
    subscriptions.push(em.on_playing(move || callback.on_playback_resumed()));

    let callback = ctx.callback.clone();
    subscriptions.push(em.on_paused(move || callback.on_playback_paused()));

    let (callback, state) = (ctx.callback.clone(), ctx.state.clone());
    subscriptions.push(em.on_stopped(move || {
        callback.on_playback_stopped();
        state.set_playing(false);
    }));

    let (callback, state) = (ctx.callback.clone(), ctx.state.clone());
    subscriptions.push(em.on_end_reached(move || {
        callback.on_playback_ended();
        state.set_playing(false);
    }));

    let (callback, state) = (ctx.callback.clone(), ctx.state.clone());
    subscriptions.push(em.on_encountered_error(move || {
        log::error!("Playback error reported by the engine");
        callback.on_playback_error();
        state.set_playing(false);
    }));

    let (weak, data_cache) = (ctx.player.clone(), ctx.data_cache.clone());
    subscriptions.push(em.on_time_changed(move |time| {
        if let Some(player) = weak.upgrade() {
            data_cache.set_play_times(0, time, 0, player.length());
        }
    }));

    // Only live streams, where the length is unknown, report progress by position
    let (weak, data_cache) = (ctx.player.clone(), ctx.data_cache.clone());
    subscriptions.push(em.on_position_changed(move |position| {
        if let Some(player) = weak.upgrade() {
            if player.length() == -1 {
                data_cache.set_play_times(0, (position * 100.0) as i64, 0, 100);
            }
        }
    }));

    let window_manager = ctx.window_manager.clone();
    subscriptions.push(em.on_vout(move |_count| {
        window_manager.close_dialogs(true);
    }));

    let (weak, state) = (ctx.player.clone(), ctx.state.clone());
    subscriptions.push(em.on_es_added(move |_track_type, _id| {
        if let Some(player) = weak.upgrade() {
            if has_spherical_video(&player.tracks()) {
                state.set_360(true);
            }
        }
    }));

    let (weak, state) = (ctx.player, ctx.state);
    subscriptions.push(em.on_es_deleted(move |_track_type, _id| {
        if !state.is_360() {
            return;
        }
        if let Some(player) = weak.upgrade() {
            state.set_360(has_spherical_video(&player.tracks()));
        }
    }));

    log::debug!("Registered {} engine event handlers", subscriptions.len());
    subscriptions
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_engine_api::{Projection, TrackType};

    #[test]
    fn test_has_spherical_video() {
        assert!(!has_spherical_video(&[]));
        assert!(!has_spherical_video(&[
            MediaTrack::video(0, Projection::Rectangular),
            MediaTrack::audio(1),
        ]));
        assert!(has_spherical_video(&[
            MediaTrack::audio(1),
            MediaTrack::video(2, Projection::Equirectangular),
        ]));
        assert!(!has_spherical_video(&[MediaTrack::new(3, TrackType::Subtitle)]));
    }
}
