// In-memory engine for exercising player backends without the native library

use crate::engine::{Engine, MediaPlayer};
use crate::event::{EventManager, MediaPlayerEvent};
use crate::media::{Media, MediaTrack, NavigateMode, TrackDescription, TrackType};
use hearth_core::{DisplayHandle, GlContextHandle, Result};
use parking_lot::Mutex;

/// Engine that hands out `FakePlayer`s
pub struct FakeEngine {
    args: Vec<String>,
}

impl FakeEngine {
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Engine for FakeEngine {
    type Player = FakePlayer;

    fn new(args: &[&str]) -> Result<Self> {
        Ok(Self {
            args: args.iter().map(|a| a.to_string()).collect(),
        })
    }

    fn create_player(&self) -> Result<FakePlayer> {
        Ok(FakePlayer::new())
    }
}

/// Everything a `FakePlayer` was told, and what it will answer
#[derive(Debug, Clone)]
pub struct FakeState {
    pub media: Option<Media>,
    pub tracks: Vec<MediaTrack>,
    pub play_succeeds: bool,
    pub play_count: usize,
    pub stop_count: usize,
    pub pause_count: usize,
    pub can_pause: bool,
    pub seekable: bool,
    pub time: i64,
    pub length: i64,
    pub position: f32,
    pub rate: f32,
    pub muted: bool,
    pub volume: i32,
    pub spu: i32,
    pub spu_descriptions: Vec<TrackDescription>,
    pub navigations: Vec<NavigateMode>,
    pub vout: bool,
    pub gl_texture: Option<u32>,
    pub gl_binding_succeeds: bool,
}

impl Default for FakeState {
    fn default() -> Self {
        Self {
            media: None,
            tracks: Vec::new(),
            play_succeeds: true,
            play_count: 0,
            stop_count: 0,
            pause_count: 0,
            can_pause: true,
            seekable: true,
            time: 0,
            length: -1,
            position: 0.0,
            rate: 1.0,
            muted: false,
            volume: 100,
            spu: -1,
            spu_descriptions: Vec::new(),
            navigations: Vec::new(),
            vout: false,
            gl_texture: None,
            gl_binding_succeeds: true,
        }
    }
}

/// Scriptable media player; events are raised with `emit`
pub struct FakePlayer {
    state: Mutex<FakeState>,
    events: EventManager,
}

impl FakePlayer {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeState::default()),
            events: EventManager::new(),
        }
    }

    /// Change what the player will report
    pub fn configure<F>(&self, f: F)
    where
        F: FnOnce(&mut FakeState),
    {
        f(&mut self.state.lock());
    }

    pub fn snapshot(&self) -> FakeState {
        self.state.lock().clone()
    }

    /// Raise an event as the engine's event thread would
    pub fn emit(&self, event: MediaPlayerEvent) {
        self.events.dispatch(&event);
    }

    /// Add a track and raise `EsAdded` for it
    pub fn add_track(&self, track: MediaTrack) {
        let (track_type, id) = (track.track_type, track.id);
        self.state.lock().tracks.push(track);
        self.emit(MediaPlayerEvent::EsAdded(track_type, id));
    }

    /// Remove a track and raise `EsDeleted` for it
    pub fn remove_track(&self, track_type: TrackType, id: i32) {
        self.state
            .lock()
            .tracks
            .retain(|t| !(t.track_type == track_type && t.id == id));
        self.emit(MediaPlayerEvent::EsDeleted(track_type, id));
    }

    fn count_tracks(&self, track_type: TrackType) -> i32 {
        self.state
            .lock()
            .tracks
            .iter()
            .filter(|t| t.track_type == track_type)
            .count() as i32
    }
}

impl Default for FakePlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaPlayer for FakePlayer {
    fn set_media(&self, media: &Media) {
        self.state.lock().media = Some(media.clone());
    }

    fn media(&self) -> Option<Media> {
        self.state.lock().media.clone()
    }

    fn tracks(&self) -> Vec<MediaTrack> {
        self.state.lock().tracks.clone()
    }

    fn play(&self) -> bool {
        let mut state = self.state.lock();
        state.play_count += 1;
        state.play_succeeds
    }

    // A stopped player has no active subtitle track and no video output
    fn stop(&self) {
        let mut state = self.state.lock();
        state.stop_count += 1;
        state.spu = -1;
        state.vout = false;
    }

    fn pause(&self) {
        self.state.lock().pause_count += 1;
    }

    fn can_pause(&self) -> bool {
        self.state.lock().can_pause
    }

    fn is_seekable(&self) -> bool {
        self.state.lock().seekable
    }

    fn video_track_count(&self) -> i32 {
        self.count_tracks(TrackType::Video)
    }

    fn audio_track_count(&self) -> i32 {
        self.count_tracks(TrackType::Audio)
    }

    fn time(&self) -> i64 {
        self.state.lock().time
    }

    fn set_time(&self, time_ms: i64) {
        self.state.lock().time = time_ms;
    }

    fn length(&self) -> i64 {
        self.state.lock().length
    }

    fn position(&self) -> f32 {
        self.state.lock().position
    }

    fn set_position(&self, position: f32) {
        self.state.lock().position = position;
    }

    fn rate(&self) -> f32 {
        self.state.lock().rate
    }

    fn set_rate(&self, rate: f32) {
        self.state.lock().rate = rate;
    }

    fn set_mute(&self, mute: bool) {
        self.state.lock().muted = mute;
    }

    fn set_volume(&self, volume: i32) {
        self.state.lock().volume = volume;
    }

    fn spu_count(&self) -> i32 {
        self.state.lock().spu_descriptions.len() as i32
    }

    fn spu(&self) -> i32 {
        self.state.lock().spu
    }

    fn set_spu(&self, id: i32) {
        self.state.lock().spu = id;
    }

    fn spu_description(&self) -> Vec<TrackDescription> {
        self.state.lock().spu_descriptions.clone()
    }

    fn navigate(&self, mode: NavigateMode) {
        self.state.lock().navigations.push(mode);
    }

    fn has_vout(&self) -> bool {
        self.state.lock().vout
    }

    fn set_gl_context(
        &self,
        _display: DisplayHandle,
        _context: GlContextHandle,
        texture: u32,
    ) -> bool {
        let mut state = self.state.lock();
        if state.gl_binding_succeeds {
            state.gl_texture = Some(texture);
        }
        state.gl_binding_succeeds
    }

    fn event_manager(&self) -> &EventManager {
        &self.events
    }
}
