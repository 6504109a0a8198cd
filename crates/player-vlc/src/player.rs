// Player backend driving a libVLC-style engine, rendering into a host GL texture

use crate::events::{self, EventContext};
use crate::state::SharedState;
use hearth_core::{
    Action, ActionId, DisplayHandle, FileItem, GlContextHandle, Host, Player, PlayerCallback,
    PlayerCoreConfig, PlayerError, PlayerOptions, Result, SubtitleStreamInfo,
};
use hearth_engine_api::{Engine, Media, MediaPlayer, NavigateMode, Subscription};
use hearth_renderer_api::{QuadParams, TextureId, TextureParams, VideoRenderer};
use log::{debug, error, info, warn};
use std::any::Any;
use std::sync::Arc;

/// Arguments the engine instance is created with
pub const ENGINE_ARGS: &[&str] = &["--verbose", "1"];

/// Decoder name published to the data cache
pub const DECODER_NAME: &str = "vlc";

/// libVLC player backend
///
/// Host calls arrive on the host thread; engine events arrive on the
/// engine's event thread and only touch `SharedState`, the callback, the
/// data cache and the window manager.
pub struct LibVlcPlayer<E: Engine> {
    callback: Arc<dyn PlayerCallback>,
    host: Host,
    state: Arc<SharedState>,
    playing_file: Option<FileItem>,
    /// Subtitle track to restore when subtitles are shown again
    subtitle_invisible: i32,
    texture: Option<TextureId>,
    subscriptions: Vec<Subscription>,
    // Drop order: the media player goes before the engine that parented it,
    // the renderer after both so the texture outlives the video output.
    player: Arc<E::Player>,
    engine: E,
    renderer: Box<dyn VideoRenderer>,
}

impl<E: Engine> LibVlcPlayer<E> {
    /// Create the engine instance and its media player.
    /// Nothing is wired to the host until `initialize`.
    pub fn new(
        callback: Arc<dyn PlayerCallback>,
        host: Host,
        renderer: Box<dyn VideoRenderer>,
    ) -> Result<Self> {
        let engine = E::new(ENGINE_ARGS).map_err(|e| {
            PlayerError::Initialization(format!("failed to create engine instance: {}", e))
        })?;
        let player = Arc::new(engine.create_player().map_err(|e| {
            PlayerError::Initialization(format!("failed to create media player: {}", e))
        })?);
        debug!("Created engine instance with {:?}", ENGINE_ARGS);

        Ok(Self {
            callback,
            host,
            state: Arc::new(SharedState::new()),
            playing_file: None,
            subtitle_invisible: -1,
            texture: None,
            subscriptions: Vec::new(),
            player,
            engine,
            renderer,
        })
    }

    pub fn media_player(&self) -> &Arc<E::Player> {
        &self.player
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Texture the engine renders into, once initialized
    pub fn render_texture(&self) -> Option<TextureId> {
        self.texture
    }

    pub fn playing_file(&self) -> Option<&FileItem> {
        self.playing_file.as_ref()
    }

    fn try_initialize(&mut self) -> Result<()> {
        if self.texture.is_some() {
            return Err(PlayerError::Initialization(
                "player is already initialized".to_string(),
            ));
        }
        if !self.host.application.is_current_thread() {
            return Err(PlayerError::WrongThread("initialize"));
        }

        let (display, context) = match (
            self.host.windowing.display(),
            self.host.windowing.gl_context(),
        ) {
            (Some(display), Some(context)) => (display, context),
            _ => {
                return Err(PlayerError::DisplayUnavailable(
                    "invalid display or GL context".to_string(),
                ))
            }
        };

        self.subscriptions = events::install(
            &*self.player,
            EventContext {
                player: Arc::downgrade(&self.player),
                state: self.state.clone(),
                callback: self.callback.clone(),
                data_cache: self.host.data_cache.clone(),
                window_manager: self.host.window_manager.clone(),
            },
        );

        match self.bind_render_target(display, context) {
            Ok(texture) => {
                self.texture = Some(texture);
                Ok(())
            }
            Err(e) => {
                self.remove_event_handlers();
                Err(e)
            }
        }
    }

    fn bind_render_target(
        &mut self,
        display: DisplayHandle,
        context: GlContextHandle,
    ) -> Result<TextureId> {
        let texture = self.renderer.create_texture(&TextureParams::video())?;
        if !self.player.set_gl_context(display, context, texture.get()) {
            self.renderer.release_texture(texture);
            return Err(PlayerError::Render(format!(
                "engine refused render texture {}",
                texture.get()
            )));
        }
        Ok(texture)
    }

    fn close(&mut self) {
        self.player.stop();
        self.state.set_cache_percentage(0.0);
        self.callback.on_playback_ended();
        self.playing_file = None;
        self.state.set_playing(false);
        self.state.set_360(false);
        self.subtitle_invisible = -1;
    }

    fn remove_event_handlers(&mut self) {
        let events = self.player.event_manager();
        for subscription in self.subscriptions.drain(..) {
            events.unsubscribe(subscription);
        }
    }
}

impl<E: Engine + 'static> Player for LibVlcPlayer<E> {
    fn initialize(&mut self, config: &PlayerCoreConfig) -> bool {
        match self.try_initialize() {
            Ok(()) => {
                info!("Using LibVLC as Player ({})", config.name);
                true
            }
            Err(e) => {
                error!("Failed to initialize player {}: {}", config.name, e);
                false
            }
        }
    }

    fn open_file(&mut self, item: &FileItem, options: &PlayerOptions) -> bool {
        let cache = &self.host.data_cache;
        cache.reset();
        cache.set_video_render(false);
        cache.set_gui_render(true);
        cache.set_video_decoder_name(DECODER_NAME, true);

        let url = item.url();
        debug!("Opening {} ({:?})", url, options);
        let media = if url.is_local_path() {
            Media::from_path(url.as_str())
        } else {
            Media::from_location(url.as_str())
        };

        self.player.set_media(&media);
        if !self.player.play() {
            error!("Failed to start playback of {}", url);
            self.playing_file = None;
            self.callback.on_playback_error();
            return false;
        }

        self.playing_file = Some(item.clone());
        self.callback.on_playback_started(item);
        self.state.set_playing(true);
        true
    }

    fn close_file(&mut self, _reopen: bool) -> bool {
        self.close();
        true
    }

    fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    fn can_pause(&self) -> bool {
        self.player.can_pause()
    }

    fn pause(&mut self) {
        self.player.pause();
    }

    fn has_video(&self) -> bool {
        self.player.video_track_count() > 0
    }

    fn has_audio(&self) -> bool {
        self.player.audio_track_count() > 0
    }

    // Audio always goes through the engine's own output
    fn is_passthrough(&self) -> bool {
        true
    }

    fn can_seek(&self) -> bool {
        self.player.is_seekable()
    }

    fn seek(&mut self, forward: bool, large_step: bool, _chapter_override: bool) {
        debug!(
            "Step seek ignored (forward: {}, large: {})",
            forward, large_step
        );
    }

    fn seek_percentage(&mut self, percent: f32) {
        self.player.set_position(percent / 100.0);
    }

    fn seek_time(&mut self, time_ms: i64) {
        let offset = time_ms.saturating_sub(self.player.time());
        self.player.set_time(time_ms);
        self.callback.on_playback_seek(time_ms, offset);
    }

    fn seek_time_relative(&mut self, delta_ms: i64) -> bool {
        let target = self.player.time().saturating_add(delta_ms);
        self.seek_time(target);
        true
    }

    fn set_speed(&mut self, speed: f32) {
        self.player.set_rate(speed);
        self.callback.on_playback_speed_changed(speed);
    }

    fn cache_percentage(&self) -> f32 {
        self.state.cache_percentage()
    }

    fn is_caching(&self) -> bool {
        self.state.cache_percentage() < 100.0
    }

    fn set_mute(&mut self, mute: bool) {
        self.player.set_mute(mute);
    }

    fn set_volume(&mut self, volume: f32) {
        self.player.set_volume((volume * 100.0) as i32);
    }

    fn subtitle_count(&self) -> i32 {
        self.player.spu_count()
    }

    fn subtitle(&self) -> i32 {
        self.player.spu()
    }

    fn subtitle_stream_info(&self, index: i32, info: &mut SubtitleStreamInfo) {
        if let Some(track) = self
            .player
            .spu_description()
            .into_iter()
            .find(|track| track.id == index)
        {
            info.name = track.name;
        }
    }

    fn set_subtitle(&mut self, stream: i32) {
        self.player.set_spu(stream);
    }

    fn subtitle_visible(&self) -> bool {
        self.player.spu() != -1
    }

    fn set_subtitle_visible(&mut self, visible: bool) {
        if visible {
            self.player.set_spu(self.subtitle_invisible);
            self.subtitle_invisible = -1;
        } else {
            self.subtitle_invisible = self.player.spu();
            self.player.set_spu(-1);
        }
    }

    // A spherical video takes the arrow keys for looking around
    fn is_in_menu(&self) -> bool {
        self.state.is_360()
    }

    fn has_menu(&self) -> bool {
        false
    }

    fn on_action(&mut self, action: &Action) -> bool {
        let mode = match action.id {
            ActionId::MoveLeft => NavigateMode::Left,
            ActionId::MoveRight => NavigateMode::Right,
            ActionId::MoveUp => NavigateMode::Up,
            ActionId::MoveDown => NavigateMode::Down,
            _ => return false,
        };
        self.player.navigate(mode);
        // Navigation is forwarded, but the host keeps its own handling too
        false
    }

    fn player_state(&self) -> String {
        String::new()
    }

    fn set_player_state(&mut self, _state: &str) -> bool {
        false
    }

    fn frame_move(&mut self) {}

    fn render(&mut self, clear: bool, alpha: u32, _gui: bool) {
        let Some(texture) = self.texture else {
            return;
        };
        if let Err(e) = self
            .renderer
            .draw_quad(texture, &QuadParams::new(clear, alpha))
        {
            warn!("Failed to draw video texture {}: {}", texture.get(), e);
        }
    }

    fn flush_renderer(&mut self) {}

    fn trigger_update_resolution(&mut self) {}

    fn is_rendering_video(&self) -> bool {
        self.player.has_vout()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<E: Engine> Drop for LibVlcPlayer<E> {
    fn drop(&mut self) {
        self.close();
        if let Some(texture) = self.texture.take() {
            self.renderer.release_texture(texture);
        }
        debug!("LibVlcPlayer dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::host::fake::FakeHost;
    use hearth_core::{CallbackEvent, PlayTimes, RecordingCallback};
    use hearth_engine_api::testing::{FakeEngine, FakePlayer};
    use hearth_engine_api::{
        MediaPlayerEvent, MediaSource, MediaTrack, Projection, TrackDescription, TrackType,
    };
    use hearth_renderer_api::recording::{RecordingRenderer, RenderCall};

    struct Fixture {
        player: LibVlcPlayer<FakeEngine>,
        callback: Arc<RecordingCallback>,
        host: FakeHost,
        renderer: RecordingRenderer,
    }

    impl Fixture {
        fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let callback = Arc::new(RecordingCallback::new());
            let host = FakeHost::new();
            let renderer = RecordingRenderer::new();
            let player = LibVlcPlayer::<FakeEngine>::new(
                callback.clone(),
                host.host(),
                Box::new(renderer.clone()),
            )
            .unwrap();
            Self {
                player,
                callback,
                host,
                renderer,
            }
        }

        fn initialized() -> Self {
            let mut fixture = Self::new();
            assert!(fixture.player.initialize(&config()));
            fixture
        }

        fn fake(&self) -> &FakePlayer {
            self.player.media_player()
        }
    }

    fn config() -> PlayerCoreConfig {
        PlayerCoreConfig::new("VLC", "LibVLCPlayer")
    }

    #[test]
    fn test_new_player_is_idle() {
        let fixture = Fixture::new();
        let player = &fixture.player;

        assert_eq!(player.engine().args(), ["--verbose", "1"]);
        assert!(!player.is_playing());
        assert_eq!(player.cache_percentage(), 0.0);
        assert!(player.is_caching());
        assert!(!player.subtitle_visible());
        assert!(!player.is_in_menu());
        assert!(!player.has_menu());
        assert!(player.is_passthrough());
        assert!(player.render_texture().is_none());
        assert!(fixture.callback.get_events().is_empty());
    }

    #[test]
    fn test_initialize_binds_texture_and_handlers() {
        let fixture = Fixture::initialized();
        let texture = fixture.player.render_texture().unwrap();

        assert_eq!(fixture.fake().event_manager().handler_count(), 11);
        assert_eq!(fixture.fake().snapshot().gl_texture, Some(texture.get()));
        assert_eq!(
            fixture.renderer.calls(),
            vec![RenderCall::Created(texture, TextureParams::video())]
        );
    }

    #[test]
    fn test_initialize_twice_fails() {
        let mut fixture = Fixture::initialized();
        assert!(!fixture.player.initialize(&config()));
        assert_eq!(fixture.fake().event_manager().handler_count(), 11);
        assert_eq!(fixture.renderer.calls().len(), 1);
    }

    #[test]
    fn test_initialize_off_ui_thread_fails() {
        let fixture = Fixture::new();
        let Fixture {
            player,
            renderer,
            host: _host,
            callback: _callback,
        } = fixture;

        let (player, ok) = std::thread::spawn(move || {
            let mut player = player;
            let ok = player.initialize(&config());
            (player, ok)
        })
        .join()
        .unwrap();

        assert!(!ok);
        assert_eq!(player.media_player().event_manager().handler_count(), 0);
        assert!(renderer.calls().is_empty());
    }

    #[test]
    fn test_initialize_without_display_fails() {
        let mut fixture = Fixture::new();
        fixture.host.windowing.set_display_available(false);
        assert!(!fixture.player.initialize(&config()));

        let mut fixture = Fixture::new();
        fixture.host.windowing.set_context_available(false);
        assert!(!fixture.player.initialize(&config()));
        assert_eq!(fixture.fake().event_manager().handler_count(), 0);
        assert!(fixture.renderer.calls().is_empty());
    }

    #[test]
    fn test_initialize_rolls_back_when_engine_refuses_texture() {
        let mut fixture = Fixture::new();
        fixture.fake().configure(|s| s.gl_binding_succeeds = false);

        assert!(!fixture.player.initialize(&config()));
        assert_eq!(fixture.fake().event_manager().handler_count(), 0);
        assert!(fixture.player.render_texture().is_none());

        let calls = fixture.renderer.calls();
        assert_eq!(calls.len(), 2);
        let RenderCall::Created(texture, _) = calls[0] else {
            panic!("expected texture creation, got {:?}", calls[0]);
        };
        assert_eq!(calls[1], RenderCall::Released(texture));
    }

    #[test]
    fn test_initialize_fails_without_texture() {
        let mut fixture = Fixture::new();
        fixture.renderer.set_fail_create(true);
        assert!(!fixture.player.initialize(&config()));
        assert_eq!(fixture.fake().event_manager().handler_count(), 0);
    }

    #[test]
    fn test_open_local_path() {
        let mut fixture = Fixture::initialized();
        let item = FileItem::new("/media/movies/big_buck_bunny.mkv");

        assert!(fixture.player.open_file(&item, &PlayerOptions::default()));

        let media = fixture.fake().snapshot().media.unwrap();
        assert_eq!(media.source, MediaSource::Path);
        assert_eq!(media.mrl, "/media/movies/big_buck_bunny.mkv");
        assert!(fixture.player.is_playing());
        assert_eq!(fixture.player.playing_file(), Some(&item));
        assert_eq!(
            fixture.callback.last_event(),
            Some(CallbackEvent::Started {
                path: "/media/movies/big_buck_bunny.mkv".to_string()
            })
        );

        let cache = &fixture.host.data_cache;
        assert!(!cache.is_video_render());
        assert!(cache.is_gui_render());
        assert_eq!(cache.video_decoder_name(), ("vlc".to_string(), true));
    }

    #[test]
    fn test_open_url_is_location() {
        let mut fixture = Fixture::initialized();
        let item = FileItem::new("http://example.com/live/stream.m3u8");

        assert!(fixture.player.open_file(&item, &PlayerOptions::default()));

        let media = fixture.fake().snapshot().media.unwrap();
        assert_eq!(media.source, MediaSource::Location);
        assert_eq!(media.mrl, "http://example.com/live/stream.m3u8");

        fixture
            .player
            .open_file(&FileItem::new("http://my host/a.mkv"), &PlayerOptions::default());
        assert_eq!(
            fixture.fake().snapshot().media.unwrap().source,
            MediaSource::Location
        );

        fixture
            .player
            .open_file(&FileItem::new("clip:1.mp4"), &PlayerOptions::default());
        assert_eq!(
            fixture.fake().snapshot().media.unwrap().source,
            MediaSource::Path
        );
    }

    #[test]
    fn test_open_resets_play_times() {
        let mut fixture = Fixture::initialized();
        fixture.host.data_cache.set_play_times(0, 5000, 0, 9000);

        fixture
            .player
            .open_file(&FileItem::new("/tmp/a.mp4"), &PlayerOptions::default());
        assert_eq!(fixture.host.data_cache.play_times(), PlayTimes::default());
    }

    #[test]
    fn test_open_failure_reports_error() {
        let mut fixture = Fixture::initialized();
        fixture.fake().configure(|s| s.play_succeeds = false);

        assert!(!fixture
            .player
            .open_file(&FileItem::new("/tmp/broken.avi"), &PlayerOptions::default()));
        assert!(!fixture.player.is_playing());
        assert!(fixture.player.playing_file().is_none());
        assert_eq!(fixture.callback.get_events(), vec![CallbackEvent::Error]);
    }

    #[test]
    fn test_terminal_events_clear_playing() {
        let cases = [
            (MediaPlayerEvent::Stopped, CallbackEvent::Stopped),
            (MediaPlayerEvent::EndReached, CallbackEvent::Ended),
            (MediaPlayerEvent::EncounteredError, CallbackEvent::Error),
        ];
        for (event, expected) in cases {
            let mut fixture = Fixture::initialized();
            fixture
                .player
                .open_file(&FileItem::new("/tmp/a.mp4"), &PlayerOptions::default());
            assert!(fixture.player.is_playing());

            fixture.fake().emit(event);
            assert!(!fixture.player.is_playing());
            assert_eq!(fixture.callback.last_event(), Some(expected));
        }
    }

    #[test]
    fn test_playing_and_paused_events_relay() {
        let fixture = Fixture::initialized();
        fixture.fake().emit(MediaPlayerEvent::Paused);
        fixture.fake().emit(MediaPlayerEvent::Playing);
        assert_eq!(
            fixture.callback.get_events(),
            vec![CallbackEvent::Paused, CallbackEvent::Resumed]
        );
    }

    #[test]
    fn test_buffering_updates_cache() {
        let fixture = Fixture::initialized();

        fixture.fake().emit(MediaPlayerEvent::Buffering(99.9));
        assert!(fixture.player.is_caching());
        assert_eq!(fixture.player.cache_percentage(), 99.9);

        fixture.fake().emit(MediaPlayerEvent::Buffering(100.0));
        assert!(!fixture.player.is_caching());
    }

    #[test]
    fn test_buffering_from_event_thread() {
        let fixture = Fixture::initialized();
        let fake = fixture.player.media_player().clone();

        std::thread::spawn(move || {
            for percent in 0..=100 {
                fake.emit(MediaPlayerEvent::Buffering(percent as f32));
            }
        })
        .join()
        .unwrap();

        assert_eq!(fixture.player.cache_percentage(), 100.0);
        assert!(!fixture.player.is_caching());
    }

    #[test]
    fn test_flags_written_from_event_thread() {
        let mut fixture = Fixture::initialized();
        fixture
            .player
            .open_file(&FileItem::new("/tmp/a.mp4"), &PlayerOptions::default());
        assert!(fixture.player.is_playing());
        let fake = fixture.player.media_player().clone();

        std::thread::spawn(move || {
            fake.add_track(MediaTrack::video(0, Projection::Equirectangular));
            fake.emit(MediaPlayerEvent::Stopped);
        })
        .join()
        .unwrap();

        assert!(!fixture.player.is_playing());
        assert!(fixture.player.is_in_menu());
        assert_eq!(fixture.callback.last_event(), Some(CallbackEvent::Stopped));
    }

    #[test]
    fn test_time_changed_publishes_play_times() {
        let fixture = Fixture::initialized();
        fixture.fake().configure(|s| s.length = 120_000);

        fixture.fake().emit(MediaPlayerEvent::TimeChanged(42_000));
        assert_eq!(
            fixture.host.data_cache.play_times(),
            PlayTimes {
                start: 0,
                time: 42_000,
                min: 0,
                max: 120_000
            }
        );
    }

    #[test]
    fn test_position_changed_only_for_unknown_length() {
        let fixture = Fixture::initialized();

        fixture.fake().emit(MediaPlayerEvent::PositionChanged(0.5));
        assert_eq!(
            fixture.host.data_cache.play_times(),
            PlayTimes {
                start: 0,
                time: 50,
                min: 0,
                max: 100
            }
        );

        fixture.fake().configure(|s| s.length = 60_000);
        fixture.fake().emit(MediaPlayerEvent::PositionChanged(0.9));
        assert_eq!(fixture.host.data_cache.play_times().time, 50);
    }

    #[test]
    fn test_vout_closes_dialogs() {
        let fixture = Fixture::initialized();
        fixture.fake().emit(MediaPlayerEvent::Vout(1));

        assert_eq!(fixture.host.window_manager.close_count(), 1);
        assert!(fixture.host.window_manager.last_force());
    }

    #[test]
    fn test_spherical_video_tracking() {
        let fixture = Fixture::initialized();
        let fake = fixture.fake();

        fake.add_track(MediaTrack::video(0, Projection::Rectangular));
        fake.add_track(MediaTrack::audio(1));
        assert!(!fixture.player.is_in_menu());

        fake.add_track(MediaTrack::video(2, Projection::Equirectangular));
        assert!(fixture.player.is_in_menu());

        fake.add_track(MediaTrack::video(3, Projection::CubemapLayoutStandard));
        fake.remove_track(TrackType::Video, 2);
        assert!(fixture.player.is_in_menu());

        fake.remove_track(TrackType::Audio, 1);
        assert!(fixture.player.is_in_menu());

        fake.remove_track(TrackType::Video, 3);
        assert!(!fixture.player.is_in_menu());

        fake.remove_track(TrackType::Video, 0);
        assert!(!fixture.player.is_in_menu());
    }

    #[test]
    fn test_close_clears_spherical_flag() {
        let mut fixture = Fixture::initialized();
        fixture
            .fake()
            .add_track(MediaTrack::video(0, Projection::Equirectangular));
        assert!(fixture.player.is_in_menu());

        fixture.player.close_file(false);
        assert!(!fixture.player.is_in_menu());
    }

    #[test]
    fn test_subtitle_hide_and_show_restores_track() {
        for id in [-1, 0, 3] {
            let mut fixture = Fixture::initialized();
            fixture.player.set_subtitle(id);

            fixture.player.set_subtitle_visible(false);
            assert_eq!(fixture.player.subtitle(), -1);
            assert!(!fixture.player.subtitle_visible());

            fixture.player.set_subtitle_visible(true);
            assert_eq!(fixture.player.subtitle(), id);
            assert_eq!(fixture.player.subtitle_visible(), id != -1);
        }
    }

    #[test]
    fn test_second_hide_overwrites_stored_track() {
        let mut fixture = Fixture::initialized();
        fixture.player.set_subtitle(5);

        fixture.player.set_subtitle_visible(false);
        fixture.player.set_subtitle_visible(false);
        fixture.player.set_subtitle_visible(true);
        assert_eq!(fixture.player.subtitle(), -1);
    }

    #[test]
    fn test_subtitle_hidden_after_close() {
        let mut fixture = Fixture::initialized();
        fixture.player.set_subtitle(2);
        assert!(fixture.player.subtitle_visible());

        fixture.player.close_file(false);
        assert!(!fixture.player.subtitle_visible());

        // Nothing left to restore after close
        fixture.player.set_subtitle_visible(true);
        assert_eq!(fixture.player.subtitle(), -1);
    }

    #[test]
    fn test_subtitle_stream_info() {
        let fixture = Fixture::initialized();
        fixture.fake().configure(|s| {
            s.spu_descriptions = vec![
                TrackDescription {
                    id: -1,
                    name: "Disable".to_string(),
                },
                TrackDescription {
                    id: 4,
                    name: "English".to_string(),
                },
            ]
        });
        assert_eq!(fixture.player.subtitle_count(), 2);

        let mut info = SubtitleStreamInfo::default();
        fixture.player.subtitle_stream_info(4, &mut info);
        assert_eq!(info.name, "English");

        let mut untouched = SubtitleStreamInfo {
            name: "keep".to_string(),
            language: "fr".to_string(),
        };
        fixture.player.subtitle_stream_info(9, &mut untouched);
        assert_eq!(untouched.name, "keep");
        assert_eq!(untouched.language, "fr");
    }

    #[test]
    fn test_seek_time_reports_offset() {
        let mut fixture = Fixture::initialized();
        fixture.fake().configure(|s| s.time = 10_000);

        fixture.player.seek_time(4_000);
        assert_eq!(fixture.fake().snapshot().time, 4_000);
        assert_eq!(
            fixture.callback.last_event(),
            Some(CallbackEvent::Seek {
                time_ms: 4_000,
                offset_ms: -6_000
            })
        );

        fixture.player.seek_time(9_000);
        assert_eq!(
            fixture.callback.last_event(),
            Some(CallbackEvent::Seek {
                time_ms: 9_000,
                offset_ms: 5_000
            })
        );
    }

    #[test]
    fn test_seek_time_relative() {
        let mut fixture = Fixture::initialized();
        fixture.fake().configure(|s| s.time = 1_000);

        assert!(fixture.player.seek_time_relative(500));
        assert_eq!(fixture.fake().snapshot().time, 1_500);
        assert_eq!(
            fixture.callback.last_event(),
            Some(CallbackEvent::Seek {
                time_ms: 1_500,
                offset_ms: 500
            })
        );
    }

    #[test]
    fn test_seek_with_extreme_values_saturates() {
        let mut fixture = Fixture::initialized();
        fixture.fake().configure(|s| s.time = 1_000);

        assert!(fixture.player.seek_time_relative(i64::MAX));
        assert_eq!(fixture.fake().snapshot().time, i64::MAX);

        fixture.fake().configure(|s| s.time = 1_000);
        fixture.player.seek_time(i64::MIN);
        assert_eq!(
            fixture.callback.last_event(),
            Some(CallbackEvent::Seek {
                time_ms: i64::MIN,
                offset_ms: i64::MIN
            })
        );
    }

    #[test]
    fn test_seek_percentage_and_step_seek() {
        let mut fixture = Fixture::initialized();
        fixture.player.seek_percentage(25.0);
        assert_eq!(fixture.fake().snapshot().position, 0.25);

        fixture.player.seek(true, true, false);
        assert_eq!(fixture.fake().snapshot().position, 0.25);
        assert!(fixture.callback.get_events().is_empty());
    }

    #[test]
    fn test_speed_volume_and_mute() {
        let mut fixture = Fixture::initialized();

        fixture.player.set_speed(1.5);
        assert_eq!(fixture.fake().snapshot().rate, 1.5);
        assert_eq!(
            fixture.callback.last_event(),
            Some(CallbackEvent::SpeedChanged { speed: 1.5 })
        );

        fixture.player.set_volume(0.5);
        assert_eq!(fixture.fake().snapshot().volume, 50);

        fixture.player.set_mute(true);
        assert!(fixture.fake().snapshot().muted);
    }

    #[test]
    fn test_actions_forward_navigation_but_are_unhandled() {
        let mut fixture = Fixture::initialized();
        let ids = [
            ActionId::MoveLeft,
            ActionId::MoveRight,
            ActionId::MoveUp,
            ActionId::MoveDown,
            ActionId::Select,
            ActionId::PreviousMenu,
            ActionId::Other(42),
        ];
        for id in ids {
            assert!(!fixture.player.on_action(&Action::new(id)));
        }
        assert_eq!(
            fixture.fake().snapshot().navigations,
            vec![
                NavigateMode::Left,
                NavigateMode::Right,
                NavigateMode::Up,
                NavigateMode::Down,
            ]
        );
    }

    #[test]
    fn test_close_file_resets_state() {
        let mut fixture = Fixture::initialized();
        fixture
            .player
            .open_file(&FileItem::new("/tmp/a.mp4"), &PlayerOptions::default());
        fixture.fake().emit(MediaPlayerEvent::Buffering(40.0));

        assert!(fixture.player.close_file(false));
        assert!(!fixture.player.is_playing());
        assert_eq!(fixture.player.cache_percentage(), 0.0);
        assert!(fixture.player.playing_file().is_none());
        assert_eq!(fixture.fake().snapshot().stop_count, 1);
        assert_eq!(fixture.callback.last_event(), Some(CallbackEvent::Ended));
    }

    #[test]
    fn test_forwarded_queries() {
        let mut fixture = Fixture::initialized();
        fixture.fake().configure(|s| {
            s.can_pause = false;
            s.seekable = false;
            s.vout = true;
        });
        assert!(!fixture.player.can_pause());
        assert!(!fixture.player.can_seek());
        assert!(fixture.player.is_rendering_video());
        assert!(!fixture.player.has_video());
        assert!(!fixture.player.has_audio());

        fixture
            .fake()
            .add_track(MediaTrack::video(0, Projection::Rectangular));
        fixture.fake().add_track(MediaTrack::audio(1));
        assert!(fixture.player.has_video());
        assert!(fixture.player.has_audio());

        fixture.player.pause();
        assert_eq!(fixture.fake().snapshot().pause_count, 1);
        assert_eq!(fixture.player.player_state(), "");
        assert!(!fixture.player.set_player_state("anything"));
    }

    #[test]
    fn test_render_draws_bound_texture() {
        let mut fixture = Fixture::new();
        fixture.player.render(true, 255, false);
        assert!(fixture.renderer.calls().is_empty());

        assert!(fixture.player.initialize(&config()));
        let texture = fixture.player.render_texture().unwrap();
        fixture.player.render(false, 128, true);

        assert_eq!(
            fixture.renderer.calls().last(),
            Some(&RenderCall::Drawn(texture, QuadParams::new(false, 128)))
        );
    }

    #[test]
    fn test_drop_stops_and_releases_texture() {
        let fixture = Fixture::initialized();
        let Fixture {
            player,
            callback,
            host: _host,
            renderer,
        } = fixture;
        let fake = player.media_player().clone();
        let texture = player.render_texture().unwrap();

        drop(player);

        assert_eq!(fake.snapshot().stop_count, 1);
        assert_eq!(callback.last_event(), Some(CallbackEvent::Ended));
        assert_eq!(renderer.calls().last(), Some(&RenderCall::Released(texture)));
    }
}
