// Core types and traits shared by the host and its player backends

pub mod action;
pub mod callback;
pub mod config;
pub mod data_cache;
pub mod error;
pub mod factory;
pub mod host;
pub mod item;
pub mod player;

// Re-export commonly used types
pub use action::{Action, ActionId};
pub use callback::{CallbackEvent, NullCallback, PlayerCallback};
pub use config::{parse_player_cores, PlayerCoreConfig};
pub use data_cache::{DataCache, PlayTimes};
pub use error::{PlayerError, Result};
pub use factory::{PlayerConstructor, PlayerCoreFactory};
pub use host::{Application, DisplayHandle, GlContextHandle, Host, WindowManager, Windowing};
pub use item::{FileItem, MediaUrl};
pub use player::{AudioStreamInfo, Player, PlayerOptions, SubtitleStreamInfo};

#[cfg(any(test, feature = "test-util"))]
pub use callback::RecordingCallback;

/// Install the `env_logger` backend for the `log` facade.
/// Honors `RUST_LOG`; safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
        log::info!("logging initialized");
    }
}
