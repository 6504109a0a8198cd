// libVLC player backend

mod events;
mod player;
mod state;

pub use player::{LibVlcPlayer, DECODER_NAME, ENGINE_ARGS};

use hearth_core::{Player, PlayerCoreFactory};
use hearth_engine_api::Engine;
use hearth_renderer_api::VideoRenderer;

/// Player kind this backend registers under, as used in player core configs
pub const PLAYER_KIND: &str = "LibVLCPlayer";

/// Register the backend with `factory`; every created player gets a fresh
/// renderer from `make_renderer`.
pub fn register<E, F>(factory: &mut PlayerCoreFactory, make_renderer: F)
where
    E: Engine + 'static,
    F: Fn() -> Box<dyn VideoRenderer> + Send + Sync + 'static,
{
    factory.register(PLAYER_KIND, move |callback, host| {
        let player = LibVlcPlayer::<E>::new(callback, host, make_renderer())?;
        Ok(Box::new(player) as Box<dyn Player>)
    });
}
