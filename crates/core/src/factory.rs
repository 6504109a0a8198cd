// Creates player backends by configured name

use crate::callback::PlayerCallback;
use crate::config::{parse_player_cores, PlayerCoreConfig};
use crate::error::{PlayerError, Result};
use crate::host::Host;
use crate::player::Player;
use std::collections::HashMap;
use std::sync::Arc;

/// Constructor for one backend kind
pub type PlayerConstructor =
    Box<dyn Fn(Arc<dyn PlayerCallback>, Host) -> Result<Box<dyn Player>> + Send + Sync>;

/// Registry of backend kinds and the configured cores using them
#[derive(Default)]
pub struct PlayerCoreFactory {
    constructors: HashMap<String, PlayerConstructor>,
    cores: Vec<PlayerCoreConfig>,
}

impl PlayerCoreFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, kind: &str, constructor: F)
    where
        F: Fn(Arc<dyn PlayerCallback>, Host) -> Result<Box<dyn Player>> + Send + Sync + 'static,
    {
        log::debug!("Registering player kind {}", kind);
        self.constructors
            .insert(kind.to_string(), Box::new(constructor));
    }

    pub fn add_core(&mut self, config: PlayerCoreConfig) {
        self.cores.push(config);
    }

    /// Add every core from a `{ "players": [ ... ] }` document
    pub fn load_cores(&mut self, json: &str) -> Result<usize> {
        let cores = parse_player_cores(json)?;
        let count = cores.len();
        self.cores.extend(cores);
        Ok(count)
    }

    pub fn cores(&self) -> &[PlayerCoreConfig] {
        &self.cores
    }

    /// Cores able to play a medium, in configuration order
    pub fn players_for(&self, has_video: bool) -> Vec<&PlayerCoreConfig> {
        self.cores
            .iter()
            .filter(|core| if has_video { core.video } else { core.audio })
            .collect()
    }

    /// Create and initialize the core configured as `name`
    pub fn create_player(
        &self,
        name: &str,
        callback: Arc<dyn PlayerCallback>,
        host: Host,
    ) -> Result<Box<dyn Player>> {
        let config = self
            .cores
            .iter()
            .find(|core| core.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| PlayerError::UnknownPlayer(name.to_string()))?;

        let constructor = self
            .constructors
            .get(&config.kind)
            .ok_or_else(|| PlayerError::UnknownPlayer(config.kind.clone()))?;

        log::info!("Creating player {} ({})", config.name, config.kind);
        let mut player = constructor(callback, host)?;
        if !player.initialize(config) {
            return Err(PlayerError::Initialization(format!(
                "player {} failed to initialize",
                config.name
            )));
        }
        Ok(player)
    }
}
