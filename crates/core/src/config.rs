// Player core configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One configured player core: a named instance of a backend kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerCoreConfig {
    /// Name the user sees and selects ("VLC")
    pub name: String,
    /// Backend kind the name maps to ("LibVLCPlayer")
    #[serde(rename = "type")]
    pub kind: String,
    /// Can play audio-only media
    pub audio: bool,
    /// Can play media with video
    pub video: bool,
}

impl PlayerCoreConfig {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }
}

impl Default for PlayerCoreConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: String::new(),
            audio: true,
            video: true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PlayerCoresFile {
    #[serde(default)]
    players: Vec<PlayerCoreConfig>,
}

/// Parse a `{ "players": [ ... ] }` document
pub fn parse_player_cores(json: &str) -> Result<Vec<PlayerCoreConfig>> {
    let file: PlayerCoresFile = serde_json::from_str(json)?;
    Ok(file.players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlayerError;

    #[test]
    fn test_parse_player_cores() {
        let json = r#"{
            "players": [
                { "name": "VLC", "type": "LibVLCPlayer", "audio": false },
                { "name": "Music", "type": "PAPlayer", "video": false }
            ]
        }"#;

        let cores = parse_player_cores(json).unwrap();
        assert_eq!(cores.len(), 2);
        assert_eq!(cores[0].kind, "LibVLCPlayer");
        assert!(!cores[0].audio);
        assert!(cores[0].video);
        assert!(cores[1].audio);
        assert!(!cores[1].video);
    }

    #[test]
    fn test_parse_error_is_config_error() {
        let err = parse_player_cores("{ players: ").unwrap_err();
        assert!(matches!(err, PlayerError::Config(_)));
    }
}
