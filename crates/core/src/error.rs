// Error handling for player backends

use thiserror::Error;

/// Player backend error types
#[derive(Debug, Clone, Error)]
pub enum PlayerError {
    /// Failed to create or initialize the backend
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// A call that must run on the UI thread was made from another thread
    #[error("{0} must be called from the application thread")]
    WrongThread(&'static str),

    /// The windowing system has no display or rendering context
    #[error("Display unavailable: {0}")]
    DisplayUnavailable(String),

    /// Failed to open a media item
    #[error("Open error: {0}")]
    Open(String),

    /// Render target could not be created or bound
    #[error("Render error: {0}")]
    Render(String),

    /// No player core registered under this name or kind
    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    /// Player core configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;

impl From<serde_json::Error> for PlayerError {
    fn from(err: serde_json::Error) -> Self {
        PlayerError::Config(err.to_string())
    }
}
