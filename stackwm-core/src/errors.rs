use thiserror::Error;

use crate::models::LayerGroup;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// A value that does not name one of the fixed layer groups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayerGroupError {
    #[error("Unknown layer group name: {0:?}")]
    UnknownName(String),
    #[error("Layer group index out of range: {0}")]
    OutOfRange(u8),
}

/// Failure reported by a backend while realizing a restack.
///
/// These are best-effort: the engine has already committed its own state
/// when a request fails, so the error is only logged.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Window {0} no longer exists")]
    WindowGone(String),
    #[error("Connection to the display server failed: {0}")]
    Connection(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("The default layer can not be the temporary band {0}")]
    TemporaryDefaultLayer(LayerGroup),
    #[error("max_event_depth must be at least 1")]
    NoEventDepth,
}
