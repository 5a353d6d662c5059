use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failure of the physical host -> engine channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    #[error("script injection failed: {0}")]
    Script(String),

    #[error("engine channel unavailable")]
    Unavailable,
}

/// Errors surfaced by the bridge controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// The engine channel has not been mounted yet (or was unmounted).
    #[error("engine channel is not ready")]
    ChannelNotReady,

    /// An incoming engine message did not match the expected envelope.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// A content fetch is already waiting for its reply.
    #[error("a content request is already in flight")]
    RequestInFlight,

    /// The controller went away before the engine replied.
    #[error("engine channel closed before the content reply arrived")]
    ChannelClosed,

    #[error("content request timed out after {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    Channel(#[from] ChannelError),
}
