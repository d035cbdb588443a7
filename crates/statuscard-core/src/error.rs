//! Error types for Status Card

use thiserror::Error;

/// Failure while loading the quote list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Quotes provider answered with a non-success HTTP status
    #[error("Quotes fetch failed: {status}")]
    FetchFailed {
        /// HTTP status code returned by the provider
        status: u16,
    },

    /// No quotes remained after trimming and dropping empty lines
    #[error("No quotes found")]
    Empty,

    /// Request never produced a response (DNS, connect, timeout, body read)
    #[error("Quotes transport error: {0}")]
    Transport(String),
}

/// Failure while fetching or decoding a presence snapshot
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresenceError {
    /// Presence provider answered with a non-success HTTP status
    #[error("Presence fetch failed: {status}")]
    FetchFailed {
        /// HTTP status code returned by the provider
        status: u16,
    },

    /// Payload parsed but the `data` envelope was missing or null
    #[error("Malformed presence response")]
    Malformed,

    /// Payload was not valid JSON for the envelope schema
    #[error("Presence parse failed: {0}")]
    ParseFailed(String),

    /// Request never produced a response (DNS, connect, timeout, body read)
    #[error("Presence transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Transport(err.to_string())
    }
}

impl From<reqwest::Error> for PresenceError {
    fn from(err: reqwest::Error) -> Self {
        PresenceError::Transport(err.to_string())
    }
}

/// Invalid or unreadable configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A value failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file was not valid JSON for the schema
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
