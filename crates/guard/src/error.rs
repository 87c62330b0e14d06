//! Collaborator error types.

use thiserror::Error;

/// Errors surfaced by the session store.
///
/// An absent token is not an error (the store returns `None`); only a
/// payload that exists but cannot be decoded is.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Session payload exists but is not a valid token.
    #[error("Malformed session payload: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for SessionError {
    fn from(e: serde_json::Error) -> Self {
        SessionError::Malformed(e.to_string())
    }
}

/// Errors surfaced by the remote user directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Request failed to reach the directory or came back non-success.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response arrived but the record body could not be decoded.
    #[error("Malformed user record: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for DirectoryError {
    fn from(e: reqwest::Error) -> Self {
        DirectoryError::Transport(e.to_string())
    }
}
