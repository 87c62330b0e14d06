//! Session token storage.
//!
//! The token is a client-held claim written by the login flow; the user
//! directory record is the ground truth it is checked against.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Proof-of-login persisted by the browsing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    /// Backend user identifier.
    pub uid: String,
    /// Login email, kept for display and diagnostics.
    pub email: String,
}

/// Key-value persistence for the session token, one fixed slot.
///
/// Reads are synchronous: the store is expected to be local to the page
/// view (the remote lookup is the guard's only suspension point).
pub trait SessionStore: Send + Sync {
    /// Read the stored token. An absent token is `Ok(None)`; a payload
    /// that exists but cannot be decoded is an error.
    fn get(&self) -> Result<Option<SessionToken>, SessionError>;

    /// Store a token, replacing any previous one.
    fn set(&self, token: &SessionToken);

    /// Clear the stored token, if any.
    fn remove(&self);
}

/// In-memory session store.
///
/// Holds raw JSON payloads under string keys, decoding on read, so a
/// malformed payload written by a foreign writer is representable.
pub struct MemorySessionStore {
    key: String,
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Create a store reading and writing the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Write a raw payload into the token slot, bypassing serialization.
    /// Lets embedders mirror an externally written session verbatim.
    pub fn put_raw(&self, payload: impl Into<String>) {
        self.entries.write().insert(self.key.clone(), payload.into());
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new("currentUser")
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<SessionToken>, SessionError> {
        let entries = self.entries.read();
        match entries.get(&self.key) {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn set(&self, token: &SessionToken) {
        if let Ok(raw) = serde_json::to_string(token) {
            self.entries.write().insert(self.key.clone(), raw);
        }
    }

    fn remove(&self) {
        self.entries.write().remove(&self.key);
    }
}
