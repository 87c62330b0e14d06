//! User records and the directory lookup seam.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DirectoryError;
use crate::role::Role;

/// Authoritative user document, keyed by uid in the directory.
///
/// The role is kept as the raw stored string; [`UserRecord::role`] parses
/// it so that unknown role strings stay representable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Stored role string.
    pub role: String,

    /// Active flag. Only an explicit `false` deactivates; an absent flag
    /// passes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Account email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// When the record was created by the admin tooling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// Parsed role, `None` when the stored string is unrecognized.
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Whether the account has been explicitly deactivated.
    pub fn is_deactivated(&self) -> bool {
        self.is_active == Some(false)
    }
}

/// Remote user-record lookup.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch the record for `uid`. `Ok(None)` means the document does not
    /// exist; errors are transport or decode failures.
    async fn fetch_user(&self, uid: &str) -> Result<Option<UserRecord>, DirectoryError>;
}
