//! Guard configuration loaded from environment variables.

use serde::Deserialize;

/// Access guard configuration.
///
/// Environment variables are prefixed with `PORTAL_`:
/// - `PORTAL_ENTRY_PAGE`: Unauthenticated entry page (default: "index.html")
/// - `PORTAL_SESSION_KEY`: Session store key for the token (default: "currentUser")
/// - `PORTAL_INACTIVE_NOTICE`: Notice shown to deactivated accounts
/// - `PORTAL_DIRECTORY_URL`: Base URL of the user directory service
/// - `PORTAL_USERS_COLLECTION`: Collection holding user records (default: "users")
/// - `PORTAL_LOOKUP_TIMEOUT_SECS`: Directory client timeout (default: 30)
#[derive(Debug, Clone, Deserialize)]
pub struct GuardConfig {
    /// Page unauthenticated visitors are sent to
    #[serde(default = "default_entry_page")]
    pub entry_page: String,

    /// Session store key the token lives under
    #[serde(default = "default_session_key")]
    pub session_key: String,

    /// Notice surfaced when the account is deactivated
    #[serde(default = "default_inactive_notice")]
    pub inactive_notice: String,

    /// Base URL of the user directory service
    #[serde(default = "default_directory_url")]
    pub directory_url: String,

    /// Collection holding user records
    #[serde(default = "default_users_collection")]
    pub users_collection: String,

    /// Directory lookup timeout in seconds
    #[serde(default = "default_lookup_timeout_secs")]
    pub lookup_timeout_secs: u64,
}

fn default_entry_page() -> String {
    "index.html".to_string()
}

fn default_session_key() -> String {
    "currentUser".to_string()
}

fn default_inactive_notice() -> String {
    "Your account is inactive. Please contact the administration.".to_string()
}

fn default_directory_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_users_collection() -> String {
    "users".to_string()
}

fn default_lookup_timeout_secs() -> u64 {
    30
}

impl GuardConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `PORTAL_`.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("PORTAL_").from_env::<GuardConfig>()
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            entry_page: default_entry_page(),
            session_key: default_session_key(),
            inactive_notice: default_inactive_notice(),
            directory_url: default_directory_url(),
            users_collection: default_users_collection(),
            lookup_timeout_secs: default_lookup_timeout_secs(),
        }
    }
}
