//! The access guard.
//!
//! Gates rendering of a role-restricted page: reads the session token,
//! verifies it against the user directory, and either grants access or
//! navigates the visitor away before any sensitive content is shown.
//! Dashboard controllers run behind [`AccessGuard::gate`] and do not
//! re-validate authorization themselves.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::GuardConfig;
use crate::directory::UserDirectory;
use crate::nav::{Navigator, Notifier};
use crate::page::PageLocation;
use crate::role::{self, Role};
use crate::session::SessionStore;

/// Why an invocation was denied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    /// No token in the session store.
    NoSession,
    /// Token present but no backing user record.
    StaleAccount,
    /// Record found but the account is deactivated.
    InactiveAccount,
    /// Authenticated but on the wrong page for the role.
    RoleMismatch {
        required: Role,
        actual: Option<Role>,
    },
    /// Session decode or directory lookup failed; fail closed.
    Transport,
}

impl std::fmt::Display for Denial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSession => write!(f, "no_session"),
            Self::StaleAccount => write!(f, "stale_account"),
            Self::InactiveAccount => write!(f, "inactive_account"),
            Self::RoleMismatch { .. } => write!(f, "role_mismatch"),
            Self::Transport => write!(f, "transport"),
        }
    }
}

/// Authorization state of a page view.
///
/// `Granted` is sticky for the page view's lifetime. Denials are never
/// cached: a call that finds a previous denial re-runs the full check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessState {
    /// No check has run yet.
    Init,
    /// A remote lookup is in flight.
    Checking,
    /// Access granted; cached for the remaining page view.
    Granted,
    /// The last check was denied.
    Denied(Denial),
}

/// Per-page-view access guard.
///
/// Owns the authorization state for exactly one page view; nothing
/// persists across page loads.
pub struct AccessGuard {
    config: GuardConfig,
    page: PageLocation,
    sessions: Arc<dyn SessionStore>,
    directory: Arc<dyn UserDirectory>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<AccessState>,
}

impl AccessGuard {
    /// Create a guard for one page view.
    pub fn new(
        config: GuardConfig,
        page: PageLocation,
        sessions: Arc<dyn SessionStore>,
        directory: Arc<dyn UserDirectory>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            page,
            sessions,
            directory,
            navigator,
            notifier,
            state: Mutex::new(AccessState::Init),
        }
    }

    /// Check whether the current session may view this page.
    ///
    /// Returns `true` only when a session token exists, a backing record
    /// exists, the account is active, and the record's role matches the
    /// page's required role. Every other outcome triggers exactly one
    /// navigation side effect and returns `false`; nothing propagates to
    /// the caller as an error.
    ///
    /// At most one remote lookup is in flight per page view: a call
    /// arriving while a check is outstanding returns `false` without a
    /// second lookup, and once granted every later call returns `true`
    /// without re-querying.
    pub async fn check_access(&self) -> bool {
        {
            let mut state = self.state.lock().await;
            match *state {
                AccessState::Granted => return true,
                AccessState::Checking => return false,
                // Denials are never cached: re-run the full check.
                AccessState::Init | AccessState::Denied(_) => {}
            }
            *state = AccessState::Checking;
        }

        let outcome = self.run_check().await;
        let granted = outcome == AccessState::Granted;
        *self.state.lock().await = outcome;
        granted
    }

    /// Run `controller` only after access has been granted.
    ///
    /// This is the guard-before-dashboard ordering guarantee: the
    /// controller future is not constructed, let alone polled, until the
    /// check passes. Returns `None` when access was denied.
    pub async fn gate<F, Fut, T>(&self, controller: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        if self.check_access().await {
            Some(controller().await)
        } else {
            None
        }
    }

    /// Current authorization state, for observability.
    pub async fn state(&self) -> AccessState {
        self.state.lock().await.clone()
    }

    async fn run_check(&self) -> AccessState {
        let token = match self.sessions.get() {
            Ok(Some(token)) => token,
            Ok(None) => {
                tracing::info!(page = %self.page, "no session, redirecting to login");
                self.navigator.redirect(&self.config.entry_page);
                return AccessState::Denied(Denial::NoSession);
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to decode session token");
                return self.fail_closed(Denial::Transport);
            }
        };

        tracing::debug!(email = %token.email, "session token resolved");

        let record = match self.directory.fetch_user(&token.uid).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                tracing::info!(uid = %token.uid, "no record backing session, purging token");
                return self.fail_closed(Denial::StaleAccount);
            }
            Err(e) => {
                tracing::warn!(uid = %token.uid, error = %e, "user directory lookup failed");
                return self.fail_closed(Denial::Transport);
            }
        };

        if record.is_deactivated() {
            tracing::info!(uid = %token.uid, "account deactivated");
            self.notifier.notify(&self.config.inactive_notice);
            return self.fail_closed(Denial::InactiveAccount);
        }

        if let Some(required) = self.page.required_role() {
            let actual = record.role();
            if actual != Some(required) {
                let home = actual.map(Role::home_page).unwrap_or(role::FALLBACK_HOME);
                tracing::info!(
                    required = %required,
                    actual = %record.role,
                    destination = home,
                    "role mismatch, rerouting"
                );
                self.navigator.redirect(home);
                return AccessState::Denied(Denial::RoleMismatch { required, actual });
            }
        }

        tracing::info!(role = %record.role, page = %self.page, "access granted");
        AccessState::Granted
    }

    /// Stale, deactivated, and failed sessions all resolve the same way:
    /// purge the token and send the visitor back to the entry page.
    fn fail_closed(&self, denial: Denial) -> AccessState {
        self.sessions.remove();
        self.navigator.redirect(&self.config.entry_page);
        AccessState::Denied(denial)
    }
}
