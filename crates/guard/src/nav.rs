//! Navigation and notice seams.
//!
//! Both are fire-and-forget: the guard issues at most one of each per
//! invocation and never observes a result.

/// Redirect the browsing context to a page.
pub trait Navigator: Send + Sync {
    fn redirect(&self, url: &str);
}

/// Surface a notice to the user.
///
/// Carries the deactivated-account notice. Implementations should not
/// block; the guard continues its denial path immediately after the call.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}
