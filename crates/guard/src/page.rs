//! Page identity.

use crate::role::{self, Role};

/// The resolved location of the current page view.
///
/// The page name is the final path segment; the role requirement is derived
/// from it via [`role::required_role`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation(String);

impl PageLocation {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The full resolved path.
    pub fn path(&self) -> &str {
        &self.0
    }

    /// The page name: everything after the last `/`.
    pub fn page_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or("")
    }

    /// Role required to view this page, if any.
    pub fn required_role(&self) -> Option<Role> {
        role::required_role(self.page_name())
    }
}

impl From<&str> for PageLocation {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl std::fmt::Display for PageLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_name_from_path() {
        let page = PageLocation::new("/portal/admin_dashboard.html");
        assert_eq!(page.page_name(), "admin_dashboard.html");
    }

    #[test]
    fn test_page_name_bare() {
        let page = PageLocation::new("teacher_dashboard.html");
        assert_eq!(page.page_name(), "teacher_dashboard.html");
    }

    #[test]
    fn test_required_role() {
        let page = PageLocation::new("/app/teacher_dashboard.html");
        assert_eq!(page.required_role(), Some(Role::Teacher));

        let page = PageLocation::new("/app/index.html");
        assert_eq!(page.required_role(), None);
    }
}
