//! Portal roles and the page/role routing tables.

use serde::{Deserialize, Serialize};

/// Home page a user is routed to when their role string is unrecognized.
///
/// Explicit policy: an account whose role the portal does not know is
/// treated as a student for routing purposes. Unknown roles never match a
/// protected page, so this only ever sends them to the least-privileged
/// dashboard.
pub const FALLBACK_HOME: &str = "student_dashboard.html";

/// A portal role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// School manager.
    Manager,
    /// Teaching staff.
    Teacher,
    /// Enrolled student.
    Student,
}

impl Role {
    /// Parse a role string from a user record. Unknown strings are `None`;
    /// there is no silent fallback at parse time.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "manager" => Some(Self::Manager),
            "teacher" => Some(Self::Teacher),
            "student" => Some(Self::Student),
            _ => None,
        }
    }

    /// The dashboard entry page for this role.
    pub const fn home_page(self) -> &'static str {
        match self {
            Self::Admin => "admin_dashboard.html",
            Self::Manager => "manager_dashboard.html",
            Self::Teacher => "teacher_dashboard.html",
            Self::Student => "student_dashboard.html",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Manager => write!(f, "manager"),
            Self::Teacher => write!(f, "teacher"),
            Self::Student => write!(f, "student"),
        }
    }
}

/// Role required to view a page, by page name. Pages outside the four
/// dashboards require no role.
pub fn required_role(page_name: &str) -> Option<Role> {
    match page_name {
        "admin_dashboard.html" => Some(Role::Admin),
        "manager_dashboard.html" => Some(Role::Manager),
        "teacher_dashboard.html" => Some(Role::Teacher),
        "student_dashboard.html" => Some(Role::Student),
        _ => None,
    }
}
