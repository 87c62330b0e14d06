//! Portal Access Guard
//!
//! Role-based access control for the school-portal dashboards.
//!
//! This crate provides:
//! - An access guard that gates each dashboard page behind a session check
//! - Collaborator traits for the session store, user directory, and navigation
//! - A REST-backed user directory client
//! - Environment-driven configuration

pub mod config;
pub mod directory;
pub mod error;
pub mod guard;
pub mod nav;
pub mod page;
pub mod rest;
pub mod role;
pub mod session;

pub use config::GuardConfig;
pub use directory::{UserDirectory, UserRecord};
pub use error::{DirectoryError, SessionError};
pub use guard::{AccessGuard, AccessState, Denial};
pub use nav::{Navigator, Notifier};
pub use page::PageLocation;
pub use rest::RestDirectory;
pub use role::Role;
pub use session::{MemorySessionStore, SessionStore, SessionToken};
