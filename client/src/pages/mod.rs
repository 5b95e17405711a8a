//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, polling, form
//! validation) and delegates rendering details to `components`.

pub mod collaboration;
pub mod conversations;
pub mod dashboard;
pub mod developers;
pub mod login;
pub mod marketplace;
pub mod oauth_callback;
pub mod profile;
pub mod projects;
pub mod register;
pub mod requests;
pub mod showcase;
