//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `ui`, `toast`) and provided through
//! Leptos context as `RwSignal`s, so components depend on small focused
//! models. Page-local data stays in page signals.

pub mod auth;
pub mod toast;
pub mod ui;
