//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns transport, auth headers, and error classification; the
//! per-domain modules are thin typed wrappers over `wire::endpoints`.

pub mod api;
pub mod auth;
pub mod collaboration;
pub mod conversations;
pub mod marketplace;
pub mod profile;
pub mod work;
