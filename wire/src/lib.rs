//! Shared REST data model for the DevMarket backend API.
//!
//! This crate owns the JSON representation used by the `client` UI and the
//! `inbox` sync logic. It is framework agnostic and compiles both natively
//! and to WebAssembly.
//!
//! | Module | Role |
//! |--------|------|
//! | [`models`] | Entity DTOs mirroring backend responses |
//! | [`timestamp`] | ISO-8601 response timestamps as epoch milliseconds |
//! | [`error`] | Typed [`ApiError`] classified from HTTP status + body |
//! | [`endpoints`] | Relative endpoint path builders |

pub mod endpoints;
pub mod error;
pub mod models;
mod number;
pub mod timestamp;

pub use error::ApiError;
pub use models::*;
pub use timestamp::{Timestamp, TimestampError};
