//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! window listeners) from page and component logic to improve reuse and
//! testability.

pub mod auth;
pub mod clock;
pub mod dark_mode;
pub mod form;
pub mod markdown;
pub mod poll;
pub mod session;
pub mod storage;
pub mod task;
pub mod watchdog;
