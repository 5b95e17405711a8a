//! Client-side synchronization logic for conversations and support sessions.
//!
//! This crate is UI-framework agnostic: every type takes the current time as
//! epoch milliseconds and returns decisions instead of performing I/O, so the
//! Leptos client drives it from timers while tests drive it with fixed clocks.
//!
//! | Module | Role |
//! |--------|------|
//! | [`unread`] | The "new conversation" predicate and unread-set derivation |
//! | [`notifications`] | Rolling conversation list behind the notification badge |
//! | [`confirm`] | Two-click delete arming with an expiry window |
//! | [`thread`] | Id-ordered message merging shared by both thread kinds |
//! | [`collaboration`] | Support session message cursor and status control |
//! | [`watchdog`] | Inactivity timeout for the signed-in session |
//! | [`subscription`] | Cancellation guard for pollers owned by a view |

#[cfg(test)]
#[path = "fixtures_test.rs"]
pub(crate) mod fixtures;

pub mod collaboration;
pub mod confirm;
pub mod notifications;
pub mod subscription;
pub mod thread;
pub mod unread;
pub mod watchdog;

pub use collaboration::{CollaborationSync, SendError, StatusChangeError};
pub use confirm::{ConfirmOutcome, DeleteConfirm};
pub use notifications::NotificationTracker;
pub use subscription::{Subscription, still_current};
pub use watchdog::{SessionWatchdog, WatchState};

/// Poll cadence of the notification badge.
pub const CONVERSATION_LIST_POLL_MS: u32 = 30_000;
/// Poll cadence of an open conversation thread.
pub const CONVERSATION_THREAD_POLL_MS: u32 = 5_000;
/// Poll cadence of the collaboration portal.
pub const COLLABORATION_POLL_MS: u32 = 5_000;
