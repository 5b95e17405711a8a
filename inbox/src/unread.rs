//! Unread-state derivation.
//!
//! A conversation is *new* for a reader when the reader is its recipient, it
//! has activity after the last read marker (or was never read), and that
//! activity happened within the last 24 hours. The set is recomputed from
//! scratch on every poll; nothing here is persisted.

#[cfg(test)]
#[path = "unread_test.rs"]
mod unread_test;

use std::collections::BTreeSet;

use wire::timestamp::DAY_MS;
use wire::{Conversation, Id};

/// Only activity newer than this counts toward the badge.
pub const RECENT_WINDOW_MS: i64 = DAY_MS;

/// Whether `updated_at_ms` falls strictly inside the recency window.
#[must_use]
pub fn is_recent(updated_at_ms: i64, now_ms: i64) -> bool {
    updated_at_ms > now_ms.saturating_sub(RECENT_WINDOW_MS)
}

/// The badge predicate for one conversation.
#[must_use]
pub fn is_new_for(conversation: &Conversation, user_id: Id, now_ms: i64) -> bool {
    conversation.recipient_user_id == user_id
        && conversation.has_unseen_activity()
        && is_recent(conversation.updated_at.millis(), now_ms)
}

/// Ids of every conversation that is new for `user_id`.
#[must_use]
pub fn unread_ids(conversations: &[Conversation], user_id: Id, now_ms: i64) -> BTreeSet<Id> {
    conversations
        .iter()
        .filter(|c| is_new_for(c, user_id, now_ms))
        .map(|c| c.id)
        .collect()
}
