//! Rolling conversation view behind the notification badge.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar polls the user's conversation list and hands each response to
//! [`NotificationTracker::apply_refresh`]. A failed poll is recorded with
//! [`NotificationTracker::record_failure`] and leaves the previous list and
//! unread set untouched. Mark-as-read is applied locally first; the caller
//! issues the POST and only logs if it fails.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use std::collections::BTreeSet;

use wire::{Conversation, Id, Timestamp};

use crate::confirm::{ConfirmOutcome, DeleteConfirm};
use crate::unread::unread_ids;

/// What a mark-as-read call changed locally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkRead {
    /// The conversation was unread and is now marked read.
    Marked,
    /// The conversation was already read; local state is unchanged.
    AlreadyRead,
    /// No conversation with that id is held.
    Unknown,
}

/// Conversations for one user plus the derived unread set.
#[derive(Clone, Debug, Default)]
pub struct NotificationTracker {
    user_id: Option<Id>,
    conversations: Vec<Conversation>,
    unread: BTreeSet<Id>,
    last_error: Option<String>,
    delete_confirm: DeleteConfirm<Id>,
}

impl NotificationTracker {
    #[must_use]
    pub fn new(user_id: Id) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    /// Switch the reader (e.g. after login). Clears held data.
    pub fn set_user(&mut self, user_id: Option<Id>) {
        if self.user_id != user_id {
            *self = Self {
                user_id,
                ..Self::default()
            };
        }
    }

    #[must_use]
    pub fn user_id(&self) -> Option<Id> {
        self.user_id
    }

    /// Replace the held list with a fresh poll result and recompute unread.
    pub fn apply_refresh(&mut self, mut conversations: Vec<Conversation>, now_ms: i64) {
        conversations.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        self.conversations = conversations;
        self.last_error = None;
        self.recompute(now_ms);
    }

    /// Record a failed poll. Held data is kept as-is.
    pub fn record_failure(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    /// Re-derive the unread set; call on a clock tick without new data to
    /// age items out of the recency window.
    pub fn recompute(&mut self, now_ms: i64) {
        self.unread = match self.user_id {
            Some(user_id) => unread_ids(&self.conversations, user_id, now_ms),
            None => BTreeSet::new(),
        };
    }

    /// Optimistically mark `id` read at `now_ms`. Idempotent.
    pub fn mark_as_read(&mut self, id: Id, now_ms: i64) -> MarkRead {
        let Some(conversation) = self.conversations.iter_mut().find(|c| c.id == id) else {
            return MarkRead::Unknown;
        };
        let was_unread = self.unread.remove(&id);
        if !conversation.has_unseen_activity() && !was_unread {
            return MarkRead::AlreadyRead;
        }
        let marker = now_ms.max(conversation.updated_at.millis());
        conversation.last_read_at = Some(Timestamp(marker));
        MarkRead::Marked
    }

    /// Register a delete click; on confirmation the conversation is removed
    /// locally and the caller should issue the DELETE.
    pub fn delete_click(&mut self, id: Id, now_ms: i64) -> ConfirmOutcome {
        let outcome = self.delete_confirm.click(&id, now_ms);
        if outcome == ConfirmOutcome::Confirmed {
            self.remove(id);
        }
        outcome
    }

    /// Whether a delete on `id` is awaiting its second click.
    #[must_use]
    pub fn delete_armed(&self, id: Id, now_ms: i64) -> bool {
        self.delete_confirm.is_armed(&id, now_ms)
    }

    /// Drop an expired delete arming.
    pub fn expire_delete(&mut self, now_ms: i64) -> bool {
        self.delete_confirm.expire(now_ms)
    }

    /// Remove a conversation from the local view.
    pub fn remove(&mut self, id: Id) -> Option<Conversation> {
        self.unread.remove(&id);
        let index = self.conversations.iter().position(|c| c.id == id)?;
        Some(self.conversations.remove(index))
    }

    #[must_use]
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    #[must_use]
    pub fn unread(&self) -> &BTreeSet<Id> {
        &self.unread
    }

    #[must_use]
    pub fn is_unread(&self, id: Id) -> bool {
        self.unread.contains(&id)
    }

    #[must_use]
    pub fn badge_count(&self) -> usize {
        self.unread.len()
    }

    /// Unread conversations, most recently updated first.
    #[must_use]
    pub fn new_conversations(&self) -> Vec<&Conversation> {
        self.conversations
            .iter()
            .filter(|c| self.unread.contains(&c.id))
            .collect()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
