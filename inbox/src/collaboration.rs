//! Support-ticket message sync and status control.
//!
//! SYSTEM CONTEXT
//! ==============
//! The collaboration portal loads a session by id + access token, then polls
//! for messages newer than the highest id it holds. This type owns that
//! cursor, the role gate for status changes, and the rule that a resolved
//! session is final.
//!
//! The status machine is `open -> in_progress -> resolved`. The server
//! validates transitions; the client only refuses what it can already know
//! is wrong (non-support participant, resolved session, unchanged status).

#[cfg(test)]
#[path = "collaboration_test.rs"]
mod collaboration_test;

use wire::{CollaborationMessage, CollaborationSession, Id, Participant, ParticipantRole, SessionStatus, StatusChange};

use crate::thread::{last_id, merge_by_id};

/// Consecutive poll failures before the view warns about a lost connection.
pub const DEGRADED_AFTER_FAILURES: u32 = 3;

/// Why a status change was refused before reaching the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatusChangeError {
    #[error("this session is resolved and can no longer change status")]
    Resolved,
    #[error("only support agents can change the session status")]
    NotPermitted,
    #[error("the session is already {}", .0.label())]
    Unchanged(SessionStatus),
}

/// Why an outgoing message was refused before reaching the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    #[error("message is empty")]
    Empty,
}

/// Local projection of one collaboration session.
#[derive(Clone, Debug)]
pub struct CollaborationSync {
    session: CollaborationSession,
    participants: Vec<Participant>,
    messages: Vec<CollaborationMessage>,
    consecutive_failures: u32,
}

impl CollaborationSync {
    /// Build from the initial load. `participants` falls back to the ones
    /// embedded in the session when the dedicated list is empty.
    #[must_use]
    pub fn new(
        session: CollaborationSession,
        participants: Vec<Participant>,
        messages: Vec<CollaborationMessage>,
    ) -> Self {
        let participants = if participants.is_empty() {
            session.participants.clone()
        } else {
            participants
        };
        let mut sync = Self {
            session,
            participants,
            messages: Vec::new(),
            consecutive_failures: 0,
        };
        merge_by_id(&mut sync.messages, messages);
        sync
    }

    #[must_use]
    pub fn session(&self) -> &CollaborationSession {
        &self.session
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.session.status
    }

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[must_use]
    pub fn messages(&self) -> &[CollaborationMessage] {
        &self.messages
    }

    /// The `after_id` for the next poll: highest held id, `0` when empty.
    #[must_use]
    pub fn cursor(&self) -> Id {
        last_id(&self.messages)
    }

    /// The participant the server flagged as the viewer.
    #[must_use]
    pub fn current_participant(&self) -> Option<&Participant> {
        self.participants.iter().find(|p| p.is_current_user)
    }

    /// Display name for a message's sender.
    #[must_use]
    pub fn sender_name(&self, message: &CollaborationMessage) -> String {
        if let Some(name) = message.sender_name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.to_owned();
        }
        message
            .participant_id
            .and_then(|id| self.participants.iter().find(|p| p.id == id))
            .map_or_else(|| "Unknown".to_owned(), |p| p.name.clone())
    }

    /// Whether `message` was written by the viewer.
    #[must_use]
    pub fn is_own(&self, message: &CollaborationMessage) -> bool {
        match (self.current_participant(), message.participant_id) {
            (Some(me), Some(author)) => me.id == author,
            _ => false,
        }
    }

    /// Whether to render the status selector as enabled.
    #[must_use]
    pub fn can_manage_status(&self) -> bool {
        !self.session.status.is_terminal()
            && self
                .current_participant()
                .is_some_and(|p| p.role == ParticipantRole::Support)
    }

    /// Polling continues until the session is resolved.
    #[must_use]
    pub fn should_poll(&self) -> bool {
        !self.session.status.is_terminal()
    }

    /// Validate a status change and build its payload.
    ///
    /// # Errors
    ///
    /// Refuses changes on a resolved session, from non-support participants,
    /// and to the status the session already has.
    pub fn request_status_change(&self, next: SessionStatus) -> Result<StatusChange, StatusChangeError> {
        if self.session.status.is_terminal() {
            return Err(StatusChangeError::Resolved);
        }
        if !self.can_manage_status() {
            return Err(StatusChangeError::NotPermitted);
        }
        if next == self.session.status {
            return Err(StatusChangeError::Unchanged(next));
        }
        Ok(StatusChange { status: next })
    }

    /// Validate outgoing message content; returns the trimmed text.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Empty`] for blank content.
    pub fn prepare_message(content: &str) -> Result<String, SendError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(SendError::Empty);
        }
        Ok(trimmed.to_owned())
    }

    /// Append a poll batch. Returns how many messages were new.
    pub fn apply_poll(&mut self, batch: Vec<CollaborationMessage>) -> usize {
        self.consecutive_failures = 0;
        merge_by_id(&mut self.messages, batch)
    }

    /// Apply one poll tick: the message batch and the session refetch are
    /// applied independently, so one failed call does not discard the other's
    /// result. The tick counts as a single failure when either call failed.
    /// Returns the errors for the caller to log.
    pub fn apply_tick<E>(
        &mut self,
        messages: Result<Vec<CollaborationMessage>, E>,
        session: Result<CollaborationSession, E>,
    ) -> Vec<E> {
        let mut errors = Vec::new();
        match messages {
            Ok(batch) => {
                merge_by_id(&mut self.messages, batch);
            }
            Err(e) => errors.push(e),
        }
        match session {
            Ok(session) => self.apply_session(session),
            Err(e) => errors.push(e),
        }
        if errors.is_empty() {
            self.consecutive_failures = 0;
        } else {
            self.record_poll_failure();
        }
        errors
    }

    /// Append the server's echo of a message this client sent.
    pub fn apply_sent(&mut self, message: CollaborationMessage) {
        merge_by_id(&mut self.messages, vec![message]);
    }

    /// Replace the session record (from a status change response or refetch).
    pub fn apply_session(&mut self, session: CollaborationSession) {
        if !session.participants.is_empty() {
            self.participants.clone_from(&session.participants);
        }
        self.session = session;
    }

    /// Apply a locally confirmed status without a full session payload.
    pub fn apply_status(&mut self, status: SessionStatus) {
        self.session.status = status;
    }

    /// Record a swallowed poll failure.
    pub fn record_poll_failure(&mut self) {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
    }

    #[must_use]
    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// True once enough polls in a row have failed to warn the viewer.
    #[must_use]
    pub fn connection_degraded(&self) -> bool {
        self.consecutive_failures >= DEGRADED_AFTER_FAILURES
    }
}
