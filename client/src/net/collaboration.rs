//! Collaboration portal endpoints, addressed by session id + access token.

use wire::endpoints;
use wire::{ApiError, CollaborationMessage, CollaborationSession, Id, MessageKind, NewMessage, Participant, StatusChange};

use super::api::{self, Verb};

/// Identifies one portal session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionKey {
    pub session_id: Id,
    pub access_token: String,
}

/// # Errors
///
/// See [`api::get`].
pub async fn session(key: &SessionKey) -> Result<CollaborationSession, ApiError> {
    api::get(&endpoints::collaboration_session(key.session_id, &key.access_token)).await
}

/// # Errors
///
/// See [`api::get`].
pub async fn participants(key: &SessionKey) -> Result<Vec<Participant>, ApiError> {
    api::get(&endpoints::collaboration_participants(key.session_id, &key.access_token)).await
}

/// Messages with an id greater than `after_id`.
///
/// # Errors
///
/// See [`api::get`].
pub async fn messages_after(key: &SessionKey, after_id: Id) -> Result<Vec<CollaborationMessage>, ApiError> {
    api::get(&endpoints::collaboration_messages_after(key.session_id, &key.access_token, after_id)).await
}

/// # Errors
///
/// See [`api::post`].
pub async fn send_message(key: &SessionKey, content: &str) -> Result<CollaborationMessage, ApiError> {
    let body = NewMessage {
        content: content.to_owned(),
        message_type: MessageKind::Text,
    };
    api::post(&endpoints::collaboration_post_message(key.session_id, &key.access_token), &body).await
}

/// # Errors
///
/// The backend rejects transitions it does not allow with a validation
/// error.
pub async fn change_status(key: &SessionKey, change: &StatusChange) -> Result<CollaborationSession, ApiError> {
    api::send_json(Verb::Patch, &endpoints::collaboration_status(key.session_id, &key.access_token), change).await
}
