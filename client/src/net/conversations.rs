//! Conversation endpoints.

use wire::endpoints;
use wire::{ApiError, Conversation, ConversationMessage, Id, NewConversation, NewMessage};

use super::api::{self, Verb};

/// Every conversation the current user takes part in.
///
/// # Errors
///
/// See [`api::get`].
pub async fn list() -> Result<Vec<Conversation>, ApiError> {
    api::get(endpoints::CONVERSATIONS_USER_LIST).await
}

/// # Errors
///
/// See [`api::get`].
pub async fn fetch(id: Id) -> Result<Conversation, ApiError> {
    api::get(&endpoints::conversation(id)).await
}

/// # Errors
///
/// See [`api::post`].
pub async fn create(draft: &NewConversation) -> Result<Conversation, ApiError> {
    api::post(endpoints::CONVERSATIONS, draft).await
}

/// # Errors
///
/// See [`api::call`].
pub async fn mark_read(id: Id) -> Result<(), ApiError> {
    api::call(Verb::Post, &endpoints::conversation_read(id)).await
}

/// # Errors
///
/// See [`api::call`].
pub async fn delete(id: Id) -> Result<(), ApiError> {
    api::call(Verb::Delete, &endpoints::conversation(id)).await
}

/// # Errors
///
/// See [`api::get`].
pub async fn messages(id: Id) -> Result<Vec<ConversationMessage>, ApiError> {
    api::get(&endpoints::conversation_messages(id)).await
}

/// # Errors
///
/// See [`api::post`].
pub async fn send_message(id: Id, content: &str) -> Result<ConversationMessage, ApiError> {
    let body = NewMessage {
        content: content.to_owned(),
        message_type: wire::MessageKind::Text,
    };
    api::post(&endpoints::conversation_messages(id), &body).await
}
