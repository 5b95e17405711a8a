//! Entity DTOs mirroring backend JSON responses.
//!
//! DESIGN
//! ======
//! Optional and list fields default when absent so partial list payloads
//! (e.g. a conversation list without embedded messages) decode into the same
//! types as full detail payloads.

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

use serde::{Deserialize, Serialize};

use crate::number::{deserialize_cents, deserialize_opt_f64, format_cents, parse_cents, serialize_cents};
use crate::timestamp::Timestamp;

/// Backend primary keys are integers.
pub type Id = i64;

// =============================================================================
// AUTH
// =============================================================================

/// Account role that decides which dashboard and actions a user sees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Client,
    Developer,
    Admin,
    #[serde(other)]
    Other,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Developer => "developer",
            Self::Admin => "admin",
            Self::Other => "other",
        }
    }
}

/// The authenticated account returned by `/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default, alias = "user_type")]
    pub role: Role,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    /// Name to show in chrome; falls back to the email local part.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.full_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => self.email.split('@').next().unwrap_or_default().to_owned(),
        }
    }
}

/// Token response from `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub user: Option<User>,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Login form payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration form payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
}

// =============================================================================
// CONVERSATIONS
// =============================================================================

/// Rendering hint for message content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    #[default]
    Text,
    Link,
    File,
}

/// A file attached to a message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(alias = "filename")]
    pub file_name: String,
    #[serde(alias = "file_url")]
    pub url: String,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

/// A two-party thread, usually started from a request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Id,
    #[serde(default)]
    pub request_id: Option<Id>,
    pub starter_user_id: Id,
    pub recipient_user_id: Id,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_conversation_status")]
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub last_read_at: Option<Timestamp>,
    #[serde(default)]
    pub messages: Vec<ConversationMessage>,
}

fn default_conversation_status() -> String {
    "active".to_owned()
}

impl Conversation {
    /// Whether the thread has activity the reader has not seen yet.
    #[must_use]
    pub fn has_unseen_activity(&self) -> bool {
        self.last_read_at.is_none_or(|read| read < self.updated_at)
    }

    /// Title, or a generic fallback naming the thread id.
    #[must_use]
    pub fn display_title(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_owned(),
            _ => format!("Conversation #{}", self.id),
        }
    }
}

/// One message in a [`Conversation`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub id: Id,
    pub conversation_id: Id,
    pub user_id: Id,
    pub content: String,
    #[serde(default)]
    pub message_type: MessageKind,
    pub created_at: Timestamp,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Payload for posting a message into a conversation or session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewMessage {
    pub content: String,
    pub message_type: MessageKind,
}

/// Payload for starting a conversation about a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewConversation {
    pub request_id: Id,
    pub recipient_user_id: Id,
    pub initial_message: String,
}

// =============================================================================
// COLLABORATION
// =============================================================================

/// Support session lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
}

impl SessionStatus {
    pub const ALL: [Self; 3] = [Self::Open, Self::InProgress, Self::Resolved];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In progress",
            Self::Resolved => "Resolved",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }

    /// `resolved` accepts no further transitions from the client.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved)
    }
}

/// Role of a participant inside a collaboration session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    Support,
    #[default]
    Customer,
    Developer,
    #[serde(other)]
    Other,
}

/// A person taking part in a collaboration session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: Id,
    #[serde(default)]
    pub session_id: Option<Id>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: ParticipantRole,
    #[serde(default)]
    pub is_current_user: bool,
}

/// An external support ticket thread.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollaborationSession {
    pub id: Id,
    pub external_ticket_id: String,
    pub status: SessionStatus,
    #[serde(default)]
    pub source_system: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub last_read_at: Option<Timestamp>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// One message in a [`CollaborationSession`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollaborationMessage {
    pub id: Id,
    pub session_id: Id,
    #[serde(default)]
    pub participant_id: Option<Id>,
    #[serde(default)]
    pub sender_name: Option<String>,
    pub content: String,
    #[serde(default)]
    pub message_type: MessageKind,
    pub created_at: Timestamp,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Payload for a session status change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatusChange {
    pub status: SessionStatus,
}

// =============================================================================
// PROJECTS & REQUESTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub user_id: Id,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectDraft {
    pub name: String,
    pub description: Option<String>,
}

/// One share grant on a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestShare {
    pub user_id: Id,
    #[serde(default)]
    pub can_edit: bool,
}

/// A client's work request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub id: Id,
    pub title: String,
    pub content: String,
    pub user_id: Id,
    #[serde(default)]
    pub project_id: Option<Id>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub shared_with: Vec<RequestShare>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RequestDraft {
    pub title: String,
    pub content: String,
    pub project_id: Option<Id>,
    pub is_public: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShareRequest {
    pub user_ids: Vec<Id>,
}

// =============================================================================
// MARKETPLACE
// =============================================================================

/// A downloadable marketplace product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in cents.
    #[serde(rename = "price", deserialize_with = "deserialize_cents", serialize_with = "serialize_cents")]
    pub price_cents: i64,
    #[serde(default)]
    pub category: Option<String>,
    pub developer_id: Id,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub download_count: u64,
    pub created_at: Timestamp,
}

impl Product {
    #[must_use]
    pub fn price_label(&self) -> String {
        format_price(self.price_cents)
    }

    #[must_use]
    pub fn is_free(&self) -> bool {
        self.price_cents == 0
    }
}

/// `GET /marketplace/products/{id}/download` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    #[serde(alias = "url")]
    pub download_url: String,
}

/// `POST /marketplace/products/{id}/purchase` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    #[serde(alias = "url")]
    pub checkout_url: String,
}

/// Render cents as `$12.50`.
#[must_use]
pub fn format_price(cents: i64) -> String {
    format!("${}", format_cents(cents))
}

/// Parse a dollar amount typed by a user into cents.
///
/// Rejects negatives and more than two fraction digits.
#[must_use]
pub fn parse_price(raw: &str) -> Option<i64> {
    parse_cents(raw.trim().trim_start_matches('$'))
}

// =============================================================================
// PROFILES & SHOWCASE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeveloperProfile {
    pub id: Id,
    pub user_id: Id,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub portfolio_url: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_public: bool,
}

fn default_true() -> bool {
    true
}

impl DeveloperProfile {
    /// Case-insensitive skill membership.
    #[must_use]
    pub fn has_skill(&self, needle: &str) -> bool {
        let needle = needle.trim();
        needle.is_empty() || self.skills.iter().any(|skill| skill.eq_ignore_ascii_case(needle))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub experience_years: Option<u32>,
    pub hourly_rate: Option<f64>,
    pub portfolio_url: Option<String>,
    pub is_public: bool,
}

/// A developer-authored portfolio entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Showcase {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub developer_id: Id,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub repository_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub created_at: Timestamp,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShowcaseDraft {
    pub title: String,
    pub description: String,
    pub demo_url: Option<String>,
    pub repository_url: Option<String>,
    pub technologies: Vec<String>,
}
