//! Typed REST failure taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every HTTP call in the client resolves to `Result<T, ApiError>`. Status
//! classification and backend `detail` extraction happen here once, so views
//! only match on variants (notably [`ApiError::Unauthorized`]) and render
//! the `Display` text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Failure of a REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// 401: missing, expired, or rejected bearer token.
    #[error("your session has expired, please sign in again")]
    Unauthorized,
    /// 403.
    #[error("{0}")]
    Forbidden(String),
    /// 404.
    #[error("{0}")]
    NotFound(String),
    /// 400 / 422: the backend rejected the payload.
    #[error("{0}")]
    Validation(String),
    /// 5xx.
    #[error("server error ({status}): {detail}")]
    Server { status: u16, detail: String },
    /// Any other non-success status.
    #[error("request failed ({status}): {detail}")]
    Http { status: u16, detail: String },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success response from its status and raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = extract_detail(body);
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden(detail.unwrap_or_else(|| "You do not have permission to do that.".to_owned())),
            404 => Self::NotFound(detail.unwrap_or_else(|| "Not found.".to_owned())),
            400 | 422 => Self::Validation(detail.unwrap_or_else(|| "The request was invalid.".to_owned())),
            500..=599 => Self::Server {
                status,
                detail: detail.unwrap_or_else(|| "internal error".to_owned()),
            },
            _ => Self::Http {
                status,
                detail: detail.unwrap_or_else(|| "unexpected status".to_owned()),
            },
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// HTTP status, when the failure came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Server { status, .. } | Self::Http { status, .. } => Some(*status),
            Self::Validation(_) | Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

/// Pull a human-readable message out of a backend error body.
///
/// Handles `{"detail": "..."}`, FastAPI validation lists
/// `{"detail": [{"loc": ["body", "email"], "msg": "..."}]}`, and
/// `{"message": "..."}`.
#[must_use]
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail").or_else(|| value.get("message"))? {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_owned()),
        Value::Array(items) => {
            let parts = items.iter().filter_map(validation_entry).collect::<Vec<_>>();
            if parts.is_empty() { None } else { Some(parts.join("; ")) }
        }
        _ => None,
    }
}

fn validation_entry(item: &Value) -> Option<String> {
    let msg = item.get("msg").and_then(Value::as_str)?;
    let field = item
        .get("loc")
        .and_then(Value::as_array)
        .and_then(|loc| loc.iter().rev().find_map(Value::as_str));
    Some(match field {
        Some(field) => format!("{field}: {msg}"),
        None => msg.to_owned(),
    })
}
