//! Transient toast notifications.
//!
//! Toasts are appended newest-last, capped at [`MAX_VISIBLE`] (oldest
//! dropped first), and expire [`TOAST_TTL_MS`] after they were pushed. The
//! host component schedules the expiry; callers only push.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use uuid::Uuid;

/// Lifetime of a toast.
pub const TOAST_TTL_MS: i64 = 4_000;
/// Toasts shown at once.
pub const MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
    pub created_ms: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now_ms: i64) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            created_ms: now_ms,
        });
        if self.toasts.len() > MAX_VISIBLE {
            let overflow = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop toasts older than the TTL. Returns how many were removed.
    pub fn expire(&mut self, now_ms: i64) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| now_ms - t.created_ms < TOAST_TTL_MS);
        before - self.toasts.len()
    }
}

/// Push a toast into the context-provided queue.
pub fn notify(toasts: leptos::prelude::RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    use leptos::prelude::Update;

    let message = message.into();
    let now = crate::util::clock::now_ms();
    toasts.update(|state| {
        state.push(kind, message, now);
    });
}
