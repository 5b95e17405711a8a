//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns (theme, menus, the inactivity warning) out of
//! domain data so components can toggle them without touching server state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Notification dropdown in the navbar.
    pub notifications_open: bool,
    /// Milliseconds left before the inactivity timeout, while warning.
    pub session_warning_ms: Option<i64>,
}

impl UiState {
    /// Whole seconds left in the inactivity warning, rounded up.
    pub fn session_warning_secs(&self) -> Option<i64> {
        self.session_warning_ms.map(|ms| (ms + 999) / 1000)
    }
}
