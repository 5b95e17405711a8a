//! Dark mode preference.
//!
//! Reads the stored preference (falling back to the system color scheme) and
//! mirrors it onto a `data-theme` attribute on `<html>`. Server builds no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage;

const STORAGE_KEY: &str = "devmarket_dark";

/// Stored preference, else the system preference, else light.
pub fn read_preference() -> bool {
    if let Some(stored) = storage::load_string(STORAGE_KEY) {
        return stored == "true";
    }
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip, apply, and persist the preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::save_string(STORAGE_KEY, if next { "true" } else { "false" });
    next
}
