//! Inactivity warning banner.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn SessionWarning() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.get().session_warning_ms.is_some()>
            <div class="session-warning" role="alert">
                <span>
                    {move || {
                        let secs = ui.get().session_warning_secs().unwrap_or_default();
                        format!("You will be signed out in {secs} seconds due to inactivity.")
                    }}
                </span>
                // Any click counts as activity, which clears the warning.
                <button class="session-warning__stay" type="button">"Stay signed in"</button>
            </div>
        </Show>
    }
}
