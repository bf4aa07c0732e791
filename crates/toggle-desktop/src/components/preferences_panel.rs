//! Preferences panel component

use dioxus::prelude::*;

use toggle_core::models::PreferenceKey;

use super::ToggleControl;
use crate::state::AppState;

/// Preferences panel: one toggle per boolean preference
#[component]
pub fn PreferencesPanel() -> Element {
    let state = use_context::<AppState>();
    let preferences = (state.preferences)();
    let style = (state.style)();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "preferences-panel",
            style: "
                max-width: 480px;
                margin: 32px auto;
                padding: 8px 20px;
                border-radius: 8px;
                background: {colors.bg_secondary};
                border: 1px solid {colors.border};
            ",

            h2 {
                style: "margin: 12px 0 4px; font-size: 1.1em; color: {colors.text_primary};",
                "Preferences"
            }

            for key in PreferenceKey::ALL {
                ToggleControl {
                    key: "{key:?}",
                    checked: preferences.get(key),
                    on_change: move |value: bool| state.apply(key, value),
                    label: key.label(),
                    description: key.description().map(str::to_string),
                    disabled: preferences.is_locked(key),
                    style: style.clone(),
                }
            }
        }
    }
}
