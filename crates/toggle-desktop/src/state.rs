//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use toggle_core::models::{PreferenceKey, Preferences};
use toggle_core::StyleOverrides;

use crate::theme::ResolvedTheme;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Boolean preferences; the single source of truth for every toggle
    pub preferences: Signal<Preferences>,
    /// Resolved theme (follows the dark mode preference)
    pub theme: Signal<ResolvedTheme>,
    /// Style overrides applied to every toggle
    pub style: Signal<StyleOverrides>,
}

impl AppState {
    /// Apply a change reported by a toggle.
    pub fn apply(mut self, key: PreferenceKey, value: bool) {
        tracing::info!(preference = key.as_str(), value, "Preference changed");
        self.preferences.write().set(key, value);
        if key == PreferenceKey::DarkMode {
            self.theme.set(ResolvedTheme::from_dark_mode(value));
        }
    }
}
