//! Main application component

use dioxus::prelude::*;

use toggle_core::config::AppearanceConfig;
use toggle_core::models::Preferences;

use crate::components::PreferencesPanel;
use crate::state::AppState;
use crate::theme::{resolve_theme, ResolvedTheme};
use crate::APPEARANCE;

/// Root application component
#[component]
pub fn App() -> Element {
    let appearance = use_hook(|| APPEARANCE.get().cloned().unwrap_or_default());
    let theme = use_signal(|| resolve_theme(appearance.theme));
    let preferences = use_signal(|| initial_preferences(&appearance));
    let style = use_signal(|| appearance.style.clone());

    use_context_provider(|| AppState {
        preferences,
        theme,
        style,
    });

    let current_theme = theme();
    let colors = current_theme.palette();
    let theme_attr = match current_theme {
        ResolvedTheme::Light => "light",
        ResolvedTheme::Dark => "dark",
    };

    rsx! {
        div {
            class: "app-container",
            "data-theme": "{theme_attr}",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",
            PreferencesPanel {}
        }
    }
}

/// The dark mode toggle starts out matching the configured theme.
fn initial_preferences(appearance: &AppearanceConfig) -> Preferences {
    Preferences {
        dark_mode: resolve_theme(appearance.theme).is_dark(),
        ..Preferences::default()
    }
}

#[cfg(test)]
mod tests {
    use toggle_core::models::ThemeMode;

    use super::*;

    #[test]
    fn dark_theme_starts_with_dark_mode_on() {
        let appearance = AppearanceConfig {
            theme: ThemeMode::Dark,
            ..AppearanceConfig::default()
        };
        assert!(initial_preferences(&appearance).dark_mode);
        assert!(!initial_preferences(&AppearanceConfig {
            theme: ThemeMode::Light,
            ..AppearanceConfig::default()
        })
        .dark_mode);
    }
}
