//! Theme configuration for the desktop app

use std::sync::OnceLock;

pub use toggle_core::models::ThemeMode;

/// Cached system dark mode preference (detected once at startup)
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    #[must_use]
    pub const fn from_dark_mode(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

/// Resolve theme mode to actual light/dark theme
#[must_use]
pub fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System => ResolvedTheme::from_dark_mode(is_system_dark_mode()),
    }
}

/// Detect system dark mode preference (cached after first call)
#[must_use]
pub fn is_system_dark_mode() -> bool {
    *SYSTEM_DARK_MODE.get_or_init(|| gtk_theme_is_dark(std::env::var("GTK_THEME").ok()))
}

fn gtk_theme_is_dark(theme: Option<String>) -> bool {
    let is_dark = theme.is_some_and(|theme| theme.to_lowercase().contains("dark"));
    tracing::debug!(
        "System theme detected: {}",
        if is_dark { "dark" } else { "light" }
    );
    is_dark
}

/// Color palette for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f8f9fa",
    text_primary: "#1a1a1a",
    text_secondary: "#5f6368",
    text_muted: "#9aa0a6",
    border: "#dadce0",
    accent: "#4f46e5",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#1a1a1a",
    bg_secondary: "#242424",
    text_primary: "#e8eaed",
    text_secondary: "#9aa0a6",
    text_muted: "#5f6368",
    border: "#3c4043",
    accent: "#818cf8",
};
