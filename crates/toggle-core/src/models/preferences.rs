//! Demo preferences owned by the host application

use serde::{Deserialize, Serialize};

/// Theme mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
    /// Follow system preference
    #[default]
    System,
}

/// Identifies one boolean preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKey {
    DarkMode,
    Notifications,
    LaunchAtLogin,
    BetaUpdates,
}

impl PreferenceKey {
    pub const ALL: [Self; 4] = [
        Self::DarkMode,
        Self::Notifications,
        Self::LaunchAtLogin,
        Self::BetaUpdates,
    ];

    /// Stable identifier used in logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DarkMode => "dark_mode",
            Self::Notifications => "notifications",
            Self::LaunchAtLogin => "launch_at_login",
            Self::BetaUpdates => "beta_updates",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DarkMode => "Dark Mode",
            Self::Notifications => "Notifications",
            Self::LaunchAtLogin => "Launch at Login",
            Self::BetaUpdates => "Beta Updates",
        }
    }

    #[must_use]
    pub const fn description(self) -> Option<&'static str> {
        match self {
            Self::DarkMode => Some("Use dark theme"),
            Self::Notifications => Some("Show desktop notifications"),
            Self::LaunchAtLogin => None,
            Self::BetaUpdates => Some("Requires notifications"),
        }
    }
}

/// Boolean preferences shown in the demo settings surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Preferences {
    pub dark_mode: bool,
    pub notifications: bool,
    pub launch_at_login: bool,
    pub beta_updates: bool,
}

impl Preferences {
    #[must_use]
    pub const fn get(&self, key: PreferenceKey) -> bool {
        match key {
            PreferenceKey::DarkMode => self.dark_mode,
            PreferenceKey::Notifications => self.notifications,
            PreferenceKey::LaunchAtLogin => self.launch_at_login,
            PreferenceKey::BetaUpdates => self.beta_updates,
        }
    }

    pub fn set(&mut self, key: PreferenceKey, value: bool) {
        match key {
            PreferenceKey::DarkMode => self.dark_mode = value,
            PreferenceKey::Notifications => self.notifications = value,
            PreferenceKey::LaunchAtLogin => self.launch_at_login = value,
            PreferenceKey::BetaUpdates => self.beta_updates = value,
        }
    }

    /// Whether the toggle for `key` accepts interaction.
    ///
    /// Beta updates depend on notifications being enabled.
    #[must_use]
    pub const fn is_locked(&self, key: PreferenceKey) -> bool {
        matches!(key, PreferenceKey::BetaUpdates) && !self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_default() {
        let preferences = Preferences::default();
        for key in PreferenceKey::ALL {
            assert!(!preferences.get(key), "{}", key.as_str());
        }
    }

    #[test]
    fn set_updates_only_the_given_key() {
        let mut preferences = Preferences::default();
        preferences.set(PreferenceKey::LaunchAtLogin, true);
        assert!(preferences.launch_at_login);
        assert!(!preferences.dark_mode);
        assert!(!preferences.notifications);
    }

    #[test]
    fn beta_updates_locked_without_notifications() {
        let mut preferences = Preferences::default();
        assert!(preferences.is_locked(PreferenceKey::BetaUpdates));
        assert!(!preferences.is_locked(PreferenceKey::DarkMode));

        preferences.set(PreferenceKey::Notifications, true);
        assert!(!preferences.is_locked(PreferenceKey::BetaUpdates));
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }
}
