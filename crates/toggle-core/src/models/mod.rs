//! Data models for Toggle

mod preferences;
mod style;
mod switch;

pub use preferences::{PreferenceKey, Preferences, ThemeMode};
pub use style::{CssColor, Margin, StyleOverrides};
pub use switch::{SwitchState, ToggleContent};
