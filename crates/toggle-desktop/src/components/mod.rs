//! UI Components
//!
//! Reusable UI components for the desktop application.

mod preferences_panel;
mod toggle_control;

pub use preferences_panel::PreferencesPanel;
pub use toggle_control::ToggleControl;
