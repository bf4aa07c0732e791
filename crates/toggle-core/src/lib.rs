//! toggle-core - Core library for Toggle
//!
//! This crate contains the UI-agnostic pieces of the toggle control: the
//! switch state and its change rules, the typed style overrides, and the
//! appearance configuration read by host applications.

pub mod config;
pub mod error;
pub mod models;
mod util;

pub use error::{Error, Result};
pub use models::{StyleOverrides, SwitchState, ToggleContent};
