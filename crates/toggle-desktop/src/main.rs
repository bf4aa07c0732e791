//! Toggle Desktop Application
//!
//! A preferences window built from `ToggleControl`s.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod state;
mod theme;

use std::sync::OnceLock;

use dioxus::desktop::{Config, WindowBuilder};
use toggle_core::config::{resolve_appearance_config, AppearanceConfig, APPEARANCE_PATH_ENV};

/// Appearance loaded at startup, read once by the root component
pub static APPEARANCE: OnceLock<AppearanceConfig> = OnceLock::new();

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("toggle=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Toggle...");

    let appearance = resolve_appearance_config(std::env::var(APPEARANCE_PATH_ENV).ok())
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to load appearance config: {}. Using defaults.", e);
            AppearanceConfig::default()
        });
    if APPEARANCE.set(appearance).is_err() {
        tracing::debug!("Appearance config already set, keeping the first one");
    }

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Preferences")
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
