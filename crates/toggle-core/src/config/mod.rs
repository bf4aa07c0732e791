//! Appearance configuration for host applications.
//!
//! Provides a unified `AppearanceConfig` read from an optional JSON file so a
//! host can pick its theme mode and restyle every toggle it renders.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{StyleOverrides, ThemeMode};

/// Environment variable naming the appearance file.
pub const APPEARANCE_PATH_ENV: &str = "TOGGLE_APPEARANCE_PATH";

/// Appearance settings shared by all toggles of a host.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AppearanceConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default)]
    pub style: StyleOverrides,
}

/// Parse an appearance config from a raw JSON payload.
pub fn parse_appearance_config(payload: &str) -> Result<AppearanceConfig> {
    Ok(serde_json::from_str(payload)?)
}

/// Read and parse an appearance config file.
pub fn load_appearance_config(path: &Path) -> Result<AppearanceConfig> {
    let payload = std::fs::read_to_string(path)?;
    let config = parse_appearance_config(&payload)?;
    tracing::debug!("Loaded appearance config from {}", path.display());
    Ok(config)
}

/// Resolve the appearance config from an optional path value.
///
/// A missing or blank path yields the defaults. A path that cannot be read or
/// parsed is an error so the caller can decide how loudly to fall back.
pub fn resolve_appearance_config(path: Option<String>) -> Result<AppearanceConfig> {
    match crate::util::normalize_text_option(path) {
        Some(path) => load_appearance_config(Path::new(&path)),
        None => Ok(AppearanceConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{CssColor, Margin};
    use crate::Error;

    #[test]
    fn parse_full_config() {
        let config = parse_appearance_config(
            r##"{
                "theme": "dark",
                "style": {
                    "accent_color": "#16a34a",
                    "margin": { "top": 4, "right": 0, "bottom": 4, "left": 0 }
                }
            }"##,
        )
        .unwrap();

        assert_eq!(
            config,
            AppearanceConfig {
                theme: ThemeMode::Dark,
                style: StyleOverrides::default()
                    .with_accent_color(CssColor::parse("#16a34a").unwrap())
                    .with_margin(Margin::vertical(4)),
            }
        );
    }

    #[test]
    fn parse_empty_object_gives_defaults() {
        assert_eq!(
            parse_appearance_config("{}").unwrap(),
            AppearanceConfig::default()
        );
    }

    #[test]
    fn parse_rejects_unknown_fields() {
        let error = parse_appearance_config(r#"{"font": "mono"}"#).unwrap_err();
        assert!(matches!(error, Error::Serialization(_)));
    }

    #[test]
    fn parse_rejects_invalid_color() {
        let error = parse_appearance_config(r#"{"style": {"accent_color": "not a color"}}"#)
            .unwrap_err();
        assert!(error.to_string().contains("invalid color"));
    }

    #[test]
    fn resolve_without_path_uses_defaults() {
        assert_eq!(
            resolve_appearance_config(None).unwrap(),
            AppearanceConfig::default()
        );
        assert_eq!(
            resolve_appearance_config(Some("  ".to_string())).unwrap(),
            AppearanceConfig::default()
        );
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"theme": "light"}}"#).unwrap();

        let config =
            resolve_appearance_config(Some(file.path().display().to_string())).unwrap();
        assert_eq!(config.theme, ThemeMode::Light);
        assert!(config.style.is_empty());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = load_appearance_config(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(error, Error::Io(_)));
    }
}
