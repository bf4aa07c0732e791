//! Typed style overrides accepted by the toggle control

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::compact_text;

/// A CSS color value: hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) or a named
/// color made only of ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CssColor(String);

impl CssColor {
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        let valid = match value.strip_prefix('#') {
            Some(hex) => {
                matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
            }
            None => !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic()),
        };

        if valid {
            Ok(Self(value.to_string()))
        } else {
            Err(Error::InvalidInput(format!(
                "invalid color '{}'",
                compact_text(value)
            )))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CssColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CssColor> for String {
    fn from(color: CssColor) -> Self {
        color.0
    }
}

/// Outer spacing in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Margin {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Margin {
    #[must_use]
    pub const fn vertical(px: u16) -> Self {
        Self {
            top: px,
            right: 0,
            bottom: px,
            left: 0,
        }
    }

    /// CSS shorthand, e.g. `4px 0px 4px 0px`
    #[must_use]
    pub fn to_css(self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// Style properties a caller may override on a toggle.
///
/// Anything not set here comes from the active theme.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverrides {
    /// Outer margin of the whole row
    pub margin: Option<Margin>,
    /// Switch color when checked
    pub accent_color: Option<CssColor>,
    /// Label color while enabled
    pub label_color: Option<CssColor>,
    /// Description color while enabled
    pub description_color: Option<CssColor>,
}

impl StyleOverrides {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.margin.is_none()
            && self.accent_color.is_none()
            && self.label_color.is_none()
            && self.description_color.is_none()
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }

    #[must_use]
    pub fn with_accent_color(mut self, color: CssColor) -> Self {
        self.accent_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_label_color(mut self, color: CssColor) -> Self {
        self.label_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_description_color(mut self, color: CssColor) -> Self {
        self.description_color = Some(color);
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn css_color_accepts_hex_and_names() {
        for value in ["#fff", "#ffff", "#4f46e5", "#4f46e5cc", "rebeccapurple", " red "] {
            assert!(CssColor::parse(value).is_ok(), "{value} should parse");
        }
        assert_eq!(CssColor::parse(" red ").unwrap().as_str(), "red");
    }

    #[test]
    fn css_color_rejects_malformed_values() {
        for value in ["", "#", "#12345", "#ggg", "red;", "url(x)", "light blue"] {
            let error = CssColor::parse(value).unwrap_err();
            assert!(matches!(error, Error::InvalidInput(_)), "{value}");
        }
    }

    #[test]
    fn margin_renders_css_shorthand() {
        let margin = Margin {
            top: 1,
            right: 2,
            bottom: 3,
            left: 4,
        };
        assert_eq!(margin.to_css(), "1px 2px 3px 4px");
        assert_eq!(Margin::vertical(4).to_css(), "4px 0px 4px 0px");
    }

    #[test]
    fn default_overrides_are_empty() {
        assert!(StyleOverrides::default().is_empty());
        assert!(!StyleOverrides::default()
            .with_margin(Margin::vertical(2))
            .is_empty());
    }

    #[test]
    fn overrides_deserialize_partial_json() {
        let overrides: StyleOverrides = serde_json::from_str(
            r##"{"accent_color": "#16a34a", "margin": {"top": 4, "bottom": 4}}"##,
        )
        .unwrap();

        assert_eq!(
            overrides,
            StyleOverrides::default()
                .with_accent_color(CssColor::parse("#16a34a").unwrap())
                .with_margin(Margin::vertical(4))
        );
    }

    #[test]
    fn overrides_reject_unknown_fields_and_bad_colors() {
        assert!(serde_json::from_str::<StyleOverrides>(r#"{"padding": 4}"#).is_err());
        assert!(serde_json::from_str::<StyleOverrides>(r#"{"label_color": "red;"}"#).is_err());
    }
}
