//! Shared utility functions used across multiple modules.

/// Normalize optional text by trimming whitespace and removing empties.
///
/// Returns `None` when the input is `None` or the trimmed value is empty.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Truncate text to at most 60 characters for error messages.
pub fn compact_text(value: &str) -> String {
    value.trim().chars().take(60).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_text_option_rejects_empty() {
        assert_eq!(normalize_text_option(None), None);
        assert_eq!(normalize_text_option(Some("   ".to_string())), None);
    }

    #[test]
    fn normalize_text_option_trims_value() {
        assert_eq!(
            normalize_text_option(Some(" Use dark theme ".to_string())),
            Some("Use dark theme".to_string())
        );
    }

    #[test]
    fn compact_text_caps_length() {
        let long = "x".repeat(200);
        assert_eq!(compact_text(&long).len(), 60);
        assert_eq!(compact_text("  red  "), "red");
    }
}
