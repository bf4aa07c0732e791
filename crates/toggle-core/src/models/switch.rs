//! Switch state and change rules for the toggle control

use crate::util::normalize_text_option;

/// The two behavioral inputs of a toggle, as passed by the caller on a render.
///
/// The caller owns the value. This type never changes `checked` on its own; it
/// only decides whether a raw interaction is reported back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwitchState {
    /// Current on/off value
    pub checked: bool,
    /// Whether interactions are ignored
    pub disabled: bool,
}

impl SwitchState {
    #[must_use]
    pub const fn new(checked: bool, disabled: bool) -> Self {
        Self { checked, disabled }
    }

    /// Value for the `aria-checked` attribute
    #[must_use]
    pub const fn aria_checked(self) -> &'static str {
        if self.checked {
            "true"
        } else {
            "false"
        }
    }

    /// Value for the `aria-disabled` attribute
    #[must_use]
    pub const fn aria_disabled(self) -> &'static str {
        if self.disabled {
            "true"
        } else {
            "false"
        }
    }

    /// Value for the `data-state` attribute
    #[must_use]
    pub const fn data_state(self) -> &'static str {
        if self.checked {
            "checked"
        } else {
            "unchecked"
        }
    }

    /// Decide what a raw interaction reporting `next` should produce.
    ///
    /// Returns the value to hand to the caller, or `None` when the control is
    /// disabled and the interaction must be discarded.
    #[must_use]
    pub const fn resolve_change(self, next: bool) -> Option<bool> {
        if self.disabled {
            None
        } else {
            Some(next)
        }
    }

    /// Report an interaction to `on_change` unless the control is disabled.
    ///
    /// Calls `on_change` at most once. Returns whether it was called.
    pub fn dispatch(self, next: bool, on_change: impl FnOnce(bool)) -> bool {
        match self.resolve_change(next) {
            Some(value) => {
                tracing::trace!(checked = self.checked, next = value, "Reporting toggle change");
                on_change(value);
                true
            }
            None => {
                tracing::debug!(
                    checked = self.checked,
                    next,
                    "Ignoring interaction on disabled toggle"
                );
                false
            }
        }
    }
}

/// Text shown next to the switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleContent {
    pub label: String,
    /// Secondary text; `None` means no description element is rendered
    pub description: Option<String>,
}

impl ToggleContent {
    /// Build content, treating a blank description as absent.
    pub fn new(label: impl Into<String>, description: Option<String>) -> Self {
        Self {
            label: label.into(),
            description: normalize_text_option(description),
        }
    }
}
