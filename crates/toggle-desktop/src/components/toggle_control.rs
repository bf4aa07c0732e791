use dioxus::prelude::*;

use toggle_core::{StyleOverrides, SwitchState, ToggleContent};

use crate::state::AppState;
use crate::theme::{ColorPalette, ResolvedTheme};

/// Inline styles for the parts of a toggle row.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ToggleStyles {
    row: String,
    label: String,
    description: String,
    switch: String,
}

fn toggle_styles(
    colors: &ColorPalette,
    state: SwitchState,
    overrides: &StyleOverrides,
) -> ToggleStyles {
    let cursor = if state.disabled {
        "not-allowed"
    } else {
        "pointer"
    };

    let mut row = format!(
        "display: flex; align-items: center; justify-content: space-between; gap: 16px; \
         padding: 12px 0; border-bottom: 1px solid {}; cursor: {cursor};",
        colors.border
    );
    if let Some(margin) = overrides.margin {
        row.push_str(&format!(" margin: {};", margin.to_css()));
    }

    // Disabled text is always muted, whatever the caller asked for.
    let (label_color, description_color) = if state.disabled {
        (colors.text_muted, colors.text_muted)
    } else {
        (
            overrides
                .label_color
                .as_ref()
                .map_or(colors.text_primary, |color| color.as_str()),
            overrides
                .description_color
                .as_ref()
                .map_or(colors.text_secondary, |color| color.as_str()),
        )
    };

    let accent = overrides
        .accent_color
        .as_ref()
        .map_or(colors.accent, |color| color.as_str());

    ToggleStyles {
        row,
        label: format!("display: block; font-weight: 500; color: {label_color};"),
        description: format!(
            "display: block; margin-top: 2px; font-size: 0.85em; color: {description_color};"
        ),
        switch: format!(
            "width: 36px; height: 20px; margin: 0; accent-color: {accent}; opacity: {}; cursor: {cursor};",
            if state.disabled { "0.5" } else { "1" }
        ),
    }
}

/// A labeled on/off switch for settings surfaces.
///
/// Fully controlled: the switch always shows `checked`, and a user toggle is
/// only reported through `on_change` with the new value. Callers must echo
/// that value back into `checked`: the native checkbox flips itself on click,
/// and an unchanged prop writes nothing to undo it. While `disabled`,
/// interactions are dropped.
#[component]
pub fn ToggleControl(
    checked: bool,
    on_change: EventHandler<bool>,
    #[props(into)] label: String,
    description: Option<String>,
    #[props(default)] disabled: bool,
    #[props(default)] style: StyleOverrides,
) -> Element {
    let colors = try_use_context::<AppState>()
        .map_or_else(ResolvedTheme::default, |state| (state.theme)())
        .palette();

    let state = SwitchState::new(checked, disabled);
    let content = ToggleContent::new(label, description);
    let styles = toggle_styles(colors, state, &style);
    let row_class = if disabled {
        "toggle-control toggle-control--disabled"
    } else {
        "toggle-control"
    };

    rsx! {
        label {
            class: row_class,
            style: "{styles.row}",
            "data-disabled": state.aria_disabled(),

            div {
                class: "toggle-control-info",
                span {
                    class: "toggle-control-label",
                    style: "{styles.label}",
                    "{content.label}"
                }
                if let Some(description) = content.description.as_ref() {
                    span {
                        class: "toggle-control-description",
                        style: "{styles.description}",
                        "{description}"
                    }
                }
            }

            input {
                class: "toggle-control-switch",
                r#type: "checkbox",
                role: "switch",
                style: "{styles.switch}",
                checked: state.checked,
                disabled: state.disabled,
                aria_checked: state.aria_checked(),
                aria_disabled: state.aria_disabled(),
                "data-state": state.data_state(),
                onchange: move |event: FormEvent| {
                    state.dispatch(event.checked(), |next| on_change.call(next));
                },
            }
        }
    }
}
