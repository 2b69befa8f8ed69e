use dioxus::prelude::*;

use crate::shared::hooks::ThemeState;

/// Theme toggle switching the page between light and dark mode.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme_state = use_context::<ThemeState>();
    let is_dark = theme_state.current().is_dark();

    let icon = if is_dark { "☀️" } else { "🌙" };
    let tooltip = if is_dark {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };

    rsx! {
        button {
            class: "c-button c-button--ghost c-theme-toggle",
            "data-tooltip": "{tooltip}",
            aria_label: "Toggle dark mode",
            onclick: move |_| theme_state.toggle(),
            "{icon}"
        }
    }
}
