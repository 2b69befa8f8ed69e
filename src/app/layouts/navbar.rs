use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, ThemeToggle};
use crate::shared::hooks::AuthState;

/// Sticky top bar: app identity on the left, theme toggle and sign-out on
/// the right.
#[component]
pub fn Navbar() -> Element {
    let mut auth = use_context::<AuthState>();
    let display_name = auth
        .user
        .read()
        .as_ref()
        .map(|user| user.display_name.clone())
        .unwrap_or_default();

    rsx! {
        nav { class: "c-navbar",
            div { class: "c-navbar__brand",
                div { class: "c-navbar__logo", "🔍" }
                div {
                    h1 { class: "c-navbar__title", "LinkedIn Post Finder" }
                    p { class: "c-navbar__subtitle", "Keyword-based post discovery tool" }
                }
            }
            div { class: "c-navbar__actions",
                span { class: "c-navbar__user", "{display_name}" }
                ThemeToggle {}
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| auth.sign_out(),
                    "Sign Out"
                }
            }
        }
    }
}
