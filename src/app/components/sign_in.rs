use dioxus::prelude::*;

use crate::app::components::{Button, Card};
use crate::shared::hooks::AuthState;

/// Full-page gate shown whenever no user is signed in.
#[component]
pub fn SignInCard() -> Element {
    let mut auth = use_context::<AuthState>();

    rsx! {
        div { class: "c-signin",
            Card {
                title: "LinkedIn Post Finder".to_string(),
                subtitle: "Please sign in to continue".to_string(),
                div { class: "c-signin__actions",
                    Button {
                        onclick: move |_| auth.sign_in(),
                        "Sign In"
                    }
                }
            }
        }
    }
}
