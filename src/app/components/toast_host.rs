use dioxus::prelude::*;

use crate::shared::hooks::ToastState;

/// Renders active notifications in a fixed overlay. Clicking a toast
/// dismisses it early; otherwise each one auto-dismisses on its own timer.
#[component]
pub fn ToastHost() -> Element {
    let mut toast_state = use_context::<ToastState>();
    let toasts = toast_state.toasts.read().clone();

    let items = toasts.into_iter().map(move |toast| {
        let id = toast.id;
        rsx! {
            div {
                key: "{id}",
                class: "c-toast c-toast--{toast.kind.as_str()}",
                onclick: move |_| toast_state.dismiss(id),
                span { class: "c-toast__message", "{toast.message}" }
            }
        }
    });

    rsx! {
        div { class: "c-toast-host",
            {items}
        }
    }
}
