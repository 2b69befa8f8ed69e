use dioxus::prelude::*;

use crate::app::components::{Button, Card};
use crate::shared::hooks::{SearchState, ToastState};

/// Keyword input, simulated-search trigger, progress feedback and the
/// recent-searches chips.
#[component]
pub fn SearchPanel() -> Element {
    let search = use_context::<SearchState>();
    let toasts = use_context::<ToastState>();

    let session = search.session.read();
    let keyword = session.keyword.clone();
    let loading = session.loading;
    let progress = session.progress;
    let history = session.history.clone();
    drop(session);

    let chips = history.terms().iter().cloned().map(|term| {
        let label = term.clone();
        rsx! {
            button {
                key: "{label}",
                class: "c-chip",
                onclick: move |_| search.recall_term(&term),
                "{label}"
            }
        }
    });

    rsx! {
        Card {
            title: "Search LinkedIn Posts".to_string(),
            subtitle: "Enter a keyword to find relevant LinkedIn posts with metadata".to_string(),

            div { class: "c-search__row",
                input {
                    r#type: "text",
                    class: "c-search__input",
                    placeholder: "Enter keyword (e.g., AI, Marketing, Leadership)",
                    value: "{keyword}",
                    oninput: move |evt| search.set_keyword(evt.value()),
                    onkeypress: move |evt| {
                        if evt.key() == Key::Enter {
                            search.submit(toasts);
                        }
                    },
                }
                Button {
                    disabled: loading,
                    onclick: move |_| search.submit(toasts),
                    if loading { "Searching..." } else { "Search" }
                }
            }

            if loading {
                div { class: "c-search__progress",
                    div { class: "c-search__progress-labels",
                        span { "Fetching posts..." }
                        span { "{progress}%" }
                    }
                    div { class: "c-progress",
                        div {
                            class: "c-progress__bar",
                            style: "width: {progress}%",
                        }
                    }
                }
            }

            if !history.is_empty() {
                div { class: "c-search__history",
                    p { class: "c-search__history-label", "Recent searches:" }
                    div { class: "c-search__history-chips",
                        {chips}
                    }
                }
            }
        }
    }
}
