use dioxus::prelude::*;

use crate::app::components::Card;
use crate::shared::hooks::SearchState;

/// Session statistics sidebar panel. Everything here resets on reload.
#[component]
pub fn StatsPanel() -> Element {
    let search = use_context::<SearchState>();
    let session = search.session.read();

    let searches = session.history.len();
    let posts_found = session.posts.len();
    let current_keyword = if session.keyword.trim().is_empty() {
        "None".to_string()
    } else {
        session.keyword.clone()
    };
    let last_search = session
        .last_search_at
        .map(|at| at.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "—".to_string());
    drop(session);

    rsx! {
        Card {
            title: "Session Statistics".to_string(),

            div { class: "c-stats",
                div { class: "c-stats__row",
                    span { class: "c-stats__label", "Searches performed:" }
                    span { class: "c-stats__value", "{searches}" }
                }
                div { class: "c-stats__row",
                    span { class: "c-stats__label", "Posts found:" }
                    span { class: "c-stats__value", "{posts_found}" }
                }
                div { class: "c-stats__row",
                    span { class: "c-stats__label", "Current keyword:" }
                    span { class: "c-stats__value", "{current_keyword}" }
                }
                div { class: "c-stats__row",
                    span { class: "c-stats__label", "Last search:" }
                    span { class: "c-stats__value", "{last_search}" }
                }
            }
        }
    }
}
