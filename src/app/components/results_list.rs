use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, PostCard};
use crate::shared::hooks::{SearchState, ToastState};
use crate::shared::logging;
use crate::shared::utils::{export_filename, posts_to_json, trigger_download};

/// Results card: count line, JSON export and one [`PostCard`] per post.
/// Renders nothing while the post list is empty.
#[component]
pub fn ResultsList() -> Element {
    let search = use_context::<SearchState>();
    let mut toasts = use_context::<ToastState>();

    let session = search.session.read();
    let posts = session.posts.clone();
    let keyword = session.keyword.trim().to_string();
    drop(session);

    if posts.is_empty() {
        return rsx! {};
    }

    let export_posts = posts.clone();
    let export_keyword = keyword.clone();
    let on_export = move |_| {
        match posts_to_json(&export_posts) {
            Ok(json) => {
                let filename = export_filename(&export_keyword);
                logging::log_export(&export_keyword, export_posts.len(), &filename);
                trigger_download(&filename, &json);
                toasts.success("Results exported successfully!");
            }
            Err(err) => toasts.error(err.to_string()),
        }
    };

    rsx! {
        div { class: "c-card c-results",
            div { class: "c-card__header c-results__header",
                div {
                    h3 { class: "c-card__title", "Search Results" }
                    p { class: "c-card__subtitle",
                        "Found {posts.len()} posts for \"{keyword}\""
                    }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: on_export,
                    "⬇ Export JSON"
                }
            }
            div { class: "c-card__body c-results__list",
                for post in posts.clone() {
                    PostCard { key: "{post.id}", post: post.clone() }
                }
            }
        }
    }
}
