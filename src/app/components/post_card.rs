use dioxus::prelude::*;

use crate::domain::models::Post;
use crate::shared::hooks::ToastState;
use crate::shared::utils::copy_to_clipboard;

/// One synthetic post result with its metadata row, engagement counters,
/// a copy-URL action and an external link.
#[component]
pub fn PostCard(post: Post) -> Element {
    let mut toasts = use_context::<ToastState>();
    let url = post.url.clone();

    rsx! {
        div { class: "c-post",
            div { class: "c-post__header",
                h3 { class: "c-post__title", "{post.title}" }
                button {
                    class: "c-button c-button--ghost c-post__copy",
                    aria_label: "Copy post URL",
                    onclick: move |_| {
                        copy_to_clipboard(&url);
                        toasts.success("Copied to clipboard!");
                    },
                    "📋"
                }
            }

            div { class: "c-post__meta",
                span { class: "c-post__meta-item", "👤 {post.author}" }
                span { class: "c-post__meta-item", "📅 {post.date}" }
                span { class: "c-post__meta-item", "🕐 {post.time}" }
            }

            p { class: "c-post__description", "{post.description}" }

            div { class: "c-post__footer",
                div { class: "c-post__engagement",
                    span { "👍 {post.engagement.likes}" }
                    span { "💬 {post.engagement.comments}" }
                    span { "🔄 {post.engagement.shares}" }
                }
                a {
                    class: "c-button c-button--secondary c-post__link",
                    href: "{post.url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "View Post"
                }
            }
        }
    }
}
