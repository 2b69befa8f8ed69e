use dioxus::prelude::*;

#[component]
pub fn Card(
    title: Option<String>,
    subtitle: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "c-card",
            if title.is_some() || subtitle.is_some() {
                div {
                    class: "c-card__header",
                    if let Some(title) = title {
                        h3 {
                            class: "c-card__title",
                            "{title}"
                        }
                    }
                    if let Some(subtitle) = subtitle {
                        p {
                            class: "c-card__subtitle",
                            "{subtitle}"
                        }
                    }
                }
            }
            div {
                class: "c-card__body",
                {children}
            }
        }
    }
}
