//! Root component
//!
//! Owns all session state (search, theme, auth, toasts) and provides it via
//! context to the presentational components below it. The whole page is
//! gated behind the sign-in card until a user is present.

use dioxus::document;
use dioxus::prelude::*;

use crate::app::components::{ProcessPanel, ResultsList, SearchPanel, SignInCard, StatsPanel, ToastHost};
use crate::app::layouts::Navbar;
use crate::shared::hooks::{use_auth, use_search, use_theme, use_toasts};

#[component]
pub fn App() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let theme = use_theme();
    let auth = use_auth();
    let toasts = use_toasts();
    let search = use_search();

    use_context_provider(|| theme);
    use_context_provider(|| auth);
    use_context_provider(|| toasts);
    use_context_provider(|| search);

    use_effect(|| {
        tracing::info!("LinkedIn Post Finder initialized");
    });

    let signed_in = auth.user.read().is_some();

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        }

        if !signed_in {
            SignInCard {}
        } else {
            div { class: "c-layout",
                Navbar {}
                div { class: "c-layout__body",
                    main { class: "c-layout__main",
                        SearchPanel {}
                        ResultsList {}
                    }
                    aside { class: "c-layout__sidebar",
                        ProcessPanel {}
                        StatsPanel {}
                    }
                }
            }
        }

        ToastHost {}
    }
}
