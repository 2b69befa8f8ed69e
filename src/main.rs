//! LinkedIn Post Finder - Main Entry Point
//!
//! Client-only Dioxus web app: there is no server, no persistence and no
//! real LinkedIn access. Build and serve the wasm target with `dx serve`.

// Browser entry point
#[cfg(target_arch = "wasm32")]
fn main() {
    use linkedin_post_finder::app::App;
    use wasm_bindgen::JsValue;

    web_sys::console::log_1(&JsValue::from_str("[WASM] LinkedIn Post Finder initialized"));
    dioxus::launch(App);
}

// Native builds exist for `cargo test` and type-checking only; the UI has
// no native renderer.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("LinkedIn Post Finder is a web application; run it with `dx serve --platform web`");
}
