// Custom Dioxus hooks
pub mod use_auth;
pub mod use_search;
pub mod use_theme;
pub mod use_toasts;

pub use use_auth::{use_auth, AuthState};
pub use use_search::{use_search, SearchState};
pub use use_theme::{use_theme, Theme, ThemeState};
pub use use_toasts::{use_toasts, Toast, ToastKind, ToastState};
