use dioxus::prelude::*;

use crate::shared::logging;

/// Light/dark presentation flag. Session-local, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: Signal<Theme>,
}

impl ThemeState {
    pub fn toggle(&mut self) {
        let next = self.theme.peek().toggled();
        self.theme.set(next);
        logging::log_theme_change(next.as_str());
    }

    pub fn current(&self) -> Theme {
        *self.theme.read()
    }
}

/// Hook owning the theme flag. Mirrors every change onto the document root
/// as a `light`/`dark` class so the stylesheet variables switch over.
pub fn use_theme() -> ThemeState {
    let theme = use_signal(Theme::default);

    use_effect(move || {
        apply_theme_class(theme());
    });

    ThemeState { theme }
}

/// Swap the theme class on the document element.
#[cfg(target_arch = "wasm32")]
fn apply_theme_class(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    let class_list = root.class_list();
    let _ = class_list.remove_2("light", "dark");
    let _ = class_list.add_1(theme.as_str());
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_theme_class(_theme: Theme) {
    // No document outside the browser
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_flips_between_light_and_dark() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }
}
