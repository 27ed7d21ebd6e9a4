//! Theme initialization and toggle.
//!
//! Reads the preference from `localStorage` and applies it to the page: the
//! `light-mode` class on `<body>`, plus the icon and tooltip of the
//! `#themeToggle` button. Toggle writes back to `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: an unreadable store yields the dark default
//! and a failed write only logs, so the toggle itself never fails.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use motion::theme::{Theme, load_theme, toggle_theme};

use crate::util::storage::LocalStore;

/// Read the persisted theme stored under `key`.
pub fn read_preference(key: &str) -> Theme {
    load_theme(&LocalStore, key)
}

/// Reflect `theme` on `<body>` and on the toggle button.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::dom;

        if let Some(body) = dom::document().ok().and_then(|d| d.body()) {
            dom::set_class(&body, "light-mode", !theme.is_dark());
        }
        let Ok(button) = dom::by_id("themeToggle") else {
            return;
        };
        button.set_title(theme.toggle_title());
        if let Ok(icon) = dom::query_in(&button, "i") {
            dom::set_class(&icon, theme.toggled().icon_class(), false);
            dom::set_class(&icon, theme.icon_class(), true);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip `current`, persist it under `key`, apply it, and return it.
pub fn toggle(current: Theme, key: &str) -> Theme {
    let next = toggle_theme(&LocalStore, key, current);
    apply(next);
    next
}
