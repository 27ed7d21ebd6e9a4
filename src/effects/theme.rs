//! Theme toggle button.

use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;

use crate::state::page::PageHandle;
use crate::util::dom::{self, DomError};
use crate::util::theme;

const TOGGLE_ID: &str = "themeToggle";

pub fn install(page: PageHandle) -> Result<(), DomError> {
    let button = dom::by_id(TOGGLE_ID)?;
    dom::on(&button, "click", move |_| toggle(page))
}

/// Flip, persist and apply the theme, then spin the toggle button.
pub fn toggle(page: PageHandle) {
    let Some(current) = page.peek(|p| p.theme) else {
        return;
    };
    let cfg = page.config();
    let next = theme::toggle(current, &cfg.storage_key);
    page.update_quiet(|p| p.theme = next);
    log::debug!("theme now {}", next.as_stored());
    if let Ok(button) = dom::by_id(TOGGLE_ID) {
        spin(button, cfg.theme_spin_ms);
    }
}

fn spin(button: HtmlElement, duration_ms: u32) {
    dom::set_style(&button, "transform", "rotate(360deg)");
    Timeout::new(duration_ms, move || {
        dom::set_style(&button, "transform", "rotate(0deg)");
    })
    .forget();
}
