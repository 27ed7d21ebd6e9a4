//! Global keyboard shortcuts.

use motion::menu::Shortcut;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};

use crate::effects::{nav, theme};
use crate::state::page::PageHandle;
use crate::util::dom::{self, DomError};

pub fn install(page: PageHandle) -> Result<(), DomError> {
    let document = dom::document()?;
    dom::on(&document, "keydown", move |event: Event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let Some(shortcut) = Shortcut::from_key(&key.code(), key.alt_key()) else {
            return;
        };
        if shortcut.prevents_default() {
            event.prevent_default();
        }
        match shortcut {
            Shortcut::ToggleMenu => nav::toggle_menu(page),
            Shortcut::ToggleTheme => theme::toggle(page),
            Shortcut::ScrollTop => dom::scroll_to(0.0),
        }
    })
}
