//! `--vh` custom property and page visibility logging.

use motion::scroll::vh_unit;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::util::dom::{self, DomError};

pub fn install() -> Result<(), DomError> {
    let window = dom::window()?;
    set_vh();
    dom::on(&window, "resize", |_| set_vh())?;
    dom::on(&window, "orientationchange", |_| set_vh())?;

    let document = dom::document()?;
    let watched = document.clone();
    dom::on(&document, "visibilitychange", move |_| {
        if watched.hidden() {
            log::info!("page hidden, animations paused");
        } else {
            log::info!("page visible, animations resumed");
        }
    })
}

fn set_vh() {
    let root = dom::document()
        .ok()
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(root) = root {
        dom::set_style(&root, "--vh", &vh_unit(dom::viewport_height()));
    }
}
