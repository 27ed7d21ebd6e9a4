//! folio: interactivity for a static portfolio page.
//!
//! The page's markup and styles stay in the HTML. This crate, compiled to
//! WASM with the `hydrate` feature, enhances that markup (navigation state,
//! theme, filtering, the contact form, scroll-driven animation) and mounts
//! the two overlay elements the page lacks. The state machines themselves
//! live in the browser-free `motion` crate.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Boot sequence and overlay root |
//! | [`components`] | Scroll-to-top button and notice stack |
//! | [`state`] | `PageState` signal shared by effects and components |
//! | `effects` | DOM event wiring (browser builds only) |
//! | [`util`] | DOM, storage, timer, observer and config helpers |

pub mod app;
pub mod components;
#[cfg(feature = "hydrate")]
pub mod effects;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match util::config::read() {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(err) => (motion::config::MotionConfig::default(), Some(err)),
    };
    let level = if config.debug_logging { log::Level::Debug } else { log::Level::Info };
    // A logger installed by the host page wins.
    let _ = console_log::init_with_level(level);
    if let Some(err) = config_error {
        log::warn!("ignoring #{}: {err}", util::config::CONFIG_ELEMENT_ID);
    }

    app::boot(config);
}
