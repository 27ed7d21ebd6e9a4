//! Thin `web-sys` helpers shared by the page effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every effect locates its elements through these helpers so a missing or
//! mistyped element surfaces as a [`DomError`] for that effect alone instead
//! of a panic. Outside the browser the scroll helpers are no-ops so that
//! components stay callable from native tests.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("missing element `{0}`")]
    Missing(String),
    #[error("element `{0}` has an unexpected type")]
    WrongType(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

#[cfg(feature = "hydrate")]
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

#[cfg(feature = "hydrate")]
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// `document.getElementById(id)` as an `HtmlElement`.
#[cfg(feature = "hydrate")]
pub fn by_id(id: &str) -> Result<HtmlElement, DomError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::Missing(format!("#{id}")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::WrongType(format!("#{id}")))
}

/// `by_id` cast to a more specific element type.
#[cfg(feature = "hydrate")]
pub fn by_id_as<T: JsCast>(id: &str) -> Result<T, DomError> {
    by_id(id)?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongType(format!("#{id}")))
}

/// All elements matching `selector`, in document order.
#[cfg(feature = "hydrate")]
pub fn query_all(selector: &str) -> Result<Vec<HtmlElement>, DomError> {
    let list = document()?.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// First element under `parent` matching `selector`.
#[cfg(feature = "hydrate")]
pub fn query_in(parent: &Element, selector: &str) -> Result<HtmlElement, DomError> {
    parent
        .query_selector(selector)?
        .ok_or_else(|| DomError::Missing(selector.to_owned()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::WrongType(selector.to_owned()))
}

/// Attach a listener for the page lifetime.
#[cfg(feature = "hydrate")]
pub fn on(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), DomError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Set one inline style property, logging rather than failing.
#[cfg(feature = "hydrate")]
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::debug!("style {property} not applied: {err:?}");
    }
}

/// Add or remove `class` on `el`.
#[cfg(feature = "hydrate")]
pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(err) = result {
        log::debug!("class {class} not toggled: {err:?}");
    }
}

/// Current vertical scroll offset, `0` when unknown.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Viewport height, `0` when unknown.
pub fn viewport_height() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smoothly scroll the window to `top`.
pub fn scroll_to(top: f64) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = top;
    }
}

/// Milliseconds since the epoch from the browser clock.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
