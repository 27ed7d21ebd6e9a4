//! `IntersectionObserver` reduced to keyed [`Crossing`]s.
//!
//! Observed elements are tagged with a `data-folio-key` attribute so the
//! one-shot bookkeeping in `motion` never holds DOM handles.

use motion::animate::Crossing;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::util::dom::DomError;

pub const KEY_ATTR: &str = "data-folio-key";

/// One observer entry: the element and its keyed crossing.
pub struct Observed {
    pub element: HtmlElement,
    pub crossing: Crossing,
}

pub struct Observer {
    inner: IntersectionObserver,
}

impl Observer {
    /// Observe with a single visibility `threshold` and optional root margin.
    /// `handler` receives each callback's entries as one batch; untagged
    /// targets are skipped.
    pub fn new(
        threshold: f64,
        root_margin: Option<&str>,
        mut handler: impl FnMut(Vec<Observed>) + 'static,
    ) -> Result<Self, DomError> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let batch: Vec<Observed> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|entry| {
                        let element = entry.target().dyn_into::<HtmlElement>().ok()?;
                        let key = key_of(&element)?;
                        Some(Observed { element, crossing: Crossing::new(key, entry.is_intersecting()) })
                    })
                    .collect();
                if !batch.is_empty() {
                    handler(batch);
                }
            },
        );
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }
        let inner = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        callback.forget();
        Ok(Self { inner })
    }

    pub fn observe(&self, el: &HtmlElement) {
        self.inner.observe(el);
    }
}

/// Tag `el` with `prefix-index` unless it already carries a key; return the key.
pub fn ensure_key(el: &HtmlElement, prefix: &str, index: usize) -> String {
    if let Some(key) = key_of(el) {
        return key;
    }
    let key = format!("{prefix}-{index}");
    if let Err(err) = el.set_attribute(KEY_ATTR, &key) {
        log::debug!("could not tag {key}: {err:?}");
    }
    key
}

pub fn key_of(el: &HtmlElement) -> Option<String> {
    el.get_attribute(KEY_ATTR)
}

/// Split a batch into the crossings `motion` consumes and the elements to
/// update afterwards.
pub fn split(batch: Vec<Observed>) -> (Vec<Crossing>, Vec<HtmlElement>) {
    batch.into_iter().map(|o| (o.crossing, o.element)).unzip()
}
