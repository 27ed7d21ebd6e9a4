//! Floating "back to top" button.

#[cfg(test)]
#[path = "scroll_top_test.rs"]
mod scroll_top_test;

use leptos::prelude::*;

use crate::state::page::PageState;
use crate::util::dom;

const BASE_STYLE: &str = "position: fixed; bottom: 30px; right: 30px; width: 50px; height: 50px; \
     background: linear-gradient(135deg, #00d4ff, #0099cc); color: #0a0e27; border: none; \
     border-radius: 8px; cursor: pointer; align-items: center; justify-content: center; \
     font-size: 1.2rem; z-index: 999; box-shadow: 0 4px 12px rgba(0, 212, 255, 0.3); \
     transition: all 0.3s ease;";

/// Inline style for the button; only `display` depends on visibility.
pub fn scroll_top_style(visible: bool) -> String {
    let display = if visible { "flex" } else { "none" };
    format!("{BASE_STYLE} display: {display};")
}

#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let style = move || scroll_top_style(page.with(|p| p.scroll.scroll_top_visible()));

    view! {
        <button
            class="scroll-top"
            title="Scroll to top (or press Home)"
            aria-label="Scroll to top"
            style=style
            on:click=move |_| dom::scroll_to(0.0)
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
