//! Toast notifications, stacked at the top right.
//!
//! SYSTEM CONTEXT
//! ==============
//! Notices are posted to `PageState::notices`; the timers in
//! `effects::notify` move them to `Leaving` and then remove them. This
//! component only renders the queue.

#[cfg(test)]
#[path = "notice_stack_test.rs"]
mod notice_stack_test;

use leptos::prelude::*;
use motion::notify::{NoticeKind, NoticePhase};

use crate::state::page::PageState;

const STACK_STYLE: &str = "position: fixed; top: 100px; right: 20px; z-index: 9999; \
     display: flex; flex-direction: column; gap: 10px; pointer-events: none;";

/// Inline style for one toast.
pub fn notice_style(kind: NoticeKind, phase: NoticePhase) -> String {
    let animation = match phase {
        NoticePhase::Shown => "slideInRight 0.3s ease",
        NoticePhase::Leaving => "slideInLeft 0.3s ease forwards",
    };
    format!(
        "padding: 15px 25px; background: {}; color: #0a0e27; border-radius: 8px; \
         font-weight: 600; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3); animation: {animation};",
        kind.accent()
    )
}

#[component]
pub fn NoticeStack() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let notices = move || page.with(|p| p.notices.items().to_vec());

    view! {
        <div class="notice-stack" style=STACK_STYLE aria-live="polite">
            <For
                each=notices
                key=|notice| (notice.id, notice.phase)
                children=move |notice| {
                    view! {
                        <div class=notice.kind.class() role="status" style=notice_style(notice.kind, notice.phase)>
                            {notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
