//! Boot sequence and the overlay root component.
//!
//! SYSTEM CONTEXT
//! ==============
//! `boot` applies the stored theme before anything renders, then mounts
//! [`Overlay`]. The overlay owns the page signal, provides it as context for
//! the components, and installs the DOM effects against the static markup.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use motion::config::MotionConfig;
use motion::theme::Theme;

use crate::components::notice_stack::NoticeStack;
use crate::components::scroll_top::ScrollTopButton;
use crate::state::page::{PageHandle, PageState};
use crate::util::dom::DomError;

#[component]
pub fn Overlay(config: MotionConfig, theme: Theme) -> impl IntoView {
    let page = PageHandle::new(config, theme);
    provide_context::<RwSignal<PageState>>(page.state);

    #[cfg(feature = "hydrate")]
    install_effects(page);

    view! {
        <ScrollTopButton/>
        <NoticeStack/>
    }
}

/// Apply the persisted theme and mount the overlay.
#[cfg(feature = "hydrate")]
pub fn boot(config: MotionConfig) {
    let theme = crate::util::theme::read_preference(&config.storage_key);
    crate::util::theme::apply(theme);
    log::info!("folio starting ({} theme)", theme.as_stored());
    leptos::mount::mount_to_body(move || view! { <Overlay config=config theme=theme/> });
}

/// One independently installable effect.
pub type Step<H> = (&'static str, fn(H) -> Result<(), DomError>);

/// Run every step against `handle`, logging failures without stopping.
/// Returns the names of the steps that were disabled.
pub fn run_steps<H: Copy>(handle: H, steps: &[Step<H>]) -> Vec<&'static str> {
    let mut disabled = Vec::new();
    for (name, install) in steps {
        match install(handle) {
            Ok(()) => log::debug!("{name} effects installed"),
            Err(err) => {
                log::warn!("{name} effects disabled: {err}");
                disabled.push(*name);
            }
        }
    }
    disabled
}

#[cfg(feature = "hydrate")]
fn install_effects(page: PageHandle) {
    use crate::effects;

    let steps: [Step<PageHandle>; 13] = [
        ("viewport", |_| effects::viewport::install()),
        ("scroll", effects::nav::install_scroll),
        ("sticky", effects::nav::install_sticky),
        ("sections", effects::nav::install_sections),
        ("menu", effects::nav::install_menu),
        ("anchors", effects::nav::install_anchors),
        ("theme", effects::theme::install),
        ("filter", effects::filter::install),
        ("contact", effects::contact::install),
        ("reveal", effects::reveal::install),
        ("typed", effects::typed::install),
        ("keys", effects::keys::install),
        ("notify", effects::notify::install),
    ];
    run_steps(page, &steps);
}
