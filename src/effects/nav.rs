//! Navbar: sticky state, active link, mobile menu, in-page anchors, parallax.
//!
//! Raw scroll events drive the cheap per-frame updates (parallax, the
//! scroll-to-top flag). The sticky pass and the section pass each run behind
//! their own debouncer because they read layout.
//!
//! Each feature installs separately and looks up only the elements it needs,
//! so a page without (say) `#navbar` still gets the scroll-to-top flag.

use motion::config::MotionConfig;
use motion::menu::hamburger_pose;
use motion::scroll::{NavMetrics, Section, SectionExtent, anchor_id, anchor_scroll_target};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};

use crate::state::page::PageHandle;
use crate::util::debounce::Debounced;
use crate::util::dom::{self, DomError};

const STICKY_BORDER: &str = "rgba(61, 65, 86, 0.5)";

/// Parallax and the scroll-to-top flag on every raw scroll event. Needs only
/// the window; pages without `.hero-visual` just skip the parallax writes.
pub fn install_scroll(page: PageHandle) -> Result<(), DomError> {
    let cfg = page.config();
    let window = dom::window()?;
    let parallax = dom::query_all(".hero-visual")?;
    on_scroll(page, dom::scroll_y(), &parallax, &cfg);
    dom::on(&window, "scroll", move |_| on_scroll(page, dom::scroll_y(), &parallax, &cfg))
}

/// Debounced sticky pass on scroll and resize. Needs `#navbar`.
pub fn install_sticky(page: PageHandle) -> Result<(), DomError> {
    let cfg = page.config();
    let window = dom::window()?;
    let navbar = dom::by_id("navbar")?;

    let sticky = {
        let navbar = navbar.clone();
        let cfg = cfg.clone();
        Debounced::new(cfg.sticky_debounce_ms, move |()| refresh_sticky(page, &navbar, &cfg, false))
    };
    let resized = {
        let navbar = navbar.clone();
        let cfg = cfg.clone();
        Debounced::new(cfg.resize_debounce_ms, move |()| refresh_sticky(page, &navbar, &cfg, false))
    };
    dom::on(&window, "scroll", move |_| sticky.call(()))?;
    dom::on(&window, "resize", move |_| resized.call(()))?;
    refresh_sticky(page, &navbar, &cfg, true);
    Ok(())
}

/// Debounced section pass: extents and the active `.nav-link`.
pub fn install_sections(page: PageHandle) -> Result<(), DomError> {
    let cfg = page.config();
    let window = dom::window()?;
    let links = dom::query_all(".nav-link")?;

    let sections = {
        let links = links.clone();
        let cfg = cfg.clone();
        Debounced::new(cfg.active_link_debounce_ms, move |()| refresh_sections(page, &links, &cfg))
    };
    dom::on(&window, "scroll", move |_| sections.call(()))?;
    refresh_sections(page, &links, &cfg);
    Ok(())
}

fn on_scroll(page: PageHandle, y: f64, parallax: &[HtmlElement], cfg: &MotionConfig) {
    let Some((moved, top_changed, offset)) = page.update_quiet(|p| {
        let moved = p.scroll.update_parallax(y, cfg);
        let top_changed = p.scroll.update_scroll_top(y, cfg);
        (moved, top_changed, p.scroll.parallax_px())
    }) else {
        return;
    };
    if moved {
        let transform = format!("translateY({offset}px)");
        for el in parallax {
            dom::set_style(el, "transform", &transform);
        }
    }
    if top_changed {
        page.notify();
    }
}

fn refresh_sticky(page: PageHandle, navbar: &HtmlElement, cfg: &MotionConfig, force: bool) {
    let metrics = NavMetrics {
        hero_height: dom::by_id("hero").ok().map(|hero| f64::from(hero.offset_height())),
        navbar_height: Some(f64::from(navbar.offset_height())),
    };
    let y = dom::scroll_y();
    let Some((changed, sticky)) = page.update_quiet(|p| (p.scroll.update_sticky(y, metrics, cfg), p.scroll.is_sticky()))
    else {
        return;
    };
    if changed || force {
        dom::set_class(navbar, "sticky", sticky);
        dom::set_style(navbar, "border-bottom-color", if sticky { STICKY_BORDER } else { "transparent" });
    }
}

fn refresh_sections(page: PageHandle, links: &[HtmlElement], cfg: &MotionConfig) {
    let nodes = match dom::query_all("section") {
        Ok(nodes) => nodes,
        Err(err) => {
            log::debug!("section pass skipped: {err}");
            return;
        }
    };
    let viewport = dom::viewport_height();
    let mut sections = Vec::with_capacity(nodes.len());
    let mut extents = Vec::with_capacity(nodes.len());
    for node in nodes.iter().filter(|n| !n.id().is_empty()) {
        let id = node.id();
        let rect = node.get_bounding_client_rect();
        extents.push((id.clone(), SectionExtent::from_rect(rect.top(), rect.bottom(), viewport)));
        sections.push(Section::new(id, f64::from(node.offset_top()), f64::from(node.client_height())));
    }

    let y = dom::scroll_y();
    let active = page.update_quiet(|p| {
        p.record_extents(extents);
        p.scroll
            .update_active(y, &sections, cfg)
            .then(|| p.scroll.active().map(str::to_owned))
            .flatten()
    });
    if let Some(Some(active)) = active {
        log::debug!("active section: {active}");
        highlight(links, &active);
    }
}

/// Mark the link pointing at `active`; clear every other one.
fn highlight(links: &[HtmlElement], active: &str) {
    for link in links {
        let href = link.get_attribute("href");
        let on = href.as_deref().and_then(anchor_id) == Some(active);
        dom::set_class(link, "active", on);
    }
}

// =============================================================================
// MOBILE MENU
// =============================================================================

/// Hamburger toggle; any `.nav-link` click closes the menu. Needs `#hamburger`.
pub fn install_menu(page: PageHandle) -> Result<(), DomError> {
    let hamburger = dom::by_id("hamburger")?;
    dom::on(&hamburger, "click", move |_| toggle_menu(page))?;
    for link in dom::query_all(".nav-link")? {
        dom::on(&link, "click", move |_| close_menu(page))?;
    }
    Ok(())
}

/// Flip the mobile menu open or closed.
pub fn toggle_menu(page: PageHandle) {
    if let Some(open) = page.update_quiet(|p| p.menu.toggle()) {
        apply_menu(open);
    }
}

fn close_menu(page: PageHandle) {
    if page.update_quiet(|p| p.menu.close()) == Some(true) {
        apply_menu(false);
    }
}

fn apply_menu(open: bool) {
    let (Ok(menu), Ok(hamburger)) = (dom::by_id("navMenu"), dom::by_id("hamburger")) else {
        log::debug!("menu elements missing");
        return;
    };
    dom::set_class(&menu, "active", open);
    dom::set_class(&hamburger, "active", open);
    let Ok(bars) = hamburger.query_selector_all("span") else {
        return;
    };
    let bars = (0..bars.length()).filter_map(|i| bars.get(i)).filter_map(|n| n.dyn_into::<HtmlElement>().ok());
    for (bar, pose) in bars.zip(hamburger_pose(open)) {
        dom::set_style(&bar, "transform", pose.transform);
        dom::set_style(&bar, "opacity", pose.opacity);
    }
}

// =============================================================================
// IN-PAGE ANCHORS
// =============================================================================

/// Smooth scrolling for `a[href^="#"]` links whose target exists.
pub fn install_anchors(page: PageHandle) -> Result<(), DomError> {
    let offset = page.config().anchor_offset_px;
    for anchor in dom::query_all("a[href^=\"#\"]")? {
        let link = anchor.clone();
        dom::on(&anchor, "click", move |event: Event| {
            let href = link.get_attribute("href");
            let Some(id) = href.as_deref().and_then(anchor_id) else {
                return;
            };
            let Ok(target) = dom::by_id(id) else {
                return;
            };
            event.prevent_default();
            dom::scroll_to(anchor_scroll_target(f64::from(target.offset_top()), offset));
        })?;
    }
    Ok(())
}
