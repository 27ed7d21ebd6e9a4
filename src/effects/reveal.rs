//! Visibility-triggered effects: card reveal, stat counters, play state.
//!
//! Reveal and counters are one-shot per element (`PageState::revealed`,
//! `PageState::counted`); play state follows visibility both ways.

use motion::animate::{CounterRamp, parse_counter_target, play_state};
use motion::config::MotionConfig;
use web_sys::HtmlElement;

use crate::state::page::PageHandle;
use crate::util::dom::{self, DomError};
use crate::util::observer::{self, Observer, ensure_key, key_of};
use crate::util::ticker;

const REVEAL_SELECTOR: &str = ".project-card, .journal-card, .skill-category, .stat-card";

pub fn install(page: PageHandle) -> Result<(), DomError> {
    let cfg = page.config();
    install_reveal(page, &cfg)?;
    install_counters(page, &cfg)?;
    install_play_state(&cfg)
}

/// Elements of `elements` whose key is in `armed`.
fn armed<'a>(elements: &'a [HtmlElement], keys: &'a [String]) -> impl Iterator<Item = &'a HtmlElement> {
    elements
        .iter()
        .filter(move |el| key_of(el).is_some_and(|key| keys.contains(&key)))
}

fn install_reveal(page: PageHandle, cfg: &MotionConfig) -> Result<(), DomError> {
    let observer = Observer::new(cfg.reveal_threshold, Some(cfg.reveal_root_margin.as_str()), move |batch| {
        let (mut crossings, elements) = observer::split(batch);
        let Some(keys) = page.update_quiet(|p| p.revealed.consume(&mut crossings)) else {
            return;
        };
        for el in armed(&elements, &keys) {
            dom::set_style(el, "opacity", "1");
            dom::set_style(el, "transform", "translateY(0)");
        }
    })?;
    for (i, el) in dom::query_all(REVEAL_SELECTOR)?.iter().enumerate() {
        ensure_key(el, "card", i);
        dom::set_style(el, "opacity", "0");
        dom::set_style(el, "transform", "translateY(20px)");
        dom::set_style(el, "transition", "opacity 0.6s ease, transform 0.6s ease");
        observer.observe(el);
    }
    Ok(())
}

fn install_counters(page: PageHandle, cfg: &MotionConfig) -> Result<(), DomError> {
    let duration_ms = cfg.counter_duration_ms;
    let tick_ms = cfg.counter_tick_ms;
    let suffix = cfg.counter_suffix.clone();
    let observer = Observer::new(cfg.stats_threshold, None, move |batch| {
        let (mut crossings, cards) = observer::split(batch);
        let Some(keys) = page.update_quiet(|p| p.counted.consume(&mut crossings)) else {
            return;
        };
        for card in armed(&cards, &keys) {
            dom::set_class(card, "animated", true);
            let Ok(number) = dom::query_in(card, ".stat-number") else {
                continue;
            };
            let Some(target) = number.text_content().as_deref().and_then(parse_counter_target) else {
                log::debug!("stat card without a numeric target");
                continue;
            };
            let ramp = CounterRamp::new(target, duration_ms, suffix.clone());
            ticker::drive(ramp, tick_ms, move |ramp| number.set_text_content(Some(&ramp.text())));
        }
    })?;
    for (i, card) in dom::query_all(".stat-card")?.iter().enumerate() {
        ensure_key(card, "stat", i);
        observer.observe(card);
    }
    Ok(())
}

fn install_play_state(cfg: &MotionConfig) -> Result<(), DomError> {
    let observer = Observer::new(cfg.reveal_threshold, None, |batch| {
        for seen in batch {
            dom::set_style(&seen.element, "animation-play-state", play_state(seen.crossing.intersecting));
        }
    })?;
    for (i, el) in dom::query_all("[style*=\"animation\"]")?.iter().enumerate() {
        ensure_key(el, "anim", i);
        observer.observe(el);
    }
    Ok(())
}
