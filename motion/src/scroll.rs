//! Scroll-driven presentation state.
//!
//! The host snapshots the live layout on each (debounced) scroll tick and
//! hands it to a [`ScrollTracker`]. The tracker owns the page's scroll flags
//! and reports whether each pass changed them, so the host only touches the
//! DOM when something moved.
//!
//! BOUNDARIES
//! ==========
//! Sections partition the page into half-open ranges `[offset, offset +
//! height)`, so a probe sitting exactly on a shared edge belongs to the lower
//! section and never to both. Thresholds (sticky trigger, scroll-to-top) are
//! crossed only when the offset strictly exceeds them. Neither has a
//! hysteresis band: an offset oscillating on a threshold flips the flag on
//! every pass.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::MotionConfig;

/// Layout snapshot of one `<section>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub offset: f64,
    pub height: f64,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<String>, offset: f64, height: f64) -> Self {
        Self { id: id.into(), offset, height }
    }

    /// Whether `y` falls in `[offset, offset + height)`.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.offset && y < self.offset + self.height
    }
}

/// The section containing `probe`, if any.
///
/// Sections from a real page never overlap; if a malformed snapshot does,
/// the first match in document order wins so the result is still unique.
#[must_use]
pub fn current_section(sections: &[Section], probe: f64) -> Option<&Section> {
    sections.iter().find(|s| s.contains(probe))
}

/// Scroll offset past which the navbar turns sticky.
#[must_use]
pub fn sticky_trigger(hero_height: f64, navbar_height: f64, min_trigger: f64) -> f64 {
    (hero_height - navbar_height).max(min_trigger)
}

/// Whether `offset` has crossed `threshold`.
#[must_use]
pub fn crossed(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Vertical translation for parallax layers.
#[must_use]
pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    scroll_y * factor
}

/// Scroll destination for an in-page anchor, leaving room for the navbar.
#[must_use]
pub fn anchor_scroll_target(target_offset: f64, navbar_offset: f64) -> f64 {
    (target_offset - navbar_offset).max(0.0)
}

/// Section id an in-page link points at.
///
/// `#` and `#!` are placeholder hrefs and never resolve.
#[must_use]
pub fn anchor_id(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("" | "!") | None => None,
        Some(id) => Some(id),
    }
}

/// Value for the `--vh` custom property: one percent of the viewport height.
#[must_use]
pub fn vh_unit(inner_height: f64) -> String {
    format!("{}px", inner_height / 100.0)
}

/// Where a section sits relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionExtent {
    pub top: f64,
    pub bottom: f64,
    pub in_view: bool,
}

impl SectionExtent {
    /// Build from a bounding rect measured against a viewport of `viewport_height`.
    #[must_use]
    pub fn from_rect(top: f64, bottom: f64, viewport_height: f64) -> Self {
        Self { top, bottom, in_view: top < viewport_height && bottom > 0.0 }
    }
}

/// Layout measurements needed by the sticky pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavMetrics {
    /// `#hero` height, or `None` when the page has no hero.
    pub hero_height: Option<f64>,
    /// `#navbar` height, or `None` when it cannot be measured.
    pub navbar_height: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    active: Option<String>,
    sticky: bool,
    scroll_top_visible: bool,
    parallax_px: f64,
}

impl ScrollTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the section whose nav link is highlighted.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.sticky
    }

    #[must_use]
    pub fn scroll_top_visible(&self) -> bool {
        self.scroll_top_visible
    }

    #[must_use]
    pub fn parallax_px(&self) -> f64 {
        self.parallax_px
    }

    /// Recompute the active section. Returns `true` when it changed.
    ///
    /// When the probe lands outside every section (below the footer, above
    /// the first section) the previous highlight is kept.
    pub fn update_active(&mut self, scroll_y: f64, sections: &[Section], cfg: &MotionConfig) -> bool {
        let probe = scroll_y + cfg.active_probe_offset_px;
        let Some(section) = current_section(sections, probe) else {
            return false;
        };
        if self.active.as_deref() == Some(section.id.as_str()) {
            return false;
        }
        self.active = Some(section.id.clone());
        true
    }

    /// Recompute the sticky flag. Returns `true` when it changed.
    pub fn update_sticky(&mut self, scroll_y: f64, metrics: NavMetrics, cfg: &MotionConfig) -> bool {
        let hero = metrics.hero_height.unwrap_or(cfg.hero_fallback_px);
        let navbar = metrics.navbar_height.unwrap_or(cfg.navbar_fallback_px);
        let next = crossed(scroll_y, sticky_trigger(hero, navbar, cfg.sticky_min_trigger_px));
        let changed = next != self.sticky;
        self.sticky = next;
        changed
    }

    /// Recompute scroll-to-top visibility. Returns `true` when it changed.
    pub fn update_scroll_top(&mut self, scroll_y: f64, cfg: &MotionConfig) -> bool {
        let next = crossed(scroll_y, cfg.scroll_top_threshold_px);
        let changed = next != self.scroll_top_visible;
        self.scroll_top_visible = next;
        changed
    }

    /// Recompute the parallax translation. Returns `true` when it changed.
    #[allow(clippy::float_cmp)]
    pub fn update_parallax(&mut self, scroll_y: f64, cfg: &MotionConfig) -> bool {
        let next = parallax_offset(scroll_y, cfg.parallax_factor);
        let changed = next != self.parallax_px;
        self.parallax_px = next;
        changed
    }
}
