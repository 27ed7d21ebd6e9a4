#![allow(clippy::float_cmp)]

use super::*;

fn page() -> Vec<Section> {
    vec![
        Section::new("hero", 0.0, 600.0),
        Section::new("about", 600.0, 800.0),
        Section::new("projects", 1400.0, 1200.0),
        Section::new("contact", 2600.0, 500.0),
    ]
}

fn cfg() -> MotionConfig {
    MotionConfig::default()
}

// =============================================================
// Section matching
// =============================================================

#[test]
fn section_range_is_half_open() {
    let s = Section::new("a", 100.0, 50.0);
    assert!(!s.contains(99.9));
    assert!(s.contains(100.0));
    assert!(s.contains(149.9));
    assert!(!s.contains(150.0));
}

#[test]
fn at_most_one_section_is_current_for_any_offset() {
    let sections = page();
    let mut y = -200.0;
    while y < 3500.0 {
        let matches = sections.iter().filter(|s| s.contains(y)).count();
        assert!(matches <= 1, "offset {y} matched {matches} sections");
        let current = current_section(&sections, y);
        assert_eq!(current.is_some(), matches == 1, "offset {y}");
        y += 12.5;
    }
}

#[test]
fn shared_edge_belongs_to_lower_section() {
    let sections = page();
    assert_eq!(current_section(&sections, 600.0).map(|s| s.id.as_str()), Some("about"));
    assert_eq!(current_section(&sections, 599.0).map(|s| s.id.as_str()), Some("hero"));
}

#[test]
fn overlapping_sections_resolve_to_first() {
    let sections = vec![Section::new("a", 0.0, 500.0), Section::new("b", 400.0, 500.0)];
    assert_eq!(current_section(&sections, 450.0).map(|s| s.id.as_str()), Some("a"));
}

// =============================================================
// Active link
// =============================================================

#[test]
fn active_uses_probe_offset() {
    let mut tracker = ScrollTracker::new();
    // 520 + 100 lands in "about".
    assert!(tracker.update_active(520.0, &page(), &cfg()));
    assert_eq!(tracker.active(), Some("about"));
}

#[test]
fn active_reports_change_only_once() {
    let mut tracker = ScrollTracker::new();
    assert!(tracker.update_active(0.0, &page(), &cfg()));
    assert!(!tracker.update_active(10.0, &page(), &cfg()));
    assert_eq!(tracker.active(), Some("hero"));
}

#[test]
fn active_is_kept_when_probe_is_past_last_section() {
    let mut tracker = ScrollTracker::new();
    tracker.update_active(2700.0, &page(), &cfg());
    assert_eq!(tracker.active(), Some("contact"));
    assert!(!tracker.update_active(9000.0, &page(), &cfg()));
    assert_eq!(tracker.active(), Some("contact"));
}

#[test]
fn active_is_none_before_any_match() {
    let mut tracker = ScrollTracker::new();
    assert!(!tracker.update_active(0.0, &[], &cfg()));
    assert_eq!(tracker.active(), None);
}

// =============================================================
// Sticky nav
// =============================================================

#[test]
fn sticky_trigger_respects_minimum() {
    assert_eq!(sticky_trigger(600.0, 70.0, 50.0), 530.0);
    assert_eq!(sticky_trigger(100.0, 70.0, 50.0), 50.0);
}

#[test]
fn sticky_flips_strictly_past_trigger() {
    let metrics = NavMetrics { hero_height: Some(600.0), navbar_height: Some(70.0) };
    let mut tracker = ScrollTracker::new();
    assert!(!tracker.update_sticky(530.0, metrics, &cfg()));
    assert!(!tracker.is_sticky());
    assert!(tracker.update_sticky(530.5, metrics, &cfg()));
    assert!(tracker.is_sticky());
    assert!(tracker.update_sticky(530.0, metrics, &cfg()));
    assert!(!tracker.is_sticky());
}

#[test]
fn sticky_oscillates_on_boundary_without_hysteresis() {
    let metrics = NavMetrics { hero_height: Some(600.0), navbar_height: Some(70.0) };
    let mut tracker = ScrollTracker::new();
    let flips = [531.0, 530.0, 531.0, 530.0]
        .iter()
        .filter(|y| tracker.update_sticky(**y, metrics, &cfg()))
        .count();
    assert_eq!(flips, 4);
}

#[test]
fn sticky_uses_fallbacks_when_unmeasured() {
    let mut tracker = ScrollTracker::new();
    // 300 - 70 = 230.
    tracker.update_sticky(230.0, NavMetrics::default(), &cfg());
    assert!(!tracker.is_sticky());
    tracker.update_sticky(231.0, NavMetrics::default(), &cfg());
    assert!(tracker.is_sticky());
}

// =============================================================
// Scroll-to-top and parallax
// =============================================================

#[test]
fn scroll_top_visible_exactly_above_threshold_going_down() {
    let mut tracker = ScrollTracker::new();
    for y in [0.0, 150.0, 299.0, 300.0] {
        tracker.update_scroll_top(y, &cfg());
        assert!(!tracker.scroll_top_visible(), "offset {y}");
    }
    for y in [300.5, 301.0, 1200.0] {
        tracker.update_scroll_top(y, &cfg());
        assert!(tracker.scroll_top_visible(), "offset {y}");
    }
}

#[test]
fn scroll_top_hidden_at_threshold_going_up() {
    let mut tracker = ScrollTracker::new();
    let mut changes = 0;
    for y in [900.0, 500.0, 301.0, 300.0, 100.0, 0.0] {
        if tracker.update_scroll_top(y, &cfg()) {
            changes += 1;
        }
        assert_eq!(tracker.scroll_top_visible(), y > 300.0, "offset {y}");
    }
    assert_eq!(changes, 2);
}

#[test]
fn parallax_scales_scroll() {
    let mut tracker = ScrollTracker::new();
    assert!(tracker.update_parallax(100.0, &cfg()));
    assert!((tracker.parallax_px() - 30.0).abs() < 1e-9);
    assert!(!tracker.update_parallax(100.0, &cfg()));
}

// =============================================================
// Anchors and extents
// =============================================================

#[test]
fn anchor_id_skips_placeholders() {
    assert_eq!(anchor_id("#about"), Some("about"));
    assert_eq!(anchor_id("#"), None);
    assert_eq!(anchor_id("#!"), None);
    assert_eq!(anchor_id("https://example.com"), None);
}

#[test]
fn anchor_target_never_negative() {
    assert_eq!(anchor_scroll_target(600.0, 70.0), 530.0);
    assert_eq!(anchor_scroll_target(20.0, 70.0), 0.0);
}

#[test]
fn extent_in_view_requires_overlap() {
    assert!(SectionExtent::from_rect(100.0, 400.0, 800.0).in_view);
    assert!(!SectionExtent::from_rect(800.0, 1200.0, 800.0).in_view);
    assert!(!SectionExtent::from_rect(-400.0, 0.0, 800.0).in_view);
    assert!(SectionExtent::from_rect(-400.0, 1.0, 800.0).in_view);
}

#[test]
fn vh_unit_is_one_percent() {
    assert_eq!(vh_unit(800.0), "8px");
    assert_eq!(vh_unit(0.0), "0px");
}
