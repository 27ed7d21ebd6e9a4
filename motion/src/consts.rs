//! Default timings and thresholds for the page effects.

// ── Debounce ────────────────────────────────────────────────────

/// Quiet period before the sticky-nav pass runs after scrolling.
pub const STICKY_DEBOUNCE_MS: u32 = 20;

/// Quiet period before layout-dependent passes run after a resize.
pub const RESIZE_DEBOUNCE_MS: u32 = 50;

/// Quiet period before the active-link and section-extent passes run.
pub const ACTIVE_LINK_DEBOUNCE_MS: u32 = 100;

// ── Scroll ──────────────────────────────────────────────────────

/// Hero height assumed when the page has no `#hero` element.
pub const HERO_FALLBACK_PX: f64 = 300.0;

/// Navbar height assumed when `#navbar` reports nothing usable.
pub const NAVBAR_FALLBACK_PX: f64 = 70.0;

/// Lower bound on the sticky trigger, whatever the hero measures.
pub const STICKY_MIN_TRIGGER_PX: f64 = 50.0;

/// Look-ahead added to the scroll offset before matching sections.
pub const ACTIVE_PROBE_OFFSET_PX: f64 = 100.0;

/// Offset past which the scroll-to-top control is shown.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

/// Fraction of the scroll offset applied to `.hero-visual`.
pub const PARALLAX_FACTOR: f64 = 0.3;

/// Space left above an anchor target for the fixed navbar.
pub const ANCHOR_OFFSET_PX: f64 = 70.0;

// ── Animation ───────────────────────────────────────────────────

/// Total run time of a stat counter ramp.
pub const COUNTER_DURATION_MS: u32 = 2000;

/// Interval between counter repaints (~60 fps).
pub const COUNTER_TICK_MS: u32 = 16;

/// Text appended to every counter value.
pub const COUNTER_SUFFIX: &str = "+";

/// Delay between typed characters in the hero title.
pub const TYPED_CHAR_MS: u32 = 50;

/// Extra start delay per hero title line.
pub const TYPED_LINE_STAGGER_MS: u32 = 400;

/// Visible fraction that reveals a card.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin for the reveal observer; fires a little before the fold.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Visible fraction that starts a stat counter.
pub const STATS_THRESHOLD: f64 = 0.5;

/// Duration of the theme toggle spin.
pub const THEME_SPIN_MS: u32 = 300;

// ── Notices and form ────────────────────────────────────────────

/// How long a notice stays before its exit animation.
pub const NOTICE_VISIBLE_MS: u32 = 3000;

/// Length of the notice exit animation.
pub const NOTICE_EXIT_MS: u32 = 300;

/// Delay of the placeholder contact submission.
pub const SUBMIT_DELAY_MS: u32 = 1500;

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the dark-mode flag.
pub const THEME_STORAGE_KEY: &str = "darkMode";
