//! Tunables for every page effect.
//!
//! The page may embed a JSON object to override any subset of fields; missing
//! fields fall back to [`crate::consts`]. Keys are camelCase so the JSON reads
//! naturally next to the markup that carries it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config field `{field}` {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MotionConfig {
    pub sticky_debounce_ms: u32,
    pub resize_debounce_ms: u32,
    pub active_link_debounce_ms: u32,

    pub hero_fallback_px: f64,
    pub navbar_fallback_px: f64,
    pub sticky_min_trigger_px: f64,
    pub active_probe_offset_px: f64,
    pub scroll_top_threshold_px: f64,
    pub parallax_factor: f64,
    pub anchor_offset_px: f64,

    pub counter_duration_ms: u32,
    pub counter_tick_ms: u32,
    pub counter_suffix: String,
    pub typed_char_ms: u32,
    pub typed_line_stagger_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub stats_threshold: f64,
    pub theme_spin_ms: u32,

    pub notice_visible_ms: u32,
    pub notice_exit_ms: u32,
    pub submit_delay_ms: u32,

    pub storage_key: String,
    /// Lower the console log level from `Info` to `Debug`.
    pub debug_logging: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            sticky_debounce_ms: consts::STICKY_DEBOUNCE_MS,
            resize_debounce_ms: consts::RESIZE_DEBOUNCE_MS,
            active_link_debounce_ms: consts::ACTIVE_LINK_DEBOUNCE_MS,
            hero_fallback_px: consts::HERO_FALLBACK_PX,
            navbar_fallback_px: consts::NAVBAR_FALLBACK_PX,
            sticky_min_trigger_px: consts::STICKY_MIN_TRIGGER_PX,
            active_probe_offset_px: consts::ACTIVE_PROBE_OFFSET_PX,
            scroll_top_threshold_px: consts::SCROLL_TOP_THRESHOLD_PX,
            parallax_factor: consts::PARALLAX_FACTOR,
            anchor_offset_px: consts::ANCHOR_OFFSET_PX,
            counter_duration_ms: consts::COUNTER_DURATION_MS,
            counter_tick_ms: consts::COUNTER_TICK_MS,
            counter_suffix: consts::COUNTER_SUFFIX.to_owned(),
            typed_char_ms: consts::TYPED_CHAR_MS,
            typed_line_stagger_ms: consts::TYPED_LINE_STAGGER_MS,
            reveal_threshold: consts::REVEAL_THRESHOLD,
            reveal_root_margin: consts::REVEAL_ROOT_MARGIN.to_owned(),
            stats_threshold: consts::STATS_THRESHOLD,
            theme_spin_ms: consts::THEME_SPIN_MS,
            notice_visible_ms: consts::NOTICE_VISIBLE_MS,
            notice_exit_ms: consts::NOTICE_EXIT_MS,
            submit_delay_ms: consts::SUBMIT_DELAY_MS,
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            debug_logging: false,
        }
    }
}

impl MotionConfig {
    /// Parse and validate a JSON override object.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall a timer or produce NaN layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let intervals = [
            ("stickyDebounceMs", self.sticky_debounce_ms),
            ("resizeDebounceMs", self.resize_debounce_ms),
            ("activeLinkDebounceMs", self.active_link_debounce_ms),
            ("counterTickMs", self.counter_tick_ms),
            ("typedCharMs", self.typed_char_ms),
        ];
        if let Some(&(field, _)) = intervals.iter().find(|(_, ms)| *ms == 0) {
            return Err(ConfigError::Invalid { field, reason: "must be positive" });
        }
        if self.storage_key.is_empty() {
            return Err(ConfigError::Invalid { field: "storageKey", reason: "must not be empty" });
        }
        let finite = [
            ("heroFallbackPx", self.hero_fallback_px),
            ("navbarFallbackPx", self.navbar_fallback_px),
            ("stickyMinTriggerPx", self.sticky_min_trigger_px),
            ("activeProbeOffsetPx", self.active_probe_offset_px),
            ("scrollTopThresholdPx", self.scroll_top_threshold_px),
            ("parallaxFactor", self.parallax_factor),
            ("anchorOffsetPx", self.anchor_offset_px),
        ];
        if let Some(&(field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::Invalid { field, reason: "must be finite" });
        }
        for (field, ratio) in [("revealThreshold", self.reveal_threshold), ("statsThreshold", self.stats_threshold)] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(ConfigError::Invalid { field, reason: "must be within 0.0..=1.0" });
            }
        }
        Ok(())
    }
}
