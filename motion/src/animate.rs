//! Time-driven effects as explicit state machines.
//!
//! Every timed effect implements [`Tick`]: the host calls `tick(dt_ms)` from a
//! single interval and stops the interval once the machine reports
//! [`Phase::Done`]. Progress and termination can therefore be checked without
//! a browser or a real clock.
//!
//! Visibility-triggered effects are gated by [`OneShot`], the per-element
//! "already animated" flag. A key is armed at most once per page lifetime no
//! matter how often its element scrolls in and out of view.

#[cfg(test)]
#[path = "animate_test.rs"]
mod animate_test;

use std::collections::HashSet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Running,
    Done,
}

/// One step of a time-driven effect.
pub trait Tick {
    /// Advance by `dt_ms` milliseconds and report the resulting phase.
    fn tick(&mut self, dt_ms: f64) -> Phase;

    /// Current phase without advancing.
    fn phase(&self) -> Phase;
}

// =============================================================================
// ONE-SHOT FLAGS
// =============================================================================

/// One element crossing a visibility threshold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crossing {
    pub key: String,
    pub intersecting: bool,
}

impl Crossing {
    #[must_use]
    pub fn new(key: impl Into<String>, intersecting: bool) -> Self {
        Self { key: key.into(), intersecting }
    }
}

/// Anything that reports threshold crossings: an observer callback batch in
/// the browser, a scripted sequence in tests.
pub trait VisibilitySource {
    /// Crossings observed since the last call.
    fn crossings(&mut self) -> Vec<Crossing>;
}

impl VisibilitySource for Vec<Crossing> {
    fn crossings(&mut self) -> Vec<Crossing> {
        std::mem::take(self)
    }
}

/// Set of element keys whose animation has already run.
#[derive(Clone, Debug, Default)]
pub struct OneShot {
    fired: HashSet<String>,
}

impl OneShot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a visibility notification. Returns `true` exactly once per key:
    /// on its first intersecting notification.
    pub fn on_visibility(&mut self, key: &str, intersecting: bool) -> bool {
        if !intersecting || self.fired.contains(key) {
            return false;
        }
        self.fired.insert(key.to_owned());
        true
    }

    /// Feed every crossing reported by `source`; returns the keys armed by
    /// this batch, in report order.
    pub fn consume(&mut self, source: &mut impl VisibilitySource) -> Vec<String> {
        source
            .crossings()
            .into_iter()
            .filter_map(|c| self.on_visibility(&c.key, c.intersecting).then_some(c.key))
            .collect()
    }

    #[must_use]
    pub fn has_fired(&self, key: &str) -> bool {
        self.fired.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fired.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }
}

/// CSS `animation-play-state` for an element with the given visibility.
#[must_use]
pub fn play_state(intersecting: bool) -> &'static str {
    if intersecting { "running" } else { "paused" }
}

// =============================================================================
// COUNTER RAMP
// =============================================================================

/// First run of ASCII digits in `text`, e.g. `"50+"` → 50.
#[must_use]
pub fn parse_counter_target(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    text[start..]
        .chars()
        .map_while(|c| c.to_digit(10))
        .try_fold(0_u32, |acc, digit| acc.checked_mul(10)?.checked_add(digit))
}

/// Linear ramp from 0 to an integer target.
///
/// While running the display shows the floored value; once the elapsed time
/// reaches the duration it shows exactly the target.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterRamp {
    target: u32,
    duration_ms: f64,
    elapsed_ms: f64,
    suffix: String,
    phase: Phase,
}

impl CounterRamp {
    #[must_use]
    pub fn new(target: u32, duration_ms: u32, suffix: impl Into<String>) -> Self {
        let phase = if target == 0 || duration_ms == 0 { Phase::Done } else { Phase::Running };
        Self {
            target,
            duration_ms: f64::from(duration_ms),
            elapsed_ms: 0.0,
            suffix: suffix.into(),
            phase,
        }
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Current integer value.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn value(&self) -> u32 {
        if self.phase == Phase::Done {
            return self.target;
        }
        let progress = (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        ((f64::from(self.target) * progress).floor() as u32).min(self.target)
    }

    /// Text to show in the element.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{}{}", self.value(), self.suffix)
    }
}

impl Tick for CounterRamp {
    fn tick(&mut self, dt_ms: f64) -> Phase {
        if self.phase == Phase::Running {
            self.elapsed_ms += dt_ms.max(0.0);
            if self.elapsed_ms >= self.duration_ms {
                self.phase = Phase::Done;
            }
        }
        self.phase
    }

    fn phase(&self) -> Phase {
        self.phase
    }
}

// =============================================================================
// TYPED TEXT
// =============================================================================

/// One line of text revealed a character at a time after a start delay.
///
/// The first character appears as soon as the delay has elapsed, then one
/// more every `char_ms`.
#[derive(Clone, Debug, PartialEq)]
pub struct TypedLine {
    chars: Vec<char>,
    start_ms: f64,
    char_ms: f64,
    elapsed_ms: f64,
    shown: usize,
}

impl TypedLine {
    #[must_use]
    pub fn new(text: &str, start_ms: u32, char_ms: u32) -> Self {
        Self {
            chars: text.chars().collect(),
            start_ms: f64::from(start_ms),
            char_ms: f64::from(char_ms.max(1)),
            elapsed_ms: 0.0,
            shown: 0,
        }
    }

    /// Number of characters currently visible.
    #[must_use]
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Visible prefix of the line.
    #[must_use]
    pub fn text(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn visible_at(&self, elapsed_ms: f64) -> usize {
        if elapsed_ms < self.start_ms {
            return 0;
        }
        let steps = ((elapsed_ms - self.start_ms) / self.char_ms).floor() as usize + 1;
        steps.min(self.chars.len())
    }
}

impl Tick for TypedLine {
    fn tick(&mut self, dt_ms: f64) -> Phase {
        self.elapsed_ms += dt_ms.max(0.0);
        self.shown = self.visible_at(self.elapsed_ms);
        self.phase()
    }

    fn phase(&self) -> Phase {
        if self.shown >= self.chars.len() { Phase::Done } else { Phase::Running }
    }
}

/// All hero title lines, typed concurrently with a per-line stagger.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Typewriter {
    lines: Vec<TypedLine>,
}

impl Typewriter {
    #[must_use]
    pub fn new<'a>(lines: impl IntoIterator<Item = &'a str>, char_ms: u32, stagger_ms: u32) -> Self {
        let lines = lines
            .into_iter()
            .zip((0_u32..).map(|i| i.saturating_mul(stagger_ms)))
            .map(|(text, start)| TypedLine::new(text, start, char_ms))
            .collect();
        Self { lines }
    }

    #[must_use]
    pub fn lines(&self) -> &[TypedLine] {
        &self.lines
    }
}

impl Tick for Typewriter {
    fn tick(&mut self, dt_ms: f64) -> Phase {
        for line in &mut self.lines {
            line.tick(dt_ms);
        }
        self.phase()
    }

    fn phase(&self) -> Phase {
        if self.lines.iter().all(|l| l.phase() == Phase::Done) { Phase::Done } else { Phase::Running }
    }
}
