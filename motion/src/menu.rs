//! Mobile menu state and keyboard shortcuts.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close; returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

/// Inline styles for one hamburger bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarPose {
    pub transform: &'static str,
    pub opacity: &'static str,
}

/// Poses of the three hamburger bars: a cross when open, stacked otherwise.
#[must_use]
pub fn hamburger_pose(open: bool) -> [BarPose; 3] {
    if open {
        [
            BarPose { transform: "rotate(45deg) translateY(12px)", opacity: "1" },
            BarPose { transform: "none", opacity: "0" },
            BarPose { transform: "rotate(-45deg) translateY(-12px)", opacity: "1" },
        ]
    } else {
        [BarPose { transform: "none", opacity: "1" }; 3]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    ToggleMenu,
    ToggleTheme,
    ScrollTop,
}

impl Shortcut {
    /// Map a `keydown` (`KeyboardEvent.code` plus Alt state) to a shortcut.
    #[must_use]
    pub fn from_key(code: &str, alt: bool) -> Option<Self> {
        match (code, alt) {
            ("KeyM", true) => Some(Self::ToggleMenu),
            ("KeyT", true) => Some(Self::ToggleTheme),
            ("Home", _) => Some(Self::ScrollTop),
            _ => None,
        }
    }

    /// Whether the browser default must be suppressed.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        self == Self::ScrollTop
    }
}
