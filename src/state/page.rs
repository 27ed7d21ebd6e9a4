//! The page controller: every mutable flag the effects share.
//!
//! DESIGN
//! ======
//! Each field is a `motion` type that already knows its own transitions;
//! `PageState` only adds the steps that span two of them, such as a rejected
//! contact submission turning into an error notice.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
use motion::animate::OneShot;
use motion::config::MotionConfig;
use motion::filter::ProjectFilter;
use motion::form::{Completion, ContactFields, ContactFlow, SubmitError, ValidationError};
use motion::menu::MenuState;
use motion::notify::{NoticeId, NoticeKind, NoticeQueue};
use motion::scroll::{ScrollTracker, SectionExtent};
use motion::theme::Theme;

#[derive(Clone, Debug, Default)]
pub struct PageState {
    pub scroll: ScrollTracker,
    /// Viewport extent of each section, by id, from the last debounced pass.
    pub extents: BTreeMap<String, SectionExtent>,
    pub theme: Theme,
    pub menu: MenuState,
    pub filter: ProjectFilter,
    /// Reveal-on-scroll cards already shown.
    pub revealed: OneShot,
    /// Stat counters already ramped.
    pub counted: OneShot,
    pub contact: ContactFlow,
    pub notices: NoticeQueue,
}

impl PageState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    pub fn notify(&mut self, text: impl Into<String>, kind: NoticeKind) -> NoticeId {
        self.notices.push(text, kind)
    }

    /// Start sending `fields`. A validation failure becomes an error notice
    /// and leaves the flow idle; a repeat submit while sending is dropped.
    pub fn submit_contact(&mut self, fields: ContactFields) -> Result<(), ValidationError> {
        match self.contact.begin(fields) {
            Ok(()) => Ok(()),
            Err(ValidationError::Busy) => {
                log::debug!("contact submit ignored while sending");
                Err(ValidationError::Busy)
            }
            Err(err) => {
                self.notify(err.to_string(), NoticeKind::Error);
                Err(err)
            }
        }
    }

    /// Settle the in-flight submission and post its notice.
    pub fn complete_contact(&mut self, result: Result<(), SubmitError>) -> Completion {
        let done = self.contact.finish(result);
        self.notify(done.message, done.kind);
        done
    }

    /// Replace the recorded section extents.
    pub fn record_extents(&mut self, extents: impl IntoIterator<Item = (String, SectionExtent)>) {
        self.extents = extents.into_iter().collect();
    }

    /// Ids of sections currently overlapping the viewport.
    pub fn sections_in_view(&self) -> impl Iterator<Item = &str> {
        self.extents.iter().filter(|(_, e)| e.in_view).map(|(id, _)| id.as_str())
    }
}

/// Copyable handle the effects close over.
#[derive(Clone, Copy)]
pub struct PageHandle {
    pub state: RwSignal<PageState>,
    config: StoredValue<MotionConfig>,
}

impl PageHandle {
    pub fn new(config: MotionConfig, theme: Theme) -> Self {
        Self { state: RwSignal::new(PageState::new(theme)), config: StoredValue::new(config) }
    }

    /// Snapshot of the active configuration.
    pub fn config(&self) -> MotionConfig {
        self.config.get_value()
    }

    /// Mutate the state and notify readers; `None` once the page owner is
    /// disposed.
    pub fn update<R>(&self, f: impl FnOnce(&mut PageState) -> R) -> Option<R> {
        self.state.try_update(f)
    }

    /// Mutate without notifying. Pair with [`Self::notify`] when the change
    /// is something an overlay renders.
    pub fn update_quiet<R>(&self, f: impl FnOnce(&mut PageState) -> R) -> Option<R> {
        self.state.try_update_untracked(f)
    }

    pub fn notify(&self) {
        self.state.notify();
    }

    /// Read without subscribing.
    pub fn peek<R>(&self, f: impl FnOnce(&PageState) -> R) -> Option<R> {
        self.state.try_with_untracked(f)
    }
}
