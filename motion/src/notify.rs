//! Transient notification queue.
//!
//! A notice is pushed `Shown`, moved to `Leaving` when its display time runs
//! out (the host plays the exit animation then), and removed afterwards. The
//! host owns the timers; this queue only tracks ids and phases.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// Background accent for the toast.
    #[must_use]
    pub fn accent(self) -> &'static str {
        match self {
            Self::Success => "#00d4ff",
            Self::Error => "#ff6b9d",
        }
    }

    /// Modifier class for the toast element.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "notice notice--success",
            Self::Error => "notice notice--error",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NoticePhase {
    #[default]
    Shown,
    Leaving,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub text: String,
    pub kind: NoticeKind,
    pub phase: NoticePhase,
}

#[derive(Clone, Debug, Default)]
pub struct NoticeQueue {
    next_id: u64,
    items: Vec<Notice>,
}

impl NoticeQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, kind: NoticeKind) -> NoticeId {
        self.next_id += 1;
        let id = NoticeId(self.next_id);
        self.items.push(Notice { id, text: text.into(), kind, phase: NoticePhase::Shown });
        id
    }

    /// Start the exit animation. Returns `false` for unknown ids.
    pub fn begin_exit(&mut self, id: NoticeId) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(notice) => {
                notice.phase = NoticePhase::Leaving;
                true
            }
            None => false,
        }
    }

    /// Drop a notice. Returns `false` for unknown ids.
    pub fn remove(&mut self, id: NoticeId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Oldest first.
    #[must_use]
    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
