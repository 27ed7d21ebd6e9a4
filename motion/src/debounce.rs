//! Trailing-edge debounce as a plain state machine.
//!
//! A [`Debouncer`] holds at most one pending call. [`Debouncer::trigger`]
//! replaces it with the newest arguments and hands back a [`Ticket`]; the
//! host arms a timer for that ticket and, when the timer fires, calls
//! [`Debouncer::fire`]. Only the ticket from the most recent trigger can
//! release the arguments, so a timer that slipped past its cancellation
//! still does nothing.
//!
//! [`Debouncer::poll`] and [`Debouncer::cancel`] are the interface for hosts
//! without real timers (tests, replay): they drive the same state from an
//! explicit clock. The browser wrapper only uses `trigger` and `fire`.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Identifies one scheduled call. Stale tickets never fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
struct Pending<A> {
    ticket: Ticket,
    due_ms: f64,
    args: A,
}

#[derive(Debug)]
pub struct Debouncer<A> {
    delay_ms: f64,
    generation: u64,
    pending: Option<Pending<A>>,
}

impl<A> Debouncer<A> {
    #[must_use]
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms: f64::from(delay_ms), generation: 0, pending: None }
    }

    /// Quiet period in milliseconds.
    #[must_use]
    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    /// Cancel any pending call and schedule `args` for `now_ms + delay`.
    pub fn trigger(&mut self, now_ms: f64, args: A) -> Ticket {
        self.generation += 1;
        let ticket = Ticket(self.generation);
        self.pending = Some(Pending { ticket, due_ms: now_ms + self.delay_ms, args });
        ticket
    }

    /// Release the pending arguments if `ticket` is still the current one.
    pub fn fire(&mut self, ticket: Ticket) -> Option<A> {
        if self.pending.as_ref().is_some_and(|p| p.ticket == ticket) {
            self.pending.take().map(|p| p.args)
        } else {
            None
        }
    }

    /// Release the pending arguments once their quiet period has elapsed.
    /// Clock-driven counterpart of [`Self::fire`] for tests and replay.
    pub fn poll(&mut self, now_ms: f64) -> Option<A> {
        if self.pending.as_ref().is_some_and(|p| now_ms >= p.due_ms) {
            self.pending.take().map(|p| p.args)
        } else {
            None
        }
    }

    /// Drop the pending call. Returns whether one existed. Timer-backed
    /// hosts cancel by dropping their timer instead.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
