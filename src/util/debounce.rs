//! Browser timer binding for [`motion::debounce::Debouncer`].
//!
//! Each call replaces the single pending `Timeout`; dropping the old one
//! clears it. The debouncer ticket guards the remaining window where a
//! cleared timer has already been queued by the event loop.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use motion::debounce::Debouncer;

use crate::util::dom::now_ms;

pub struct Debounced<A: 'static> {
    delay_ms: u32,
    core: Rc<RefCell<Debouncer<A>>>,
    timer: Rc<RefCell<Option<Timeout>>>,
    callback: Rc<dyn Fn(A)>,
}

impl<A: 'static> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            delay_ms: self.delay_ms,
            core: Rc::clone(&self.core),
            timer: Rc::clone(&self.timer),
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<A: 'static> Debounced<A> {
    pub fn new(delay_ms: u32, callback: impl Fn(A) + 'static) -> Self {
        Self {
            delay_ms,
            core: Rc::new(RefCell::new(Debouncer::new(delay_ms))),
            timer: Rc::new(RefCell::new(None)),
            callback: Rc::new(callback),
        }
    }

    /// Schedule `callback(args)` after the quiet period, superseding any
    /// call still waiting.
    pub fn call(&self, args: A) {
        let ticket = self.core.borrow_mut().trigger(now_ms(), args);
        let core = Rc::clone(&self.core);
        let callback = Rc::clone(&self.callback);
        let timeout = Timeout::new(self.delay_ms, move || {
            let ready = core.borrow_mut().fire(ticket);
            if let Some(args) = ready {
                callback(args);
            }
        });
        self.timer.replace(Some(timeout));
    }
}
