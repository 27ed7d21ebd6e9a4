//! Drives a [`Tick`] state machine from a browser interval.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use motion::animate::{Phase, Tick};

/// Tick `machine` every `tick_ms`, handing each new state to `on_frame`.
/// The interval is dropped as soon as the machine reports `Done`.
pub fn drive<T: Tick + 'static>(mut machine: T, tick_ms: u32, mut on_frame: impl FnMut(&T) + 'static) {
    let holder: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let dt = f64::from(tick_ms);
    let interval = Interval::new(tick_ms, move || {
        let phase = machine.tick(dt);
        on_frame(&machine);
        if phase == Phase::Done {
            holder_for_cb.borrow_mut().take();
        }
    });
    *holder.borrow_mut() = Some(interval);
}
