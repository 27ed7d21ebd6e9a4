//! Retires notices: `Shown` for the visible period, `Leaving` for the exit
//! animation, then removed.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use motion::notify::{NoticeId, NoticePhase};

use crate::state::page::PageHandle;
use crate::util::dom::DomError;

pub fn install(page: PageHandle) -> Result<(), DomError> {
    let cfg = page.config();
    let (visible_ms, exit_ms) = (cfg.notice_visible_ms, cfg.notice_exit_ms);
    let scheduled: Rc<RefCell<HashSet<NoticeId>>> = Rc::new(RefCell::new(HashSet::new()));

    Effect::new(move |_| {
        let fresh: Vec<NoticeId> = page.state.with(|p| {
            p.notices
                .items()
                .iter()
                .filter(|n| n.phase == NoticePhase::Shown)
                .map(|n| n.id)
                .collect()
        });
        for id in fresh {
            if scheduled.borrow_mut().insert(id) {
                retire(page, id, visible_ms, exit_ms, Rc::clone(&scheduled));
            }
        }
    });
    Ok(())
}

fn retire(page: PageHandle, id: NoticeId, visible_ms: u32, exit_ms: u32, scheduled: Rc<RefCell<HashSet<NoticeId>>>) {
    Timeout::new(visible_ms, move || {
        if page.update(|p| p.notices.begin_exit(id)) != Some(true) {
            scheduled.borrow_mut().remove(&id);
            return;
        }
        Timeout::new(exit_ms, move || {
            page.update(|p| p.notices.remove(id));
            scheduled.borrow_mut().remove(&id);
        })
        .forget();
    })
    .forget();
}
