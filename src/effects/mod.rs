//! Browser wiring: DOM events in, `motion` state transitions, DOM writes out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each feature exposes an install function returning `Result<(), DomError>`
//! (`nav` has one per navbar feature).
//! `app::boot` runs them in order and logs a failing one without stopping the
//! rest, so a page missing (say) the contact form keeps every other effect.

pub mod contact;
pub mod filter;
pub mod keys;
pub mod nav;
pub mod notify;
pub mod reveal;
pub mod theme;
pub mod typed;
pub mod viewport;
