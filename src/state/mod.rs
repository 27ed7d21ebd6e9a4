//! Reactive page state.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`page::PageState`] lives in an `RwSignal` provided as Leptos context.
//! Effects write to it from DOM events; the overlay components read it.

pub mod page;
