//! Utility helpers shared across effects and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, timers, observers,
//! element lookup) from the effect wiring so the wiring stays short and the
//! fallible parts report through one error type.

pub mod config;
pub mod dom;
pub mod storage;
pub mod submit;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod debounce;
#[cfg(feature = "hydrate")]
pub mod observer;
#[cfg(feature = "hydrate")]
pub mod ticker;
