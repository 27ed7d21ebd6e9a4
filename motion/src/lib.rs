//! Page-effect engine for the portfolio site.
//!
//! Everything in this crate is browser-free: each module turns an input
//! (scroll offset, layout snapshot, elapsed time, form fields) into the next
//! state and leaves applying that state to the DOM to the `folio` host. That
//! split keeps the behaviour unit-testable without a rendering environment.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`debounce`] | Trailing-edge rate limiter with stale-timer tickets |
//! | [`scroll`] | Active section, sticky nav, scroll-to-top and parallax updaters |
//! | [`animate`] | One-shot flags, the [`animate::Tick`] primitive, counter ramps and typed text |
//! | [`theme`] | Persisted dark/light preference and its presentation |
//! | [`form`] | Contact form validation and the submit state machine |
//! | [`filter`] | Project card filtering |
//! | [`notify`] | Transient notification queue |
//! | [`menu`] | Hamburger menu state and keyboard shortcuts |
//! | [`config`] | Tunables, deserialized from page-supplied JSON |
//! | [`consts`] | Default timings and thresholds |

pub mod animate;
pub mod config;
pub mod consts;
pub mod debounce;
pub mod filter;
pub mod form;
pub mod menu;
pub mod notify;
pub mod scroll;
pub mod theme;
