//! Overlay components mounted next to the page's own markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page ships its content as static HTML. These components render the
//! two elements it lacks and read everything from the `PageState` context.

pub mod notice_stack;
pub mod scroll_top;
