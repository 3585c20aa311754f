//! Terminal display surface.
//!
//! Renders the workflow's display state to colored text lines: the submit
//! trigger, the error slot, the short URL slot and transient notifications.

pub mod render;

pub use render::{render_display, render_notice, render_submit_trigger};
