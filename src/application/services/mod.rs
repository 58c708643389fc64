//! Application services.

pub mod message_display;
pub mod renderers;

pub use message_display::MessageDisplay;
pub use renderers::{populate_list, populate_select};
