//! Presentation layer with UI components and event handling.

/// Event handling.
pub mod events;
/// UI screens.
pub mod ui;
/// View port backed by terminal widgets.
pub mod view_state;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
pub use view_state::ViewState;
