//! UI screens.

mod app;
mod dialog;
mod voting_screen;

pub use app::App;
pub use dialog::Dialog;
pub use voting_screen::{Focus, ScreenAction, VotingScreen, VotingScreenState};
