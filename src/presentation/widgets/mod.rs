mod input;
mod select;
mod status_bar;

pub use input::TextInput;
pub use select::{Dropdown, SelectState};
pub use status_bar::{StatusBar, level_color};
