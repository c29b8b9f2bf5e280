mod state;

use crossterm::event::KeyCode;

pub use state::App;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
    /// Terminal resized; carries the number of swatch columns that now fit.
    Resize(usize),
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppView {
    Palette,
    Help,
}
