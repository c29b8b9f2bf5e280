use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::app::{App, AppEvent};
use crate::ui;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Polls for crossterm events and maps them to `AppEvent`s.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if !event::poll(timeout)? {
        return Ok(Some(AppEvent::Tick));
    }
    match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Press => Ok(None),
        Event::Key(key)
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') =>
        {
            Ok(Some(AppEvent::Quit))
        }
        Event::Key(key) => Ok(Some(AppEvent::KeyPress(key.code))),
        Event::Resize(width, _) => Ok(Some(AppEvent::Resize(ui::grid_columns(width)))),
        _ => Ok(None),
    }
}

/// Runs the main event loop.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    app.set_grid_columns(ui::grid_columns(terminal.size()?.width));

    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Some(event) = poll(TICK_RATE)? {
            app.update(event);
        }
    }
    Ok(())
}
