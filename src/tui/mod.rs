//! Terminal UI
//!
//! One loop: block on the next terminal event, apply it to [`App`], redraw.
//! Rendering is synchronous; there is no background work.

mod app;
mod draw;
mod terminal;

pub use app::{App, Focus};
pub use draw::{draw, notes_text};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;
use terminal::TerminalSession;

/// Run the viewer until the user quits
pub fn run(app: &mut App) -> Result<()> {
    let mut terminal = TerminalSession::new()?;
    info!("Viewer started for {}", app.path().display());

    while !app.should_quit() {
        terminal.draw(|frame| draw(frame, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            _ => {}
        }
    }

    info!("Viewer closed with {} codes selected", app.selection().len());
    Ok(())
}
