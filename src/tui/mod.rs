//! Terminal User Interface (TUI) for the focus timer.
//!
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::core::Clock;
use crate::error::EdudeskError;
use crate::features::focus::{FocusStorage, FocusTimer};

/// Run the focus timer TUI until the user quits.
///
/// Returns the timer so the caller can report its final state.
///
/// # Errors
///
/// Returns an error if the terminal fails or a completion cannot be saved.
pub fn run<C: Clock>(
    timer: FocusTimer<C>,
    storage: &FocusStorage,
) -> Result<FocusTimer<C>, EdudeskError> {
    enable_raw_mode()
        .map_err(|e| EdudeskError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| EdudeskError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| EdudeskError::Terminal(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(timer, storage);
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result.map(|()| app.timer)
}

fn run_app<B: Backend, C: Clock>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_, C>,
) -> Result<(), EdudeskError> {
    while !app.should_quit {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| EdudeskError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events()? {
            match action {
                event::Action::Quit => app.should_quit = true,
                event::Action::Toggle => app.toggle()?,
                event::Action::Reset => app.reset(),
                event::Action::Skip => app.skip()?,
            }
        }

        app.tick()?;
    }

    Ok(())
}
