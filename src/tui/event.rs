//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::error::EdudeskError;

/// How long to wait for input before the next tick.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the timer.
    Toggle,
    /// Rewind the current interval.
    Reset,
    /// Finish the current interval now.
    Skip,
}

/// Wait briefly for a key press.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events() -> Result<Option<Action>, EdudeskError> {
    if !event::poll(POLL_INTERVAL)
        .map_err(|e| EdudeskError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    let Event::Key(key) =
        event::read().map_err(|e| EdudeskError::Terminal(format!("Event read failed: {e}")))?
    else {
        return Ok(None);
    };
    if key.kind != KeyEventKind::Press {
        return Ok(None);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(Some(Action::Quit));
    }

    Ok(action_for(key.code))
}

fn action_for(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Toggle),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('s') => Some(Action::Skip),
        _ => None,
    }
}
