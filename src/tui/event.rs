use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::time::Duration;

/// TUI-specific input events. Mode-agnostic: the state machine decides
/// whether a character is text or a list action.
pub enum TuiEvent {
    Submit,
    Cancel,
    InputChar(char),
    Backspace,
    Up,
    Down,
    FocusSwitch,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    let ev = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char(c) => Some(TuiEvent::InputChar(c)),
            KeyCode::Backspace => Some(TuiEvent::Backspace),
            KeyCode::Enter => Some(TuiEvent::Submit),
            KeyCode::Esc => Some(TuiEvent::Cancel),
            KeyCode::Up => Some(TuiEvent::Up),
            KeyCode::Down => Some(TuiEvent::Down),
            KeyCode::Tab => Some(TuiEvent::FocusSwitch),
            _ => None,
        },
        _ => None,
    };

    Ok(ev)
}
