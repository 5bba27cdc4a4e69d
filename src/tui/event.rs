use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events. Everything else the terminal sends is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    Resize(u16, u16),
}

/// Translate a raw crossterm event. `None` means "ignore".
pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        // Releases and repeats (Windows, kitty protocol) would double-fire.
        Event::Key(key_event) if key_event.kind != KeyEventKind::Press => None,
        Event::Key(key_event) => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('q')) => {
                    Some(TuiEvent::Quit)
                }
                (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                _ => None,
            }
        }
        Event::Resize(width, height) => Some(TuiEvent::Resize(width, height)),
        _ => None,
    }
}

/// Where the display loop gets its input from.
pub trait EventSource {
    /// Wait up to `timeout` for input and return whatever arrived.
    fn poll(&mut self, timeout: Duration) -> io::Result<Vec<TuiEvent>>;
}

/// The real terminal, read through crossterm.
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<Vec<TuiEvent>> {
        poll_events(timeout)
    }
}

/// Wait up to `timeout` for input, then drain everything already queued.
pub fn poll_events(timeout: Duration) -> io::Result<Vec<TuiEvent>> {
    let mut events = Vec::new();
    let mut wait = timeout;
    while event::poll(wait)? {
        if let Some(tui_event) = map_event(event::read()?) {
            events.push(tui_event);
        }
        wait = Duration::ZERO;
    }
    Ok(events)
}
