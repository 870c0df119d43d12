use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events.
///
/// Keys are mapped to remote-control style intents. Whether a printable
/// character is typed into a field or treated as a shortcut (`q`, `r`, `1`-`4`)
/// is decided by the router, which knows what has focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // D-pad
    Up,
    Down,
    Left,
    Right,
    Select,
    Back,

    // Screen switching
    NextScreen,
    PrevScreen,

    /// Ctrl+C, quits from anywhere.
    ForceQuit,

    // Text entry
    InputChar(char),
    Paste(String), // Bracketed paste
    Backspace,

    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    map_event(event::read().ok()?)
}

fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            // Keyboard enhancement reports releases too
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Select),
                (_, KeyCode::Esc) => Some(TuiEvent::Back),
                (_, KeyCode::Up) => Some(TuiEvent::Up),
                (_, KeyCode::Down) => Some(TuiEvent::Down),
                (_, KeyCode::Left) => Some(TuiEvent::Left),
                (_, KeyCode::Right) => Some(TuiEvent::Right),
                (_, KeyCode::Tab) => Some(TuiEvent::NextScreen),
                (_, KeyCode::BackTab) => Some(TuiEvent::PrevScreen),
                _ => None,
            }
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
