use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use log::warn;
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    ForceQuit, // Ctrl+C
    Escape,
    Left,
    Right,
    Up,
    Down,
    Char(char),
    Click(u16, u16), // column, row
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(event) => translate(event),
        Err(e) => {
            warn!("Event read failed: {}", e);
            None
        }
    }
}

/// Maps a raw crossterm event to a `TuiEvent`, dropping anything we don't use.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::Click(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Some terminals report releases and repeats as well
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Left) => Some(TuiEvent::Left),
        (_, KeyCode::Right) => Some(TuiEvent::Right),
        (_, KeyCode::Up) => Some(TuiEvent::Up),
        (_, KeyCode::Down) => Some(TuiEvent::Down),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Char(c)) => Some(TuiEvent::Char(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(translate(key(KeyCode::Left, KeyModifiers::NONE)), Some(TuiEvent::Left));
        assert_eq!(translate(key(KeyCode::Right, KeyModifiers::NONE)), Some(TuiEvent::Right));
        assert_eq!(translate(key(KeyCode::Up, KeyModifiers::NONE)), Some(TuiEvent::Up));
        assert_eq!(translate(key(KeyCode::Down, KeyModifiers::NONE)), Some(TuiEvent::Down));
    }

    #[test]
    fn test_ctrl_c_is_force_quit() {
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(TuiEvent::Char('c'))
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(release), None);
    }

    #[test]
    fn test_left_click() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(click), Some(TuiEvent::Click(12, 7)));
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let moved = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(moved), None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
