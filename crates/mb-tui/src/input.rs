//! Input handling - convert key events to birth events
//!
//! Key bindings follow the classic birth screen conventions: movement
//! keys scroll, lowercase letters select, `*` picks at random, `=` opens
//! the birth options, Ctrl-X quits.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use mb_core::birth::BirthEvent;

/// Convert a key event to a birth event.
///
/// Returns `None` only for key events that are not presses; every press
/// maps to something, with `BirthEvent::Other` standing in for keys the
/// current screen may treat as "any other key".
pub fn key_to_event(key: KeyEvent) -> Option<BirthEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('x') | KeyCode::Char('X') => Some(BirthEvent::Quit), // Ctrl-X: quit
            _ => Some(BirthEvent::Other),
        };
    }

    let event = match key.code {
        KeyCode::Up => BirthEvent::Up,
        KeyCode::Down => BirthEvent::Down,
        KeyCode::Left => BirthEvent::Left,
        KeyCode::Right => BirthEvent::Right,
        KeyCode::Enter => BirthEvent::Select,
        KeyCode::Esc => BirthEvent::Escape,
        KeyCode::Char('*') => BirthEvent::Random,
        KeyCode::Char('=') => BirthEvent::Options,
        KeyCode::Char(c) if c.is_ascii_alphabetic() => BirthEvent::Letter(c),
        _ => BirthEvent::Other,
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_movement_and_select_keys() {
        assert_eq!(key_to_event(press(KeyCode::Up)), Some(BirthEvent::Up));
        assert_eq!(key_to_event(press(KeyCode::Down)), Some(BirthEvent::Down));
        assert_eq!(key_to_event(press(KeyCode::Left)), Some(BirthEvent::Left));
        assert_eq!(key_to_event(press(KeyCode::Right)), Some(BirthEvent::Right));
        assert_eq!(key_to_event(press(KeyCode::Enter)), Some(BirthEvent::Select));
        assert_eq!(key_to_event(press(KeyCode::Esc)), Some(BirthEvent::Escape));
    }

    #[test]
    fn test_special_birth_keys() {
        assert_eq!(
            key_to_event(press(KeyCode::Char('*'))),
            Some(BirthEvent::Random)
        );
        assert_eq!(
            key_to_event(press(KeyCode::Char('='))),
            Some(BirthEvent::Options)
        );
        assert_eq!(
            key_to_event(press(KeyCode::Char('c'))),
            Some(BirthEvent::Letter('c'))
        );
        assert_eq!(
            key_to_event(press(KeyCode::Char('S'))),
            Some(BirthEvent::Letter('S'))
        );
    }

    #[test]
    fn test_quit_combination() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(key_to_event(key), Some(BirthEvent::Quit));
    }

    #[test]
    fn test_unknown_keys_map_to_other() {
        assert_eq!(
            key_to_event(press(KeyCode::Char('7'))),
            Some(BirthEvent::Other)
        );
        assert_eq!(key_to_event(press(KeyCode::Tab)), Some(BirthEvent::Other));
    }

    #[test]
    fn test_releases_are_dropped() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_event(key), None);
    }
}
