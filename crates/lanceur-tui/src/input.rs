//! Translation from crossterm key events to widget chords.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lanceur_core::{Key, KeyChord, Modifiers};

/// Convert a key event, or `None` for keys the widget never handles.
///
/// Shift is dropped for characters since it is already part of the char.
pub fn to_chord(event: KeyEvent) -> Option<KeyChord> {
    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Esc => Key::Esc,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        _ => return None,
    };
    let modifiers = Modifiers {
        alt: event.modifiers.contains(KeyModifiers::ALT),
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        shift: event.modifiers.contains(KeyModifiers::SHIFT) && !matches!(key, Key::Char(_)),
    };
    Some(KeyChord { modifiers, key })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_digit() {
        let chord = to_chord(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::ALT)).unwrap();
        assert_eq!(chord, KeyChord::alt('2'));
    }

    #[test]
    fn shifted_char_is_plain() {
        let chord = to_chord(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT)).unwrap();
        assert_eq!(chord, KeyChord::plain(Key::Char('+')));
    }

    #[test]
    fn space_and_enter() {
        let space = to_chord(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)).unwrap();
        assert!(space.is_space());
        let enter = to_chord(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).unwrap();
        assert!(enter.is_activation());
    }

    #[test]
    fn unsupported_keys() {
        assert_eq!(to_chord(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE)), None);
        assert_eq!(to_chord(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE)), None);
    }
}
