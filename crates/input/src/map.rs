//! Key mapping from terminal events to control intents.

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a movement intent.
pub fn map_key(key: KeyEvent) -> Option<Intent> {
    match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Intent::Thrust),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Intent::Brake),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Intent::TurnLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Intent::TurnRight),
        _ => None,
    }
}

/// Check if key should quit.
///
/// Raw mode disables signal-generating keys, so Ctrl-C shows up here as an
/// ordinary key event.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('w'))),
            Some(Intent::Thrust)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('s'))),
            Some(Intent::Brake)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('a'))),
            Some(Intent::TurnLeft)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('d'))),
            Some(Intent::TurnRight)
        );

        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('W'))),
            Some(Intent::Thrust)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('S'))),
            Some(Intent::Brake)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('A'))),
            Some(Intent::TurnLeft)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('D'))),
            Some(Intent::TurnRight)
        );
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('w'))));
    }
}
