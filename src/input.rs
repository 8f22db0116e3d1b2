use crossterm::event::{KeyCode, KeyEvent};

use crate::snake::Direction::{self, *};

/// Decides whether a requested heading replaces the current one.
///
/// A reversal would put the head straight onto the neck, so it is rejected
/// and the snake keeps going the way it was.
pub fn resolve(requested: Option<Direction>, current: Direction) -> Option<Direction> {
    match requested {
        Some(dir) if dir != current.opposite() => Some(dir),
        _ => None,
    }
}

/// Arrow keys and WASD; anything else is not a direction.
pub fn key_direction(key: &KeyEvent) -> Option<Direction> {
    match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Up),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Left),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Down),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    const ALL: [Direction; 4] = [Up, Down, Left, Right];

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn reversals_are_rejected() {
        assert_eq!(resolve(Some(Down), Up), None);
        assert_eq!(resolve(Some(Up), Down), None);
        assert_eq!(resolve(Some(Right), Left), None);
        assert_eq!(resolve(Some(Left), Right), None);
    }

    #[test]
    fn never_returns_the_reverse() {
        for &current in ALL.iter() {
            for &requested in ALL.iter() {
                assert_ne!(resolve(Some(requested), current), Some(current.opposite()));
            }
        }
    }

    #[test]
    fn turns_and_same_heading_are_accepted() {
        assert_eq!(resolve(Some(Up), Right), Some(Up));
        assert_eq!(resolve(Some(Down), Right), Some(Down));
        assert_eq!(resolve(Some(Right), Right), Some(Right));
        assert_eq!(resolve(Some(Left), Up), Some(Left));
    }

    #[test]
    fn no_input_is_no_change() {
        for &current in ALL.iter() {
            assert_eq!(resolve(None, current), None);
        }
    }

    #[test]
    fn arrows_and_wasd_map_to_directions() {
        assert_eq!(key_direction(&key(KeyCode::Up)), Some(Up));
        assert_eq!(key_direction(&key(KeyCode::Down)), Some(Down));
        assert_eq!(key_direction(&key(KeyCode::Left)), Some(Left));
        assert_eq!(key_direction(&key(KeyCode::Right)), Some(Right));

        assert_eq!(key_direction(&key(KeyCode::Char('w'))), Some(Up));
        assert_eq!(key_direction(&key(KeyCode::Char('A'))), Some(Left));
        assert_eq!(key_direction(&key(KeyCode::Char('s'))), Some(Down));
        assert_eq!(key_direction(&key(KeyCode::Char('D'))), Some(Right));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(key_direction(&key(KeyCode::Char('x'))), None);
        assert_eq!(key_direction(&key(KeyCode::Esc)), None);
        assert_eq!(key_direction(&key(KeyCode::Enter)), None);
    }
}
