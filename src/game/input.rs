use crossterm::event::KeyCode;

use super::entity::Direction;

/// Maps the four arrow keys to headings. Every other key is ignored.
pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::UP),
        KeyCode::Down => Some(Direction::DOWN),
        KeyCode::Left => Some(Direction::LEFT),
        KeyCode::Right => Some(Direction::RIGHT),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_headings() {
        assert_eq!(direction_for_key(KeyCode::Up), Some(Direction::UP));
        assert_eq!(direction_for_key(KeyCode::Down), Some(Direction::DOWN));
        assert_eq!(direction_for_key(KeyCode::Left), Some(Direction::LEFT));
        assert_eq!(direction_for_key(KeyCode::Right), Some(Direction::RIGHT));
    }

    #[test]
    fn test_other_keys_ignored() {
        for code in [KeyCode::Char('w'), KeyCode::Enter, KeyCode::Char(' '), KeyCode::Tab] {
            assert_eq!(direction_for_key(code), None);
        }
    }
}
