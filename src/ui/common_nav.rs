
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::state::Screen;

/// Screen switching shared by every page. `typing` turns off the bare
/// letter/digit shortcuts so text entry keeps them.
pub fn nav_target(k: KeyEvent, current: Screen, typing: bool) -> Option<Screen> {
    if k.modifiers.contains(KeyModifiers::CONTROL) || k.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }
    match k.code {
        KeyCode::F(n @ 1..=4) => Some(Screen::ALL[usize::from(n) - 1]),
        KeyCode::Tab => Some(current.next()),
        KeyCode::BackTab => Some(current.prev()),
        KeyCode::Char(c) if !typing => match c {
            '1' | 'h' => Some(Screen::Home),
            '2' | 'e' => Some(Screen::Explore),
            '3' | 'r' => Some(Screen::Reflect),
            '4' | 'p' => Some(Screen::Profile),
            _ => None,
        },
        _ => None,
    }
}

pub fn is_ctrl(k: KeyEvent, c: char) -> bool {
    k.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(k.code, KeyCode::Char(x) if x.eq_ignore_ascii_case(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_function_keys_select_directly() {
        assert_eq!(nav_target(key(KeyCode::F(3)), Screen::Home, true), Some(Screen::Reflect));
        assert_eq!(nav_target(key(KeyCode::F(5)), Screen::Home, false), None);
    }

    #[test]
    fn test_letters_only_when_not_typing() {
        assert_eq!(nav_target(key(KeyCode::Char('p')), Screen::Home, false), Some(Screen::Profile));
        assert_eq!(nav_target(key(KeyCode::Char('p')), Screen::Reflect, true), None);
    }

    #[test]
    fn test_tab_cycles() {
        assert_eq!(nav_target(key(KeyCode::Tab), Screen::Profile, true), Some(Screen::Home));
        assert_eq!(nav_target(key(KeyCode::BackTab), Screen::Home, true), Some(Screen::Profile));
    }

    #[test]
    fn test_ctrl_detection() {
        assert!(is_ctrl(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::CONTROL), 's'));
        assert!(!is_ctrl(key(KeyCode::Char('s')), 's'));
    }
}
