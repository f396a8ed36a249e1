//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pomo_core::Input;

/// Translate a key press into an engine input. Unbound keys give `None`.
pub fn input_for(key: KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let input = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::QuitRequest,
        KeyCode::Char('q') => Input::QuitRequest,
        KeyCode::Enter => Input::Confirm,
        KeyCode::Esc | KeyCode::Char('n') => Input::Cancel,
        KeyCode::Left => Input::NavLeft,
        KeyCode::Right => Input::NavRight,
        KeyCode::Up => Input::NavUp,
        KeyCode::Down => Input::NavDown,
        KeyCode::Char('s') => Input::OpenSettings,
        KeyCode::Char('w') => Input::GoWork,
        KeyCode::Char('p') => Input::GoPause,
        KeyCode::Char(' ') => Input::ToggleRun,
        KeyCode::Char('r') => Input::Reset,
        _ => return None,
    };
    Some(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(input_for(key(KeyCode::Char('q'))), Some(Input::QuitRequest));
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(input_for(ctrl_c), Some(Input::QuitRequest));
    }

    #[test]
    fn test_plain_c_is_unbound() {
        assert_eq!(input_for(key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_cancel_keys() {
        assert_eq!(input_for(key(KeyCode::Esc)), Some(Input::Cancel));
        assert_eq!(input_for(key(KeyCode::Char('n'))), Some(Input::Cancel));
    }

    #[test]
    fn test_timer_keys() {
        assert_eq!(input_for(key(KeyCode::Char(' '))), Some(Input::ToggleRun));
        assert_eq!(input_for(key(KeyCode::Char('r'))), Some(Input::Reset));
        assert_eq!(input_for(key(KeyCode::Char('w'))), Some(Input::GoWork));
        assert_eq!(input_for(key(KeyCode::Char('p'))), Some(Input::GoPause));
        assert_eq!(input_for(key(KeyCode::Char('s'))), Some(Input::OpenSettings));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            ..key(KeyCode::Enter)
        };
        assert_eq!(input_for(release), None);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        assert_eq!(input_for(key(KeyCode::Char('z'))), None);
        assert_eq!(input_for(key(KeyCode::Tab)), None);
    }
}
