use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the viewer should do in response to an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Next,
    Previous,
    ToggleStatus,
    Resize(u16, u16),
}

/// Map a terminal event to a viewer action. Letters are case-insensitive;
/// unknown keys, key releases, mouse and focus events map to `None`.
pub fn action_for_event(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) => action_for_key(key),
        Event::Resize(columns, rows) => Some(Action::Resize(*columns, *rows)),
        _ => None,
    }
}

fn action_for_key(key: &KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Right => Some(Action::Next),
        KeyCode::Left => Some(Action::Previous),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => Some(Action::Quit),
            'l' => Some(Action::Next),
            'h' => Some(Action::Previous),
            's' => Some(Action::ToggleStatus),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::event_source::SimulatedEventSource;

    #[test]
    fn test_letters_are_case_insensitive() {
        for (c, action) in [
            ('q', Action::Quit),
            ('l', Action::Next),
            ('h', Action::Previous),
            ('s', Action::ToggleStatus),
        ] {
            assert_eq!(action_for_event(&SimulatedEventSource::char_key(c)), Some(action));
            let upper = c.to_ascii_uppercase();
            assert_eq!(
                action_for_event(&SimulatedEventSource::char_key(upper)),
                Some(action)
            );
        }
    }

    #[test]
    fn test_arrows_and_escape() {
        let key = |code| SimulatedEventSource::key_event(code, KeyModifiers::empty());
        assert_eq!(action_for_event(&key(KeyCode::Right)), Some(Action::Next));
        assert_eq!(action_for_event(&key(KeyCode::Left)), Some(Action::Previous));
        assert_eq!(action_for_event(&key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(action_for_event(&key(KeyCode::Up)), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        assert_eq!(
            action_for_event(&SimulatedEventSource::ctrl_char_key('c')),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        assert_eq!(action_for_event(&SimulatedEventSource::char_key('x')), None);
        assert_eq!(action_for_event(&SimulatedEventSource::char_key('7')), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: crossterm::event::KeyEventState::empty(),
        });
        assert_eq!(action_for_event(&event), None);
    }

    #[test]
    fn test_resize_carries_size() {
        assert_eq!(
            action_for_event(&SimulatedEventSource::resize(120, 40)),
            Some(Action::Resize(120, 40))
        );
    }
}
