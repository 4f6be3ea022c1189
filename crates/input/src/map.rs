//! Mapping from terminal events to game input.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::types::{KeyInput, Phase};

/// What the runner should do with one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    /// Terminal resized; the renderer should redraw everything.
    Resize,
    /// Primary button pressed at a terminal cell (column, row).
    Pointer { col: u16, row: u16 },
    Key(KeyInput),
    Ignore,
}

/// Translate a terminal event for the given phase.
pub fn map_event(event: &Event, phase: Phase) -> InputAction {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if should_quit(*key, phase) {
                return InputAction::Quit;
            }
            map_key(*key).map_or(InputAction::Ignore, InputAction::Key)
        }
        Event::Mouse(mouse) => pointer_down(*mouse)
            .map_or(InputAction::Ignore, |(col, row)| InputAction::Pointer { col, row }),
        Event::Resize(_, _) => InputAction::Resize,
        _ => InputAction::Ignore,
    }
}

/// Map keyboard input to name entry keys.
pub fn map_key(key: KeyEvent) -> Option<KeyInput> {
    match key.code {
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(KeyInput::Char(ch))
        }
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// `q` is only a quit key outside the game over screen, where it is a valid
/// name character.
pub fn should_quit(key: KeyEvent, phase: Phase) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('q') | KeyCode::Char('Q') => phase != Phase::GameOver,
        _ => false,
    }
}

/// Terminal cell of a primary button press.
pub fn pointer_down(mouse: MouseEvent) -> Option<(u16, u16)> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((mouse.column, mouse.row)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_name_entry_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('a'))),
            Some(KeyInput::Char('a'))
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(KeyInput::Char('A'))
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), Some(KeyInput::Enter));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Backspace)),
            Some(KeyInput::Backspace)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), None);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q')), Phase::Play));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc), Phase::GameOver));
        assert!(should_quit(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Phase::GameOver
        ));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x')), Phase::Home));
    }

    #[test]
    fn test_q_is_a_name_character_on_game_over() {
        let ev = Event::Key(KeyEvent::from(KeyCode::Char('q')));
        assert_eq!(map_event(&ev, Phase::GameOver), InputAction::Key(KeyInput::Char('q')));
        assert_eq!(map_event(&ev, Phase::Home), InputAction::Quit);
    }

    #[test]
    fn test_left_press_maps_to_pointer() {
        let ev = Event::Mouse(mouse(MouseEventKind::Down(MouseButton::Left), 7, 3));
        assert_eq!(map_event(&ev, Phase::Play), InputAction::Pointer { col: 7, row: 3 });

        let ev = Event::Mouse(mouse(MouseEventKind::Down(MouseButton::Right), 7, 3));
        assert_eq!(map_event(&ev, Phase::Play), InputAction::Ignore);

        let ev = Event::Mouse(mouse(MouseEventKind::Up(MouseButton::Left), 7, 3));
        assert_eq!(map_event(&ev, Phase::Play), InputAction::Ignore);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = KeyEvent::from(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_event(&Event::Key(key), Phase::Play), InputAction::Ignore);
    }

    #[test]
    fn test_resize() {
        assert_eq!(map_event(&Event::Resize(80, 24), Phase::Play), InputAction::Resize);
    }
}
