//! Terminal input source: crossterm events folded into poll snapshots.
//!
//! A click is a left mouse press or Enter, so the game stays playable in
//! terminals without mouse reporting. Key names follow the usual keysym
//! spelling ("a", "space", "Escape", "Up").

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::error::GameError;
use crate::game::{InputEvent, InputSource};

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Name of a pressed key, or None for releases and unnamed keys.
pub fn key_name(key: KeyEvent) -> Option<String> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let name = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Return".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Backspace => "BackSpace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "Prior".to_string(),
        KeyCode::PageDown => "Next".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => return None,
    };
    Some(name)
}

/// Whether an event is the click gesture.
pub fn is_click(event: &Event) -> bool {
    match event {
        Event::Mouse(MouseEvent { kind: MouseEventKind::Down(MouseButton::Left), .. }) => true,
        Event::Key(key) => key.kind == KeyEventKind::Press && key.code == KeyCode::Enter,
        _ => false,
    }
}

/// Fold one terminal event into the snapshot being built for a poll.
///
/// Later keys replace earlier ones: the snapshot keeps the most recent.
pub fn fold_event(mut input: InputEvent, event: &Event) -> InputEvent {
    if is_click(event) {
        input.clicked = true;
    } else if let Event::Key(key) = event {
        if let Some(name) = key_name(*key) {
            input.key = Some(name);
        }
    }
    input
}

// ============================================================================
// INPUT SOURCE
// ============================================================================

/// Reads the real terminal. Requires raw mode and mouse capture, which
/// `TerminalPresenter::initialize` sets up.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<InputEvent, GameError> {
        let mut input = InputEvent::none();
        while event::poll(Duration::ZERO).map_err(GameError::InputUnavailable)? {
            let ev = event::read().map_err(GameError::InputUnavailable)?;
            input = fold_event(input, &ev);
        }
        Ok(input)
    }

    fn await_click(&mut self) -> Result<(), GameError> {
        loop {
            let ev = event::read().map_err(GameError::InputUnavailable)?;
            if is_click(&ev) {
                return Ok(());
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent { kind, column: 3, row: 4, modifiers: KeyModifiers::NONE })
    }

    #[test]
    fn char_keys_use_their_character() {
        assert_eq!(key_name(press(KeyCode::Char('a'))), Some("a".into()));
        assert_eq!(key_name(press(KeyCode::Char('Z'))), Some("Z".into()));
    }

    #[test]
    fn special_keys_use_keysym_names() {
        assert_eq!(key_name(press(KeyCode::Char(' '))), Some("space".into()));
        assert_eq!(key_name(press(KeyCode::Esc)), Some("Escape".into()));
        assert_eq!(key_name(press(KeyCode::PageDown)), Some("Next".into()));
        assert_eq!(key_name(press(KeyCode::F(5))), Some("F5".into()));
    }

    #[test]
    fn releases_are_ignored() {
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        assert_eq!(key_name(key), None);
    }

    #[test]
    fn unnamed_key_returns_none() {
        assert_eq!(key_name(press(KeyCode::Null)), None);
    }

    #[test]
    fn left_press_and_enter_are_clicks() {
        assert!(is_click(&mouse(MouseEventKind::Down(MouseButton::Left))));
        assert!(is_click(&Event::Key(press(KeyCode::Enter))));
    }

    #[test]
    fn other_mouse_events_are_not_clicks() {
        assert!(!is_click(&mouse(MouseEventKind::Down(MouseButton::Right))));
        assert!(!is_click(&mouse(MouseEventKind::Up(MouseButton::Left))));
        assert!(!is_click(&mouse(MouseEventKind::Moved)));
        assert!(!is_click(&Event::Resize(80, 24)));
    }

    #[test]
    fn fold_keeps_most_recent_key_and_any_click() {
        let events = [
            Event::Key(press(KeyCode::Char('x'))),
            mouse(MouseEventKind::Down(MouseButton::Left)),
            Event::Key(press(KeyCode::Char('a'))),
            Event::Resize(10, 10),
        ];
        let input = events.iter().fold(InputEvent::none(), fold_event);
        assert_eq!(input, InputEvent { clicked: true, key: Some("a".into()) });
    }

    #[test]
    fn enter_counts_as_click_not_key() {
        let input = fold_event(InputEvent::none(), &Event::Key(press(KeyCode::Enter)));
        assert_eq!(input, InputEvent::click());
    }
}
