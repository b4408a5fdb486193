//! Keyboard and mouse input mapping
//!
//! Keys map straight onto button presses; the only extra action is quitting.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::{Operator, Token};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a calculator button
    Press(Token),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Press(Token::Clear),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::char_action(c),
            KeyCode::Enter => KeyAction::Press(Token::Equals),
            KeyCode::Backspace | KeyCode::Delete => KeyAction::Press(Token::Delete),
            KeyCode::Esc => KeyAction::Press(Token::Clear),
            _ => KeyAction::None,
        }
    }

    /// Returns the screen position of a left click, if the event is one
    #[must_use]
    pub fn click_position(&self, event: MouseEvent) -> Option<(u16, u16)> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some((event.column, event.row)),
            _ => None,
        }
    }

    fn char_action(c: char) -> KeyAction {
        let token = match c {
            '0'..='9' => c
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .and_then(Token::digit),
            '.' | ',' => Some(Token::Decimal),
            '+' => Some(Token::Operator(Operator::Add)),
            '-' => Some(Token::Operator(Operator::Subtract)),
            '*' | 'x' => Some(Token::Operator(Operator::Multiply)),
            '/' => Some(Token::Operator(Operator::Divide)),
            '^' => Some(Token::Operator(Operator::Square)),
            'r' => Some(Token::Operator(Operator::SquareRoot)),
            'p' => Some(Token::MemoryAdd),
            'n' => Some(Token::MemorySubtract),
            'm' => Some(Token::MemoryRecall),
            'M' => Some(Token::MemoryClear),
            'c' | 'C' => Some(Token::Clear),
            '=' => Some(Token::Equals),
            'q' => return KeyAction::Quit,
            _ => None,
        };
        token.map_or(KeyAction::None, KeyAction::Press)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn press(handler: &InputHandler, c: char) -> KeyAction {
        handler.handle_key(key_event(KeyCode::Char(c)))
    }

    // ===== Character input tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for (i, c) in ('0'..='9').enumerate() {
            assert_eq!(
                press(&handler, c),
                KeyAction::Press(Token::Digit(i as u8))
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        assert_eq!(press(&handler, '+'), KeyAction::Press(Token::Operator(Operator::Add)));
        assert_eq!(
            press(&handler, '-'),
            KeyAction::Press(Token::Operator(Operator::Subtract))
        );
        assert_eq!(
            press(&handler, '*'),
            KeyAction::Press(Token::Operator(Operator::Multiply))
        );
        assert_eq!(
            press(&handler, '/'),
            KeyAction::Press(Token::Operator(Operator::Divide))
        );
        assert_eq!(
            press(&handler, '^'),
            KeyAction::Press(Token::Operator(Operator::Square))
        );
        assert_eq!(
            press(&handler, 'r'),
            KeyAction::Press(Token::Operator(Operator::SquareRoot))
        );
    }

    #[test]
    fn test_handle_memory_keys() {
        let handler = InputHandler::new();
        assert_eq!(press(&handler, 'p'), KeyAction::Press(Token::MemoryAdd));
        assert_eq!(press(&handler, 'n'), KeyAction::Press(Token::MemorySubtract));
        assert_eq!(press(&handler, 'm'), KeyAction::Press(Token::MemoryRecall));
        assert_eq!(press(&handler, 'M'), KeyAction::Press(Token::MemoryClear));
    }

    #[test]
    fn test_handle_decimal_point() {
        let handler = InputHandler::new();
        assert_eq!(press(&handler, '.'), KeyAction::Press(Token::Decimal));
        assert_eq!(press(&handler, ','), KeyAction::Press(Token::Decimal));
    }

    #[test]
    fn test_handle_unmapped_char() {
        let handler = InputHandler::new();
        assert_eq!(press(&handler, '%'), KeyAction::None);
        assert_eq!(press(&handler, 'z'), KeyAction::None);
    }

    // ===== Special key tests =====

    #[test]
    fn test_handle_enter_and_equals() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Press(Token::Equals)
        );
        assert_eq!(press(&handler, '='), KeyAction::Press(Token::Equals));
    }

    #[test]
    fn test_handle_backspace_and_delete() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            KeyAction::Press(Token::Delete)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Delete)),
            KeyAction::Press(Token::Delete)
        );
    }

    #[test]
    fn test_handle_clear_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            KeyAction::Press(Token::Clear)
        );
        assert_eq!(press(&handler, 'c'), KeyAction::Press(Token::Clear));
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('l'))),
            KeyAction::Press(Token::Clear)
        );
    }

    #[test]
    fn test_handle_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(press(&handler, 'q'), KeyAction::Quit);
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_unknown() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_handle_unknown_key() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::F(1))), KeyAction::None);
        assert_eq!(handler.handle_key(key_event(KeyCode::Tab)), KeyAction::None);
    }

    // ===== Mouse tests =====

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_left_click_position() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.click_position(mouse(MouseEventKind::Down(MouseButton::Left))),
            Some((12, 7))
        );
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.click_position(mouse(MouseEventKind::Down(MouseButton::Right))),
            None
        );
        assert_eq!(handler.click_position(mouse(MouseEventKind::Moved)), None);
    }
}
