//! TUI application state
//!
//! Wraps the input state machine together with the keypad it drives.

use ratatui::layout::Rect;
use tracing::debug;

use super::input::KeyAction;
use super::keypad::Keypad;
use crate::core::{InputStateMachine, Operator, Token, Update};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// The calculator itself
    machine: InputStateMachine,
    /// Button grid mirroring the last press and the pending operator
    keypad: Keypad,
    /// What the machine reported for the last press
    last: Update,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with a blank display
    #[must_use]
    pub fn new() -> Self {
        Self {
            machine: InputStateMachine::new(),
            keypad: Keypad::new(),
            last: Update::default(),
            should_quit: false,
        }
    }

    /// Sends a button press to the machine and refreshes the keypad
    pub fn press(&mut self, token: Token) -> &Update {
        self.last = self.machine.handle_input(token);
        self.keypad.set_active(self.last.highlight);
        if let Some(index) = self.keypad.find_button(token) {
            self.keypad.press_button(index);
        }
        &self.last
    }

    /// Applies a key action, returning true if it changed anything
    pub fn apply(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Press(token) => {
                self.press(token);
                true
            }
            KeyAction::Quit => {
                self.quit();
                true
            }
            KeyAction::None => false,
        }
    }

    /// Presses whatever keypad button lies under a click
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> Option<Token> {
        let token = self.keypad.hit_test(keypad_area, x, y)?;
        debug!(%token, x, y, "keypad click");
        self.press(token);
        Some(token)
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.last.display
    }

    /// Returns the highlighted operator
    #[must_use]
    pub fn highlight(&self) -> Option<Operator> {
        self.last.highlight
    }

    /// Returns the memory register value
    #[must_use]
    pub fn memory(&self) -> &str {
        self.machine.memory().value()
    }

    /// Returns the operator waiting for its operand, if any
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.machine.operator()
    }

    /// Returns the last update
    #[must_use]
    pub fn update(&self) -> &Update {
        &self.last
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the state machine
    #[must_use]
    pub fn machine(&self) -> &InputStateMachine {
        &self.machine
    }

    /// Returns a one-line summary of memory and the pending operator
    #[must_use]
    pub fn status_line(&self) -> String {
        let operator = self
            .pending_operator()
            .map_or_else(|| "-".to_string(), |op| op.symbol().to_string());
        format!("M: {}  OP: {}", self.memory(), operator)
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Signals the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
