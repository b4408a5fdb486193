//! Property-based tests for the input state machine and keypad
//!
//! Random button sequences must never break the buffer, highlight or
//! reset invariants.

#![cfg(feature = "tui")]
#![allow(clippy::unwrap_used)]

use memcalc::prelude::*;
use memcalc::tui::{Keypad, LAYOUT};
use proptest::prelude::*;
use ratatui::layout::Rect;

// ===== Strategy definitions =====

/// Any of the 24 buttons
fn token_strategy() -> impl Strategy<Value = Token> {
    prop::sample::select(Token::ALL.to_vec())
}

/// Digits and the decimal point only
fn entry_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![
        (0u8..=9u8).prop_map(Token::Digit),
        Just(Token::Decimal),
    ]
}

fn press_number(machine: &mut InputStateMachine, value: u32) {
    for ch in value.to_string().chars() {
        machine.press(&ch.to_string()).unwrap();
    }
}

// ===== Buffer invariants =====

proptest! {
    /// Entry never grows the first operand past its limit
    #[test]
    fn prop_operand1_bounded(tokens in prop::collection::vec(entry_strategy(), 0..40)) {
        let mut machine = InputStateMachine::new();
        for token in tokens {
            machine.handle_input(token);
        }
        prop_assert!(machine.operand1().len() <= 15);
        prop_assert_eq!(machine.display(), machine.operand1());
    }

    /// Entry after an operator never grows the second operand past its limit
    #[test]
    fn prop_operand2_bounded(tokens in prop::collection::vec(entry_strategy(), 0..40)) {
        let mut machine = InputStateMachine::new();
        machine.press("1").unwrap();
        machine.press("+").unwrap();
        for token in tokens {
            machine.handle_input(token);
        }
        prop_assert!(machine.operand2().len() <= 7);
        prop_assert_eq!(machine.operand1(), "1");
    }

    /// No buffer ever holds two decimal points
    #[test]
    fn prop_single_decimal_point(tokens in prop::collection::vec(token_strategy(), 0..60)) {
        let mut machine = InputStateMachine::new();
        for token in tokens {
            machine.handle_input(token);
            prop_assert!(machine.operand1().matches('.').count() <= 1);
            prop_assert!(machine.operand2().matches('.').count() <= 1);
            prop_assert!(!machine.operand1().starts_with('.'));
            prop_assert!(!machine.operand2().starts_with('.'));
        }
    }

    /// A highlighted button is always the pending operator
    #[test]
    fn prop_highlight_matches_operator(tokens in prop::collection::vec(token_strategy(), 0..60)) {
        let mut machine = InputStateMachine::new();
        for token in tokens {
            let update = machine.handle_input(token);
            if let Some(op) = update.highlight {
                prop_assert_eq!(machine.operator(), Some(op));
            }
        }
    }

    /// C always returns the machine to its initial state
    #[test]
    fn prop_clear_resets_everything(tokens in prop::collection::vec(token_strategy(), 0..60)) {
        let mut machine = InputStateMachine::new();
        for token in tokens {
            machine.handle_input(token);
        }
        let update = machine.handle_input(Token::Clear);
        prop_assert_eq!(update, Update::default());
        prop_assert_eq!(machine.snapshot(), InputStateMachine::new().snapshot());
    }

    /// `=` always leaves something on the display
    #[test]
    fn prop_equals_never_blank(tokens in prop::collection::vec(token_strategy(), 0..40)) {
        let mut machine = InputStateMachine::new();
        for token in tokens {
            machine.handle_input(token);
        }
        let update = machine.handle_input(Token::Equals);
        prop_assert!(!update.display.is_empty());
        prop_assert_eq!(update.highlight, None);
        prop_assert!(machine.operand1().is_empty());
        prop_assert!(machine.operand2().is_empty());
    }
}

// ===== Arithmetic through the keypad =====

proptest! {
    /// Whole-number sums display without a trailing ".0"
    #[test]
    fn prop_integer_sum(a in 0u32..100_000, b in 0u32..100_000) {
        let mut machine = InputStateMachine::new();
        press_number(&mut machine, a);
        machine.press("+").unwrap();
        press_number(&mut machine, b);
        let update = machine.press("=").unwrap();
        prop_assert_eq!(update.display, (a + b).to_string());
    }

    /// Small products are exact
    #[test]
    fn prop_integer_product(a in 0u32..1000, b in 0u32..1000) {
        let mut machine = InputStateMachine::new();
        press_number(&mut machine, a);
        machine.press("*").unwrap();
        press_number(&mut machine, b);
        let update = machine.press("=").unwrap();
        prop_assert_eq!(update.display, (a * b).to_string());
    }

    /// M+ stores the last result and blanks the display
    #[test]
    fn prop_memory_add_stores_result(a in 0u32..1000, b in 0u32..1000) {
        let mut machine = InputStateMachine::new();
        press_number(&mut machine, a);
        machine.press("-").unwrap();
        press_number(&mut machine, b);
        machine.press("=").unwrap();
        let update = machine.press("M+").unwrap();
        prop_assert_eq!(update.display, "");
        let expected = i64::from(a) - i64::from(b);
        prop_assert_eq!(machine.memory().value(), expected.to_string());
    }

    /// Dividing by zero is an error for any dividend
    #[test]
    fn prop_division_by_zero(a in 0u32..1_000_000) {
        let mut machine = InputStateMachine::new();
        press_number(&mut machine, a);
        machine.press("/").unwrap();
        machine.press("0").unwrap();
        let update = machine.press("=").unwrap();
        prop_assert_eq!(update.display, ERROR_DISPLAY);
        prop_assert_eq!(machine.result(), Some(&Evaluated::Error));
    }
}

// ===== Keypad properties =====

proptest! {
    /// Every button can be found again by its token
    #[test]
    fn prop_find_button_round_trip(token in token_strategy()) {
        let keypad = Keypad::new();
        let index = keypad.find_button(token).unwrap();
        prop_assert_eq!(keypad.get_button(index).unwrap().token, token);
    }

    /// Clicking the centre of a cell hits that cell's button
    #[test]
    fn prop_hit_test_cell_centre(
        row in 0usize..6,
        col in 0usize..4,
        width in 26u16..80,
        height in 14u16..40,
    ) {
        let keypad = Keypad::new();
        let area = Rect::new(3, 2, width, height);
        let btn_width = (width - 2) / 4;
        let btn_height = (height - 2) / 6;
        let x = area.x + 1 + col as u16 * btn_width + btn_width / 2;
        let y = area.y + 1 + row as u16 * btn_height + btn_height / 2;
        prop_assert_eq!(keypad.hit_test(area, x, y), Some(LAYOUT[row][col]));
    }

    /// At most one operator is ever marked active
    #[test]
    fn prop_single_active_operator(op in prop::sample::select(Operator::ALL.to_vec())) {
        let mut keypad = Keypad::new();
        keypad.set_active(Some(op));
        prop_assert_eq!(keypad.buttons().filter(|b| b.active).count(), 1);
        prop_assert_eq!(keypad.active_operator(), Some(op));
        keypad.set_active(None);
        prop_assert_eq!(keypad.active_operator(), None);
    }
}
