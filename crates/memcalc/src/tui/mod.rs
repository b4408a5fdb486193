//! Terminal front end for the calculator
//!
//! The panel owns no calculator state of its own: it forwards tokens to
//! [`CalculatorApp`] and paints whatever the last update says.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget, LAYOUT};
pub use ui::{keypad_area, render, CalculatorUI, DEMO_TITLE, HELP_SHORTCUTS};
