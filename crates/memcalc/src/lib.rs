//! memcalc - a four-function keypad calculator with memory
//!
//! The calculator is a state machine over button presses. It has two
//! operand buffers, a pending operator, a memory register and a single
//! display line. A panel (the terminal keypad in [`tui`], or anything else)
//! forwards [`Token`](core::Token)s and renders the returned
//! [`Update`](core::Update).
//!
//! # Example
//!
//! ```rust
//! use memcalc::prelude::*;
//!
//! let mut machine = InputStateMachine::new();
//! for label in ["1", "2", "*", "4", "="] {
//!     machine.press(label).unwrap();
//! }
//! assert_eq!(machine.display(), "48");
//!
//! // Operators only apply to a complete first operand
//! let update = machine.handle_input(Token::Operator(Operator::Add));
//! assert_eq!(update.display, "ERROR");
//!
//! // The primitives work on operand text directly
//! assert_eq!(arithmetic::multiply("63.354", "8.31").unwrap(), "526.47174");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::arithmetic;
    pub use crate::core::{
        CalcError, CalcResult, Evaluated, InputStateMachine, MachineSnapshot, MemoryRegister,
        Operator, Token, Update, ERROR_DISPLAY, OVERFLOW_DISPLAY,
    };
    pub use crate::driver::{KeypadDriver, MachineDriver};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
