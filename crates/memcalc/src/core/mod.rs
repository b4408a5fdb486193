//! Core calculator logic: button vocabulary, arithmetic primitives, the
//! memory register and the input state machine.
//!
//! Nothing in here performs I/O. The display panel feeds [`Token`]s into
//! [`InputStateMachine::handle_input`] and renders the [`Update`] it gets
//! back.

pub mod arithmetic;
mod machine;
mod memory;
mod token;

pub use machine::{Evaluated, InputStateMachine, MachineSnapshot, Update};
pub use memory::MemoryRegister;
pub use token::{Operator, Token};

use thiserror::Error;

/// Display text shown after an invalid key sequence or a failed evaluation
pub const ERROR_DISPLAY: &str = "ERROR";

/// Display text shown when a result leaves the 32-bit integer range
pub const OVERFLOW_DISPLAY: &str = "ERROR: OVERFLOW";

/// Maximum number of characters typed into the first operand
pub const OPERAND1_LIMIT: usize = 15;

/// Maximum number of characters typed into the second operand
pub const OPERAND2_LIMIT: usize = 7;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised at the boundary between the core and its collaborators.
///
/// Key-sequence mistakes never show up here; the state machine reports those
/// through [`ERROR_DISPLAY`]. These variants describe contract violations:
/// text that is not a number handed to a primitive, or a label that is not a
/// button.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Operand text could not be parsed as a finite number
    #[error("Invalid operand: {0:?}")]
    InvalidOperand(String),
    /// Division by a zero-valued divisor
    #[error("Division by zero")]
    DivisionByZero,
    /// The computation produced NaN or infinity
    #[error("Invalid result: {0}")]
    InvalidResult(String),
    /// A label that is not part of the button vocabulary
    #[error("Unknown button: {0:?}")]
    UnknownToken(String),
}
