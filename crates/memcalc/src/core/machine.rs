//! Input state machine
//!
//! Owns every piece of calculator state and interprets one button press at
//! a time. Each call to [`InputStateMachine::handle_input`] returns the
//! [`Update`] the panel should show; there is no listener registration.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    arithmetic, CalcError, MemoryRegister, Operator, Token, ERROR_DISPLAY, OPERAND1_LIMIT,
    OPERAND2_LIMIT, OVERFLOW_DISPLAY,
};

/// Outcome of the last `=` press
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evaluated {
    /// A formatted number
    Number(String),
    /// Evaluation failed; the display showed [`ERROR_DISPLAY`]
    Error,
}

impl Evaluated {
    /// Returns the text the display shows for this outcome
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            Self::Number(value) => value,
            Self::Error => ERROR_DISPLAY,
        }
    }
}

/// What the panel renders after a button press
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Update {
    /// Text for the display
    pub display: String,
    /// Operator button to mark as active, if any
    pub highlight: Option<Operator>,
}

impl Update {
    /// Returns true if the display shows one of the error sentinels
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display.starts_with(ERROR_DISPLAY)
    }
}

/// Serializable copy of the full machine state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    /// First operand buffer
    pub operand1: String,
    /// Second operand buffer
    pub operand2: String,
    /// Pending operator
    pub operator: Option<Operator>,
    /// Outcome of the last evaluation
    pub result: Option<Evaluated>,
    /// Display text
    pub display: String,
    /// Memory register
    pub memory: MemoryRegister,
    /// Highlighted operator button
    pub highlight: Option<Operator>,
}

/// The calculator: two operand buffers, a pending operator, the last
/// result, the display and the memory register.
#[derive(Debug, Clone, Default)]
pub struct InputStateMachine {
    operand1: String,
    operand2: String,
    operator: Option<Operator>,
    result: Option<Evaluated>,
    display: String,
    memory: MemoryRegister,
    highlight: Option<Operator>,
}

impl InputStateMachine {
    /// Creates a machine with empty buffers and zero in memory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one button press and returns what the panel should show
    pub fn handle_input(&mut self, token: Token) -> Update {
        trace!(%token, "button pressed");

        match token {
            Token::Digit(_) | Token::Decimal => self.append(token),
            Token::Operator(op) if op.is_unary() => self.unary_operator(op),
            Token::Operator(op) => self.binary_operator(op),
            Token::MemoryAdd => self.store_result(MemoryRegister::add),
            Token::MemorySubtract => self.store_result(MemoryRegister::subtract),
            Token::MemoryRecall => self.recall(),
            Token::MemoryClear => self.memory.clear(),
            Token::Delete => self.delete(),
            Token::Clear => self.clear_all(),
            Token::Equals => self.evaluate(),
        }

        self.check_overflow();
        self.update()
    }

    /// Parses a button label and applies it
    pub fn press(&mut self, label: &str) -> Result<Update, CalcError> {
        let token = label.parse::<Token>()?;
        Ok(self.handle_input(token))
    }

    /// Returns what the panel should currently show
    #[must_use]
    pub fn update(&self) -> Update {
        Update {
            display: self.display.clone(),
            highlight: self.highlight,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the first operand buffer
    #[must_use]
    pub fn operand1(&self) -> &str {
        &self.operand1
    }

    /// Returns the second operand buffer
    #[must_use]
    pub fn operand2(&self) -> &str {
        &self.operand2
    }

    /// Returns the pending operator
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Returns the outcome of the last evaluation
    #[must_use]
    pub fn result(&self) -> Option<&Evaluated> {
        self.result.as_ref()
    }

    /// Returns the memory register
    #[must_use]
    pub fn memory(&self) -> &MemoryRegister {
        &self.memory
    }

    /// Returns the highlighted operator button
    #[must_use]
    pub fn highlight(&self) -> Option<Operator> {
        self.highlight
    }

    /// Returns a serializable copy of the full state
    #[must_use]
    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            operand1: self.operand1.clone(),
            operand2: self.operand2.clone(),
            operator: self.operator,
            result: self.result.clone(),
            display: self.display.clone(),
            memory: self.memory.clone(),
            highlight: self.highlight,
        }
    }

    fn append(&mut self, token: Token) {
        let Some(ch) = token.input_char() else {
            return;
        };

        if self.operator.is_none() && self.operand1.len() < OPERAND1_LIMIT {
            if accepts(&self.operand1, ch) {
                self.operand1.push(ch);
                self.display.clone_from(&self.operand1);
            }
        } else if self.operator.is_some() && self.operand2.len() < OPERAND2_LIMIT {
            if accepts(&self.operand2, ch) {
                self.operand2.push(ch);
                self.display.clone_from(&self.operand2);
            }
        }
    }

    fn binary_operator(&mut self, op: Operator) {
        if self.operand1.is_empty() && op == Operator::Subtract {
            self.operand1.push('-');
            self.display.clone_from(&self.operand1);
        } else if !self.operand1.is_empty() && self.operand2.is_empty() {
            self.operator = Some(op);
            self.highlight = Some(op);
        } else {
            debug!(operator = %op, "operator without a complete first operand");
            self.reset_transient();
            self.show_error();
        }
    }

    // Misuse of a unary operator leaves the buffers as they are.
    fn unary_operator(&mut self, op: Operator) {
        if !self.operand1.is_empty() && self.operand2.is_empty() {
            self.operator = Some(op);
            self.highlight = Some(op);
        } else {
            debug!(operator = %op, "unary operator rejected");
            self.show_error();
        }
    }

    fn store_result(&mut self, apply: fn(&mut MemoryRegister, &str) -> Result<(), CalcError>) {
        let stored = match &self.result {
            Some(Evaluated::Number(value)) => Some(apply(&mut self.memory, value)),
            _ => None,
        };

        match stored {
            Some(Ok(())) => {
                debug!(memory = self.memory.value(), "memory updated");
                self.display.clear();
            }
            Some(Err(e)) => {
                debug!(error = %e, "memory update failed");
                self.display = ERROR_DISPLAY.to_string();
            }
            None => {
                debug!(result = ?self.result, "no numeric result to store in memory");
                self.display = ERROR_DISPLAY.to_string();
            }
        }

        self.reset_transient();
        self.highlight = None;
    }

    fn recall(&mut self) {
        if self.operand1.is_empty() {
            self.operand1 = self.memory.value().to_string();
            self.display.clone_from(&self.operand1);
        } else if self.operator.is_some() {
            self.operand2 = self.memory.value().to_string();
            self.display.clone_from(&self.operand2);
        }
    }

    fn delete(&mut self) {
        if !self.operand1.is_empty() && self.operator.is_none() {
            self.operand1.pop();
            self.display.clone_from(&self.operand1);
        } else if !self.operand1.is_empty() && self.operator.is_some() && self.operand2.is_empty()
        {
            self.operator = None;
            self.highlight = None;
        } else if !self.operand2.is_empty() {
            self.operand2.pop();
            if self.operand2.is_empty() {
                self.display.clone_from(&self.operand1);
            } else {
                self.display.clone_from(&self.operand2);
            }
        }
    }

    fn clear_all(&mut self) {
        self.reset_transient();
        self.display.clear();
        self.memory.clear();
        self.highlight = None;
    }

    fn evaluate(&mut self) {
        let outcome = match self.operator {
            Some(op) if !op.is_unary() && !self.operand1.is_empty() && !self.operand2.is_empty() => {
                Some(arithmetic::binary(op, &self.operand1, &self.operand2))
            }
            Some(op) if op.is_unary() && !self.operand1.is_empty() && self.operand2.is_empty() => {
                Some(arithmetic::unary(op, &self.operand1))
            }
            _ => None,
        };

        let evaluated = match outcome {
            Some(Ok(value)) => {
                debug!(
                    lhs = %self.operand1,
                    rhs = %self.operand2,
                    operator = ?self.operator,
                    %value,
                    "evaluated"
                );
                Evaluated::Number(value)
            }
            Some(Err(e)) => {
                debug!(error = %e, "evaluation failed");
                Evaluated::Error
            }
            None => {
                debug!(
                    lhs = %self.operand1,
                    rhs = %self.operand2,
                    operator = ?self.operator,
                    "incomplete input"
                );
                Evaluated::Error
            }
        };

        self.operand1.clear();
        self.operand2.clear();
        self.operator = None;
        self.display = evaluated.display_text().to_string();
        self.result = Some(evaluated);
        self.highlight = None;
    }

    fn check_overflow(&mut self) {
        let Some(Evaluated::Number(value)) = &self.result else {
            return;
        };
        if self.display == ERROR_DISPLAY {
            return;
        }

        let out_of_range = arithmetic::parse_value(value)
            .is_some_and(|v| v >= i32::MAX as f32 || v <= i32::MIN as f32);
        if out_of_range {
            debug!(%value, "result outside the 32-bit range");
            self.reset_transient();
            self.highlight = None;
            self.display = OVERFLOW_DISPLAY.to_string();
        }
    }

    fn show_error(&mut self) {
        self.display = ERROR_DISPLAY.to_string();
        self.highlight = None;
    }

    fn reset_transient(&mut self) {
        self.operand1.clear();
        self.operand2.clear();
        self.operator = None;
        self.result = None;
    }
}

/// Returns true if `ch` may be appended to `buffer`
fn accepts(buffer: &str, ch: char) -> bool {
    if ch != '.' {
        return true;
    }
    !(buffer.is_empty() || buffer == "-" || buffer.contains('.'))
}
