//! Button vocabulary
//!
//! Every button on the panel maps to exactly one [`Token`]. Tokens parse from
//! and render back to the label printed on the button.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::CalcError;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Operators the calculator can hold pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (-)
    #[serde(rename = "-")]
    Subtract,
    /// Multiplication (*)
    #[serde(rename = "*")]
    Multiply,
    /// Division (/)
    #[serde(rename = "/")]
    Divide,
    /// Square (^), applied to the first operand alone
    #[serde(rename = "^")]
    Square,
    /// Square root (SR), applied to the first operand alone
    #[serde(rename = "SR")]
    SquareRoot,
}

impl Operator {
    /// All operators in panel order
    pub const ALL: [Self; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Square,
        Self::SquareRoot,
    ];

    /// Returns the button label for this operator
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Square => "^",
            Self::SquareRoot => "SR",
        }
    }

    /// Returns true for operators that take only the first operand
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Square | Self::SquareRoot)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Token {
    /// A digit 0-9
    Digit(u8),
    /// The decimal point
    Decimal,
    /// An arithmetic operator
    Operator(Operator),
    /// M+: add the last result to memory
    MemoryAdd,
    /// M-: subtract the last result from memory
    MemorySubtract,
    /// MR: recall memory into the active operand
    MemoryRecall,
    /// MC: reset memory to zero
    MemoryClear,
    /// Del: remove the last character or the pending operator
    Delete,
    /// C: clear everything, memory included
    Clear,
    /// =: evaluate
    Equals,
}

impl Token {
    /// The full button vocabulary
    pub const ALL: [Self; 24] = [
        Self::Digit(0),
        Self::Digit(1),
        Self::Digit(2),
        Self::Digit(3),
        Self::Digit(4),
        Self::Digit(5),
        Self::Digit(6),
        Self::Digit(7),
        Self::Digit(8),
        Self::Digit(9),
        Self::Decimal,
        Self::Operator(Operator::Add),
        Self::Operator(Operator::Subtract),
        Self::Operator(Operator::Multiply),
        Self::Operator(Operator::Divide),
        Self::Operator(Operator::Square),
        Self::Operator(Operator::SquareRoot),
        Self::MemoryAdd,
        Self::MemorySubtract,
        Self::MemoryRecall,
        Self::MemoryClear,
        Self::Delete,
        Self::Clear,
        Self::Equals,
    ];

    /// Creates a digit token, `None` if `d` is not a decimal digit
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Returns the label printed on the button
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_LABELS.get(usize::from(d)).copied().unwrap_or("?"),
            Self::Decimal => ".",
            Self::Operator(op) => op.symbol(),
            Self::MemoryAdd => "M+",
            Self::MemorySubtract => "M-",
            Self::MemoryRecall => "MR",
            Self::MemoryClear => "MC",
            Self::Delete => "Del",
            Self::Clear => "C",
            Self::Equals => "=",
        }
    }

    /// Returns the character appended to an operand buffer, if any
    #[must_use]
    pub fn input_char(self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10),
            Self::Decimal => Some('.'),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Token {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|token| token.label() == s)
            .ok_or_else(|| CalcError::UnknownToken(s.to_string()))
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.label().to_string()
    }
}

impl TryFrom<String> for Token {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
