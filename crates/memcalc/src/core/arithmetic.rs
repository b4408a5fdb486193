//! Arithmetic primitives over operand text
//!
//! Operands arrive as the text the user typed. They are parsed as
//! single-precision floats, combined, and rendered back to text: integral
//! values without a decimal point, everything else with the shortest `f32`
//! representation that round-trips.
//!
//! Text that is not a finite number is a caller bug and fails with
//! [`CalcError::InvalidOperand`].

use crate::core::{CalcError, CalcResult, Operator};

/// Addition: lhs + rhs
pub fn add(lhs: &str, rhs: &str) -> CalcResult<String> {
    let result = parse_operand(lhs)? + parse_operand(rhs)?;
    finish(result)
}

/// Subtraction: lhs - rhs
pub fn subtract(lhs: &str, rhs: &str) -> CalcResult<String> {
    let result = parse_operand(lhs)? - parse_operand(rhs)?;
    finish(result)
}

/// Multiplication: lhs * rhs
pub fn multiply(lhs: &str, rhs: &str) -> CalcResult<String> {
    let result = parse_operand(lhs)? * parse_operand(rhs)?;
    finish(result)
}

/// Division: lhs / rhs
pub fn divide(lhs: &str, rhs: &str) -> CalcResult<String> {
    let dividend = parse_operand(lhs)?;
    let divisor = parse_operand(rhs)?;
    if divisor == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    finish(dividend / divisor)
}

/// Square: operand * operand
pub fn square(operand: &str) -> CalcResult<String> {
    let value = parse_operand(operand)?;
    finish(value * value)
}

/// Square root, taken in double precision and narrowed to `f32`
pub fn square_root(operand: &str) -> CalcResult<String> {
    let value = parse_wide_operand(operand)?;
    finish(value.sqrt() as f32)
}

/// Applies a two-operand operator
pub fn binary(op: Operator, lhs: &str, rhs: &str) -> CalcResult<String> {
    match op {
        Operator::Add => add(lhs, rhs),
        Operator::Subtract => subtract(lhs, rhs),
        Operator::Multiply => multiply(lhs, rhs),
        Operator::Divide => divide(lhs, rhs),
        Operator::Square | Operator::SquareRoot => Err(CalcError::InvalidResult(format!(
            "{op} takes a single operand"
        ))),
    }
}

/// Applies a one-operand operator
pub fn unary(op: Operator, operand: &str) -> CalcResult<String> {
    match op {
        Operator::Square => square(operand),
        Operator::SquareRoot => square_root(operand),
        Operator::Add | Operator::Subtract | Operator::Multiply | Operator::Divide => Err(
            CalcError::InvalidResult(format!("{op} needs two operands")),
        ),
    }
}

/// Formats a value for the display.
///
/// Integral values drop the fractional part entirely (`4.0` becomes `"4"`,
/// negative zero becomes `"0"`).
#[must_use]
pub fn format_value(value: f32) -> String {
    if value.fract() == 0.0 {
        if value == 0.0 {
            return "0".to_string();
        }
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Parses display text back into a value, `None` if it is not a number
#[must_use]
pub fn parse_value(text: &str) -> Option<f32> {
    text.parse::<f32>().ok().filter(|v| v.is_finite())
}

fn parse_operand(text: &str) -> CalcResult<f32> {
    parse_value(text).ok_or_else(|| CalcError::InvalidOperand(text.to_string()))
}

fn parse_wide_operand(text: &str) -> CalcResult<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CalcError::InvalidOperand(text.to_string()))
}

fn finish(result: f32) -> CalcResult<String> {
    if result.is_nan() {
        Err(CalcError::InvalidResult("NaN".into()))
    } else if result.is_infinite() {
        Err(CalcError::InvalidResult("infinity".into()))
    } else {
        Ok(format_value(result))
    }
}
