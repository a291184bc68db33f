//! Parsing of user-typed numeric operands.

use crate::core::error::{LabError, OperandPosition};

/// Parse a real number, ignoring surrounding whitespace.
///
/// Returns `None` for anything `f64::from_str` rejects. Overflowing literals
/// such as `1e400` parse to infinity here; use [`parse_operand_checked`] to
/// reject them.
pub fn parse_operand(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Parse both operands for the plain calculator.
///
/// A failure on either side collapses into `None`.
pub fn parse_operand_pair(first: &str, second: &str) -> Option<(f64, f64)> {
    Some((parse_operand(first)?, parse_operand(second)?))
}

/// Parse one operand, distinguishing malformed text from out-of-range values.
///
/// Infinity is accepted only when it was written literally (`inf`, `-Infinity`).
pub fn parse_operand_checked(text: &str, position: OperandPosition) -> Result<f64, LabError> {
    let trimmed = text.trim();
    let value = parse_operand(trimmed).ok_or(LabError::InvalidOperand(position))?;
    if value.is_infinite() && !is_infinity_literal(trimmed) {
        return Err(LabError::OperandOutOfRange(position));
    }
    Ok(value)
}

/// Parse both operands for the checked calculator, first operand first.
pub fn parse_operand_pair_checked(first: &str, second: &str) -> Result<(f64, f64), LabError> {
    let a = parse_operand_checked(first, OperandPosition::First)?;
    let b = parse_operand_checked(second, OperandPosition::Second)?;
    Ok((a, b))
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
