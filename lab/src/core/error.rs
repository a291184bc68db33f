//! Domain errors raised by the pure lab logic.
//!
//! Each variant maps to one user-facing message. Activities decide how to
//! print them; the core never writes to the console.

use thiserror::Error;

/// Which of the two operands failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandPosition {
    First,
    Second,
}

impl OperandPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            OperandPosition::First => "First",
            OperandPosition::Second => "Second",
        }
    }
}

/// Recoverable errors produced by operand parsing, arithmetic and factorials.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabError {
    #[error("{} input is not a valid number.", .0.as_str())]
    InvalidOperand(OperandPosition),

    #[error("The number is too large or too small.")]
    OperandOutOfRange(OperandPosition),

    #[error("Cannot divide by zero.")]
    DivisionByZero,

    #[error("Factorial is not defined for negative numbers.")]
    NegativeFactorial,

    #[error("Result is too large to calculate.")]
    FactorialTooLarge,
}
