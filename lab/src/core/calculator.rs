//! Two-operand calculators used by the arithmetic activities.
//!
//! [`Calculator`] divides unconditionally and follows IEEE semantics for a
//! zero divisor. [`CheckedCalculator`] wraps it and rejects a zero divisor
//! before dividing. The two are kept distinct on purpose.

use std::fmt;

use crate::core::error::LabError;

/// Parity of a (possibly fractional) sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// `Even` iff `value % 2 == 0`, applied to the float as-is.
    ///
    /// `2.5 % 2.0 == 0.5`, so fractional sums are always `Odd`.
    pub fn of(value: f64) -> Self {
        if value % 2.0 == 0.0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculator {
    a: f64,
    b: f64,
}

impl Calculator {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    pub fn operands(&self) -> (f64, f64) {
        (self.a, self.b)
    }

    pub fn add(&self) -> f64 {
        self.a + self.b
    }

    pub fn subtract(&self) -> f64 {
        self.a - self.b
    }

    pub fn multiply(&self) -> f64 {
        self.a * self.b
    }

    /// Never fails: `x / 0.0` is ±infinity, `0.0 / 0.0` is NaN.
    pub fn divide(&self) -> f64 {
        self.a / self.b
    }

    pub fn sum_parity(&self) -> Parity {
        Parity::of(self.add())
    }
}

/// Calculator that refuses to divide by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckedCalculator {
    inner: Calculator,
}

impl CheckedCalculator {
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            inner: Calculator::new(a, b),
        }
    }

    pub fn operands(&self) -> (f64, f64) {
        self.inner.operands()
    }

    pub fn add(&self) -> f64 {
        self.inner.add()
    }

    pub fn subtract(&self) -> f64 {
        self.inner.subtract()
    }

    pub fn multiply(&self) -> f64 {
        self.inner.multiply()
    }

    /// Rejects both `0.0` and `-0.0` divisors.
    pub fn divide(&self) -> Result<f64, LabError> {
        let (_, b) = self.inner.operands();
        if b == 0.0 {
            return Err(LabError::DivisionByZero);
        }
        Ok(self.inner.divide())
    }

    pub fn sum_parity(&self) -> Parity {
        self.inner.sum_parity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_operations_match_ieee() {
        let calc = Calculator::new(0.1, 0.2);
        assert_eq!(calc.add(), 0.1 + 0.2);
        assert_eq!(calc.subtract(), 0.1 - 0.2);
        assert_eq!(calc.multiply(), 0.1 * 0.2);
        assert_eq!(calc.divide(), 0.1 / 0.2);
    }

    #[test]
    fn plain_divide_by_zero_follows_ieee() {
        assert_eq!(Calculator::new(5.0, 0.0).divide(), f64::INFINITY);
        assert_eq!(Calculator::new(-5.0, 0.0).divide(), f64::NEG_INFINITY);
        assert!(Calculator::new(0.0, 0.0).divide().is_nan());
    }

    #[test]
    fn checked_divide_rejects_zero() {
        assert_eq!(
            CheckedCalculator::new(5.0, 0.0).divide(),
            Err(LabError::DivisionByZero)
        );
        assert_eq!(
            CheckedCalculator::new(5.0, -0.0).divide(),
            Err(LabError::DivisionByZero)
        );
        assert_eq!(CheckedCalculator::new(9.0, 3.0).divide(), Ok(3.0));
    }

    #[test]
    fn parity_uses_float_remainder() {
        assert_eq!(Calculator::new(2.0, 2.0).sum_parity(), Parity::Even);
        assert_eq!(Calculator::new(2.0, 1.0).sum_parity(), Parity::Odd);
        assert_eq!(Calculator::new(1.25, 1.25).sum_parity(), Parity::Odd);
        assert_eq!(Calculator::new(-3.0, -1.0).sum_parity(), Parity::Even);
        assert_eq!(Calculator::new(1.5, 2.5).sum_parity(), Parity::Even);
    }

    #[test]
    fn parity_renders_lowercase() {
        assert_eq!(Parity::Even.to_string(), "even");
        assert_eq!(Parity::Odd.to_string(), "odd");
    }
}
