//! Factorials and the bounded counting loop.

use crate::core::error::LabError;

/// Compute `n!` in a 64-bit accumulator.
///
/// Negative inputs and results beyond `i64::MAX` are reported as errors.
pub fn factorial(n: i32) -> Result<i64, LabError> {
    if n < 0 {
        return Err(LabError::NegativeFactorial);
    }
    if n <= 1 {
        return Ok(1);
    }

    let mut acc: i64 = 1;
    for i in 2..=i64::from(n) {
        acc = acc.checked_mul(i).ok_or(LabError::FactorialTooLarge)?;
    }
    Ok(acc)
}

/// The sequence `1..=upper` rendered on one line, space separated.
pub fn counting_line(upper: u32) -> String {
    (1..=upper)
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
