//! Activity 5: calculator with explicit error handling.
//!
//! Unlike the plain calculator, each operand failure is named, overflowing
//! literals are rejected, and a zero divisor is refused before dividing. A
//! division error does not stop the remaining output.

use anyhow::Result;
use tracing::debug;

use crate::activities::banner;
use crate::core::calculator::CheckedCalculator;
use crate::core::menu::ActivityId;
use crate::core::operand::parse_operand_pair_checked;
use crate::io::console::{Console, ask, blank};

pub fn run<C: Console + ?Sized>(console: &mut C) -> Result<()> {
    banner(console, ActivityId::Exceptions)?;

    let first = ask(console, "Enter first number: ")?.unwrap_or_default();
    let second = ask(console, "Enter second number: ")?.unwrap_or_default();

    let (a, b) = match parse_operand_pair_checked(&first, &second) {
        Ok(pair) => pair,
        Err(err) => {
            debug!(error = %err, "operand rejected");
            return console.write_line(&format!("Input Error: {err}"));
        }
    };

    let calc = CheckedCalculator::new(a, b);
    blank(console)?;
    console.write_line("Results:")?;
    console.write_line(&format!("{a} + {b} = {}", calc.add()))?;
    console.write_line(&format!("{a} - {b} = {}", calc.subtract()))?;
    console.write_line(&format!("{a} * {b} = {}", calc.multiply()))?;
    match calc.divide() {
        Ok(quotient) => console.write_line(&format!("{a} / {b} = {quotient}"))?,
        Err(err) => console.write_line(&format!("Division Error: {err}"))?,
    }
    console.write_line(&format!(
        "The sum {} is {}",
        calc.add(),
        calc.sum_parity()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::io::console::StreamConsole;
    use crate::test_support::ScriptedConsole;

    fn run_with(first: &str, second: &str) -> Vec<String> {
        let mut console = ScriptedConsole::new([first, second]);
        run(&mut console).expect("run");
        console.lines().into_iter().map(str::to_string).collect()
    }

    #[test]
    fn valid_operands_print_quotient() {
        let lines = run_with("9", "3");
        assert!(lines.iter().any(|line| line == "9 / 3 = 3"));
        assert_eq!(lines.last().map(String::as_str), Some("The sum 12 is even"));
    }

    #[test]
    fn zero_divisor_is_reported_and_parity_still_printed() {
        let lines = run_with("5", "0");
        assert!(lines.iter().any(|line| line == "5 * 0 = 0"));
        assert!(
            lines
                .iter()
                .any(|line| line == "Division Error: Cannot divide by zero.")
        );
        assert!(!lines.iter().any(|line| line.starts_with("5 / 0")));
        assert_eq!(lines.last().map(String::as_str), Some("The sum 5 is odd"));
    }

    #[test]
    fn names_the_invalid_operand() {
        let lines = run_with("abc", "1");
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Input Error: First input is not a valid number.")
        );

        let lines = run_with("1", "abc");
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Input Error: Second input is not a valid number.")
        );
    }

    #[test]
    fn garbled_first_operand_is_named() {
        let mut console =
            StreamConsole::new(Cursor::new(b"\xff\n3\n0\n".to_vec()), Vec::<u8>::new());
        run(&mut console).expect("run");
        assert_eq!(console.read_line().expect("read").as_deref(), Some("0"));
        let written = String::from_utf8(console.into_writer()).expect("utf8");
        assert!(written.contains("Enter second number: "));
        assert!(written.ends_with("Input Error: First input is not a valid number.\n"));
    }

    #[test]
    fn overflowing_literal_is_out_of_range() {
        let lines = run_with("1e999", "1");
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Input Error: The number is too large or too small.")
        );
        assert!(!lines.iter().any(|line| line == "Results:"));
    }
}
