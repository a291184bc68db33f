//! Activity 2: plain calculator.
//!
//! Both operands are parsed up front and a single message covers either one
//! being invalid. Division is unconditional, so a zero divisor prints `inf`
//! or `NaN`.

use anyhow::Result;
use tracing::debug;

use crate::activities::banner;
use crate::core::calculator::Calculator;
use crate::core::menu::ActivityId;
use crate::core::operand::parse_operand_pair;
use crate::io::console::{Console, ask, blank};

pub fn run<C: Console + ?Sized>(console: &mut C) -> Result<()> {
    banner(console, ActivityId::Calculator)?;

    let first = ask(console, "Enter first number: ")?.unwrap_or_default();
    let second = ask(console, "Enter second number: ")?.unwrap_or_default();

    let Some((a, b)) = parse_operand_pair(&first, &second) else {
        debug!(%first, %second, "operands rejected");
        return console.write_line("Invalid input. Please enter valid numbers.");
    };

    let calc = Calculator::new(a, b);
    blank(console)?;
    console.write_line("Results:")?;
    console.write_line(&format!("{a} + {b} = {}", calc.add()))?;
    console.write_line(&format!("{a} - {b} = {}", calc.subtract()))?;
    console.write_line(&format!("{a} * {b} = {}", calc.multiply()))?;
    console.write_line(&format!("{a} / {b} = {}", calc.divide()))?;
    console.write_line(&format!(
        "The sum {} is {}",
        calc.add(),
        calc.sum_parity()
    ))
}
