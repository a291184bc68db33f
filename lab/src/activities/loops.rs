//! Activity 3: counting loop and a factorial prompt.

use anyhow::Result;
use tracing::debug;

use crate::activities::banner;
use crate::core::factorial::{counting_line, factorial};
use crate::core::menu::ActivityId;
use crate::io::config::LabConfig;
use crate::io::console::{Console, ask, blank};

pub fn run<C: Console + ?Sized>(console: &mut C, config: &LabConfig) -> Result<()> {
    banner(console, ActivityId::Loops)?;

    blank(console)?;
    console.write_line(&format!(
        "Printing numbers from 1 to {} using for loop:",
        config.count_to
    ))?;
    console.write_line(&counting_line(config.count_to))?;

    let computed = factorial_prompt(console, &config.factorial_exit_token)?;
    debug!(computed, "factorial prompt finished");
    Ok(())
}

/// Prompt for integers until the exit token or end of input.
///
/// Returns how many factorials were printed.
fn factorial_prompt<C: Console + ?Sized>(console: &mut C, exit_token: &str) -> Result<u32> {
    let exit_token = exit_token.trim().to_lowercase();
    blank(console)?;
    console.write_line(&format!(
        "Enter a number to calculate its factorial or '{exit_token}' to quit:"
    ))?;

    let mut computed = 0u32;
    while let Some(input) = ask(console, "> ")? {
        let input = input.trim();
        if input.to_lowercase() == exit_token {
            break;
        }
        let Ok(number) = input.parse::<i32>() else {
            console.write_line(&format!(
                "Invalid input. Please enter a valid number or '{exit_token}'."
            ))?;
            continue;
        };
        match factorial(number) {
            Ok(value) => {
                computed += 1;
                console.write_line(&format!("Factorial of {number} is {value}"))?;
            }
            Err(err) => console.write_line(&err.to_string())?,
        }
    }
    Ok(computed)
}
