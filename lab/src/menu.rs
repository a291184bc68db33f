//! Interactive menu loop that dispatches to the lab activities.

use anyhow::Result;
use tracing::{debug, info, instrument, warn};

use crate::activities::ActivityRunner;
use crate::core::menu::{ActivityId, EXIT_TOKEN, MenuSelection, parse_selection};
use crate::io::config::LabConfig;
use crate::io::console::{Console, ask, blank, clear_if_enabled, pause, write_lines};
use crate::io::screens::Screens;

pub const FAREWELL: &str = "Thank you for using the lab console. Goodbye!";
pub const INVALID_OPTION: &str = "Invalid option. Press Enter to try again...";
pub const RETURN_TO_MENU: &str = "Press Enter to return to the menu...";

/// Reason why `run_menu` stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStop {
    /// The operator entered the exit token.
    ExitChosen,
    /// Input ended while waiting for a selection.
    InputClosed,
}

/// Summary of a menu session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOutcome {
    pub activities_run: u32,
    pub invalid_selections: u32,
    pub stop: MenuStop,
}

/// Show the menu, run the selected activity, repeat until exit.
///
/// Unknown tokens are reported and the menu is shown again. An error returned
/// by an activity is printed as `Unexpected Error` and the loop continues.
/// Only a failure to talk to the console itself ends the loop with `Err`.
#[instrument(skip_all)]
pub fn run_menu<C: Console, A: ActivityRunner>(
    console: &mut C,
    activities: &A,
    config: &LabConfig,
) -> Result<MenuOutcome> {
    let screens = Screens::new()?;
    let menu = screens.menu()?;
    let choice_prompt = format!("Enter your choice [{EXIT_TOKEN}-{}]: ", ActivityId::ALL.len());

    let mut activities_run = 0u32;
    let mut invalid_selections = 0u32;
    info!("menu started");
    loop {
        clear_if_enabled(console, config)?;
        write_lines(console, menu.lines())?;
        blank(console)?;

        let Some(input) = ask(console, &choice_prompt)? else {
            info!(activities_run, invalid_selections, "input closed, stopping menu");
            return Ok(MenuOutcome {
                activities_run,
                invalid_selections,
                stop: MenuStop::InputClosed,
            });
        };
        clear_if_enabled(console, config)?;

        match parse_selection(&input) {
            Some(MenuSelection::Exit) => {
                console.write_line(FAREWELL)?;
                info!(activities_run, invalid_selections, "exit chosen");
                return Ok(MenuOutcome {
                    activities_run,
                    invalid_selections,
                    stop: MenuStop::ExitChosen,
                });
            }
            Some(MenuSelection::Run(activity)) => {
                debug!(activity = activity.number(), "selection accepted");
                activities_run += 1;
                if let Err(err) = activities.run(activity, console, config) {
                    let message = format!("{err:#}");
                    warn!(activity = activity.number(), error = %message, "activity failed");
                    console.write_line(&format!("Unexpected Error: {message}"))?;
                }
                blank(console)?;
                pause(console, config, RETURN_TO_MENU)?;
            }
            None => {
                debug!(input = %input.trim(), "selection rejected");
                invalid_selections += 1;
                pause(console, config, INVALID_OPTION)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Cursor;

    use anyhow::anyhow;

    use crate::io::console::StreamConsole;
    use crate::test_support::{ScriptedConsole, quiet_config};

    /// Records which activities were dispatched without running them.
    #[derive(Default)]
    struct RecordingRunner {
        calls: RefCell<Vec<ActivityId>>,
        fail: bool,
    }

    impl ActivityRunner for RecordingRunner {
        fn run<C: Console>(
            &self,
            activity: ActivityId,
            console: &mut C,
            _config: &LabConfig,
        ) -> Result<()> {
            self.calls.borrow_mut().push(activity);
            if self.fail {
                return Err(anyhow!("boom").context("activity blew up"));
            }
            console.write_line(&format!("ran {}", activity.number()))
        }
    }

    #[test]
    fn exit_token_stops_immediately() {
        let runner = RecordingRunner::default();
        let mut console = ScriptedConsole::new(["0", "2"]);
        let outcome = run_menu(&mut console, &runner, &quiet_config()).expect("menu");
        assert_eq!(outcome.stop, MenuStop::ExitChosen);
        assert_eq!(outcome.activities_run, 0);
        assert!(runner.calls.borrow().is_empty());
        assert_eq!(console.lines().last().copied(), Some(FAREWELL));
        assert_eq!(console.remaining_inputs(), 1);
    }

    #[test]
    fn unmapped_token_redisplays_menu() {
        let runner = RecordingRunner::default();
        let mut console = ScriptedConsole::new(["9", "0"]);
        let outcome = run_menu(&mut console, &runner, &quiet_config()).expect("menu");
        assert_eq!(outcome.invalid_selections, 1);
        assert!(runner.calls.borrow().is_empty());
        let menus = console
            .lines()
            .iter()
            .filter(|line| **line == "0. Exit Program")
            .count();
        assert_eq!(menus, 2);
        assert!(console.lines().contains(&INVALID_OPTION));
    }

    #[test]
    fn each_activity_token_runs_exactly_one_activity() {
        let runner = RecordingRunner::default();
        let mut console = ScriptedConsole::new(["2", "3", "4", "5", "6", "0"]);
        let outcome = run_menu(&mut console, &runner, &quiet_config()).expect("menu");
        assert_eq!(outcome.activities_run, 5);
        assert_eq!(
            *runner.calls.borrow(),
            vec![
                ActivityId::Calculator,
                ActivityId::Loops,
                ActivityId::Students,
                ActivityId::Exceptions,
                ActivityId::Debugging,
            ]
        );
    }

    #[test]
    fn activity_error_is_reported_and_loop_continues() {
        let runner = RecordingRunner {
            fail: true,
            ..RecordingRunner::default()
        };
        let mut console = ScriptedConsole::new(["1", "0"]);
        let outcome = run_menu(&mut console, &runner, &quiet_config()).expect("menu");
        assert_eq!(outcome.stop, MenuStop::ExitChosen);
        assert!(
            console
                .lines()
                .contains(&"Unexpected Error: activity blew up: boom")
        );
    }

    #[test]
    fn closed_input_stops_menu() {
        let runner = RecordingRunner::default();
        let mut console = ScriptedConsole::new(["6"]);
        let outcome = run_menu(&mut console, &runner, &quiet_config()).expect("menu");
        assert_eq!(
            outcome,
            MenuOutcome {
                activities_run: 1,
                invalid_selections: 0,
                stop: MenuStop::InputClosed,
            }
        );
    }

    #[test]
    fn pause_and_clear_follow_config() {
        let runner = RecordingRunner::default();
        let config = LabConfig {
            clear_screen: true,
            pause_after_activity: true,
            ..LabConfig::default()
        };
        // selection, pause, bad selection, pause, exit
        let mut console = ScriptedConsole::new(["2", "", "x", "", "0"]);
        let outcome = run_menu(&mut console, &runner, &config).expect("menu");
        assert_eq!(outcome.activities_run, 1);
        assert_eq!(outcome.invalid_selections, 1);
        assert_eq!(outcome.stop, MenuStop::ExitChosen);
        assert_eq!(console.clears(), 6);
    }

    #[test]
    fn garbled_selection_is_an_invalid_option() {
        let runner = RecordingRunner::default();
        let mut console =
            StreamConsole::new(Cursor::new(b"\xff\xfe\n0\n".to_vec()), Vec::<u8>::new());
        let outcome = run_menu(&mut console, &runner, &quiet_config()).expect("menu");
        assert_eq!(
            outcome,
            MenuOutcome {
                activities_run: 0,
                invalid_selections: 1,
                stop: MenuStop::ExitChosen,
            }
        );
        assert!(runner.calls.borrow().is_empty());
        let written = String::from_utf8(console.into_writer()).expect("utf8");
        assert!(written.contains(INVALID_OPTION));
        assert!(written.contains(FAREWELL));
    }

    #[test]
    fn broken_console_is_an_error() {
        let runner = RecordingRunner::default();
        let mut console = ScriptedConsole::new(["0"]).failing_writes_after(0);
        assert!(run_menu(&mut console, &runner, &quiet_config()).is_err());
    }
}
