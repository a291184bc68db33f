//! The six lab activities selectable from the menu.
//!
//! Each activity is a function that talks to the operator through a
//! [`Console`] and returns once its scenario is finished. Recoverable
//! input problems are reported inside the activity; only console failures
//! (or other unanticipated errors) escape as `Err`.

pub mod calculator;
pub mod debugging;
pub mod exceptions;
pub mod loops;
pub mod setup;
pub mod students;

use anyhow::Result;
use tracing::{debug, instrument};

use crate::core::menu::ActivityId;
use crate::io::config::LabConfig;
use crate::io::console::Console;
use crate::io::screens::Screens;

/// Abstraction over activity execution.
///
/// The dispatcher only knows this trait. Tests plug in runners that record
/// calls or fail on purpose.
pub trait ActivityRunner {
    fn run<C: Console>(
        &self,
        activity: ActivityId,
        console: &mut C,
        config: &LabConfig,
    ) -> Result<()>;
}

/// Runner backed by the real activity implementations.
pub struct LabActivities {
    screens: Screens,
}

impl LabActivities {
    pub fn new() -> Result<Self> {
        Ok(Self {
            screens: Screens::new()?,
        })
    }
}

impl ActivityRunner for LabActivities {
    #[instrument(skip_all, fields(activity = activity.number()))]
    fn run<C: Console>(
        &self,
        activity: ActivityId,
        console: &mut C,
        config: &LabConfig,
    ) -> Result<()> {
        debug!(title = activity.title(), "starting activity");
        match activity {
            ActivityId::Setup => setup::run(console, &self.screens),
            ActivityId::Calculator => calculator::run(console),
            ActivityId::Loops => loops::run(console, config),
            ActivityId::Students => students::run(console),
            ActivityId::Exceptions => exceptions::run(console),
            ActivityId::Debugging => debugging::run(console, &self.screens),
        }
    }
}

/// Write the "Running Activity N" banner.
pub(crate) fn banner<C: Console + ?Sized>(console: &mut C, activity: ActivityId) -> Result<()> {
    let title = format!(
        "Running Activity {}: {}",
        activity.number(),
        activity.title()
    );
    console.write_line(&title)?;
    console.write_line(&"-".repeat(title.len()))
}
