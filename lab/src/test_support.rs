//! Test-only helpers: a scripted console and a quiet config.

use std::collections::VecDeque;

use anyhow::{Result, anyhow};

use crate::io::config::LabConfig;
use crate::io::console::Console;

/// Config that never clears the screen and never waits for Enter.
pub fn quiet_config() -> LabConfig {
    LabConfig {
        clear_screen: false,
        pause_after_activity: false,
        ..LabConfig::default()
    }
}

/// Console that replays queued input lines and records a transcript.
///
/// Answers are echoed after their prompt, the way a terminal shows them, so
/// `lines()` reads like a real session. Reads past the script return end of
/// input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: String,
    clears: usize,
    fail_writes_after: Option<usize>,
    writes: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Make every write after the first `count` writes fail.
    pub fn failing_writes_after(mut self, count: usize) -> Self {
        self.fail_writes_after = Some(count);
        self
    }

    pub fn lines(&self) -> Vec<&str> {
        self.transcript.lines().collect()
    }

    /// Number of input lines not yet consumed.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    fn record(&mut self, text: &str) -> Result<()> {
        if self.fail_writes_after.is_some_and(|limit| self.writes >= limit) {
            return Err(anyhow!("scripted console write failure"));
        }
        self.writes += 1;
        self.transcript.push_str(text);
        Ok(())
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        let line = self.inputs.pop_front();
        if let Some(line) = &line {
            self.transcript.push_str(line);
            self.transcript.push('\n');
        }
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.record(&format!("{line}\n"))
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        self.record(text)
    }

    fn clear(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }
}
