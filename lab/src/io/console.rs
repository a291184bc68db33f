//! Console abstraction for operator interaction.
//!
//! The [`Console`] trait decouples the dispatcher and activities from the real
//! terminal. Production code uses [`StreamConsole::stdio`]; tests use a scripted
//! console that replays canned input lines and captures everything written.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::trace;

use crate::io::config::LabConfig;

const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[H";

/// Line-oriented operator I/O.
pub trait Console {
    /// Read one line without its terminator. Returns `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Write `line` followed by a newline.
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Write `text` without a newline and flush, leaving the cursor after it.
    fn prompt(&mut self, text: &str) -> Result<()>;

    /// Clear the screen.
    fn clear(&mut self) -> Result<()>;
}

/// Console over any buffered reader and writer.
pub struct StreamConsole<R, W> {
    reader: R,
    writer: W,
}

impl StreamConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    /// Bytes that are not valid UTF-8 are replaced, so a garbled line reaches
    /// the caller as ordinary (unparseable) text.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut bytes)
            .context("read stdin")?;
        if read == 0 {
            trace!("console input closed");
            return Ok(None);
        }
        let text = String::from_utf8_lossy(&bytes);
        Ok(Some(text.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}").context("write stdout")
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.writer, "{text}").context("write stdout")?;
        self.writer.flush().context("flush stdout")
    }

    fn clear(&mut self) -> Result<()> {
        self.prompt(CLEAR_SEQUENCE)
    }
}

/// Write `text` as a prompt and read the operator's answer.
pub fn ask<C: Console + ?Sized>(console: &mut C, text: &str) -> Result<Option<String>> {
    console.prompt(text)?;
    console.read_line()
}

/// Write an empty line.
pub fn blank<C: Console + ?Sized>(console: &mut C) -> Result<()> {
    console.write_line("")
}

/// Write every line in order.
pub fn write_lines<C, I, S>(console: &mut C, lines: I) -> Result<()>
where
    C: Console + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        console.write_line(line.as_ref())?;
    }
    Ok(())
}

/// Clear the screen if the config asks for it.
pub fn clear_if_enabled<C: Console + ?Sized>(console: &mut C, config: &LabConfig) -> Result<()> {
    if config.clear_screen {
        console.clear()?;
    }
    Ok(())
}

/// Show `message` and wait for Enter if pausing is enabled.
///
/// End of input counts as a keypress.
pub fn pause<C: Console + ?Sized>(
    console: &mut C,
    config: &LabConfig,
    message: &str,
) -> Result<()> {
    console.write_line(message)?;
    if config.pause_after_activity {
        console.read_line()?;
    }
    Ok(())
}
